// src/config/consts.rs

// Net config
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRTkcgTI-Sr63QI8AruuEhhki1PMzF5pFV2eRw-h6PgydS6499aiTZ7iGcqaW3sppjpTZfEGCoPNN6-/pub?output=csv";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const CACHE_DIR: &str = ".cache";
pub const CACHE_FILE: &str = "sheet.csv";

// View
pub const ITEMS_PER_PAGE: usize = 6;
pub const PREVIEW_CHARS: usize = 180;

/// Reserved categorical filter value meaning "no filtering".
pub const ALL_LANGUAGES: &str = "all";

// Approval gate
pub const TRUTHY_TOKENS: &[&str] = &["true", "yes", "1"];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "recipes";
