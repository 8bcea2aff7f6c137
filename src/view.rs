// src/view.rs
//
// Pure filter → sort → paginate pipeline over a RecordStore.
//
// Nothing here mutates shared state: every input change recomputes a
// fresh View from the immutable store, and the owning application keeps
// the query/page in an explicit Session object. This is what keeps the
// pipeline unit-testable without a UI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::consts::{ALL_LANGUAGES, PREVIEW_CHARS};
use crate::core::fields;
use crate::store::{RecordId, RecordStore};

/* ---------------- Query ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Sheet order (the store's document order).
    #[default]
    None,
    Name,
    Newest,
}

impl SortMode {
    /// UI token → mode. Unknown tokens mean "no sort", same as the
    /// select control falling back to its default entry.
    pub fn from_token(s: &str) -> SortMode {
        match s.trim().to_lowercase().as_str() {
            "name" => SortMode::Name,
            "newest" => SortMode::Newest,
            _ => SortMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Sheet order",
            SortMode::Name => "Name",
            SortMode::Newest => "Newest",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    /// Normalized language value, or the "all" sentinel.
    pub language: String,
    pub sort: SortMode,
}

impl Default for Query {
    fn default() -> Self {
        Self { search: s!(), language: s!(ALL_LANGUAGES), sort: SortMode::None }
    }
}

/// Current query + page for one browsing session. Changing the query
/// resets the page to 1; changing only the page preserves the query.
#[derive(Clone, Debug)]
pub struct Session {
    query: Query,
    page: usize, // 1-based
}

impl Default for Session {
    fn default() -> Self {
        Self { query: Query::default(), page: 1 }
    }
}

impl Session {
    pub fn query(&self) -> &Query { &self.query }
    pub fn page(&self) -> usize { self.page }

    pub fn set_search<S: Into<String>>(&mut self, search: S) {
        self.query.search = search.into();
        self.page = 1;
    }

    pub fn set_language<S: Into<String>>(&mut self, language: S) {
        self.query.language = language.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

/* ---------------- Filter + sort ---------------- */

/// Ordered subset of store records for one query. Identities only — the
/// records themselves stay in the store.
#[derive(Clone, Debug, Default)]
pub struct View {
    pub ids: Vec<RecordId>,
}

impl View {
    pub fn len(&self) -> usize { self.ids.len() }
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
}

pub fn compute_view(store: &RecordStore, query: &Query) -> View {
    let needle = query.search.trim().to_lowercase();
    let want_lang = query.language.trim().to_lowercase();

    let kept: Vec<RecordId> = store
        .records()
        .filter(|(_, rec)| {
            if want_lang != ALL_LANGUAGES {
                let lang = fields::resolve(*rec, fields::LANGUAGE).trim().to_lowercase();
                if lang != want_lang {
                    return false;
                }
            }
            if needle.is_empty() {
                return true;
            }
            // Unresolved fields contribute empty segments, never a failure.
            let hay = [
                fields::resolve(*rec, fields::NAME),
                fields::resolve(*rec, fields::SUBMITTER),
                fields::resolve(*rec, fields::INGREDIENTS),
                fields::resolve(*rec, fields::STORY),
            ]
            .join(" ")
            .to_lowercase();
            hay.contains(&needle)
        })
        .map(|(id, _)| id)
        .collect();

    let ids = match query.sort {
        SortMode::None => kept,
        SortMode::Name => {
            // Decorate once, then a stable sort: equal names keep their
            // store-relative order.
            let mut keyed: Vec<(String, RecordId)> = kept
                .into_iter()
                .map(|id| (name_key(store, id), id))
                .collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            keyed.into_iter().map(|(_, id)| id).collect()
        }
        SortMode::Newest => {
            let mut keyed: Vec<(i64, RecordId)> = kept
                .into_iter()
                .map(|id| (timestamp_key(store, id), id))
                .collect();
            keyed.sort_by(|a, b| b.0.cmp(&a.0)); // descending
            keyed.into_iter().map(|(_, id)| id).collect()
        }
    };

    View { ids }
}

/// Case-insensitive name key. Unicode lowercasing stands in for locale
/// collation, which is out of scope.
fn name_key(store: &RecordStore, id: RecordId) -> String {
    store
        .record(id)
        .map(|rec| fields::resolve(rec, fields::NAME).to_lowercase())
        .unwrap_or_default()
}

fn timestamp_key(store: &RecordStore, id: RecordId) -> i64 {
    store
        .record(id)
        .map(|rec| parse_timestamp(fields::resolve(rec, fields::TIMESTAMP)))
        .unwrap_or(0)
}

// Google Forms writes "M/D/YYYY H:MM:SS"; sheets edited by hand drift
// into ISO-ish shapes.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Seconds since the UNIX epoch. Absent or unparseable values map to the
/// epoch itself, so they sort last under "newest".
fn parse_timestamp(raw: &str) -> i64 {
    let t = raw.trim();
    if t.is_empty() {
        return 0;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return dt.timestamp();
    }
    for f in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, f) {
            return dt.and_utc().timestamp();
        }
    }
    for f in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(t, f) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return dt.and_utc().timestamp();
            }
        }
    }
    0
}

/* ---------------- Pagination ---------------- */

/// One page of a view, plus the clamped page position.
#[derive(Clone, Copy, Debug)]
pub struct PageView<'a> {
    pub ids: &'a [RecordId],
    pub current: usize,
    pub total: usize,
}

/// Slice `view` into fixed pages. The requested page is clamped into
/// `[1, total]`; out-of-range input is never an error.
pub fn paginate(view: &View, requested: usize, page_size: usize) -> PageView<'_> {
    let size = page_size.max(1);
    let total = view.ids.len().div_ceil(size).max(1);
    let current = requested.clamp(1, total);

    let start = (current - 1) * size;
    let end = (start + size).min(view.ids.len());
    let ids = if start < view.ids.len() { &view.ids[start..end] } else { &[] };

    PageView { ids, current, total }
}

/* ---------------- Card projection ---------------- */

/// What a renderer needs for one card, plus the record's permanent id
/// for detail navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: RecordId,
    pub name: String,
    pub submitter: String,
    pub language: String,
    pub preview: String,
}

pub fn card(store: &RecordStore, id: RecordId) -> Option<Card> {
    let rec = store.record(id)?;
    Some(Card {
        id,
        name: s!(fields::resolve(rec, fields::NAME).trim()),
        submitter: s!(fields::resolve(rec, fields::SUBMITTER).trim()),
        language: s!(fields::resolve(rec, fields::LANGUAGE).trim()),
        preview: preview(fields::resolve(rec, fields::INGREDIENTS), PREVIEW_CHARS),
    })
}

/// Truncate to `budget` characters with an ellipsis marker. Counts chars,
/// not bytes, so multibyte text never splits.
pub fn preview(text: &str, budget: usize) -> String {
    let t = text.trim();
    if t.chars().count() <= budget {
        return s!(t);
    }
    let mut out: String = t.chars().take(budget).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formats() {
        assert!(parse_timestamp("6/12/2024 14:30:22") > 0);
        assert!(parse_timestamp("2024-06-12 14:30:22") > 0);
        assert!(parse_timestamp("2024-06-12T14:30:22+02:00") > 0);
        assert_eq!(parse_timestamp(""), 0);
        assert_eq!(parse_timestamp("last tuesday"), 0);
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("ábcdéf", 3), "ábc…");
        // budget counts chars, trailing marker comes on top
        assert_eq!(preview("abcdef", 6), "abcdef");
        assert_eq!(preview("abcdefg", 6), "abcdef…");
    }
}
