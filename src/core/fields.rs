// src/core/fields.rs
//
// Header aliasing. The sheet's column headers are free-text and drift in
// wording/case between edits, so downstream code addresses logical fields
// through these candidate lists instead of exact spellings.

use crate::store::Record;

pub const NAME: &[&str] = &["Name of the recipe", "recipe", "title"];
pub const SUBMITTER: &[&str] = &["Name of the person", "submitter", "person"];
pub const INGREDIENTS: &[&str] = &["Ingredients list", "ingredients"];
pub const STORY: &[&str] = &["Story or Memory behind the recipe", "story", "memory"];
pub const LANGUAGE: &[&str] = &["Language", "lang"];
pub const APPROVED: &[&str] = &["Approved", "approve", "approved?"];
pub const TIMESTAMP: &[&str] = &["Timestamp"];

/// Value of the first candidate matching a record key — candidates in
/// caller order, keys in sheet order, both sides compared after trim +
/// lowercase. No match yields an empty string, never an error.
pub fn resolve<'a>(record: Record<'a>, candidates: &[&str]) -> &'a str {
    for target in candidates {
        let t = target.trim().to_lowercase();
        for (key, value) in record.fields() {
            if key.trim().to_lowercase() == t {
                return value;
            }
        }
    }
    ""
}
