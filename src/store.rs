// src/store.rs
//
// RecordStore: the approval-filtered, order-stable record set for one
// load of the sheet.
//
// A record's position in the store is its permanent identity (RecordId)
// for the rest of the session. Filtered/sorted views only ever hold
// RecordIds, never reordered copies, so a captured id keeps resolving to
// the same record no matter what the current query looks like. Only a
// reload replaces the store — wholesale.

use std::{fmt, fs, io, num::ParseIntError, path::PathBuf, str::FromStr};

use crate::config::consts::{CACHE_DIR, CACHE_FILE, TRUTHY_TOKENS};
use crate::core::{csv, fields};
use crate::core::net::{self, SourceError};

/// Permanent index of a record within its store. Also the integer carried
/// in the detail view's `id` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    pub fn as_usize(self) -> usize { self.0 }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(RecordId)
    }
}

/// Borrowed view of one data row, keyed by the sheet headers.
/// Rows are normalized to header width at parse time, so the zip in
/// `fields()` is always aligned.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Record<'a> {
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let headers = self.headers;
        let cells = self.cells;
        headers
            .iter()
            .map(String::as_str)
            .zip(cells.iter().map(String::as_str))
    }

    /// Raw cells in sheet column order (export boundary).
    pub fn cells(&self) -> &'a [String] { self.cells }
}

pub struct RecordStore {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordStore {
    /// Parse sheet text and keep only approved records, in document
    /// order. Total: malformed rows degrade to empty cells, a missing
    /// approved column just approves nothing.
    pub fn load(text: &str) -> Self {
        let (headers, rows) = csv::parse_sheet(text);

        let rows = rows
            .into_iter()
            .filter(|cells| {
                let rec = Record { headers: &headers, cells };
                let approved = fields::resolve(rec, fields::APPROVED).trim().to_lowercase();
                TRUTHY_TOKENS.contains(&approved.as_str())
            })
            .collect();

        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn headers(&self) -> &[String] { &self.headers }

    /// Resolve a permanent id back to its record. None only for ids from
    /// a previous load (or fabricated ones).
    pub fn record(&self, id: RecordId) -> Option<Record<'_>> {
        self.rows.get(id.0).map(|cells| Record { headers: &self.headers, cells })
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        (0..self.rows.len()).map(RecordId)
    }

    pub fn records(&self) -> impl Iterator<Item = (RecordId, Record<'_>)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(ix, cells)| (RecordId(ix), Record { headers: &self.headers, cells }))
    }

    /// Distinct normalized language values present in the store, sorted.
    /// Feeds the categorical filter control; "all" is the caller's
    /// sentinel, not a stored value.
    pub fn languages(&self) -> Vec<String> {
        let mut set = std::collections::BTreeSet::new();
        for (_, rec) in self.records() {
            let lang = fields::resolve(rec, fields::LANGUAGE).trim().to_lowercase();
            if !lang.is_empty() {
                set.insert(lang);
            }
        }
        set.into_iter().collect()
    }
}

/* ---------------- Source plumbing ---------------- */

fn cache_path() -> PathBuf {
    PathBuf::from(CACHE_DIR).join(CACHE_FILE)
}

/// Keep the last fetched sheet around so the viewer works offline.
pub fn save_cache(text: &str) -> io::Result<PathBuf> {
    let p = cache_path();
    fs::create_dir_all(CACHE_DIR)?;
    fs::write(&p, text)?;
    Ok(p)
}

pub fn load_cache() -> Result<String, SourceError> {
    let p = cache_path();
    fs::read_to_string(&p).map_err(|_| SourceError::CacheMissing(p.display().to_string()))
}

/// Fetch, cache, parse. A cache write failure is logged and ignored —
/// the fetched text is still good.
pub fn fetch_store(url: &str) -> Result<RecordStore, SourceError> {
    let text = net::fetch_csv(url)?;
    match save_cache(&text) {
        Ok(p) => logd!("Cache: wrote {}", p.display()),
        Err(e) => logd!("Cache: write failed ({e})"),
    }
    Ok(RecordStore::load(&text))
}

pub fn cached_store() -> Result<RecordStore, SourceError> {
    Ok(RecordStore::load(&load_cache()?))
}
