// src/specs/catalog.rs
//! Program listing page: which courses the program offers this semester.
//!
//! Listing tables lead with the "course number" header; rows carry the id in
//! column 0, the name in column 1 and the semester(s) in column 3.

use std::collections::HashSet;

use crate::config::vocab::Vocabulary;
use crate::core::RawTable;
use crate::course::{classify::is_numeric, CatalogEntry};

const ID_COL: usize = 0;
const NAME_COL: usize = 1;
const SEMESTER_COL: usize = 3;

/// First-semester courses listed on the program page, in page order, each id once.
pub fn select_offered(tables: &[RawTable], vocab: &Vocabulary) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for table in tables.iter().filter(|t| t.first_cell() == Some(vocab.catalog_header.as_str())) {
        for r in 0..table.height() {
            let Some(id) = table.cell(r, ID_COL).filter(|c| is_numeric(c)).and_then(|c| c.parse::<u32>().ok()) else {
                continue;
            };
            let offered = table
                .cell(r, SEMESTER_COL)
                .is_some_and(|s| s.contains(vocab.first_semester.as_str()));
            if !offered || !seen.insert(id) {
                continue;
            }
            let name = table.cell(r, NAME_COL).unwrap_or_default().to_string();
            out.push(CatalogEntry { id, name });
        }
    }

    logd!("catalog: {} first-semester course(s)", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> RawTable {
        RawTable::from_strs(&[
            &["מספר הקורס", "שם הקורס", "נקודות", "סמסטר"],
            &["67101", "מבוא למדעי המחשב", "7", "א'"],
            &["67109", "מבני נתונים", "5", "א' ב'"],
            &["67125", "ארגון המחשב", "5", "ב'"],
            &["סה\"כ", "", "", "א'"],
        ])
    }

    #[test]
    fn picks_first_semester_numeric_rows() {
        let got = select_offered(&[listing()], &Vocabulary::default());
        let ids: Vec<u32> = got.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![67101, 67109]);
        assert_eq!(got[0].name, "מבוא למדעי המחשב");
    }

    #[test]
    fn other_tables_and_duplicates_are_skipped() {
        let noise = RawTable::from_strs(&[&["67200", "x", "", "א'"]]);
        let got = select_offered(&[noise, listing(), listing()], &Vocabulary::default());
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn empty_catalog_is_empty() {
        assert!(select_offered(&[], &Vocabulary::default()).is_empty());
    }
}
