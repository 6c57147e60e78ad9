//! Applying filter criteria to result lists

use super::types::FilterCriteria;
use crate::model::Book;

/// Narrow `records` to those matching `criteria`
///
/// Order of the surviving records is preserved. With no active filter the
/// input is returned unchanged.
#[must_use]
pub fn apply(records: Vec<Book>, criteria: &FilterCriteria) -> Vec<Book> {
    if !criteria.is_active() {
        return records;
    }

    let mut records = records;

    if criteria.ebook_only {
        records.retain(Book::has_ebook);
    }

    if let Some(from) = criteria.year_from {
        records.retain(|book| book.first_publish_year.is_some_and(|year| year >= from));
    }

    if let Some(to) = criteria.year_to {
        records.retain(|book| book.first_publish_year.is_some_and(|year| year <= to));
    }

    records
}
