//! Client-side result filtering
//!
//! Search results come back from the API unfiltered. This module narrows them
//! with the user's criteria:
//!
//! - **eBook only**: keep records whose eBook is borrowable or public
//! - **Year from**: keep records first published in or after a year
//! - **Year to**: keep records first published in or before a year
//!
//! Filters are applied in that fixed order and each one can only remove
//! records, never add them back.
//!
//! # Examples
//!
//! ```
//! use bookfinder::filters::{self, FilterCriteria};
//! use bookfinder::model::Book;
//!
//! let mut dune = Book::new("/works/OL893415W");
//! dune.first_publish_year = Some(1965);
//! let undated = Book::new("/works/OL1W");
//!
//! let criteria = FilterCriteria::from_input(false, "1960", "").unwrap();
//! let kept = filters::apply(vec![dune, undated], &criteria);
//! assert_eq!(kept.len(), 1);
//! ```

pub mod error;
pub mod operations;
pub mod types;

pub use error::FilterError;
pub use operations::apply;
pub use types::{FilterCriteria, YearBound};
