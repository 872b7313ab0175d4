//! Core types for the persistence layer.
//!
//! - [`Entity`], [`AttributeValue`] - attribute-path access to catalogue entities
//! - [`SortDirection`], [`SortInstruction`] - ordering instructions for backends
//! - [`Page`], [`PageComputer`] - page-number pagination
//!
//! # Pagination
//!
//! ```
//! use recollectable_persistence::types::PageComputer;
//!
//! let computer = PageComputer::new(25);
//! let page = computer.create(vec!["a", "b", "c", "d"], 2, 2);
//!
//! assert_eq!(page.items(), &["c", "d"]);
//! assert_eq!(page.total_pages(), 2);
//! assert!(page.has_previous());
//! assert!(!page.has_next());
//! ```

mod attribute;
mod pagination;
mod sort;

pub use attribute::{AttributeValue, Entity};
pub use pagination::{Page, PageComputer};
pub use sort::{SortDirection, SortInstruction, compare_entities};
