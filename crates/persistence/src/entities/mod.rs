//! Catalogue entities.
//!
//! Each entity implements [`Entity`](crate::types::Entity) and exposes its
//! columns, plus the columns of embedded entities under a dotted prefix
//! (`Country.Name` on a [`Coin`]).

// Entity fields mirror their attribute paths
#![allow(missing_docs)]

mod collection;
mod currency;
mod reference;
mod user;

pub use collection::{Collectable, Collection, CollectionCollectable};
pub use currency::{Banknote, Coin};
pub use reference::{CollectorValue, Condition, Country};
pub use user::User;

use crate::types::{AttributeValue, Entity};

/// Reads `prefix.rest` from an embedded entity as `rest`.
fn nested<E: Entity>(inner: &E, prefix: &str, path: &str) -> Option<AttributeValue> {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| inner.attribute(rest))
}
