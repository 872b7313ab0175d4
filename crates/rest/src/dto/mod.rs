//! Transfer objects exchanged with clients.
//!
//! Each output DTO serializes with PascalCase keys and declares those keys,
//! in order, through [`FieldSchema`](crate::responses::shaping::FieldSchema).
//! Each `*Input` is the matching request body, see [`EntityInput`].

mod collection;
mod currency;
mod input;
mod reference;
mod user;

pub use collection::{CollectableDto, CollectableInput, CollectionDto, CollectionInput};
pub use currency::{BanknoteDto, BanknoteInput, CoinDto, CoinInput};
pub use input::EntityInput;
pub use reference::{
    CollectorValueDto, CollectorValueInput, ConditionDto, ConditionInput, CountryDto, CountryInput,
};
pub use user::{UserDto, UserInput};
