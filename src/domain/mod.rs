//! Domain models, enums and pure helpers.

mod account;
mod listing;
mod photos;

pub use account::{normalize_email, Account, Role};
pub use listing::{
    ItemCondition, Listing, ListingCategory, ListingStatus, NO_DESCRIPTION,
};
pub use photos::{decode_photos, encode_photos};
