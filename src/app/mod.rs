//! Repository operations: the surface the presentation layer calls.

mod account;
mod listing;

pub use account::{
    account_create, account_delete, account_find_by_email, account_get, account_list,
    account_update, validate_login, AccountCreateReq,
};
pub use listing::{listing_create, listing_list, listing_list_for_seller, ListingCreateReq};
