//! Page-level views, one per route.

pub mod add_shoe;
pub mod close_shoes;
pub mod edit_shoe;
pub mod login;
pub mod register;
pub mod shoe_list;
