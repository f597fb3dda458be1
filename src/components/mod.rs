//! Reusable UI pieces.

pub mod loading;
pub mod navbar;
pub mod shoe_card;
