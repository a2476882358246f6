//! Plain data types shared by the Forage simulation core and its consumers.
//!
//! Everything in this crate is inert: construction helpers and small
//! geometric utilities only. State transitions live in `forage_core`.

pub mod data;

pub use data::food::{FoodItem, FoodShape};
pub use data::geometry::{Color, Vec3};
pub use data::player::{JumpState, Player};
