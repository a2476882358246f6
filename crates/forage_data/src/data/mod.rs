//! Core data structures for the Forage simulation.

pub mod food;
pub mod geometry;
pub mod player;
