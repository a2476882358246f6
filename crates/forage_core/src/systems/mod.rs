//! Per-tick systems. Each works on one player at a time against a read-only
//! view of the food; the update step wires them together.

pub mod consumption;
pub mod movement;
pub mod targeting;
