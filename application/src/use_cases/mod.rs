//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod predict;
pub mod select_anchors;
