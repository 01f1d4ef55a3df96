//! Hierarchical, typed configuration context
//!
//! An [`EnvironmentValues`] store flows down the rule tree. Every scoped
//! modifier hands its subtree a private copy, so overrides are visible to
//! descendants only and siblings never observe each other's values.

mod slot;
mod store;

pub use slot::EnvironmentSlot;
pub use store::{EnvironmentKey, EnvironmentValues};
