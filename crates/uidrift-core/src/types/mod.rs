//! Shared collection aliases.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet};
