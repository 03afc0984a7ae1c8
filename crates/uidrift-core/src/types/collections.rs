//! Fx-hashed collections used by the single-pass aggregate maps.

pub use rustc_hash::{FxHashMap, FxHashSet};
