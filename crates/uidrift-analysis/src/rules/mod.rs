//! Declarative drift rules: ignore, promote, enforce.
//!
//! Rule patterns are compiled once per application. A pattern that fails to
//! compile is reported through the caller's warning callback and makes its
//! rule unable to match, so a broken filter never drops a signal.

pub mod compiled;
pub mod engine;
pub mod intents;
pub mod matcher;
pub mod pipeline;

pub use compiled::CompiledRule;
pub use engine::{apply_enforce_rules, apply_ignore_rules, apply_promote_rules, WarningSink};
pub use intents::apply_intents;
pub use matcher::{rule_matches, strip_line_suffix};
pub use pipeline::apply_drift_rules;
