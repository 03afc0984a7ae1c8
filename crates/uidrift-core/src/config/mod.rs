//! Configuration system for uidrift.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod ci_config;
pub mod rules_config;
pub mod uidrift_config;

pub use analysis_config::AnalysisConfig;
pub use ci_config::{CiConfig, FailOn};
pub use rules_config::{
    DriftRule, DriftRulesConfig, EnforceRule, HasRuleMatch, PromoteRule, RuleMatch,
};
pub use uidrift_config::{CliOverrides, UidriftConfig};
