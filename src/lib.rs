//! Arithmetic and string fixture with seeded defects, plus a corrected
//! implementation behind the same [`Calculator`] port.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::core::calculator::{calculator_for, demo_line, CheckedCalculator, SeededCalculator};
pub use crate::core::scenarios::{
    builtin_scenarios, Expectation, Observed, Scenario, ScenarioReport, ScenarioRunner,
};
pub use config::toml_config::{FixtureConfig, LogFormat, ReportFormat};
pub use domain::model::{CalculatorMode, Operation, Value};
pub use domain::ports::Calculator;
pub use utils::error::{FixtureError, Result};
