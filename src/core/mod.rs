pub mod calculator;
pub mod checked;
pub mod scenarios;
pub mod seeded;

pub use crate::domain::model::{CalculatorMode, Operation, Value};
pub use crate::domain::ports::Calculator;
pub use crate::utils::error::Result;
