use crate::domain::model::{CalculatorMode, Operation, Value};
use crate::utils::error::Result;

/// Uniform result-or-error surface over the three fixture operations.
pub trait Calculator: Send + Sync {
    fn mode(&self) -> CalculatorMode;
    fn add(&self, a: i64, b: i64) -> Result<i64>;
    fn divide(&self, a: i64, b: i64) -> Result<i64>;
    fn format_user(&self, name: &str) -> Result<String>;

    fn apply(&self, operation: &Operation) -> Result<Value> {
        match operation {
            Operation::Add { a, b } => self.add(*a, *b).map(Value::Int),
            Operation::Divide { a, b } => self.divide(*a, *b).map(Value::Int),
            Operation::FormatUser { name } => self.format_user(name).map(Value::Text),
        }
    }
}
