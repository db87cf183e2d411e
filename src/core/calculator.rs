use crate::core::{checked, seeded};
use crate::domain::model::CalculatorMode;
use crate::domain::ports::Calculator;
use crate::utils::error::Result;

/// Adapts the seeded functions to the `Calculator` port.
///
/// A zero divisor still panics through `divide`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededCalculator;

impl Calculator for SeededCalculator {
    fn mode(&self) -> CalculatorMode {
        CalculatorMode::Seeded
    }

    fn add(&self, a: i64, b: i64) -> Result<i64> {
        seeded::add(a, b)
    }

    fn divide(&self, a: i64, b: i64) -> Result<i64> {
        Ok(seeded::divide(a, b))
    }

    fn format_user(&self, name: &str) -> Result<String> {
        Ok(seeded::format_user(name))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedCalculator;

impl Calculator for CheckedCalculator {
    fn mode(&self) -> CalculatorMode {
        CalculatorMode::Checked
    }

    fn add(&self, a: i64, b: i64) -> Result<i64> {
        checked::add(a, b)
    }

    fn divide(&self, a: i64, b: i64) -> Result<i64> {
        checked::divide(a, b)
    }

    fn format_user(&self, name: &str) -> Result<String> {
        checked::format_user(name)
    }
}

pub fn calculator_for(mode: CalculatorMode) -> Box<dyn Calculator> {
    match mode {
        CalculatorMode::Seeded => Box::new(SeededCalculator),
        CalculatorMode::Checked => Box::new(CheckedCalculator),
    }
}

/// Renders `a + b = sum`, or `Error: ...` when the calculator rejects the operands.
pub fn demo_line(calculator: &dyn Calculator, a: i64, b: i64) -> String {
    match calculator.add(a, b) {
        Ok(sum) => format!("{} + {} = {}", a, b, sum),
        Err(e) => format!("Error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Operation, Value};

    #[test]
    fn test_calculator_for_selects_mode() {
        assert_eq!(calculator_for(CalculatorMode::Seeded).mode(), CalculatorMode::Seeded);
        assert_eq!(calculator_for(CalculatorMode::Checked).mode(), CalculatorMode::Checked);
    }

    #[test]
    fn test_apply_dispatches_operations() {
        let calc = CheckedCalculator;
        assert_eq!(calc.apply(&Operation::Add { a: 2, b: 3 }).unwrap(), Value::Int(5));
        assert_eq!(
            calc.apply(&Operation::FormatUser { name: "alice".into() }).unwrap(),
            Value::Text("User: alice".into())
        );
        assert!(calc
            .apply(&Operation::Divide { a: 1, b: 0 })
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_demo_line() {
        assert_eq!(demo_line(&SeededCalculator, 1, 2), "1 + 2 = 3");
        assert_eq!(demo_line(&CheckedCalculator, 1, 2), "1 + 2 = 3");
        assert_eq!(demo_line(&SeededCalculator, -1, 2), "-1 + 2 = 0");
        assert_eq!(
            demo_line(&CheckedCalculator, -1, 2),
            "Error: Invalid argument `a` to add: must not be negative, got -1"
        );
    }

    #[test]
    fn test_seeded_and_checked_agree_inside_the_domain() {
        let seeded = SeededCalculator;
        let checked = CheckedCalculator;
        for a in 0..20 {
            for b in 1..20 {
                assert_eq!(seeded.add(a, b).unwrap(), checked.add(a, b).unwrap());
                assert_eq!(seeded.divide(a, b).unwrap(), checked.divide(a, b).unwrap());
            }
        }
    }
}
