use fixture_calc::{Calculator, CheckedCalculator, FixtureError};

fn assert_invalid_argument<T: std::fmt::Debug>(result: Result<T, FixtureError>, operation: &str) {
    match result {
        Err(FixtureError::InvalidArgument { operation: op, .. }) => assert_eq!(op, operation),
        other => panic!("expected InvalidArgument from {}, got {:?}", operation, other),
    }
}

#[test]
fn test_add_scenarios() {
    let calc = CheckedCalculator;
    assert_eq!(calc.add(2, 3).unwrap(), 5);
    assert_invalid_argument(calc.add(-1, 5), "add");
    assert_invalid_argument(calc.add(5, -1), "add");
    assert_invalid_argument(calc.add(i64::MIN, 0), "add");
}

#[test]
fn test_add_matches_plain_sum_for_non_negative_operands() {
    let calc = CheckedCalculator;
    for a in (0..1_000).step_by(37) {
        for b in (0..1_000).step_by(41) {
            assert_eq!(calc.add(a, b).unwrap(), a + b);
        }
    }
}

#[test]
fn test_divide_scenarios() {
    let calc = CheckedCalculator;
    assert_eq!(calc.divide(10, 2).unwrap(), 5);
    assert_invalid_argument(calc.divide(10, 0), "divide");
    assert_invalid_argument(calc.divide(0, 0), "divide");
}

#[test]
fn test_divide_truncates_toward_zero() {
    let calc = CheckedCalculator;
    for a in -25..=25 {
        for b in (-7..=7).filter(|b| *b != 0) {
            assert_eq!(calc.divide(a, b).unwrap(), a / b);
        }
    }
}

#[test]
fn test_format_user_scenarios() {
    let calc = CheckedCalculator;
    assert_eq!(calc.format_user("alice").unwrap(), "User: alice");
    assert_invalid_argument(calc.format_user(""), "format_user");
}

#[test]
fn test_errors_are_reported_never_faulted() {
    let calc = CheckedCalculator;
    let result = std::panic::catch_unwind(|| {
        let _ = calc.divide(i64::MIN, -1);
        let _ = calc.divide(1, 0);
        let _ = calc.add(i64::MAX, i64::MAX);
    });
    assert!(result.is_ok());
}
