use num_traits::ToPrimitive;
use serde_json::{Map, Value};

/// A list element that may be either an integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl ToPrimitive for Number {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(*v),
            Number::Float(v) => v.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Number::Int(v) => v.to_u64(),
            Number::Float(v) => v.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Int(v) => v.to_f64(),
            Number::Float(v) => Some(*v),
        }
    }
}

/// Arithmetic mean of `numbers`.
///
/// An empty slice averages to `0.0` rather than NaN. Integer values are
/// summed exactly until the first non-integer shows up, after which the sum
/// continues in `f64`. Values that have no `f64` representation count as NaN.
///
/// # Example
/// ```
/// use fib_utils::utils::{calculate_average, Number};
/// assert_eq!(calculate_average(&[1, 2, 3, 4, 5]), 3.0);
/// assert_eq!(calculate_average::<f64>(&[]), 0.0);
/// let mixed = [Number::from(1), Number::from(2.5), Number::from(3), Number::from(4.5)];
/// assert_eq!(calculate_average(&mixed), 2.75);
/// ```
pub fn calculate_average<T: ToPrimitive>(numbers: &[T]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }

    let mut exact: i128 = 0;
    let mut inexact: Option<f64> = None;
    for value in numbers {
        let float = value.to_f64().unwrap_or(f64::NAN);
        match inexact.as_mut() {
            Some(sum) => *sum += float,
            None => match exact_integer(value, float).and_then(|i| exact.checked_add(i)) {
                Some(sum) => exact = sum,
                None => inexact = Some(exact as f64 + float),
            },
        }
    }

    inexact.unwrap_or(exact as f64) / numbers.len() as f64
}

// Integer value of `value`, if it has one that agrees with its f64 form
fn exact_integer<T: ToPrimitive>(value: &T, float: f64) -> Option<i128> {
    value.to_i128().filter(|i| *i as f64 == float)
}

/// Upper-cased `"name"` of a user record, or an empty string when there is none.
///
/// Non-string names are rendered as text first, so `12345` becomes `"12345"`.
pub fn get_user_name(user: Option<&Map<String, Value>>) -> String {
    let Some(name) = user.and_then(|user| user.get("name")) else {
        return String::new();
    };

    let text = match name {
        Value::Null => return String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn user_name(user: Value) -> String {
        get_user_name(user.as_object())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn average_of_integers() {
        assert_eq!(calculate_average(&[1, 2, 3, 4, 5]), 3.0);
        assert_eq!(calculate_average(&[-1, -2, -3, -4, -5]), -3.0);
        assert_eq!(calculate_average(&[-2, -1, 0, 1, 2]), 0.0);
        assert_eq!(calculate_average(&[42]), 42.0);
        assert_eq!(calculate_average(&[0, 0, 0]), 0.0);
        assert_eq!(calculate_average(&[1_000_000, 2_000_000, 3_000_000]), 2_000_000.0);
    }

    #[test]
    fn average_of_floats() {
        assert_close(calculate_average(&[1.5, 2.5, 3.5]), 2.5);
    }

    #[test]
    fn average_of_mixed_numbers() {
        let numbers = [
            Number::from(1),
            Number::from(2.5),
            Number::from(3),
            Number::from(4.5),
        ];
        assert_close(calculate_average(&numbers), 2.75);
    }

    #[test]
    fn average_sums_integers_exactly() {
        let big = 9_007_199_254_740_992_i64;
        assert_close(calculate_average(&[big, 1, -big]), 1.0 / 3.0);

        let mixed = [
            Number::from(big),
            Number::from(1),
            Number::from(-big),
            Number::from(0.5),
        ];
        assert_close(calculate_average(&mixed), 0.375);
    }

    #[test]
    fn average_of_empty_list_is_zero() {
        assert_eq!(calculate_average::<i64>(&[]), 0.0);
        assert_eq!(calculate_average::<Number>(&[]), 0.0);
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(7).to_f64(), Some(7.0));
        assert_eq!(Number::from(-7).to_u64(), None);
        assert_eq!(Number::from(2.9).to_i64(), Some(2));
    }

    #[test]
    fn name_is_upper_cased() {
        assert_eq!(user_name(json!({"name": "john doe"})), "JOHN DOE");
        assert_eq!(user_name(json!({"name": "JANE SMITH"})), "JANE SMITH");
        assert_eq!(user_name(json!({"name": "Alice WoNdErLaNd"})), "ALICE WONDERLAND");
        assert_eq!(user_name(json!({"name": "josé garcía"})), "JOSÉ GARCÍA");
        assert_eq!(user_name(json!({"name": "straße"})), "STRASSE");
    }

    #[test]
    fn name_keeps_whitespace_and_empty_strings() {
        assert_eq!(user_name(json!({"name": "   "})), "   ");
        assert_eq!(user_name(json!({"name": ""})), "");
    }

    #[test]
    fn non_string_names_are_rendered() {
        assert_eq!(user_name(json!({"name": 12345})), "12345");
        assert_eq!(user_name(json!({"name": true})), "TRUE");
    }

    #[test]
    fn missing_name_is_empty() {
        assert_eq!(get_user_name(None), "");
        assert_eq!(user_name(json!({})), "");
        assert_eq!(user_name(json!({"name": null})), "");
        assert_eq!(
            user_name(json!({"email": "test@example.com", "age": 30})),
            ""
        );
    }
}
