//! Loose value coercion for settings mappings.
//!
//! Settings documents are heterogeneous: depending on who produced the file,
//! a flag may arrive as a boolean, a number, or a string. Each helper pins
//! down one coercion rule per target type with a defined default, so a
//! mismatched type degrades instead of failing.

use serde_json::Value;

/// Coerce a settings value to a boolean.
///
/// Booleans pass through, numbers are truthy when nonzero, and strings are
/// truthy for `"true"`, `"yes"`, or `"1"` (case-insensitive). Anything else,
/// including an absent value, is `false`.
pub fn bool_value(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => {
            matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
        }
        _ => false,
    }
}

/// Extract a string from a settings value.
///
/// Only actual JSON strings qualify; numbers and booleans are not
/// stringified. An absent or non-string value yields the empty string.
pub fn string_value(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_value_booleans() {
        assert!(bool_value(Some(&json!(true))));
        assert!(!bool_value(Some(&json!(false))));
    }

    #[test]
    fn test_bool_value_numbers() {
        assert!(bool_value(Some(&json!(1))));
        assert!(bool_value(Some(&json!(-3.5))));
        assert!(!bool_value(Some(&json!(0))));
        assert!(!bool_value(Some(&json!(0.0))));
    }

    #[test]
    fn test_bool_value_strings() {
        assert!(bool_value(Some(&json!("true"))));
        assert!(bool_value(Some(&json!("TRUE"))));
        assert!(bool_value(Some(&json!("yes"))));
        assert!(bool_value(Some(&json!("1"))));
        assert!(!bool_value(Some(&json!("false"))));
        assert!(!bool_value(Some(&json!("no"))));
        assert!(!bool_value(Some(&json!(""))));
    }

    #[test]
    fn test_bool_value_other_types() {
        assert!(!bool_value(None));
        assert!(!bool_value(Some(&json!(null))));
        assert!(!bool_value(Some(&json!([true]))));
        assert!(!bool_value(Some(&json!({"enabled": true}))));
    }

    #[test]
    fn test_string_value() {
        assert_eq!(string_value(Some(&json!("ABC123"))), "ABC123");
        assert_eq!(string_value(Some(&json!(""))), "");
    }

    #[test]
    fn test_string_value_rejects_non_strings() {
        assert_eq!(string_value(None), "");
        assert_eq!(string_value(Some(&json!(null))), "");
        assert_eq!(string_value(Some(&json!(42))), "");
        assert_eq!(string_value(Some(&json!(true))), "");
        assert_eq!(string_value(Some(&json!(["k"]))), "");
    }
}
