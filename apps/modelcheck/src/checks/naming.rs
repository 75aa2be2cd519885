//! Model name convention: CamelCase, no underscores.

use crate::models::Finding;

/// Check that `name` is CamelCase: at least one uppercase and one lowercase
/// letter, no underscore, and an uppercase first character.
pub fn check_model_name(name: &str) -> Vec<Finding> {
    if is_camel_case(name) {
        Vec::new()
    } else {
        vec![Finding::error(format!("model name '{}' is not CamelCase", name))]
    }
}

fn is_camel_case(name: &str) -> bool {
    let starts_upper = name.chars().next().map_or(false, char::is_uppercase);
    starts_upper
        && name.chars().any(char::is_lowercase)
        && !name.contains('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_camel_case_names_pass() {
        for name in ["Robot", "OfficeChair", "TableA", "Xy"] {
            assert!(check_model_name(name).is_empty(), "{}", name);
        }
    }

    #[test]
    fn test_underscore_always_one_error() {
        for name in ["Office_Chair", "_Robot", "Robot_", "office_chair", "A_b"] {
            let found = check_model_name(name);
            assert_eq!(found.len(), 1, "{}", name);
            assert_eq!(found[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_other_violations() {
        assert_eq!(check_model_name("").len(), 1);
        assert_eq!(check_model_name("robot").len(), 1);
        assert_eq!(check_model_name("ROBOT").len(), 1);
        assert_eq!(check_model_name("officeChair").len(), 1);
        assert_eq!(check_model_name("1Robot").len(), 1);
    }
}
