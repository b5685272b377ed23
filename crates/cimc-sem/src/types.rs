//! Type name predicates and the numeric widening lattice.
//!
//! Types are plain strings throughout the front end. The built-in names are
//! `void`, `char`, `int`, `float`, `double`, `bool`, `string`; `char` and
//! `int` are the integer types, and the numeric types additionally include
//! `float` and `double`. Widening follows `int < float < double`, with
//! `char` treated as `int`.

/// The closed set of built-in type names.
pub const BUILTIN_TYPES: [&str; 7] = ["void", "char", "int", "float", "double", "bool", "string"];

/// True for the numeric types: `char`, `int`, `float`, `double`.
pub fn is_numeric(type_name: &str) -> bool {
    matches!(type_name, "int" | "float" | "double" | "char")
}

/// True for the integer types: `char`, `int`.
pub fn is_integer(type_name: &str) -> bool {
    matches!(type_name, "int" | "char")
}

/// Returns the wider of two numeric types (`double` > `float` > `int`;
/// `char` widens to `int`).
pub fn wider_type(a: &str, b: &str) -> &'static str {
    if a == "double" || b == "double" {
        "double"
    } else if a == "float" || b == "float" {
        "float"
    } else {
        "int"
    }
}

/// True when a value of type `value` may flow into a slot of type
/// `target`: the types are equal, or both are numeric (implicit widening).
pub fn is_assignable(target: &str, value: &str) -> bool {
    target == value || (is_numeric(target) && is_numeric(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_types() {
        for t in ["int", "float", "double", "char"] {
            assert!(is_numeric(t), "{} should be numeric", t);
        }
        for t in ["bool", "string", "void", "auto"] {
            assert!(!is_numeric(t), "{} should not be numeric", t);
        }
    }

    #[test]
    fn test_integer_types() {
        assert!(is_integer("int"));
        assert!(is_integer("char"));
        assert!(!is_integer("float"));
        assert!(!is_integer("double"));
        assert!(!is_integer("bool"));
    }

    #[test]
    fn test_widening_order() {
        assert_eq!(wider_type("int", "double"), "double");
        assert_eq!(wider_type("float", "int"), "float");
        assert_eq!(wider_type("int", "int"), "int");
        assert_eq!(wider_type("char", "char"), "int");
        assert_eq!(wider_type("char", "float"), "float");
    }

    #[test]
    fn test_widening_is_commutative() {
        let numeric = ["char", "int", "float", "double"];
        for a in numeric {
            for b in numeric {
                assert_eq!(wider_type(a, b), wider_type(b, a), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_assignability() {
        assert!(is_assignable("int", "int"));
        assert!(is_assignable("double", "int"));
        assert!(is_assignable("int", "double"));
        assert!(is_assignable("string", "string"));
        assert!(is_assignable("bool", "bool"));
        assert!(!is_assignable("int", "bool"));
        assert!(!is_assignable("bool", "int"));
        assert!(!is_assignable("string", "char"));
    }

    #[test]
    fn test_builtin_set() {
        assert_eq!(BUILTIN_TYPES.len(), 7);
        assert!(BUILTIN_TYPES.contains(&"string"));
        assert!(!BUILTIN_TYPES.contains(&"auto"));
    }
}
