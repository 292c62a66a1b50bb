//! Shared helpers for C++ language elements.

/// Join an enclosing-scope path and a name with the C++ scope-resolution
/// token, e.g. `MyClass::Nested::m_var`.
pub(crate) fn qualified(qualifier: &[String], name: &str) -> String {
    if qualifier.is_empty() {
        name.to_string()
    } else {
        format!("{}::{}", qualifier.join("::"), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified() {
        assert_eq!(qualified(&[], "m_var"), "m_var");
    }

    #[test]
    fn test_nested_qualifier() {
        let path = vec!["MyClass".to_string(), "Nested".to_string()];
        assert_eq!(qualified(&path, "m_var"), "MyClass::Nested::m_var");
    }
}
