//! Error type shared by the emission core and the language renderers.

use std::io;

use thiserror::Error;

/// Result type for emission and rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or rendering language elements.
///
/// Three tiers, all fatal: configuration errors (an element was built with
/// an impossible option combination), usage-contract violations (a valid
/// element was rendered through the wrong operation), and sink I/O errors,
/// which propagate unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// Two options that exclude each other were both set.
    #[error("{element} `{name}`: `{first}` and `{second}` are mutually exclusive")]
    ModifierConflict {
        element: &'static str,
        name: String,
        first: &'static str,
        second: &'static str,
    },

    /// An option was set without the option it depends on.
    #[error("{element} `{name}`: `{modifier}` requires `{requires}`")]
    ModifierDependency {
        element: &'static str,
        name: String,
        modifier: &'static str,
        requires: &'static str,
    },

    /// The element has no name.
    #[error("{element} has no name")]
    MissingName { element: &'static str },

    /// The element requires an initialization value.
    #[error("{element} `{name}` must be initialized")]
    MissingValue { element: &'static str, name: String },

    /// The element requires a body.
    #[error("{element} `{name}` must have a body")]
    MissingBody { element: &'static str, name: String },

    /// The element may not carry a body or content.
    #[error("{element} `{name}` cannot have a body")]
    BodyNotAllowed { element: &'static str, name: String },

    /// An explicit size was combined with options that contradict it.
    #[error("{element} `{name}`: {detail}")]
    SizeConflict {
        element: &'static str,
        name: String,
        detail: &'static str,
    },

    /// The requested render form only exists for class members.
    #[error("{element} `{name}`: {operation} is only available for class members")]
    MemberOnly {
        element: &'static str,
        name: String,
        operation: &'static str,
    },

    /// The requested render form only exists for free elements.
    #[error("{element} `{name}`: {operation} is not available for class members")]
    FreeOnly {
        element: &'static str,
        name: String,
        operation: &'static str,
    },

    /// A negative indent offset would take the depth below zero.
    #[error("indent offset {offset} underflows current depth {depth}")]
    IndentUnderflow { depth: usize, offset: i32 },

    /// The sink failed; the output is unusable and must be discarded.
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message() {
        let err = Error::ModifierConflict {
            element: "variable",
            name: "COUNT".into(),
            first: "const",
            second: "constexpr",
        };
        assert_eq!(
            err.to_string(),
            "variable `COUNT`: `const` and `constexpr` are mutually exclusive"
        );
    }

    #[test]
    fn test_io_is_transparent() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = Error::from(io_err);
        assert_eq!(err.to_string(), "pipe closed");
    }
}
