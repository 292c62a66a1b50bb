//! Formatting style for emitted code.

/// Indentation unit for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation (ANSI C/C++ and Java output).
    pub const ANSI: Self = Self::Tab;

    /// 2-space indentation (HTML markup).
    pub const MARKUP: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Line ending written after every completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix line ending.
    #[default]
    Lf,
    /// Windows line ending.
    CrLf,
}

impl LineEnding {
    /// Convert to the literal line-ending sequence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Formatting strategy injected into a [`SourceWriter`](crate::SourceWriter).
///
/// Carries the indentation unit, the line ending, and the default block
/// delimiter pair. Markup-style output overrides the delimiters per block
/// via [`BlockSpec`](crate::BlockSpec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Indentation unit.
    pub indent: Indent,
    /// Line-ending sequence.
    pub line_ending: LineEnding,
    /// Opening delimiter emitted on its own line when a block is entered.
    pub open_delim: &'static str,
    /// Closing delimiter emitted when a block is exited.
    pub close_delim: &'static str,
}

impl Style {
    /// ANSI C++ style: braces on their own lines, tab indentation.
    pub const fn ansi_cpp() -> Self {
        Self {
            indent: Indent::ANSI,
            line_ending: LineEnding::Lf,
            open_delim: "{",
            close_delim: "}",
        }
    }

    /// HTML style: 2-space indentation; blocks carry their own tag
    /// delimiters, so the default pair is unused.
    pub const fn html() -> Self {
        Self {
            indent: Indent::MARKUP,
            line_ending: LineEnding::Lf,
            open_delim: "",
            close_delim: "",
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            line_ending: LineEnding::default(),
            open_delim: "{",
            close_delim: "}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_indent_constants() {
        assert_eq!(Indent::ANSI, Indent::Tab);
        assert_eq!(Indent::MARKUP, Indent::Spaces(2));
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_style_presets() {
        assert_eq!(Style::ansi_cpp().indent, Indent::Tab);
        assert_eq!(Style::html().indent, Indent::Spaces(2));
        assert_eq!(Style::default().open_delim, "{");
    }
}
