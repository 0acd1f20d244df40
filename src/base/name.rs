//! Name segments for qualified names.

use smol_str::SmolStr;
use std::fmt;

/// A single segment of a qualified name.
///
/// A `Name` is either an identifier (`Foo`, `toString`) or a *special* name
/// wrapped in angle brackets (`<anonymous>`, `<no name provided>`). Special
/// names belong to declarations that have no name expressible in source, so
/// a qualified name containing one cannot be used as a lookup key.
///
/// Cloning is cheap: short names are stored inline by [`SmolStr`].
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Name {
    text: SmolStr,
    special: bool,
}

impl Name {
    /// Segment given to declarations that were never named.
    pub const NO_NAME_PROVIDED: &'static str = "<no name provided>";
    /// Segment given to anonymous objects and function literals.
    pub const ANONYMOUS: &'static str = "<anonymous>";

    /// Create an identifier name.
    ///
    /// The text is taken as-is, even if it starts with `<`.
    pub fn identifier(text: impl Into<SmolStr>) -> Self {
        Self {
            text: text.into(),
            special: false,
        }
    }

    /// Create a special name, adding the surrounding angle brackets if missing.
    pub fn special(text: &str) -> Self {
        let text = if text.starts_with('<') && text.ends_with('>') {
            SmolStr::new(text)
        } else {
            SmolStr::from(format!("<{text}>"))
        };
        Self {
            text,
            special: true,
        }
    }

    /// Classify by the leading character: `<...>` is special, anything else is
    /// an identifier.
    pub fn guess_by_first_char(text: &str) -> Self {
        if text.starts_with('<') {
            Self::special(text)
        } else {
            Self::identifier(text)
        }
    }

    /// The `<no name provided>` special name.
    pub fn no_name_provided() -> Self {
        Self::special(Self::NO_NAME_PROVIDED)
    }

    /// The `<anonymous>` special name.
    pub fn anonymous() -> Self {
        Self::special(Self::ANONYMOUS)
    }

    /// The segment text, brackets included for special names.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this name can't be represented in a qualified lookup key.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// The name with its first character upper-cased.
    pub fn capitalized(&self) -> SmolStr {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(first) if !first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
            _ => self.text.clone(),
        }
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.text)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Self::guess_by_first_char(text)
    }
}
