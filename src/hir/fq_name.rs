//! Fully-qualified names.
//!
//! Two flavours exist, mirroring the two stages a name goes through:
//!
//! - [`FqNameUnsafe`] is built by walking the descriptor containment chain.
//!   It may contain special segments (`<anonymous>`, `<no name provided>`)
//!   and can't be used for lookup.
//! - [`FqName`] is a name proven safe: every segment is an identifier. Only
//!   this type is accepted by the artifact index.

use std::fmt;

use thiserror::Error;

use crate::base::Name;

/// Errors raised when building a safe [`FqName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// `a..b`, `.a` or `a.`
    #[error("empty segment in qualified name `{0}`")]
    EmptySegment(String),

    /// A segment like `<anonymous>`, or an identifier shaped like one.
    #[error("special name `{0}` cannot appear in a safe qualified name")]
    Special(String),

    /// A single segment that would print as several.
    #[error("segment `{0}` contains a `.`")]
    Dotted(String),
}

fn join(segments: &[Name]) -> String {
    segments.iter().map(Name::as_str).collect::<Vec<_>>().join(".")
}

/// Check that every segment prints and parses back as exactly itself.
fn check_segments(segments: &[Name]) -> Result<(), NameError> {
    for segment in segments {
        let text = segment.as_str();
        if text.is_empty() {
            return Err(NameError::EmptySegment(join(segments)));
        }
        if segment.is_special() || text.starts_with('<') {
            return Err(NameError::Special(text.to_string()));
        }
        if text.contains('.') {
            return Err(NameError::Dotted(text.to_string()));
        }
    }
    Ok(())
}

/// Check a single segment, as [`FqName::child`] would.
pub(crate) fn check_segment(segment: &Name) -> Result<(), NameError> {
    check_segments(std::slice::from_ref(segment))
}

fn write_dotted(segments: &[Name], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(segment.as_str())?;
    }
    Ok(())
}

// ============================================================================
// UNSAFE NAMES
// ============================================================================

/// A qualified name that may contain special segments.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct FqNameUnsafe {
    segments: Vec<Name>,
}

impl FqNameUnsafe {
    /// The root (empty) name.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a name from segments, special ones included.
    pub fn from_segments(segments: impl IntoIterator<Item = Name>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// This name followed by `name`.
    pub fn child(&self, name: Name) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name);
        Self { segments }
    }

    /// Segments, outermost first.
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// Whether this is the empty root name.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether every segment is representable in a lookup key.
    pub fn is_safe(&self) -> bool {
        check_segments(&self.segments).is_ok()
    }

    /// The safe name, if every segment is representable.
    pub fn to_safe(&self) -> Option<FqName> {
        self.clone().into_safe()
    }

    /// Like [`to_safe`](Self::to_safe), without cloning.
    pub fn into_safe(self) -> Option<FqName> {
        FqName::from_segments(self.segments).ok()
    }
}

impl fmt::Display for FqNameUnsafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(&self.segments, f)
    }
}

impl fmt::Debug for FqNameUnsafe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FqNameUnsafe({self})")
    }
}

// ============================================================================
// SAFE NAMES
// ============================================================================

/// A qualified name whose segments are all identifiers.
#[derive(Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FqName {
    segments: Vec<Name>,
}

impl FqName {
    /// The root package name.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path such as `kotlin.collections.List`.
    ///
    /// The empty string is the root name.
    pub fn parse(text: &str) -> Result<Self, NameError> {
        if text.is_empty() {
            return Ok(Self::root());
        }
        let segments = text
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(NameError::EmptySegment(text.to_string()))
                } else {
                    Ok(Name::guess_by_first_char(segment))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_segments(segments)
    }

    /// Build a name from segments.
    ///
    /// Fails on empty segments, segments containing `.`, and special or
    /// `<...>`-shaped segments, so the result always parses back to itself.
    pub fn from_segments(segments: impl IntoIterator<Item = Name>) -> Result<Self, NameError> {
        let segments: Vec<Name> = segments.into_iter().collect();
        check_segments(&segments)?;
        Ok(Self { segments })
    }

    /// This name followed by `name`, under the same rules as
    /// [`from_segments`](Self::from_segments).
    pub fn child(&self, name: Name) -> Result<Self, NameError> {
        check_segment(&name).map_err(|err| match err {
            NameError::EmptySegment(_) => NameError::EmptySegment(format!("{self}.")),
            other => other,
        })?;
        Ok(self.child_unchecked(name))
    }

    /// Append a segment that already passed [`check_segment`].
    pub(crate) fn child_unchecked(&self, name: Name) -> Self {
        debug_assert!(check_segment(&name).is_ok());
        let mut segments = self.segments.clone();
        segments.push(name);
        Self { segments }
    }

    /// The enclosing name, or `None` for the root.
    pub fn parent(&self) -> Option<FqName> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// The last segment, or `None` for the root.
    pub fn short_name(&self) -> Option<&Name> {
        self.segments.last()
    }

    /// Segments, outermost first.
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    /// Whether this is the root package name.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The same name as an [`FqNameUnsafe`].
    pub fn to_unsafe(&self) -> FqNameUnsafe {
        FqNameUnsafe {
            segments: self.segments.clone(),
        }
    }
}

impl From<FqName> for FqNameUnsafe {
    fn from(name: FqName) -> Self {
        Self {
            segments: name.segments,
        }
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(&self.segments, f)
    }
}

impl fmt::Debug for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FqName({self})")
    }
}
