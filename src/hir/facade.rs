//! Package facade naming.
//!
//! Top-level functions and properties of a package are compiled into a
//! single synthetic class, the package *facade*. Its name is derived from
//! the package name: `a.b.c` becomes `a.b.c.CPackage`, and the root package
//! becomes `_DefaultPackage`.

use crate::base::Name;

use super::fq_name::{FqName, NameError, check_segment};

/// Naming convention for package facades.
///
/// Both parts are validated on construction, so every facade name built
/// from a valid package name is itself a valid [`FqName`] that parses back
/// to the same value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "RawFacadeNaming")
)]
pub struct FacadeNaming {
    suffix: String,
    default_package_class: String,
}

impl FacadeNaming {
    pub const DEFAULT_SUFFIX: &'static str = "Package";
    pub const DEFAULT_PACKAGE_CLASS: &'static str = "_DefaultPackage";

    /// Naming with a custom `suffix` and root-package class.
    ///
    /// The suffix may be empty but must not contain `.`. The root-package
    /// class must be a non-empty identifier with no `.` and no `<...>` shape.
    pub fn new(suffix: impl Into<String>, default_package_class: impl Into<String>) -> Result<Self, NameError> {
        Self::default()
            .with_suffix(suffix)?
            .with_default_package_class(default_package_class)
    }

    /// Replace the suffix appended to the capitalized package name.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Result<Self, NameError> {
        let suffix = suffix.into();
        if suffix.contains('.') {
            return Err(NameError::Dotted(suffix));
        }
        self.suffix = suffix;
        Ok(self)
    }

    /// Replace the facade class name of the root package.
    pub fn with_default_package_class(mut self, class: impl Into<String>) -> Result<Self, NameError> {
        let class = class.into();
        check_segment(&Name::identifier(class.as_str()))?;
        self.default_package_class = class;
        Ok(self)
    }

    /// Appended to the capitalized last package segment.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Facade class name for the root package.
    pub fn default_package_class(&self) -> &str {
        &self.default_package_class
    }

    /// Short name of the facade class for `package`.
    pub fn facade_short_name(&self, package: &FqName) -> Name {
        match package.short_name() {
            Some(last) => Name::identifier(format!("{}{}", last.capitalized(), self.suffix)),
            None => Name::identifier(self.default_package_class.as_str()),
        }
    }

    /// Fully-qualified name of the facade class for `package`.
    ///
    /// Infallible: the package's last segment is a valid identifier, its
    /// capitalized form can't start with `<` or gain a `.`, and both naming
    /// parts were checked when this value was built.
    pub fn facade_name(&self, package: &FqName) -> FqName {
        package.child_unchecked(self.facade_short_name(package))
    }
}

impl Default for FacadeNaming {
    fn default() -> Self {
        Self {
            suffix: Self::DEFAULT_SUFFIX.to_string(),
            default_package_class: Self::DEFAULT_PACKAGE_CLASS.to_string(),
        }
    }
}

/// Unvalidated form read from configuration; missing keys take the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawFacadeNaming {
    suffix: String,
    default_package_class: String,
}

#[cfg(feature = "serde")]
impl Default for RawFacadeNaming {
    fn default() -> Self {
        Self {
            suffix: FacadeNaming::DEFAULT_SUFFIX.to_string(),
            default_package_class: FacadeNaming::DEFAULT_PACKAGE_CLASS.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawFacadeNaming> for FacadeNaming {
    type Error = NameError;

    fn try_from(raw: RawFacadeNaming) -> Result<Self, NameError> {
        Self::new(raw.suffix, raw.default_package_class)
    }
}
