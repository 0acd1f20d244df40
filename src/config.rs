//! Navigation settings.

use crate::hir::{FacadeNaming, NameError};

/// Settings for a [`Navigator`](crate::ide::Navigator).
///
/// With the `serde` feature this deserializes from camelCase keys; missing
/// keys fall back to the defaults and invalid facade names are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct NavigationConfig {
    /// How package facade classes are named.
    pub facade: FacadeNaming,
}

impl NavigationConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `suffix` after the capitalized package name (`pkg` → `pkg.Pkg<suffix>`).
    pub fn with_facade_suffix(mut self, suffix: impl Into<String>) -> Result<Self, NameError> {
        self.facade = self.facade.with_suffix(suffix)?;
        Ok(self)
    }

    /// Use `class` as the facade name of the root package.
    pub fn with_default_package_class(mut self, class: impl Into<String>) -> Result<Self, NameError> {
        self.facade = self.facade.with_default_package_class(class)?;
        Ok(self)
    }
}
