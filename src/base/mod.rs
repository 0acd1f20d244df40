//! Foundation types for the navigation core.
//!
//! - [`FileId`] - Handles for files known to the artifact index
//! - [`Name`] - Qualified name segments (identifier or special)
//! - [`TextRange`], [`TextSize`], [`LineCol`], [`LineIndex`] - Positions in decompiled text
//!
//! This module has NO dependencies on other binnav modules.

mod file_id;
mod name;
mod span;

pub use file_id::FileId;
pub use name::Name;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

pub use text_size;
