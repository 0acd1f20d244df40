//! # binnav-base
//!
//! Core library for navigating from resolved symbol descriptors to their
//! declarations inside compiled artifacts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → Artifact lookup, parsing, navigation entry point
//!   ↓
//! hir     → Descriptor graph, fake-override normalization, container names
//!   ↓
//! base    → Primitives (FileId, Name, TextRange/LineCol)
//! ```
//!
//! A request flows `normalize` → `resolve_container_name` → artifact index →
//! artifact parser, and any stage may answer "nothing to navigate to" with
//! `Ok(None)`.

/// Foundation types: FileId, Name segments, text positions
pub mod base;

/// Navigation settings
pub mod config;

/// Descriptor graph and container resolution
pub mod hir;

/// Navigation to declarations in compiled artifacts
pub mod ide;

pub use base::{FileId, LineCol, Name, TextRange, TextSize};
pub use config::NavigationConfig;
pub use hir::{DescriptorGraph, DescriptorId, FqName, FqNameUnsafe};
pub use ide::{DeclarationNode, NavigationError, Navigator, navigate_to_declaration};
