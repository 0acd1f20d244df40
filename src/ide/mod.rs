//! IDE features: navigation to declarations in compiled artifacts.
//!
//! This module connects the descriptor graph (HIR) to the artifact index and
//! artifact parser. The index and parser are traits so that any file system
//! or decompiler can plug in; [`ArtifactSet`] and [`DecompiledParser`] are
//! in-memory implementations.
//!
//! ## Usage
//!
//! ```ignore
//! use binnav::ide::{ArtifactSet, DecompiledParser, Navigator};
//!
//! let navigator = Navigator::new(&store, &artifacts, &parser);
//! let project = artifacts.project_roots();
//! if let Some(node) = navigator.navigate_to_declaration(&project, descriptor)? {
//!     println!("{} at {}", node.name, node.position);
//! }
//! ```

mod artifacts;
mod decompiled;
mod error;
mod index;
mod navigate;
mod parser;

pub use artifacts::ArtifactSet;
pub use decompiled::{DecompiledFile, DecompiledParser};
pub use error::{IndexError, NavigationError, ParseError};
pub use index::{ArtifactHandle, ArtifactIndex, is_compiled_artifact};
pub use navigate::{NavigationResult, Navigator, navigate_to_declaration};
pub use parser::{ArtifactParser, DeclarationNode, StructuredFile};
