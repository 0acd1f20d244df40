//! Navigation from a descriptor to its declaration in a compiled artifact.
//!
//! The pipeline is: normalize the descriptor, name the artifact that should
//! contain it, look that artifact up, check it is compiled, parse it, and ask
//! it for the declaration. Any stage may end the request with `Ok(None)`.

use rayon::prelude::*;
use tracing::debug;

use crate::config::NavigationConfig;
use crate::hir::{DescriptorGraph, DescriptorId, FqName, ProjectRoots, SearchScope};
use crate::hir::{normalize, resolve_container_name};

use super::error::NavigationError;
use super::index::{ArtifactHandle, ArtifactIndex, is_compiled_artifact};
use super::parser::{ArtifactParser, DeclarationNode, StructuredFile};

/// Outcome of one navigation request.
pub type NavigationResult = Result<Option<DeclarationNode>, NavigationError>;

/// Navigates descriptors to declarations in compiled artifacts.
///
/// Holds shared references to its collaborators and no mutable state, so a
/// single navigator can serve concurrent requests when the collaborators
/// allow concurrent reads.
pub struct Navigator<'a, G: ?Sized, I: ?Sized, P: ?Sized> {
    graph: &'a G,
    index: &'a I,
    parser: &'a P,
    config: NavigationConfig,
}

impl<'a, G, I, P> Navigator<'a, G, I, P>
where
    G: DescriptorGraph + ?Sized,
    I: ArtifactIndex + ?Sized,
    P: ArtifactParser + ?Sized,
{
    /// A navigator with the default configuration.
    pub fn new(graph: &'a G, index: &'a I, parser: &'a P) -> Self {
        Self {
            graph,
            index,
            parser,
            config: NavigationConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: NavigationConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// The descriptor navigation actually targets (fake overrides unwrapped).
    pub fn effective_descriptor(&self, descriptor: DescriptorId) -> DescriptorId {
        normalize(self.graph, descriptor)
    }

    /// Qualified name of the artifact declaring `descriptor`.
    pub fn container_name(&self, descriptor: DescriptorId) -> Option<FqName> {
        let effective = self.effective_descriptor(descriptor);
        resolve_container_name(self.graph, &self.config.facade, effective)
    }

    /// Find the compiled artifact declaring `descriptor`, without parsing it.
    pub fn locate_artifact(
        &self,
        project: &ProjectRoots,
        descriptor: DescriptorId,
    ) -> Result<Option<ArtifactHandle>, NavigationError> {
        let effective = self.effective_descriptor(descriptor);
        self.find_compiled_artifact(project, effective)
    }

    fn find_compiled_artifact(
        &self,
        project: &ProjectRoots,
        effective: DescriptorId,
    ) -> Result<Option<ArtifactHandle>, NavigationError> {
        let Some(name) = resolve_container_name(self.graph, &self.config.facade, effective) else {
            return Ok(None);
        };

        let scope = SearchScope::source_and_artifacts(project);
        let Some(handle) = self.index.find_artifact(&scope, &name)? else {
            debug!(descriptor = ?effective, %name, "no artifact for container");
            return Ok(None);
        };

        if !is_compiled_artifact(&handle) {
            debug!(%name, path = %handle.path, kind = ?handle.kind, "container is not a compiled artifact");
            return Ok(None);
        }
        Ok(Some(handle))
    }

    /// Navigate to the declaration of `descriptor` inside a compiled artifact.
    ///
    /// Every kind of miss returns `Ok(None)`. `Err` only carries failures of
    /// the index or the parser, unchanged.
    pub fn navigate_to_declaration(&self, project: &ProjectRoots, descriptor: DescriptorId) -> NavigationResult {
        let effective = self.effective_descriptor(descriptor);
        let Some(handle) = self.find_compiled_artifact(project, effective)? else {
            return Ok(None);
        };

        let Some(file) = self.parser.parse(&handle)? else {
            debug!(path = %handle.path, "artifact is not a structured compiled file");
            return Ok(None);
        };

        let declaration = file.declaration_for(effective);
        if declaration.is_none() {
            debug!(descriptor = ?effective, path = %handle.path, "artifact has no declaration for descriptor");
        }
        Ok(declaration)
    }
}

impl<G, I, P> Navigator<'_, G, I, P>
where
    G: DescriptorGraph + Sync + ?Sized,
    I: ArtifactIndex + Sync + ?Sized,
    P: ArtifactParser + Sync + ?Sized,
{
    /// Navigate several descriptors in parallel.
    ///
    /// Results come back in the order of `descriptors`.
    pub fn navigate_all(&self, project: &ProjectRoots, descriptors: &[DescriptorId]) -> Vec<NavigationResult> {
        descriptors
            .par_iter()
            .map(|&descriptor| self.navigate_to_declaration(project, descriptor))
            .collect()
    }
}

/// Navigate to the declaration of `descriptor` with the default configuration.
pub fn navigate_to_declaration<G, I, P>(
    graph: &G,
    index: &I,
    parser: &P,
    project: &ProjectRoots,
    descriptor: DescriptorId,
) -> NavigationResult
where
    G: DescriptorGraph + ?Sized,
    I: ArtifactIndex + ?Sized,
    P: ArtifactParser + ?Sized,
{
    Navigator::new(graph, index, parser).navigate_to_declaration(project, descriptor)
}
