//! Paint worklet registry
//!
//! [CSS Painting API Level 1 § 7](https://www.w3.org/TR/css-paint-api-1/#registering-custom-paint)
//!
//! "The `registerPaint(name, paintCtor)` method registers a class to be used
//! by the paint function." The registry is the seam between paint sources and
//! the host: style sheets reference a source by name, the host resolves the
//! name here and invokes the source. The registry itself is an explicit
//! collaborator object, never ambient global state.

use std::collections::HashMap;

use thiserror::Error;

use crate::display_list::DisplayList;
use crate::painter::{CirclesInSquares, PaintSize, PaintSource};
use crate::properties::PaintProperties;

/// Errors surfaced by the registry.
///
/// These are host-facing registration/lookup failures; a paint invocation
/// itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkletError {
    /// [§ 7.2](https://www.w3.org/TR/css-paint-api-1/#dom-paintworkletglobalscope-registerpaint)
    /// "If the paint name map contains an entry with key name, throw."
    #[error("a paint source named '{0}' is already registered")]
    AlreadyRegistered(String),

    /// A style sheet referenced a paint source no one registered.
    #[error("no paint source registered under '{0}'")]
    UnknownSource(String),
}

/// Registry mapping paint source names to their implementations.
#[derive(Default)]
pub struct PaintWorklet {
    sources: HashMap<&'static str, Box<dyn PaintSource>>,
}

impl PaintWorklet {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in sources registered.
    #[must_use]
    pub fn with_builtin_sources() -> Self {
        let mut worklet = Self::new();
        let _ = worklet
            .sources
            .insert(CirclesInSquares::NAME, Box::new(CirclesInSquares::new()));
        worklet
    }

    /// Register a paint source under its declared name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkletError::AlreadyRegistered`] if a source with the same
    /// name is already present; the existing source is kept.
    pub fn register_paint(&mut self, source: Box<dyn PaintSource>) -> Result<(), WorkletError> {
        let name = source.name();
        if self.sources.contains_key(name) {
            return Err(WorkletError::AlreadyRegistered(name.to_string()));
        }
        let _ = self.sources.insert(name, source);
        Ok(())
    }

    /// Look up a registered paint source by name.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&dyn PaintSource> {
        self.sources.get(name).map(|source| &**source)
    }

    /// Invoke a registered paint source.
    ///
    /// # Errors
    ///
    /// Returns [`WorkletError::UnknownSource`] if no source is registered
    /// under `name`.
    pub fn paint(
        &self,
        name: &str,
        size: PaintSize,
        properties: &PaintProperties,
    ) -> Result<DisplayList, WorkletError> {
        let source = self
            .source(name)
            .ok_or_else(|| WorkletError::UnknownSource(name.to_string()))?;
        Ok(source.paint(size, properties))
    }
}
