//! The initializer unit run by the orchestrator.

use std::fmt;

use crate::error::{GangwayError, Result};

/// A named, zero-argument setup routine wiring one UI feature.
///
/// The name is used verbatim in performance-trace diagnostics. Returned
/// `Ok` values carry no meaning; an `Err` aborts the rest of the boot
/// sequence (see [`crate::orchestrator::run_all`]).
pub struct Initializer {
    name: String,
    body: Box<dyn FnOnce() -> anyhow::Result<()>>,
}

impl Initializer {
    pub fn new(name: impl Into<String>, body: impl FnOnce() -> anyhow::Result<()> + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the initializer, attaching its name to any failure.
    pub fn run(self) -> Result<()> {
        let Self { name, body } = self;
        body().map_err(|source| GangwayError::Init { name, source })
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
