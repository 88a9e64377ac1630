//! Service container for dependency injection
//!
//! Wires up the input source, settings and the solve service.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::SolveService;
use crate::config::Settings;
use crate::infrastructure::traits::{InputSource, RealInputSource};
use crate::infrastructure::{InfraError, InfraResult};

/// Where the parent-array text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// Text given on the command line
    Inline(String),
    /// Path to a file holding the text
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSpec {
    /// Inline text wins over a file; neither means stdin.
    pub fn resolve(inline: Option<&str>, file: Option<&PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => InputSpec::Inline(text.to_string()),
            (None, Some(path)) => InputSpec::File(path.clone()),
            (None, None) => InputSpec::Stdin,
        }
    }
}

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Input abstraction
    pub input: Arc<dyn InputSource>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputSource))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, input: Arc<dyn InputSource>) -> Self {
        Self {
            settings: Arc::new(settings),
            input,
        }
    }

    pub fn solve_service(&self) -> SolveService {
        SolveService::new(&self.settings)
    }

    /// Read the parent-array text described by `spec`.
    pub fn load_input(&self, spec: &InputSpec) -> InfraResult<String> {
        debug!("load_input: {:?}", spec);
        match spec {
            InputSpec::Inline(text) => Ok(text.clone()),
            InputSpec::File(path) => self
                .input
                .read_to_string(path)
                .map_err(|e| InfraError::io(format!("read {}", path.display()), e)),
            InputSpec::Stdin => self
                .input
                .read_stdin()
                .map_err(|e| InfraError::io("read stdin", e)),
        }
    }
}
