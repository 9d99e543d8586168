//! Service container for dependency injection
//!
//! Wires up services with their dependencies.

use std::sync::Arc;

use crate::application::services::{EditSession, ExportService, ShellService};
use crate::config::Settings;
use crate::domain::{IdGenerator, TimestampIdGenerator};
use crate::infrastructure::traits::{Clock, FileSystem, RealFileSystem, SystemClock};

/// Container holding settings and I/O boundaries, and building services from them.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Wall-clock abstraction
    pub clock: Arc<dyn Clock>,

    /// Fresh node ids
    pub ids: Arc<dyn IdGenerator>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(SystemClock),
            Arc::new(TimestampIdGenerator::new()),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            clock,
            ids,
        }
    }

    pub fn export_service(&self) -> ExportService {
        ExportService::new(
            Arc::clone(&self.fs),
            Arc::clone(&self.clock),
            self.settings.untitled_title.clone(),
        )
    }

    /// Shell over a fresh, empty mind map.
    pub fn shell_service(&self) -> ShellService {
        ShellService::new(
            EditSession::new(Arc::clone(&self.ids)),
            self.export_service(),
            self.settings.export_dir.clone(),
        )
    }
}
