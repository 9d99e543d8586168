//! Export service
//!
//! Writes the Markdown document of a tree to `<dir>/<derived file name>`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{derive_file_name_with, to_document, Node};
use crate::infrastructure::traits::{Clock, FileSystem};

pub struct ExportService {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    untitled: String,
}

impl ExportService {
    /// `untitled` is the file-name stem used when the root has no title.
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, untitled: impl Into<String>) -> Self {
        Self {
            fs,
            clock,
            untitled: untitled.into(),
        }
    }

    /// File name the tree would be exported under, sampled at the current time.
    pub fn file_name(&self, tree: &Node) -> String {
        derive_file_name_with(&tree.title, &self.untitled, self.clock.now())
    }

    /// Write the document into `dir`, creating it if needed; returns the file path.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn export(&self, tree: &Node, dir: &Path) -> ApplicationResult<PathBuf> {
        let path = dir.join(self.file_name(tree));
        let document = to_document(tree);
        debug!(
            "export: {} nodes, {} bytes -> {}",
            tree.node_count(),
            document.len(),
            path.display()
        );

        self.fs
            .ensure_parent(&path)
            .with_path_context("create export directory", dir)?;
        self.fs
            .write(&path, &document)
            .with_path_context("write document", &path)?;

        info!("exported {}", path.display());
        Ok(path)
    }
}
