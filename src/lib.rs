//! Mind-map editing core and terminal front end.
//!
//! The [`domain`] module holds the tree model and its pure operations
//! (add child, delete, update fields, Markdown export, file-name derivation).
//! [`application`] wraps them in an edit session and export service, and
//! [`cli`] drives those from the command line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    add_child, delete_by_id, derive_file_name, to_document, update_fields, update_text, Node,
    NodeId, NodeUpdate,
};
