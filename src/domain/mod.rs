//! Domain layer: the mind-map model and its pure operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod document;
pub mod error;
pub mod filename;
pub mod id;
pub mod node;
pub mod ops;
pub mod outline;

pub use document::to_document;
pub use error::{DomainError, DomainResult};
pub use filename::{derive_file_name, derive_file_name_with, UNTITLED};
pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use node::{Node, NodeId, NodeUpdate, ROOT_ID};
pub use ops::{
    add_child, contains, delete_by_id, find_node, find_path, position_of, resolve_position,
    update_fields, update_text,
};
pub use outline::render_outline;
