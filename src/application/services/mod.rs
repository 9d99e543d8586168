//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Clock)
//! but are themselves concrete structs, not traits.

mod export;
mod session;
mod shell;

pub use export::ExportService;
pub use session::EditSession;
pub use shell::{Outcome, ShellService};
