//! Resource-level reads and edits on a state file.
//!
//! [`StateEditor`] exposes the bare operations and the guarded
//! [`StateEditor::apply`] flow used by the command line.

pub mod editor;
pub mod types;
pub mod value;

pub use editor::StateEditor;
pub use types::{Confirm, Edit, EditError, EditOutcome, EditReport, ExportOutcome};
pub use value::parse_value;
