//! State document model.
//!
//! - [`StateDocument`]: parsed document, metadata passthrough, resource list
//! - [`Address`]: `type.name` resource identifiers
//! - [`index`]: lookup, filter, removal and rename by address
//! - [`StateFile`]: load, save and backup on disk
//! - [`validate_value`]: structural checks that report every problem

pub mod address;
pub mod document;
pub mod index;
pub mod storage;
pub mod types;
pub mod validate;

pub use address::{Address, AddressError};
pub use document::StateDocument;
pub use index::{IndexError, ResourceFilter, ResourceSummary};
pub use storage::{StateFile, write_json};
pub use types::StateError;
pub use validate::{ValidationReport, validate_value};
