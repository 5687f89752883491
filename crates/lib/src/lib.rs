//! tfstate-lib: inspect and edit infrastructure state files
//!
//! - `attr`: dotted attribute paths and traversal over JSON values
//! - `state`: the state document, resource addresses and the resource index
//! - `edit`: read and mutation operations with backup and confirmation
//! - `discover`: locating state files on disk

pub mod attr;
pub mod config;
pub mod consts;
pub mod discover;
pub mod edit;
pub mod state;
pub mod util;
