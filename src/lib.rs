//! Classifies tracker issues into workflow `state` / `when` buckets and
//! exports one CSV record per issue.

pub mod catalog;
pub mod change_index;
pub mod classify;
pub mod emitter;
pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use catalog::{Catalog, LabelKind, MilestoneKind};
pub use change_index::ChangeLinkIndex;
pub use classify::{Classification, Classifier, State, When};
pub use emitter::{Emitter, Record};
pub use error::{Error, Result};
pub use logic::ExportState;

#[cfg(test)]
pub(crate) mod test_helpers;
