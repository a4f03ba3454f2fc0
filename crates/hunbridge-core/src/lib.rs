//! Shared types for hunbridge.
//!
//! This crate has no conversion or dictionary logic of its own. It defines
//! the vocabulary the other crates agree on:
//!
//! - [`engine`] -- the capability contract a dictionary engine implements
//! - [`operation`] -- the batch operations a caller can request
//! - [`outcome`] -- per-item outcome of one word in a batch
//! - [`result`] -- the aggregated output of a batch call

pub mod engine;
pub mod operation;
pub mod outcome;
pub mod result;

pub use engine::{Engine, EngineLoadError, EngineLoader};
pub use operation::Operation;
pub use outcome::ItemOutcome;
pub use result::{DictionaryInfo, OperationResult};
