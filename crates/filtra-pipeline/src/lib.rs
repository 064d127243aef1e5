//! filtra-pipeline: Pure filter-pipeline state (sans-IO).
//!
//! Owns the catalog of available filters, the ordered list of selected
//! filter entries with their parameter values, and the serialization of
//! that list into the wire shape both service endpoints consume.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! state and returns structured data. All browser and network
//! interaction lives in `filtra-io`.

pub mod catalog;
pub mod pipeline;
pub mod session;
pub mod types;

pub use catalog::FilterKind;
pub use pipeline::{FilterPipeline, PipelineEntry};
pub use session::{ApplyPayload, Session, SourceImage, ValidationError};
pub use types::{FilterInvocation, ParameterSpec, PipelineError};
