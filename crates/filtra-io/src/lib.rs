//! filtra-io: Browser I/O and Dioxus component library.
//!
//! Handles the HTTP calls to the filter service, Blob URL management
//! for image previews, clipboard and download access, and provides the
//! reusable UI components for the filtra web application.

pub mod api;
pub mod blobs;
pub mod clipboard;
pub mod components;
pub mod download;

pub use api::{ApiClient, ApiError, ApplyResponse, ExportResponse};
pub use components::{CodePanel, FileUpload, FilterBar, ParamPanels, ResultPanel};
