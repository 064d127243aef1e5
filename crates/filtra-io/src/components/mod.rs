//! Dioxus UI components for filtra.
//!
//! Provides the file upload zone, the filter toggle bar, per-entry
//! parameter panels, the processed-image result panel, and the
//! generated-code panel. Every component is a thin adapter: DOM events
//! in, `filtra-pipeline` commands (via callbacks) out.

mod code_panel;
mod filter_bar;
mod params;
mod results;
mod upload;

pub use code_panel::CodePanel;
pub use filter_bar::FilterBar;
pub use params::ParamPanels;
pub use results::ResultPanel;
pub use upload::FileUpload;
