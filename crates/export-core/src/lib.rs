// File: crates/export-core/src/lib.rs
// Summary: Core library entry point; exports the controller, collaborator traits, and helpers.

pub mod controller;
pub mod surface;
pub mod download;
pub mod navigate;
pub mod endpoint;
pub mod controls;
pub mod options;
pub mod error;

pub use controller::ExportController;
pub use surface::{PngSurface, RenderSurface, SurfaceRegistry};
pub use download::{DirectorySink, Download, DownloadSink, MemorySink};
pub use navigate::{Disposition, LogNavigator, Navigator, RecordingNavigator};
pub use endpoint::export_href;
pub use controls::{ControlAttrs, ControlHost, ControlPanel, DataProvider, StaticRecords};
pub use options::ExportOptions;
pub use error::ExportError;
