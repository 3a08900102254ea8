// File: crates/export-core/src/controller.rs
// Summary: Export controller wiring page controls to image downloads and server-side data exports.

use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, warn};

use crate::controls::{
    self, ControlHost, DataProvider, DATA_EXPORT_SELECTOR, IMAGE_EXPORT_SELECTOR,
};
use crate::download::{Download, DownloadSink};
use crate::endpoint;
use crate::error::ExportError;
use crate::navigate::{Disposition, Navigator};
use crate::options::ExportOptions;
use crate::surface::SurfaceRegistry;

/// Stateless action dispatcher: every click produces one isolated export.
/// Collaborators are `Rc`-shared so bound click handlers can hold clones.
#[derive(Clone)]
pub struct ExportController {
    surfaces: Rc<SurfaceRegistry>,
    sink: Rc<dyn DownloadSink>,
    navigator: Rc<dyn Navigator>,
    options: ExportOptions,
}

impl ExportController {
    pub fn new(
        surfaces: Rc<SurfaceRegistry>,
        sink: Rc<dyn DownloadSink>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            surfaces,
            sink,
            navigator,
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Download the surface's current content as a PNG file.
    ///
    /// A missing surface is non-fatal to the page: it is logged and the call
    /// returns `Ok` without producing a download. `filename` falls back to
    /// the configured default when absent or empty.
    pub fn export_image(&self, surface_id: &str, filename: Option<&str>) -> Result<()> {
        let Some(surface) = self.surfaces.get(surface_id) else {
            let err = ExportError::SurfaceNotFound(surface_id.to_string());
            error!("{err}; skipping image export");
            return Ok(());
        };
        let filename = match filename {
            Some(name) if !name.is_empty() => name,
            _ => self.options.default_filename.as_str(),
        };
        let bytes = surface
            .to_png_bytes()
            .with_context(|| format!("rasterizing surface '{surface_id}'"))?;
        self.sink
            .save(&Download::new(filename, bytes))
            .with_context(|| format!("saving '{filename}'"))
    }

    /// Hand the records to the server-side export endpoint for `format`.
    ///
    /// The preview format opens a new browsing context; every other token
    /// navigates the current one. Formats are not validated locally; an
    /// unknown token is the server's problem to report.
    pub fn export_data<T: Serialize>(&self, records: &T, format: &str) -> Result<()> {
        let href = endpoint::export_href(&self.options, format, records)?;
        let disposition = if format == self.options.preview_format {
            Disposition::NewContext
        } else {
            Disposition::CurrentContext
        };
        self.navigator
            .navigate(&href, disposition)
            .with_context(|| format!("requesting '{format}' export"))
    }

    /// Bind every image-export control matching `selector` present now.
    /// Returns the number of controls bound.
    pub fn bind_image_controls(&self, host: &mut dyn ControlHost, selector: &str) -> usize {
        let controller = self.clone();
        host.on_click(
            selector,
            Rc::new(move |attrs| {
                let (chart_id, filename) = match controls::image_config(attrs) {
                    Ok(config) => config,
                    Err(err) => {
                        warn!("ignoring image export click: {err}");
                        return;
                    }
                };
                // Handlers have no caller to return errors to; log instead.
                if let Err(err) = controller.export_image(chart_id, filename) {
                    error!("image export failed: {err:#}");
                }
            }),
        )
    }

    /// Bind every data-export control matching `selector` present now,
    /// pulling current records from `provider` at click time.
    pub fn bind_data_controls(
        &self,
        host: &mut dyn ControlHost,
        selector: &str,
        provider: Rc<dyn DataProvider>,
    ) -> usize {
        let controller = self.clone();
        host.on_click(
            selector,
            Rc::new(move |attrs| {
                let format = match controls::data_config(attrs) {
                    Ok(format) => format,
                    Err(err) => {
                        warn!("ignoring data export click: {err}");
                        return;
                    }
                };
                let records = provider.current_records();
                if let Err(err) = controller.export_data(&records, format) {
                    error!("data export failed: {err:#}");
                }
            }),
        )
    }

    /// One-shot wiring of both control kinds under their default selectors.
    /// Returns `(image controls bound, data controls bound)`.
    pub fn bind_controls(
        &self,
        host: &mut dyn ControlHost,
        provider: Rc<dyn DataProvider>,
    ) -> (usize, usize) {
        let images = self.bind_image_controls(host, IMAGE_EXPORT_SELECTOR);
        let data = self.bind_data_controls(host, DATA_EXPORT_SELECTOR, provider);
        (images, data)
    }
}
