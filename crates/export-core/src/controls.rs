// File: crates/export-core/src/controls.rs
// Summary: Control metadata, click-subscription host trait, in-memory panel, data provider.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::error::ExportError;

/// Selector for image-export controls.
pub const IMAGE_EXPORT_SELECTOR: &str = ".export-png";
/// Selector for data-export controls.
pub const DATA_EXPORT_SELECTOR: &str = ".export-projection";

/// Attribute naming the surface an image control exports.
pub const ATTR_CHART_ID: &str = "data-chart-id";
/// Attribute naming the download filename (optional).
pub const ATTR_FILENAME: &str = "data-filename";
/// Attribute naming the export format of a data control.
pub const ATTR_FORMAT: &str = "data-format";

/// Per-control metadata bag, read once at click time.
#[derive(Clone, Debug, Default)]
pub struct ControlAttrs {
    values: HashMap<String, String>,
}

impl ControlAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

pub type ClickHandler = Rc<dyn Fn(&ControlAttrs)>;

/// Explicit click-subscription seam over the host page. Handlers replace the
/// control's default activation.
pub trait ControlHost {
    /// Attach `handler` to every control matching `selector` present now and
    /// return how many were bound. Controls added afterwards are not picked
    /// up (no mutation observation).
    fn on_click(&mut self, selector: &str, handler: ClickHandler) -> usize;
}

/// The "current data source" capability a page injects for data exports.
pub trait DataProvider {
    /// Current projection records, exactly as they should be exported.
    fn current_records(&self) -> Value;
}

/// Fixed-records provider for pages whose data never changes, and for tests.
pub struct StaticRecords(pub Value);

impl DataProvider for StaticRecords {
    fn current_records(&self) -> Value {
        self.0.clone()
    }
}

/// Read an image control's config: required chart id, optional filename.
pub fn image_config(attrs: &ControlAttrs) -> Result<(&str, Option<&str>), ExportError> {
    let chart_id = attrs
        .get(ATTR_CHART_ID)
        .ok_or(ExportError::MissingAttribute(ATTR_CHART_ID))?;
    Ok((chart_id, attrs.get(ATTR_FILENAME)))
}

/// Read a data control's config: the required export format token.
pub fn data_config(attrs: &ControlAttrs) -> Result<&str, ExportError> {
    attrs
        .get(ATTR_FORMAT)
        .ok_or(ExportError::MissingAttribute(ATTR_FORMAT))
}

struct PanelControl {
    classes: Vec<String>,
    attrs: ControlAttrs,
    handlers: Vec<ClickHandler>,
}

/// In-memory control host: a flat list of controls carrying class lists and
/// attributes. Supports single class selectors (".export-png"), which is all
/// the export wiring uses.
pub struct ControlPanel {
    controls: Vec<PanelControl>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self { controls: Vec::new() }
    }

    /// Add a control; returns its index for later `click` calls.
    pub fn add_control(&mut self, classes: &[&str], attrs: ControlAttrs) -> usize {
        self.controls.push(PanelControl {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attrs,
            handlers: Vec::new(),
        });
        self.controls.len() - 1
    }

    /// Fire every handler attached to the control at `index`, in bind order.
    pub fn click(&self, index: usize) {
        let control = &self.controls[index];
        for handler in &control.handlers {
            handler(&control.attrs);
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ControlHost for ControlPanel {
    fn on_click(&mut self, selector: &str, handler: ClickHandler) -> usize {
        let class = selector.trim_start_matches('.');
        let mut bound = 0;
        for control in &mut self.controls {
            if control.classes.iter().any(|c| c == class) {
                control.handlers.push(Rc::clone(&handler));
                bound += 1;
            }
        }
        bound
    }
}
