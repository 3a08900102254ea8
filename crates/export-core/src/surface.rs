// File: crates/export-core/src/surface.rs
// Summary: Rendering-surface trait and the id-keyed registry the controller looks surfaces up in.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

/// A drawable page area that can produce a PNG raster of its current content.
/// Rasterization itself lives behind this seam; the export layer only moves
/// the encoded bytes.
pub trait RenderSurface {
    fn id(&self) -> &str;
    fn to_png_bytes(&self) -> Result<Vec<u8>>;
}

/// Id -> surface lookup for the page's chart surfaces.
/// Surfaces may be registered after the controller is wired; lookups happen
/// at click time.
pub struct SurfaceRegistry {
    surfaces: RefCell<HashMap<String, Rc<dyn RenderSurface>>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self { surfaces: RefCell::new(HashMap::new()) }
    }

    /// Register a surface under its own id, replacing any previous holder.
    pub fn register(&self, surface: Rc<dyn RenderSurface>) {
        self.surfaces
            .borrow_mut()
            .insert(surface.id().to_string(), surface);
    }

    pub fn get(&self, id: &str) -> Option<Rc<dyn RenderSurface>> {
        self.surfaces.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.surfaces.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.borrow().is_empty()
    }
}

/// Surface backed by already-encoded PNG bytes.
pub struct PngSurface {
    id: String,
    bytes: Vec<u8>,
}

impl PngSurface {
    pub fn new(id: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { id: id.into(), bytes }
    }
}

impl RenderSurface for PngSurface {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_png_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
