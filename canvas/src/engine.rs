use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BACKGROUND, CANVAS_SIZE};
use crate::input::{ClientRect, PointerSample, map_to_canvas};
use crate::raster::{DirtyRect, RasterError, RasterSurface};
use crate::render;
use crate::stroke::StrokeSession;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Copy this region of the surface to the screen.
    Render(DirtyRect),
}

/// Core pad state: everything that doesn't depend on the canvas element.
///
/// Separated from `Pad` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct PadCore {
    pub surface: RasterSurface,
    pub stroke: StrokeSession,
}

impl PadCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Surface lifecycle ---

    /// Fill the whole surface with the background color.
    pub fn initialize(&mut self) -> Action {
        self.surface.fill(BACKGROUND);
        Action::Render(self.surface.bounds())
    }

    /// Discard all strokes, including one in progress.
    pub fn reset(&mut self) -> Action {
        self.stroke.end();
        self.initialize()
    }

    /// Serialize the current surface as a PNG data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn export_image(&self) -> Result<String, RasterError> {
        self.surface.to_data_url()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, sample: &PointerSample, rect: ClientRect) -> Action {
        if let Some(pos) = map_to_canvas(sample, rect) {
            self.stroke.begin(pos);
        }
        Action::None
    }

    pub fn on_pointer_move(&mut self, sample: &PointerSample, rect: ClientRect) -> Action {
        if !self.stroke.is_active() {
            return Action::None;
        }
        let Some(pos) = map_to_canvas(sample, rect) else {
            return Action::None;
        };
        match self.stroke.extend(pos, &mut self.surface) {
            Some(dirty) => Action::Render(dirty),
            None => Action::None,
        }
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.stroke.end();
        Action::None
    }

    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_pointer_up()
    }

    // --- Queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_active()
    }
}

/// The full drawing pad. Wraps `PadCore` and owns the browser canvas element.
pub struct Pad {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: PadCore,
}

impl Pad {
    /// Bind a pad to `canvas`, size it, and paint the blank surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the first blit fails.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut pad = Self { canvas, ctx, core: PadCore::new() };
        let action = pad.core.initialize();
        pad.apply(action)?;
        Ok(pad)
    }

    /// Current on-screen bounding rectangle of the canvas.
    #[must_use]
    pub fn client_rect(&self) -> ClientRect {
        let rect = self.canvas.get_bounding_client_rect();
        ClientRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if drawing to the canvas fails.
    pub fn on_pointer_down(&mut self, sample: &PointerSample) -> Result<(), JsValue> {
        let rect = self.client_rect();
        let action = self.core.on_pointer_down(sample, rect);
        self.apply(action)
    }

    /// # Errors
    ///
    /// Returns `Err` if drawing to the canvas fails.
    pub fn on_pointer_move(&mut self, sample: &PointerSample) -> Result<(), JsValue> {
        if !self.core.is_drawing() {
            return Ok(());
        }
        let rect = self.client_rect();
        let action = self.core.on_pointer_move(sample, rect);
        self.apply(action)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    // --- Surface lifecycle ---

    /// # Errors
    ///
    /// Returns `Err` if drawing to the canvas fails.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        let action = self.core.reset();
        self.apply(action)
    }

    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn export_image(&self) -> Result<String, RasterError> {
        self.core.export_image()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.core.is_drawing()
    }

    fn apply(&self, action: Action) -> Result<(), JsValue> {
        match action {
            Action::None => Ok(()),
            Action::Render(dirty) => render::blit(&self.ctx, &self.core.surface, dirty),
        }
    }
}
