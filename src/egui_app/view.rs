#![cfg(feature = "egui")]

use eframe::egui::{Pos2, Rect, Vec2};

use crate::geometry::Vec2f;
use crate::model::Floorplan;

/// Empty space kept around the content when fitting, in model units.
const FIT_PADDING: f32 = 50.0;

/// Maps model coordinates onto the canvas.
///
/// `bounds` is the model region fitted into the canvas at zoom 1. It is only
/// recomputed on load and on "Reset View", so dragging a block never rescales
/// the scene under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub bounds: Rect,
    pub zoom: f32,
    pub pan: Vec2,
    /// Screen pixels kept free around the fitted bounds.
    pub margin: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            bounds: Rect::from_min_max(Pos2::ZERO, Pos2::new(800.0, 600.0)),
            zoom: 1.0,
            pan: Vec2::ZERO,
            margin: 20.0,
        }
    }
}

impl ViewTransform {
    /// Fit all blocks and reset zoom and pan.
    pub fn fit(&mut self, plan: &Floorplan) {
        self.bounds = match plan.bounds() {
            Some(r) => Rect::from_min_max(
                Pos2::new(r.min.x as f32, r.min.y as f32),
                Pos2::new(r.max.x as f32, r.max.y as f32),
            )
            .expand(FIT_PADDING),
            None => ViewTransform::default().bounds,
        };
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Screen pixels per model unit.
    pub fn scale(&self, canvas: Rect) -> f32 {
        let w = self.bounds.width().max(1.0);
        let h = self.bounds.height().max(1.0);
        let sx = (canvas.width() - 2.0 * self.margin) / w;
        let sy = (canvas.height() - 2.0 * self.margin) / h;
        sx.min(sy).max(1e-3) * self.zoom
    }

    pub fn to_screen(&self, canvas: Rect, p: Vec2f) -> Pos2 {
        let s = self.scale(canvas);
        let c = self.bounds.center();
        canvas.center() + self.pan + Vec2::new((p.x as f32 - c.x) * s, (p.y as f32 - c.y) * s)
    }

    pub fn from_screen(&self, canvas: Rect, p: Pos2) -> Vec2f {
        let s = self.scale(canvas);
        let c = self.bounds.center();
        let d = p - canvas.center() - self.pan;
        Vec2f::new((d.x / s + c.x) as f64, (d.y / s + c.y) as f64)
    }

    pub fn rect_to_screen(&self, canvas: Rect, r: crate::geometry::RectF) -> Rect {
        Rect::from_min_max(self.to_screen(canvas, r.min), self.to_screen(canvas, r.max))
    }

    /// Zoom by `factor`, keeping the model point under `cursor` fixed.
    pub fn zoom_about(&mut self, canvas: Rect, cursor: Pos2, factor: f32) {
        let anchor = self.from_screen(canvas, cursor);
        let new_zoom = (self.zoom * factor).clamp(0.2, 10.0);
        if (new_zoom - self.zoom).abs() <= f32::EPSILON {
            return;
        }
        self.zoom = new_zoom;
        let moved = self.to_screen(canvas, anchor);
        self.pan += cursor - moved;
    }
}
