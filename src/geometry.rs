//! Area-preserving block geometry and resize-handle hit-testing.
//!
//! All coordinates live in the floorplan's model space: x grows to the right,
//! y grows downwards, so a block's "top" edge is at `y` and its "bottom" edge
//! at `y + height`.
//!
//! Handles are never stored. They are derived from a block's current
//! rectangle and a [`HandleConfig`] whenever a hit-test or redraw needs them:
//!
//! - four square corner handles of `corner_size`, one inside each corner
//! - a right edge strip `edge_width` wide, used for width drags
//! - a bottom edge strip `edge_height` tall, used for height drags
//!
//! Corner handles win over edge handles where they overlap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Block;

/// Dimensions at or below this are rejected by width/height/corner drags.
pub const MIN_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: f64,
    pub y: f64,
}

impl Vec2f {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Vec2f) -> Vec2f {
        Vec2f::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl RectF {
    pub fn from_min_max(min: Vec2f, max: Vec2f) -> Self {
        Self { min, max }
    }
    pub fn from_min_size(min: Vec2f, w: f64, h: f64) -> Self {
        Self::from_min_max(min, Vec2f::new(min.x + w, min.y + h))
    }
    pub fn center(&self) -> Vec2f {
        self.min.midpoint(self.max)
    }
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    /// Closed containment: points on the border are inside.
    pub fn contains(&self, p: Vec2f) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
    pub fn union(self, other: RectF) -> RectF {
        RectF::from_min_max(
            Vec2f::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vec2f::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handles
// ────────────────────────────────────────────────────────────────────────────

/// Sizes of the resize handles, in model units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleConfig {
    pub corner_size: f64,
    pub edge_width: f64,
    pub edge_height: f64,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            corner_size: 25.0,
            edge_width: 15.0,
            edge_height: 25.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomRight,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Corner(Corner),
    EdgeRight,
    EdgeBottom,
}

impl Handle {
    pub fn is_corner(self) -> bool {
        matches!(self, Handle::Corner(_))
    }

    /// The drag this handle starts.
    pub fn resize_mode(self) -> ResizeMode {
        match self {
            Handle::Corner(_) => ResizeMode::Corner,
            Handle::EdgeRight => ResizeMode::Width,
            Handle::EdgeBottom => ResizeMode::Height,
        }
    }
}

/// Square occupied by a corner handle.
pub fn corner_rect(block: &Block, corner: Corner, cfg: &HandleConfig) -> RectF {
    let s = cfg.corner_size;
    let left = block.x;
    let right = block.x + block.width - s;
    let top = block.y;
    let bottom = block.y + block.height - s;
    let min = match corner {
        Corner::TopLeft => Vec2f::new(left, top),
        Corner::TopRight => Vec2f::new(right, top),
        Corner::BottomLeft => Vec2f::new(left, bottom),
        Corner::BottomRight => Vec2f::new(right, bottom),
    };
    RectF::from_min_size(min, s, s)
}

/// Classify a point against the handles of `block`.
pub fn handle_at(block: &Block, x: f64, y: f64, cfg: &HandleConfig) -> Option<Handle> {
    let p = Vec2f::new(x, y);
    for corner in Corner::ALL {
        if corner_rect(block, corner, cfg).contains(p) {
            return Some(Handle::Corner(corner));
        }
    }

    let left = block.x;
    let right = block.x + block.width;
    let top = block.y;
    let bottom = block.y + block.height;

    if x >= right - cfg.edge_width && x <= right && top < y && y < bottom {
        return Some(Handle::EdgeRight);
    }
    if y >= bottom - cfg.edge_height && y <= bottom && left < x && x < right {
        return Some(Handle::EdgeBottom);
    }
    None
}

/// Drawable rectangles for every handle of `block`. Edge handles are drawn
/// as tabs centered along their edge; their hit area is the full strip.
pub fn handle_rects(block: &Block, cfg: &HandleConfig) -> Vec<(Handle, RectF)> {
    let mut out: Vec<(Handle, RectF)> = Corner::ALL
        .iter()
        .map(|&c| (Handle::Corner(c), corner_rect(block, c, cfg)))
        .collect();
    let (ew, eh) = (cfg.edge_width, cfg.edge_height);
    out.push((
        Handle::EdgeRight,
        RectF::from_min_size(
            Vec2f::new(
                block.x + block.width - ew,
                block.y + (block.height - eh) / 2.0,
            ),
            ew,
            eh,
        ),
    ));
    out.push((
        Handle::EdgeBottom,
        RectF::from_min_size(
            Vec2f::new(
                block.x + (block.width - ew) / 2.0,
                block.y + block.height - eh,
            ),
            ew,
            eh,
        ),
    ));
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Transforms
// ────────────────────────────────────────────────────────────────────────────

/// What a pointer drag does to the selected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeMode {
    Move,
    Width,
    Height,
    Corner,
}

/// Apply a drag step of `(dx, dy)` to `block`.
///
/// Returns `false` when the step was rejected by the minimum size, in which
/// case the block is untouched. Every mode except `Move` keeps
/// `width * height == area`.
pub fn apply_transform(block: &mut Block, mode: ResizeMode, dx: f64, dy: f64) -> bool {
    match mode {
        ResizeMode::Move => {
            block.x += dx;
            block.y += dy;
            true
        }
        ResizeMode::Width => {
            let new_width = block.width + dx;
            if new_width <= MIN_SIZE {
                return false;
            }
            block.width = new_width;
            block.height = block.area / new_width;
            debug!(
                "width resize: {:.1} × {:.1} = {:.1}",
                block.width, block.height, block.area
            );
            true
        }
        ResizeMode::Height => {
            let new_height = block.height + dy;
            if new_height <= MIN_SIZE {
                return false;
            }
            block.height = new_height;
            block.width = block.area / new_height;
            debug!(
                "height resize: {:.1} × {:.1} = {:.1}",
                block.width, block.height, block.area
            );
            true
        }
        ResizeMode::Corner => {
            let new_width = block.width + dx;
            let new_height = block.height + dy;
            if new_width <= MIN_SIZE || new_height <= MIN_SIZE {
                return false;
            }
            // Width wins: the vertical delta only gates the step.
            block.width = new_width;
            block.height = block.area / new_width;
            debug!(
                "corner reshape: {:.1} × {:.1} = {:.1}",
                block.width, block.height, block.area
            );
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Block {
        // 100 x 100 at (0, 0)
        Block::square(0, "A", 10_000.0, 0.0, 0.0)
    }

    #[test]
    fn corner_squares() {
        let b = block();
        let cfg = HandleConfig::default();
        assert_eq!(handle_at(&b, 1.0, 1.0, &cfg), Some(Handle::Corner(Corner::TopLeft)));
        assert_eq!(handle_at(&b, 99.0, 1.0, &cfg), Some(Handle::Corner(Corner::TopRight)));
        assert_eq!(handle_at(&b, 1.0, 99.0, &cfg), Some(Handle::Corner(Corner::BottomLeft)));
        assert_eq!(handle_at(&b, 75.0, 75.0, &cfg), Some(Handle::Corner(Corner::BottomRight)));
    }

    #[test]
    fn corner_beats_edges() {
        let b = block();
        let cfg = HandleConfig::default();
        // (90, 90) lies in the right strip, the bottom strip and the corner.
        assert_eq!(handle_at(&b, 90.0, 90.0, &cfg), Some(Handle::Corner(Corner::BottomRight)));
        // Top-right corner overlaps the right strip.
        assert_eq!(handle_at(&b, 95.0, 10.0, &cfg), Some(Handle::Corner(Corner::TopRight)));
    }

    #[test]
    fn edge_strips() {
        let b = block();
        let cfg = HandleConfig::default();
        assert_eq!(handle_at(&b, 90.0, 50.0, &cfg), Some(Handle::EdgeRight));
        assert_eq!(handle_at(&b, 50.0, 80.0, &cfg), Some(Handle::EdgeBottom));
        assert_eq!(handle_at(&b, 50.0, 50.0, &cfg), None);
        // Outside the block entirely.
        assert_eq!(handle_at(&b, 120.0, 50.0, &cfg), None);
    }

    #[test]
    fn handle_rects_cover_all_handles() {
        let b = block();
        let rects = handle_rects(&b, &HandleConfig::default());
        assert_eq!(rects.len(), 6);
        let (_, right) = rects.iter().find(|(h, _)| *h == Handle::EdgeRight).unwrap();
        assert_eq!(right.min, Vec2f::new(85.0, 37.5));
        assert_eq!(right.max, Vec2f::new(100.0, 62.5));
        let (_, bottom) = rects.iter().find(|(h, _)| *h == Handle::EdgeBottom).unwrap();
        assert_eq!((bottom.width(), bottom.height()), (15.0, 25.0));
    }

    #[test]
    fn width_drag_preserves_area() {
        let mut b = block();
        assert!(apply_transform(&mut b, ResizeMode::Width, 25.0, 40.0));
        assert_eq!(b.width, 125.0);
        assert!((b.height - 80.0).abs() < 1e-9);
        assert!(b.area_error() < 1e-9);
    }

    #[test]
    fn height_drag_preserves_area() {
        let mut b = block();
        assert!(apply_transform(&mut b, ResizeMode::Height, 7.0, -50.0));
        assert_eq!(b.height, 50.0);
        assert!((b.width - 200.0).abs() < 1e-9);
    }

    #[test]
    fn min_size_rejects() {
        let mut b = block();
        let before = b.clone();
        assert!(!apply_transform(&mut b, ResizeMode::Width, -90.0, 0.0));
        assert!(!apply_transform(&mut b, ResizeMode::Height, 0.0, -95.0));
        assert!(!apply_transform(&mut b, ResizeMode::Corner, 10.0, -90.0));
        assert_eq!(b, before);
    }

    #[test]
    fn corner_drag_width_precedence() {
        let mut b = block();
        assert!(apply_transform(&mut b, ResizeMode::Corner, 100.0, 300.0));
        assert_eq!(b.width, 200.0);
        assert!((b.height - 50.0).abs() < 1e-9);
    }

    #[test]
    fn move_only_translates() {
        let mut b = block();
        assert!(apply_transform(&mut b, ResizeMode::Move, -3.5, 12.0));
        assert_eq!((b.x, b.y, b.width, b.height, b.area), (-3.5, 12.0, 100.0, 100.0, 10_000.0));
    }
}
