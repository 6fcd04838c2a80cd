use serde::{Deserialize, Serialize};

use crate::geometry::{RectF, Vec2f};

// ────────────────────────────────────────────────────────────────────────────
// Block
// ────────────────────────────────────────────────────────────────────────────

/// Outline of a block. Only rectangles have geometry; `LShape` is reserved
/// for the shape-mode selector and behaves like a rectangle everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Rectangle,
    LShape,
}

impl ShapeType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::LShape => "L-Shape",
        }
    }
}

/// A hardmacro placed on the floorplan.
///
/// `x`/`y` is the min corner (left, top). `area` is the value interactive
/// resizes hold constant; manual property edits may leave
/// `width * height != area`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: f64,
    #[serde(default)]
    pub shape: ShapeType,
}

impl Block {
    /// A square block of the given area at `(x, y)`.
    pub fn square(id: usize, name: impl Into<String>, area: f64, x: f64, y: f64) -> Self {
        let side = area.sqrt();
        Self {
            id,
            name: name.into(),
            x,
            y,
            width: side,
            height: side,
            area,
            shape: ShapeType::Rectangle,
        }
    }

    pub fn rect(&self) -> RectF {
        RectF::from_min_max(
            Vec2f::new(self.x, self.y),
            Vec2f::new(self.x + self.width, self.y + self.height),
        )
    }

    pub fn center(&self) -> Vec2f {
        self.rect().center()
    }

    /// Closed bounding-box containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.rect().contains(Vec2f::new(x, y))
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            f64::INFINITY
        } else {
            self.width / self.height
        }
    }

    /// How far the current dimensions are from the stored area.
    pub fn area_error(&self) -> f64 {
        (self.width * self.height - self.area).abs()
    }

    /// Multi-line canvas label: name, area and dimensions (truncated).
    pub fn label(&self) -> String {
        format!(
            "{}\n{} μm²\n{}×{}",
            self.name,
            self.area as i64,
            self.width as i64,
            self.height as i64
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Connection
// ────────────────────────────────────────────────────────────────────────────

/// Weighted link between two blocks. `from < to` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub from_name: String,
    pub to_name: String,
    pub weight: f64,
}

impl Connection {
    pub fn title(&self) -> String {
        format!("{} ↔ {}", self.from_name, self.to_name)
    }

    /// The weight as shown on the canvas: integral weights without a fraction.
    pub fn weight_label(&self) -> String {
        if self.weight.fract() == 0.0 && self.weight.abs() < 1e15 {
            format!("{}", self.weight as i64)
        } else {
            format!("{}", self.weight)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Floorplan
// ────────────────────────────────────────────────────────────────────────────

/// All blocks and connections produced by the most recent import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Floorplan {
    pub blocks: Vec<Block>,
    pub connections: Vec<Connection>,
}

impl Floorplan {
    pub fn new(blocks: Vec<Block>, connections: Vec<Connection>) -> Self {
        Self {
            blocks,
            connections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Replace both lists with the contents of `other`. No merging.
    pub fn replace_with(&mut self, other: Floorplan) {
        *self = other;
    }

    /// Index of the first block (in list order) containing the point.
    pub fn block_at(&self, x: f64, y: f64) -> Option<usize> {
        self.blocks.iter().position(|b| b.contains(x, y))
    }

    pub fn block(&self, id: usize) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn block_mut(&mut self, id: usize) -> Option<&mut Block> {
        self.blocks.get_mut(id)
    }

    /// Centers of the two endpoints of `conn`, if both blocks exist.
    pub fn connection_segment(&self, conn: &Connection) -> Option<(Vec2f, Vec2f)> {
        let a = self.block(conn.from)?;
        let b = self.block(conn.to)?;
        Some((a.center(), b.center()))
    }

    /// Union of all block rectangles.
    pub fn bounds(&self) -> Option<RectF> {
        let mut it = self.blocks.iter().map(Block::rect);
        let first = it.next()?;
        Some(it.fold(first, RectF::union))
    }

    /// Status line text.
    pub fn summary(&self) -> String {
        if self.blocks.is_empty() {
            "No data loaded".to_string()
        } else {
            format!(
                "Blocks: {} | Connections: {}",
                self.blocks.len(),
                self.connections.len()
            )
        }
    }
}
