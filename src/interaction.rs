//! Pointer-driven selection and drag state for the floorplan canvas.
//!
//! [`Interaction`] is the whole interactive geometry model: the UI layer feeds
//! it pointer positions in model coordinates and redraws whenever a call
//! returns `true`. It never touches widgets, so it is tested headless.
//!
//! # Usage
//!
//! ```rust
//! use macroplan::importer::import_str;
//! use macroplan::interaction::Interaction;
//!
//! let mut plan = import_str(",A\nA,10000\n").unwrap();
//! let mut ia = Interaction::new();
//! ia.press(&plan, 150.0, 150.0);
//! ia.pointer_moved(&mut plan, 160.0, 155.0);
//! ia.release();
//! assert_eq!((plan.blocks[0].x, plan.blocks[0].y), (110.0, 105.0));
//! ```

use crate::geometry::{self, Handle, HandleConfig, ResizeMode, Vec2f};
use crate::model::Floorplan;

/// Selection, drag mode and hover state over a single selected block.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// Interactive-mode toggle. When off, pointer input is ignored.
    pub enabled: bool,
    pub handles: HandleConfig,
    selected: Option<usize>,
    mode: Option<ResizeMode>,
    last_pos: Option<Vec2f>,
    hover: Option<Handle>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self::with_handles(HandleConfig::default())
    }

    pub fn with_handles(handles: HandleConfig) -> Self {
        Self {
            enabled: true,
            handles,
            selected: None,
            mode: None,
            last_pos: None,
            hover: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn mode(&self) -> Option<ResizeMode> {
        self.mode
    }

    pub fn hover(&self) -> Option<Handle> {
        self.hover
    }

    pub fn is_dragging(&self) -> bool {
        self.mode.is_some()
    }

    /// Select a block programmatically (e.g. from the property list).
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.mode = None;
        self.last_pos = None;
        self.hover = None;
    }

    /// Forget selection and any drag in progress.
    pub fn clear(&mut self) {
        self.select(None);
    }

    /// Pointer button pressed at `(x, y)`.
    ///
    /// Selects the first block under the pointer and starts a drag whose mode
    /// depends on which handle (if any) was hit. Pressing empty space clears
    /// the selection.
    pub fn press(&mut self, plan: &Floorplan, x: f64, y: f64) -> bool {
        if !self.enabled || plan.is_empty() {
            return false;
        }
        match plan.block_at(x, y) {
            Some(index) => {
                self.selected = Some(index);
                self.last_pos = Some(Vec2f::new(x, y));
                let handle = geometry::handle_at(&plan.blocks[index], x, y, &self.handles);
                self.mode = Some(handle.map_or(ResizeMode::Move, Handle::resize_mode));
            }
            None => {
                self.selected = None;
                self.mode = None;
                self.last_pos = None;
            }
        }
        true
    }

    /// Recompute which handle of the selected block the pointer is over.
    /// Returns `true` when that changed.
    pub fn update_hover(&mut self, plan: &Floorplan, x: f64, y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let hover = self
            .selected
            .and_then(|i| plan.block(i))
            .and_then(|b| geometry::handle_at(b, x, y, &self.handles));
        if hover != self.hover {
            self.hover = hover;
            true
        } else {
            false
        }
    }

    /// Continue the current drag to `(x, y)`.
    ///
    /// The delta is taken from the previous sample, which is advanced even
    /// when the resize was rejected by the minimum size.
    pub fn drag_to(&mut self, plan: &mut Floorplan, x: f64, y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let (Some(mode), Some(index), Some(last)) = (self.mode, self.selected, self.last_pos)
        else {
            return false;
        };
        let Some(block) = plan.block_mut(index) else {
            return false;
        };
        geometry::apply_transform(block, mode, x - last.x, y - last.y);
        self.last_pos = Some(Vec2f::new(x, y));
        true
    }

    /// Pointer moved: update hover, then continue any drag.
    pub fn pointer_moved(&mut self, plan: &mut Floorplan, x: f64, y: f64) -> bool {
        let hovered = self.update_hover(plan, x, y);
        let dragged = self.drag_to(plan, x, y);
        hovered || dragged
    }

    /// Pointer button released. The selection stays.
    pub fn release(&mut self) {
        self.mode = None;
        self.last_pos = None;
        self.hover = None;
    }
}
