#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, PointerButton, Pos2, Rect, Sense, Shape, Stroke};

use crate::geometry::{self, Handle, Vec2f};
use crate::model::Block;

use super::state::FloorplanApp;

/// Spacing of the background grid, in model units.
const GRID_STEP: f64 = 100.0;

fn rgb((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn with_alpha(c: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (alpha * 255.0) as u8)
}

/// Draw the floorplan and feed pointer input into the interaction model.
pub fn show_canvas(state: &mut FloorplanApp, ui: &mut egui::Ui) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let canvas = response.rect;
    painter.rect_filled(canvas, 0.0, Color32::WHITE);

    if state.plan.is_empty() {
        painter.text(
            canvas.center(),
            Align2::CENTER_CENTER,
            "Upload CSV to see floorplan",
            FontId::proportional(16.0),
            Color32::DARK_GRAY,
        );
        return;
    }

    handle_input(state, ui, &response, canvas);

    let painter = painter.with_clip_rect(canvas);
    draw_grid(state, &painter, canvas);
    draw_blocks(state, &painter, canvas);
    draw_connections(state, &painter, canvas);
}

fn handle_input(state: &mut FloorplanApp, ui: &egui::Ui, response: &egui::Response, canvas: Rect) {
    // Zoom with scroll
    let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_y.abs() > 0.0 {
        if let Some(cursor) = response.hover_pos() {
            let factor = (1.0 + scroll_y * 0.001).max(0.1);
            state.view.zoom_about(canvas, cursor, factor);
        }
    }

    let (pressed, released, latest) = ui.input(|i| {
        (
            i.pointer.button_pressed(PointerButton::Primary),
            i.pointer.button_released(PointerButton::Primary),
            i.pointer.latest_pos(),
        )
    });

    if pressed {
        if let Some(pos) = response.hover_pos() {
            let p = state.view.from_screen(canvas, pos);
            state.interaction.press(&state.plan, p.x, p.y);
        }
    }

    if let Some(pos) = latest {
        if response.hovered() || state.interaction.is_dragging() {
            let p = state.view.from_screen(canvas, pos);
            state.interaction.pointer_moved(&mut state.plan, p.x, p.y);
        }
    }

    if released && state.interaction.is_dragging() {
        state.interaction.release();
        if let Some(index) = state.interaction.selected() {
            state.refresh_draft(index);
        }
    }
}

fn draw_grid(state: &FloorplanApp, painter: &egui::Painter, canvas: Rect) {
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 0, 0, 25));
    let min = state.view.from_screen(canvas, canvas.min);
    let max = state.view.from_screen(canvas, canvas.max);
    let count = ((max.x - min.x) / GRID_STEP).max((max.y - min.y) / GRID_STEP);
    if !(0.0..=400.0).contains(&count) {
        return;
    }
    let mut x = (min.x / GRID_STEP).floor() * GRID_STEP;
    while x <= max.x {
        let a = state.view.to_screen(canvas, Vec2f::new(x, min.y));
        painter.line_segment(
            [Pos2::new(a.x, canvas.top()), Pos2::new(a.x, canvas.bottom())],
            stroke,
        );
        x += GRID_STEP;
    }
    let mut y = (min.y / GRID_STEP).floor() * GRID_STEP;
    while y <= max.y {
        let a = state.view.to_screen(canvas, Vec2f::new(min.x, y));
        painter.line_segment(
            [Pos2::new(canvas.left(), a.y), Pos2::new(canvas.right(), a.y)],
            stroke,
        );
        y += GRID_STEP;
    }
}

fn draw_blocks(state: &FloorplanApp, painter: &egui::Painter, canvas: Rect) {
    let selected = state.interaction.selected();
    for (i, block) in state.plan.blocks.iter().enumerate() {
        let r = state.view.rect_to_screen(canvas, block.rect());
        let is_selected = selected == Some(i);
        let (fill, edge, width) = if is_selected {
            (rgb(state.palette.selected_fill), Color32::RED, 3.0)
        } else {
            (rgb((173, 216, 230)), Color32::BLUE, 2.0)
        };
        painter.rect_filled(r, 0.0, with_alpha(fill, 0.7));
        painter.rect_stroke(r, 0.0, Stroke::new(width, edge), egui::StrokeKind::Inside);

        if is_selected && state.interaction.enabled {
            draw_handles(state, painter, canvas, block);
        }

        painter.text(
            r.center(),
            Align2::CENTER_CENTER,
            block.label(),
            FontId::proportional(11.0),
            Color32::BLACK,
        );
    }
}

fn draw_handles(state: &FloorplanApp, painter: &egui::Painter, canvas: Rect, block: &Block) {
    let hover = state.interaction.hover();
    for (handle, rect) in geometry::handle_rects(block, &state.interaction.handles) {
        let base = match handle {
            Handle::Corner(_) => state.palette.corner,
            Handle::EdgeRight | Handle::EdgeBottom => state.palette.edge,
        };
        let color = if hover == Some(handle) { state.palette.hover } else { base };
        let r = state.view.rect_to_screen(canvas, rect);
        painter.rect_filled(r, 0.0, with_alpha(rgb(color), 0.9));
        painter.rect_stroke(r, 0.0, Stroke::new(2.0, Color32::BLACK), egui::StrokeKind::Inside);
    }
}

fn draw_connections(state: &FloorplanApp, painter: &egui::Painter, canvas: Rect) {
    let stroke = Stroke::new(1.0, with_alpha(Color32::RED, 0.7));
    let font = FontId::proportional(11.0);
    for conn in &state.plan.connections {
        let Some((a, b)) = state.plan.connection_segment(conn) else { continue };
        let pa = state.view.to_screen(canvas, a);
        let pb = state.view.to_screen(canvas, b);
        painter.extend(Shape::dashed_line(&[pa, pb], stroke, 6.0, 4.0));

        let mid = state.view.to_screen(canvas, a.midpoint(b));
        let galley = painter.layout_no_wrap(conn.weight_label(), font.clone(), Color32::BLACK);
        let bg = Rect::from_center_size(mid, galley.size()).expand(4.0);
        painter.rect_filled(bg, 4.0, with_alpha(Color32::WHITE, 0.8));
        painter.galley(bg.min + egui::vec2(4.0, 4.0), galley, Color32::BLACK);
    }
}
