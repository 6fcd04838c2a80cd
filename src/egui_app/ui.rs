#![cfg(feature = "egui")]

use camino::Utf8PathBuf;
use eframe::egui::{self, Align2, Color32, RichText};

use crate::model::ShapeType;
use crate::properties::PropertyField;

use super::canvas::show_canvas;
use super::state::{FloorplanApp, Message, MessageKind, Tab};

const INSTRUCTIONS: &str = "\
• Click and drag blocks to move them
• Drag RED corner handles to reshape aspect ratio (area stays constant)
• Drag TEAL edge handles to change width/height (area stays constant)
• Hover over handles for visual feedback
• Use Shape Mode to switch between rectangle and L-shape
• Use the Block Properties tab for precise editing";

/// Render one frame of the floorplanner.
pub fn update(state: &mut FloorplanApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("floorplan_controls").show(ctx, |ui| {
        ui.add_space(4.0);
        controls(state, ui);
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut state.tab, tab, tab.title());
            }
        });
        ui.add_space(2.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| match state.tab {
        Tab::Floorplan => floorplan_tab(state, ui),
        Tab::Properties => properties_tab(state, ui),
        Tab::Connections => connections_tab(state, ui),
    });

    show_message(state, ctx);
}

fn controls(state: &mut FloorplanApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("Upload CSV").clicked() {
            upload_csv(state);
        }
        ui.separator();
        ui.checkbox(&mut state.interaction.enabled, "Interactive Mode");
        ui.separator();
        ui.label("Shape Mode:");
        ui.radio_value(&mut state.shape_mode, ShapeType::Rectangle, ShapeType::Rectangle.label());
        ui.radio_value(&mut state.shape_mode, ShapeType::LShape, ShapeType::LShape.label());
        ui.separator();
        if ui.button("Reset View").clicked() {
            state.reset_view();
        }
        ui.separator();
        ui.label(state.status_line());
        if let Some(path) = &state.source_path {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(path.as_str());
            });
        }
    });
}

fn upload_csv(state: &mut FloorplanApp) {
    let picked = rfd::FileDialog::new()
        .set_title("Select CSV file")
        .add_filter("CSV files", &["csv"])
        .add_filter("TSV files", &["tsv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();
    let Some(path) = picked else { return };
    match Utf8PathBuf::from_path_buf(path) {
        Ok(path) => state.load_path(&path),
        Err(path) => {
            state.message = Some(Message::error(
                "Failed to load CSV",
                format!("Non-UTF8 path: {}", path.display()),
            ));
        }
    }
}

fn floorplan_tab(state: &mut FloorplanApp, ui: &mut egui::Ui) {
    egui::CollapsingHeader::new("Instructions")
        .default_open(state.show_instructions)
        .show(ui, |ui| {
            ui.label(INSTRUCTIONS);
        });
    if state.shape_mode == ShapeType::LShape {
        ui.colored_label(
            Color32::from_rgb(200, 120, 0),
            "L-shape editing is not available yet; blocks stay rectangular.",
        );
    }
    ui.separator();
    show_canvas(state, ui);
}

fn properties_tab(state: &mut FloorplanApp, ui: &mut egui::Ui) {
    if state.plan.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| ui.label("No blocks loaded"));
        return;
    }
    if state.drafts.len() != state.plan.blocks.len() {
        state.refresh_drafts();
    }

    let mut pending: Option<(usize, Option<PropertyField>)> = None;
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for (i, block) in state.plan.blocks.iter().enumerate() {
            let selected = state.interaction.selected() == Some(i);
            let title = format!("Block {}: {}", i + 1, block.name);
            let title = if selected { RichText::new(title).strong() } else { RichText::new(title) };
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(title);
                egui::Grid::new(("block_props", i)).num_columns(3).show(ui, |ui| {
                    let draft = &mut state.drafts[i];
                    for field in PropertyField::ALL {
                        ui.label(field.label());
                        ui.add(
                            egui::TextEdit::singleline(draft.text_mut(field))
                                .desired_width(120.0),
                        );
                        if ui.small_button("Set").clicked() {
                            pending = Some((i, Some(field)));
                        }
                        ui.end_row();
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Update").clicked() {
                        pending = Some((i, None));
                    }
                    if ui.button("Select").clicked() {
                        state.interaction.select(Some(i));
                    }
                    ui.weak(format!("aspect {:.2}", block.aspect_ratio()));
                    if block.area_error() > 1e-6 * block.area.max(1.0) {
                        ui.colored_label(
                            Color32::from_rgb(200, 120, 0),
                            format!("width × height = {:.1}", block.width * block.height),
                        );
                    }
                });
            });
            ui.add_space(4.0);
        }
    });

    if let Some((index, field)) = pending {
        state.apply_draft(index, field);
    }
}

fn connections_tab(state: &mut FloorplanApp, ui: &mut egui::Ui) {
    if state.plan.connections.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| ui.label("No connections loaded"));
        return;
    }
    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for conn in &state.plan.connections {
            ui.label(RichText::new(conn.title()).strong());
            ui.label(format!("Connections: {}", conn.weight_label()));
            ui.separator();
        }
    });
}

fn show_message(state: &mut FloorplanApp, ctx: &egui::Context) {
    let Some(msg) = &state.message else { return };
    let mut close = false;
    egui::Window::new(msg.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let text = RichText::new(msg.body.as_str());
            match msg.kind {
                MessageKind::Info => ui.label(text),
                MessageKind::Error => ui.colored_label(Color32::RED, text),
            };
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });
    if close {
        state.message = None;
    }
}
