//! Interactive hardmacro floorplanner (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --bin macroplan-gui -- [matrix.csv] \
//!       [--corner-size 25] [--hover-color "#FFE66D"]

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;
use macroplan::color::{Palette, parse_color};
use macroplan::egui_app::FloorplanApp;
use macroplan::geometry::HandleConfig;
use macroplan::interaction::Interaction;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out hardmacro blocks interactively", long_about = None)]
struct Args {
    /// Matrix file to load at startup
    #[arg(value_name = "MATRIX_FILE")]
    file: Option<Utf8PathBuf>,

    /// Side of the square corner handles, in model units
    #[arg(long, default_value_t = 25.0)]
    corner_size: f64,

    /// Width of the right edge handle strip
    #[arg(long, default_value_t = 15.0)]
    edge_width: f64,

    /// Height of the bottom edge handle strip
    #[arg(long, default_value_t = 25.0)]
    edge_height: f64,

    /// Corner handle color (#rrggbb, [r,g,b] or a name)
    #[arg(long, default_value = "#FF6B6B")]
    corner_color: String,

    /// Edge handle color
    #[arg(long, default_value = "#4ECDC4")]
    edge_color: String,

    /// Hovered handle color
    #[arg(long, default_value = "#FFE66D")]
    hover_color: String,
}

fn color_arg(name: &str, val: &str) -> Result<(u8, u8, u8)> {
    parse_color(val).ok_or_else(|| anyhow!("invalid --{name} value {val:?}"))
}

fn main() -> Result<()> {
    macroplan::logging::init();
    let args = Args::parse();

    let handles = HandleConfig {
        corner_size: args.corner_size,
        edge_width: args.edge_width,
        edge_height: args.edge_height,
    };
    let palette = Palette {
        corner: color_arg("corner-color", &args.corner_color)?,
        edge: color_arg("edge-color", &args.edge_color)?,
        hover: color_arg("hover-color", &args.hover_color)?,
        ..Palette::default()
    };

    let mut app = FloorplanApp::new(Interaction::with_handles(handles), palette);
    if let Some(path) = &args.file {
        app.load_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Floorplanning Tool"),
        ..Default::default()
    };
    eframe::run_native(
        "macroplan floorplanner",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("{e}"))?;
    Ok(())
}
