#![cfg(feature = "egui")]

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

use crate::color::Palette;
use crate::error::FloorplanError;
use crate::interaction::Interaction;
use crate::model::{Floorplan, ShapeType};
use crate::properties::{PropertyDraft, PropertyField};

use super::view::ViewTransform;

/// Notebook tabs of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Floorplan,
    Properties,
    Connections,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Floorplan, Tab::Properties, Tab::Connections];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Floorplan => "Interactive Floorplan",
            Tab::Properties => "Block Properties",
            Tab::Connections => "Connections",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// A modal message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

impl Message {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&FloorplanError> for Message {
    fn from(e: &FloorplanError) -> Self {
        Message::error(e.title(), e.to_string())
    }
}

/// The floorplanner window: loaded floorplan plus all UI state around it.
pub struct FloorplanApp {
    pub plan: Floorplan,
    pub interaction: Interaction,
    pub shape_mode: ShapeType,
    pub tab: Tab,
    pub view: ViewTransform,
    pub palette: Palette,
    /// One property draft per block, same order as `plan.blocks`.
    pub drafts: Vec<PropertyDraft>,
    pub message: Option<Message>,
    pub source_path: Option<Utf8PathBuf>,
    pub show_instructions: bool,
}

impl Default for FloorplanApp {
    fn default() -> Self {
        Self::new(Interaction::new(), Palette::default())
    }
}

impl FloorplanApp {
    pub fn new(interaction: Interaction, palette: Palette) -> Self {
        Self {
            plan: Floorplan::default(),
            interaction,
            shape_mode: ShapeType::Rectangle,
            tab: Tab::Floorplan,
            view: ViewTransform::default(),
            palette,
            drafts: Vec::new(),
            message: None,
            source_path: None,
            show_instructions: true,
        }
    }

    /// Replace the floorplan with the contents of `path`, reporting the
    /// outcome as a modal message. A failed load keeps the current floorplan.
    pub fn load_path(&mut self, path: &Utf8Path) {
        match self.plan.load_file(path) {
            Ok(()) => self.after_load(path),
            Err(e) => {
                warn!("failed to load {}: {}", path, e);
                self.message = Some(Message::from(&e));
            }
        }
    }

    /// Install an already imported floorplan.
    pub fn set_plan(&mut self, plan: Floorplan) {
        self.plan.replace_with(plan);
        self.interaction.clear();
        self.refresh_drafts();
        self.view.fit(&self.plan);
    }

    fn after_load(&mut self, path: &Utf8Path) {
        self.interaction.clear();
        self.refresh_drafts();
        self.view.fit(&self.plan);
        self.source_path = Some(path.to_path_buf());
        self.message = Some(Message::info(
            "Success",
            format!(
                "Loaded {} hardmacros with {} connections",
                self.plan.blocks.len(),
                self.plan.connections.len()
            ),
        ));
    }

    pub fn refresh_drafts(&mut self) {
        self.drafts = self.plan.blocks.iter().map(PropertyDraft::from_block).collect();
    }

    pub fn refresh_draft(&mut self, index: usize) {
        if let (Some(block), Some(draft)) =
            (self.plan.blocks.get(index), self.drafts.get_mut(index))
        {
            *draft = PropertyDraft::from_block(block);
        }
    }

    /// Apply one field (or all fields with `None`) of a block's draft.
    pub fn apply_draft(&mut self, index: usize, field: Option<PropertyField>) {
        let (Some(block), Some(draft)) = (self.plan.blocks.get_mut(index), self.drafts.get(index))
        else {
            return;
        };
        let result = match field {
            Some(f) => draft.apply_field(block, f),
            None => draft.apply_all(block),
        };
        match result {
            Ok(()) => info!("updated properties of {}", block.name),
            Err(e) => {
                warn!("property update rejected: {}", e);
                self.message = Some(Message::from(&e));
            }
        }
    }

    pub fn reset_view(&mut self) {
        self.view.fit(&self.plan);
    }

    pub fn status_line(&self) -> String {
        self.plan.summary()
    }
}

impl eframe::App for FloorplanApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(text: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("m.csv")).unwrap();
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(text.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn load_success_sets_message_and_drafts() {
        let (_dir, path) = write_csv(",A,B,C\nA,4,0,2\nB,0,9,0\nC,2,0,16\n");
        let mut app = FloorplanApp::default();
        app.load_path(&path);
        assert_eq!(app.plan.blocks.len(), 3);
        assert_eq!(app.drafts.len(), 3);
        assert_eq!(app.status_line(), "Blocks: 3 | Connections: 1");
        let msg = app.message.unwrap();
        assert_eq!(msg.kind, MessageKind::Info);
        assert_eq!(msg.body, "Loaded 3 hardmacros with 1 connections");
    }

    #[test]
    fn load_failure_keeps_plan() {
        let (_dir, good) = write_csv(",A\nA,100\n");
        let mut app = FloorplanApp::default();
        app.load_path(&good);
        let before = app.plan.clone();

        let (_dir2, bad) = write_csv(",A,B\nA,1,2\nB,3,4\nC,5,6\n");
        app.load_path(&bad);
        assert_eq!(app.plan, before);
        assert_eq!(app.message.unwrap().kind, MessageKind::Error);
        assert_eq!(app.source_path.as_deref(), Some(good.as_path()));
    }

    #[test]
    fn bad_draft_reports_error() {
        let mut app = FloorplanApp::default();
        app.set_plan(crate::importer::import_str(",A\nA,100\n").unwrap());
        app.drafts[0].width = "wide".into();
        app.apply_draft(0, Some(PropertyField::Width));
        assert_eq!(app.plan.blocks[0].width, 10.0);
        assert_eq!(app.message.as_ref().map(|m| m.kind), Some(MessageKind::Error));

        app.drafts[0].x = "7".into();
        app.apply_draft(0, Some(PropertyField::X));
        assert_eq!(app.plan.blocks[0].x, 7.0);
    }
}
