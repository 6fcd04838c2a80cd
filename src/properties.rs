//! Text drafts for the per-block property editor.
//!
//! Each field is edited as free text and only parsed when applied. There is
//! no cross-validation: area, width and height may be set to values that do
//! not multiply out.

use crate::error::{FloorplanError, Result};
use crate::model::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    Area,
    Width,
    Height,
    X,
    Y,
}

impl PropertyField {
    pub const ALL: [PropertyField; 5] = [
        PropertyField::Area,
        PropertyField::Width,
        PropertyField::Height,
        PropertyField::X,
        PropertyField::Y,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyField::Area => "Area (μm²):",
            PropertyField::Width => "Width (μm):",
            PropertyField::Height => "Height (μm):",
            PropertyField::X => "X Position:",
            PropertyField::Y => "Y Position:",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PropertyField::Area => "area",
            PropertyField::Width => "width",
            PropertyField::Height => "height",
            PropertyField::X => "x",
            PropertyField::Y => "y",
        }
    }

    pub fn get(self, block: &Block) -> f64 {
        match self {
            PropertyField::Area => block.area,
            PropertyField::Width => block.width,
            PropertyField::Height => block.height,
            PropertyField::X => block.x,
            PropertyField::Y => block.y,
        }
    }

    fn slot(self, block: &mut Block) -> &mut f64 {
        match self {
            PropertyField::Area => &mut block.area,
            PropertyField::Width => &mut block.width,
            PropertyField::Height => &mut block.height,
            PropertyField::X => &mut block.x,
            PropertyField::Y => &mut block.y,
        }
    }

    /// Parse `text` as this field's value.
    pub fn parse(self, text: &str) -> Result<f64> {
        let t = text.trim();
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(FloorplanError::InputFormat {
                field: self.name(),
                value: text.to_string(),
            }),
        }
    }
}

/// Parse `text` and store it in `field` of `block`. On error the block is
/// left unchanged.
pub fn apply_field(block: &mut Block, field: PropertyField, text: &str) -> Result<()> {
    let value = field.parse(text)?;
    *field.slot(block) = value;
    Ok(())
}

/// The editable text of one block's properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyDraft {
    pub area: String,
    pub width: String,
    pub height: String,
    pub x: String,
    pub y: String,
}

impl PropertyDraft {
    /// Draft pre-filled with the block's values, truncated to integers.
    pub fn from_block(block: &Block) -> Self {
        let fmt = |v: f64| format!("{}", v as i64);
        Self {
            area: fmt(block.area),
            width: fmt(block.width),
            height: fmt(block.height),
            x: fmt(block.x),
            y: fmt(block.y),
        }
    }

    pub fn text(&self, field: PropertyField) -> &str {
        match field {
            PropertyField::Area => &self.area,
            PropertyField::Width => &self.width,
            PropertyField::Height => &self.height,
            PropertyField::X => &self.x,
            PropertyField::Y => &self.y,
        }
    }

    pub fn text_mut(&mut self, field: PropertyField) -> &mut String {
        match field {
            PropertyField::Area => &mut self.area,
            PropertyField::Width => &mut self.width,
            PropertyField::Height => &mut self.height,
            PropertyField::X => &mut self.x,
            PropertyField::Y => &mut self.y,
        }
    }

    /// Apply a single field.
    pub fn apply_field(&self, block: &mut Block, field: PropertyField) -> Result<()> {
        apply_field(block, field, self.text(field))
    }

    /// Apply all five fields, or none of them if any fails to parse.
    pub fn apply_all(&self, block: &mut Block) -> Result<()> {
        let mut values = [0.0; 5];
        for (slot, field) in values.iter_mut().zip(PropertyField::ALL) {
            *slot = field.parse(self.text(field))?;
        }
        for (value, field) in values.into_iter().zip(PropertyField::ALL) {
            *field.slot(block) = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Block {
        Block::square(0, "A", 400.0, 100.5, 300.9)
    }

    #[test]
    fn draft_truncates() {
        let d = PropertyDraft::from_block(&block());
        assert_eq!(d.area, "400");
        assert_eq!(d.width, "20");
        assert_eq!(d.x, "100");
        assert_eq!(d.y, "300");
    }

    #[test]
    fn apply_field_without_cross_validation() {
        let mut b = block();
        apply_field(&mut b, PropertyField::Width, " 50 ").unwrap();
        assert_eq!(b.width, 50.0);
        assert_eq!(b.height, 20.0);
        assert_eq!(b.area, 400.0);
    }

    #[test]
    fn bad_field_is_discarded() {
        let mut b = block();
        let err = apply_field(&mut b, PropertyField::Height, "tall").unwrap_err();
        assert!(matches!(err, FloorplanError::InputFormat { field: "height", .. }));
        assert_eq!(b, block());
    }

    #[test]
    fn apply_all_is_all_or_nothing() {
        let mut b = block();
        let mut d = PropertyDraft::from_block(&b);
        d.area = "900".into();
        d.y = "oops".into();
        assert!(d.apply_all(&mut b).is_err());
        assert_eq!(b, block());

        d.y = "-5".into();
        d.apply_all(&mut b).unwrap();
        assert_eq!((b.area, b.width, b.x, b.y), (900.0, 20.0, 100.0, -5.0));
    }
}
