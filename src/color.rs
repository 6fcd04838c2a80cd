/// Parse a color given as `#rrggbb`, an `[r, g, b]` array of 0..1 floats,
/// or one of a few named colors, into an RGB triple.
pub fn parse_color(val: &str) -> Option<(u8, u8, u8)> {
    let val = val.trim();
    if val.starts_with('[') && val.ends_with(']') {
        // e.g. [1.0, 0.411765, 0.380392]
        let inner = &val[1..val.len() - 1];
        let parts: Vec<&str> = inner.split(',').map(|s| s.trim()).collect();
        if parts.len() != 3 {
            return None;
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let f = part.parse::<f32>().ok()?;
            *slot = (f.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        return Some((rgb[0], rgb[1], rgb[2]));
    }
    if let Some(hex) = val.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some((r, g, b));
    }
    match val.to_ascii_lowercase().as_str() {
        "white" => Some((255, 255, 255)),
        "black" => Some((0, 0, 0)),
        "red" => Some((255, 0, 0)),
        "blue" => Some((0, 0, 255)),
        "yellow" => Some((255, 255, 0)),
        "lightblue" => Some((173, 216, 230)),
        "lightcoral" => Some((240, 128, 128)),
        "teal" => Some((0, 128, 128)),
        "gray" | "grey" => Some((128, 128, 128)),
        "lightgray" | "lightgrey" => Some((211, 211, 211)),
        _ => None,
    }
}

/// Colors used to paint blocks and their handles, as RGB triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub corner: (u8, u8, u8),
    pub edge: (u8, u8, u8),
    pub hover: (u8, u8, u8),
    /// Fill of the selected block.
    pub selected_fill: (u8, u8, u8),
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            corner: (0xFF, 0x6B, 0x6B),
            edge: (0x4E, 0xCD, 0xC4),
            hover: (0xFF, 0xE6, 0x6D),
            selected_fill: (240, 128, 128),
        }
    }
}
