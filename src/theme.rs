//! Color theme for the plot window and color-name parsing.

use eframe::egui::{Color32, Context, Stroke, Visuals};

use crate::error::TimePlotError;

/// Four-color theme.
///
/// `fg1` is used for lines, text and axes, `fg2` for the grid, `bg1` for the
/// plot area and `bg2` for the window around it.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTheme {
    pub fg1: Color32,
    pub fg2: Color32,
    pub bg1: Color32,
    pub bg2: Color32,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            fg1: Color32::from_rgb(0, 0, 139),
            fg2: Color32::from_rgb(173, 216, 230),
            bg1: Color32::WHITE,
            bg2: Color32::WHITE,
        }
    }
}

impl ColorTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let mut v = Visuals::light();
        v.override_text_color = Some(self.fg1);
        v.panel_fill = self.bg2;
        v.window_fill = self.bg2;
        v.extreme_bg_color = self.bg1;
        v.faint_bg_color = self.bg1;
        v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.fg1);
        v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.fg1);
        ctx.set_visuals(v);
    }
}

/// Named colors accepted by [`parse_color`].
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("darkblue", Color32::from_rgb(0, 0, 139)),
    ("lightblue", Color32::from_rgb(173, 216, 230)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
    ("lightgray", Color32::from_rgb(211, 211, 211)),
    ("darkgreen", Color32::from_rgb(0, 100, 0)),
    ("darkred", Color32::from_rgb(139, 0, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
];

/// Parse a color name (`"darkblue"`) or hex code (`"#rrggbb"`, `"#rrggbbaa"`).
pub fn parse_color(s: &str) -> Result<Color32, TimePlotError> {
    let key = s.trim().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| TimePlotError::UnknownColor(s.to_string()));
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, c)| *c)
        .ok_or_else(|| TimePlotError::UnknownColor(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}

/// Hex representation used when writing settings files.
pub fn color_to_hex(c: Color32) -> String {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
