pub mod assessment;
pub mod reference;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use fitrank::presentation::{PerformanceLevel, StrengthShade};

pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Applies `color` only when colour output is enabled.
pub fn paint(cell: Cell, color: Color, enabled: bool) -> Cell {
    if enabled {
        cell.fg(color)
    } else {
        cell
    }
}

/// Gauge colour of a level, taken from its hex code.
pub fn level_color(level: PerformanceLevel) -> Color {
    hex_to_rgb(level.color()).unwrap_or(Color::Reset)
}

pub fn shade_color(shade: StrengthShade) -> Color {
    match shade {
        StrengthShade::Peak => Color::Green,
        StrengthShade::Strong => Color::DarkGreen,
        StrengthShade::Solid => Color::Yellow,
        StrengthShade::Developing => Color::DarkYellow,
        StrengthShade::Low => Color::Red,
    }
}

fn hex_to_rgb(hex: &str) -> Option<Color> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colors_parse() {
        assert_eq!(
            level_color(PerformanceLevel::Elite),
            Color::Rgb {
                r: 0x4C,
                g: 0xAF,
                b: 0x50
            }
        );
        assert_eq!(hex_to_rgb("4CAF50"), None);
        assert_eq!(hex_to_rgb("#ZZZZZZ"), None);
    }
}
