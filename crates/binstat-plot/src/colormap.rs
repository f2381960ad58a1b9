//! Colormaps for heatmap cells
//!
//! Sequential maps only: `ylorrd` (heatmap default), `viridis` and `greys`.
//! All colormaps interpolate between evenly spaced stops and can be reversed.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Colormap used by heatmaps unless configured otherwise
pub const DEFAULT_HEATMAP_COLORMAP: &str = "ylorrd";

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(hex.get(range)?, 16)
                .ok()
                .map(|v| f32::from(v) / 255.0)
        };
        Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

/// Maps a position in `[0, 1]` to a color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colormap {
    pub name: String,
    stops: Vec<Color>,
    reversed: bool,
}

impl Colormap {
    /// Colormap from evenly spaced colors
    pub fn from_colors(name: impl Into<String>, stops: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            stops,
            reversed: false,
        }
    }

    /// Colormap from hex strings; invalid entries are skipped
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Self {
        Self::from_colors(name, hex.iter().filter_map(|h| Color::from_hex(h)).collect())
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Sample at `t`, clamped to `[0, 1]`
    pub fn sample(&self, t: f32) -> Color {
        let mut t = t.clamp(0.0, 1.0);
        if self.reversed {
            t = 1.0 - t;
        }

        match self.stops.len() {
            0 => Color::BLACK,
            1 => self.stops[0],
            n => {
                let pos = t * (n - 1) as f32;
                let i = (pos.floor() as usize).min(n - 2);
                Color::lerp(&self.stops[i], &self.stops[i + 1], pos - i as f32)
            }
        }
    }
}

/// Yellow-orange-red sequential map
pub fn ylorrd() -> Colormap {
    Colormap::from_hex(
        "ylorrd",
        &[
            "#FFFFCC", "#FFEDA0", "#FED976", "#FEB24C", "#FD8D3C", "#FC4E2A", "#E31A1C",
            "#BD0026", "#800026",
        ],
    )
}

/// Perceptually uniform, colorblind-safe map
pub fn viridis() -> Colormap {
    Colormap::from_colors(
        "viridis",
        vec![
            Color::rgb(0.267, 0.005, 0.329),
            Color::rgb(0.282, 0.141, 0.458),
            Color::rgb(0.254, 0.265, 0.530),
            Color::rgb(0.207, 0.372, 0.553),
            Color::rgb(0.164, 0.471, 0.558),
            Color::rgb(0.128, 0.567, 0.551),
            Color::rgb(0.135, 0.659, 0.518),
            Color::rgb(0.267, 0.749, 0.441),
            Color::rgb(0.478, 0.821, 0.318),
            Color::rgb(0.741, 0.873, 0.150),
            Color::rgb(0.993, 0.906, 0.144),
        ],
    )
}

pub fn greys() -> Colormap {
    Colormap::from_hex(
        "greys",
        &[
            "#FFFFFF", "#F0F0F0", "#D9D9D9", "#BDBDBD", "#969696", "#737373", "#525252",
            "#252525", "#000000",
        ],
    )
}

pub fn builtin_colormap_names() -> Vec<&'static str> {
    vec!["ylorrd", "viridis", "greys"]
}

/// Built-in colormap by name; a `_r` suffix reverses it
pub fn get_colormap(name: &str) -> PlotResult<Colormap> {
    let lower = name.to_lowercase();
    let (base, reversed) = match lower.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (lower.as_str(), false),
    };

    let cmap = match base {
        "ylorrd" => ylorrd(),
        "viridis" => viridis(),
        "greys" => greys(),
        _ => return Err(PlotError::UnknownColormap(name.to_string())),
    };
    Ok(if reversed { cmap.reversed() } else { cmap })
}
