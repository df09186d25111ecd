//! Configuration for the board and the desktop window.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```yaml
//! title: Survey
//! map:
//!   center: { lat: -6.9, lon: 107.6 }
//!   zoom: 16
//! board:
//!   distance_unit: " m"
//! places:
//!   - name: Campus gate
//!     location: { lat: -6.8932, lon: 107.6105 }
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::geo::{Bounds, LatLon};
use crate::data::matrix::DEFAULT_UNIT;
use crate::error::{PinError, Result};
use crate::events::EventController;

/// Starting view of the map.
pub const DEFAULT_CENTER: LatLon = LatLon::new(-6.891161, 107.610633);
pub const DEFAULT_ZOOM: u8 = 17;

/// Width of the initial view, in 256 px tiles.
const INITIAL_VIEW_TILES: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Ruler look
// ─────────────────────────────────────────────────────────────────────────────

/// Stroke used for the line drawn between two linked pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerStyle {
    /// `#RRGGBB`.
    pub color: String,
    pub opacity: f32,
    /// Stroke width in points.
    pub weight: f32,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            color: "#FFFF00".to_string(),
            opacity: 0.7,
            weight: 7.0,
        }
    }
}

impl RulerStyle {
    /// Color with opacity folded into the alpha channel.
    pub fn rgba(&self) -> Result<[u8; 4]> {
        let [r, g, b] = parse_hex_color(&self.color)?;
        let a = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Ok([r, g, b, a])
    }
}

pub fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let invalid = || PinError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center: LatLon,
    /// Web map zoom level; each step halves the visible span.
    pub zoom: u8,
    /// How close (screen pixels) a click must land to a pin to select it.
    pub pick_radius_px: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            pick_radius_px: 10.0,
        }
    }
}

impl MapConfig {
    /// Visible longitude span in degrees at the configured zoom.
    pub fn initial_lon_span(&self) -> f64 {
        360.0 / 2f64.powi(self.zoom as i32) * INITIAL_VIEW_TILES
    }

    pub fn initial_bounds(&self, aspect: f64) -> Bounds {
        let lon_span = self.initial_lon_span();
        let lat_span = if aspect > 0.0 { lon_span / aspect } else { lon_span };
        Bounds::around(self.center, lat_span, lon_span)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub ruler: RulerStyle,
    /// Appended to every distance, including the leading space.
    pub distance_unit: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ruler: RulerStyle::default(),
            distance_unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// Entry of the local gazetteer used by the search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPlace {
    pub name: String,
    pub location: Option<LatLon>,
    #[serde(default)]
    pub viewport: Option<Bounds>,
}

// ─────────────────────────────────────────────────────────────────────────────
// PinRulerConfig
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct PinRulerConfig {
    pub title: String,
    pub map: MapConfig,
    pub board: BoardConfig,
    pub places: Vec<NamedPlace>,
    /// Receives board events while the window is open.
    #[serde(skip)]
    pub event_controller: Option<EventController>,
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for PinRulerConfig {
    fn default() -> Self {
        Self {
            title: "Pin Ruler".to_string(),
            map: MapConfig::default(),
            board: BoardConfig::default(),
            places: Vec::new(),
            event_controller: None,
            native_options: None,
        }
    }
}

impl PinRulerConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(PinError::Config)
    }

    /// Load from a `.json` file or, for any other extension, YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let cfg = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&s)?,
            _ => Self::from_yaml_str(&s)?,
        };
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let s = serde_yaml::to_string(self).map_err(PinError::Config)?;
        let mut f = fs::File::create(path)?;
        f.write_all(s.as_bytes())?;
        Ok(())
    }
}
