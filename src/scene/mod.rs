//! Scene state document for the configurator.
//!
//! The document is owned by the external application; this crate only
//! constructs it, interpolates a few numeric fields, toggles visibility
//! flags, and ships it base64-encoded in a URL (see [`transport`]).

pub mod transport;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Roof style — a fixed set of variants with no interpolation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStyle {
    Apex,
    Pent,
    Hipped,
}

impl RoofStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apex => "apex",
            Self::Pent => "pent",
            Self::Hipped => "hipped",
        }
    }
}

/// An opening (door or window) in one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallOpening {
    /// Wall identifier as the configurator names it (e.g. "front", "left").
    pub wall: String,
    /// Opening kind (e.g. "door", "window").
    pub kind: String,
    /// Offset along the wall, scene units.
    pub position: u32,
    /// Opening width, scene units.
    pub width: u32,
}

/// The configurator's state document.
///
/// Field semantics beyond width/depth/crest interpolation and visibility
/// toggling belong to the external application — the document is otherwise
/// opaque to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneState {
    /// Shed width, scene units (integer — the configurator snaps to whole units).
    pub width: u32,
    /// Shed depth, scene units.
    pub depth: u32,
    /// Roof style variant.
    pub roof_style: RoofStyle,
    /// Roof crest height, scene units.
    pub crest_height: u32,
    /// Wall openings, passed through untouched.
    pub openings: Vec<WallOpening>,
    /// Named render layers and whether each is shown.
    pub visibility: BTreeMap<String, bool>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            width: 2400,
            depth: 1800,
            roof_style: RoofStyle::Apex,
            crest_height: 2200,
            openings: Vec::new(),
            visibility: BTreeMap::new(),
        }
    }
}

impl SceneState {
    /// A state with the given layers all visible.
    pub fn with_layers<I: IntoIterator<Item = S>, S: Into<String>>(layers: I) -> Self {
        let visibility = layers.into_iter().map(|l| (l.into(), true)).collect();
        Self {
            visibility,
            ..Self::default()
        }
    }
}
