//! Level catalog resource.
//!
//! The static layout data behind the level selection screen: one entry per
//! level with its display name, map theme, and locked flag. A built-in
//! catalog covers the five shipped maps; an optional JSON file can replace it
//! for testing alternative lineups.
//!
//! ```json
//! {
//!   "levels": [
//!     { "id": "meadow", "name": "Meadow Run", "theme": "grassland" },
//!     { "id": "starfall", "name": "Starfall", "theme": "space", "locked": true }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resources::theme::MapTheme;

/// One row of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelEntry {
    pub id: String,
    pub name: String,
    pub theme: MapTheme,
    #[serde(default)]
    pub locked: bool,
}

impl LevelEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, theme: MapTheme, locked: bool) -> Self {
        LevelEntry {
            id: id.into(),
            name: name.into(),
            theme,
            locked,
        }
    }
}

/// The full level lineup, in selection-screen order.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub levels: Vec<LevelEntry>,
}

impl LevelCatalog {
    /// The shipped five-map lineup.
    pub fn builtin() -> Self {
        LevelCatalog {
            levels: vec![
                LevelEntry::new("meadow", "Meadow Run", MapTheme::Grassland, false),
                LevelEntry::new("dunes", "Dune Drift", MapTheme::Desert, false),
                LevelEntry::new("cinder", "Cinder Climb", MapTheme::Volcano, false),
                LevelEntry::new("frost", "Frostbite Pass", MapTheme::Ice, true),
                LevelEntry::new("starfall", "Starfall", MapTheme::Space, true),
            ],
        }
    }

    /// Load the catalog from a JSON file, falling back to the built-in
    /// lineup when the file is absent or malformed.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<LevelCatalog>(&json) {
                Ok(catalog) if !catalog.levels.is_empty() => catalog,
                Ok(_) => {
                    warn!("{}: empty level catalog, using built-in", path.display());
                    Self::builtin()
                }
                Err(e) => {
                    warn!("{}: bad level catalog ({}), using built-in", path.display(), e);
                    Self::builtin()
                }
            },
            Err(_) => Self::builtin(),
        }
    }

    /// Look an entry up by id.
    pub fn get(&self, id: &str) -> Option<&LevelEntry> {
        self.levels.iter().find(|entry| entry.id == id)
    }
}
