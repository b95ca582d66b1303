use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Keyed store of loaded textures. Inserted as a non-send resource since GPU
/// textures stay on the main thread. The store owns every texture; strips and
/// sprites only hold keys.
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
