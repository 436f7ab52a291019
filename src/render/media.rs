//! GPU textures and mixer sounds for the asset store
//!
//! The store holds decoded bytes; this cache holds the engine-side objects
//! made from them. `sync` uploads whatever the store gained or replaced
//! since the last call, so it is cheap to call every frame.

use std::collections::HashMap;

use macroquad::audio::{load_sound_from_bytes, play_sound_once, Sound};
use macroquad::texture::{FilterMode, Texture2D};

use crate::asset::{AssetStore, ImageAsset, Playback};

/// Store entries the engine could not take
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("image {key} is too large for a texture ({width}x{height})")]
    TextureTooLarge { key: String, width: u32, height: u32 },
    #[error("loading sound {key} into the mixer: {message}")]
    Sound { key: String, message: String },
}

/// Engine-side copies of store entries
#[derive(Default)]
pub struct MediaCache {
    textures: HashMap<String, Texture2D>,
    sounds: HashMap<String, Sound>,
    /// Store revision already uploaded
    synced: u64,
}

impl MediaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload store entries written since the last sync
    pub async fn sync(&mut self, store: &AssetStore) -> Result<(), MediaError> {
        if store.revision() == self.synced {
            return Ok(());
        }

        for (key, image) in store.images_since(self.synced) {
            let texture = upload_texture(image).ok_or_else(|| MediaError::TextureTooLarge {
                key: key.to_string(),
                width: image.width,
                height: image.height,
            })?;
            self.textures.insert(key.to_string(), texture);
        }

        for (key, clip) in store.sounds_since(self.synced) {
            let sound = load_sound_from_bytes(&clip.bytes)
                .await
                .map_err(|e| MediaError::Sound {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            self.sounds.insert(key.to_string(), sound);
        }

        log::debug!(
            "Media synced to revision {} ({} textures, {} sounds)",
            store.revision(),
            self.textures.len(),
            self.sounds.len()
        );
        self.synced = store.revision();
        Ok(())
    }

    /// Play every queued sound once, in request order
    pub fn play(&self, playback: &mut Playback) {
        for key in playback.drain() {
            match self.sounds.get(&key) {
                Some(sound) => play_sound_once(sound),
                None => log::warn!("Sound {} is not loaded", key),
            }
        }
    }

    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        self.textures.get(key)
    }
}

fn upload_texture(image: &ImageAsset) -> Option<Texture2D> {
    let width = u16::try_from(image.width).ok()?;
    let height = u16::try_from(image.height).ok()?;
    let texture = Texture2D::from_rgba8(width, height, &image.rgba);
    texture.set_filter(FilterMode::Linear);
    Some(texture)
}
