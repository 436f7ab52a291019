//! Asset loading
//!
//! Images and sound effects are read through a [`ByteSource`], decoded,
//! and kept in an [`AssetStore`] under string keys. Scenes fill the store
//! during `init` and read it while running. The render side uploads store
//! entries to the GPU and the mixer; see `render::MediaCache`.
//!
//! ```text
//! ByteSource ──read_file──▶ decode ──▶ AssetStore { images, sounds }
//!                                            │
//!                                            ▼
//!                                   MediaCache (textures, sounds)
//! ```
//!
//! [`ByteSource`]: crate::storage::ByteSource

mod playback;
mod store;

pub use playback::Playback;
pub use store::{AssetError, AssetStore, AudioClip, ImageAsset};

/// Shared byte fixtures for tests across the crate
#[cfg(test)]
pub mod fixtures {
    use std::io::Cursor;

    use crate::config::GameConfig;
    use crate::storage::Preloaded;

    /// Encode a solid-color PNG
    pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// A minimal WAV header followed by a few silent samples
    pub fn wav_bytes() -> Vec<u8> {
        let samples = [0u8; 8];
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + samples.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44100u32.to_le_bytes());
        bytes.extend_from_slice(&88200u32.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&(samples.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&samples);
        bytes
    }

    /// In-memory source holding every file the default config names
    pub fn stock_source(config: &GameConfig) -> Preloaded {
        let mut source = Preloaded::new();
        for entry in &config.assets.images {
            source.insert(&entry.path, png_bytes(4, 4, [255, 255, 255, 255]));
        }
        for entry in &config.assets.sounds {
            source.insert(&entry.path, wav_bytes());
        }
        source.insert(&config.sample_path, br#"{"name": "magnet", "board": 9}"#.to_vec());
        source
    }
}
