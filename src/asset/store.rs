//! Asset store - decoded images and sound clips keyed by name

use std::collections::HashMap;
use std::io::{Cursor, Read};

use crate::config::{AssetEntry, AssetManifest};
use crate::storage::{read_file, ByteSource, FileError};

/// Errors raised while loading an asset
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error(transparent)]
    File(#[from] FileError),
    #[error("decoding image {key} from {path}: {message}")]
    ImageDecode {
        key: String,
        path: String,
        message: String,
    },
    #[error("decoding sound {key} from {path}: {message}")]
    AudioDecode {
        key: String,
        path: String,
        message: String,
    },
}

/// A decoded image, RGBA8, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageAsset {
    /// Decode PNG/JPEG/BMP bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let rgba = img.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

/// A WAV sound effect, checked by decoding every sample at load time.
///
/// The mixer decodes `bytes` again when the clip is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub channels: u16,
    pub sample_rate: u32,
    /// Length in sample frames
    pub frames: u32,
    pub bytes: Vec<u8>,
}

impl AudioClip {
    /// Decode WAV bytes, failing on a bad header or truncated sample data
    pub fn decode(bytes: Vec<u8>) -> Result<Self, String> {
        let (spec, frames) = {
            let mut reader =
                hound::WavReader::new(Cursor::new(&bytes[..])).map_err(|e| e.to_string())?;
            let spec = reader.spec();
            let samples = match spec.sample_format {
                hound::SampleFormat::Float => check_samples::<f32, _>(&mut reader),
                hound::SampleFormat::Int => check_samples::<i32, _>(&mut reader),
            };
            samples.map_err(|e| format!("reading samples: {}", e))?;
            (spec, reader.duration())
        };

        Ok(Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            frames,
            bytes,
        })
    }
}

fn check_samples<S: hound::Sample, R: Read>(
    reader: &mut hound::WavReader<R>,
) -> Result<(), hound::Error> {
    reader.samples::<S>().try_for_each(|sample| sample.map(drop))
}

/// A stored asset with the store revision it was written at
#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    revision: u64,
}

/// Decoded assets keyed by name.
///
/// Writing an existing key replaces it (last write wins). Every write bumps
/// the store revision so consumers can pick up only what changed.
#[derive(Debug, Default)]
pub struct AssetStore {
    images: HashMap<String, Slot<ImageAsset>>,
    sounds: HashMap<String, Slot<AudioClip>>,
    revision: u64,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, decode and store an image under `key`
    pub fn load_image(
        &mut self,
        source: &dyn ByteSource,
        key: &str,
        path: &str,
    ) -> Result<(), AssetError> {
        let bytes = read_file(source, path)?;
        let image = ImageAsset::decode(&bytes).map_err(|message| AssetError::ImageDecode {
            key: key.to_string(),
            path: path.to_string(),
            message,
        })?;
        log::debug!("Loaded image {} ({}x{}) from {}", key, image.width, image.height, path);
        self.insert_image(key, image);
        Ok(())
    }

    /// Read, decode and store a WAV sound clip under `key`
    pub fn load_audio(
        &mut self,
        source: &dyn ByteSource,
        key: &str,
        path: &str,
    ) -> Result<(), AssetError> {
        let bytes = read_file(source, path)?;
        let clip = AudioClip::decode(bytes).map_err(|message| AssetError::AudioDecode {
            key: key.to_string(),
            path: path.to_string(),
            message,
        })?;
        log::debug!(
            "Loaded sound {} ({} frames at {} Hz) from {}",
            key,
            clip.frames,
            clip.sample_rate,
            path
        );
        self.insert_audio(key, clip);
        Ok(())
    }

    /// Load every image, then every sound, in manifest order.
    ///
    /// Stops at the first failure. Returns the number of assets loaded.
    pub fn load_manifest(
        &mut self,
        source: &dyn ByteSource,
        manifest: &AssetManifest,
    ) -> Result<usize, AssetError> {
        for AssetEntry { key, path } in &manifest.images {
            self.load_image(source, key, path)?;
        }
        for AssetEntry { key, path } in &manifest.sounds {
            self.load_audio(source, key, path)?;
        }
        Ok(manifest.images.len() + manifest.sounds.len())
    }

    pub fn insert_image(&mut self, key: &str, image: ImageAsset) {
        self.revision += 1;
        let slot = Slot { value: image, revision: self.revision };
        if self.images.insert(key.to_string(), slot).is_some() {
            log::debug!("Image {} replaced", key);
        }
    }

    pub fn insert_audio(&mut self, key: &str, clip: AudioClip) {
        self.revision += 1;
        let slot = Slot { value: clip, revision: self.revision };
        if self.sounds.insert(key.to_string(), slot).is_some() {
            log::debug!("Sound {} replaced", key);
        }
    }

    pub fn image(&self, key: &str) -> Option<&ImageAsset> {
        self.images.get(key).map(|slot| &slot.value)
    }

    pub fn sound(&self, key: &str) -> Option<&AudioClip> {
        self.sounds.get(key).map(|slot| &slot.value)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Revision of the most recent write (0 for an empty store)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Images written after `revision`
    pub fn images_since(&self, revision: u64) -> impl Iterator<Item = (&str, &ImageAsset)> {
        self.images
            .iter()
            .filter(move |(_, slot)| slot.revision > revision)
            .map(|(key, slot)| (key.as_str(), &slot.value))
    }

    /// Sounds written after `revision`
    pub fn sounds_since(&self, revision: u64) -> impl Iterator<Item = (&str, &AudioClip)> {
        self.sounds
            .iter()
            .filter(move |(_, slot)| slot.revision > revision)
            .map(|(key, slot)| (key.as_str(), &slot.value))
    }
}
