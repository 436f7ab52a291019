//! Sound playback requests
//!
//! Scenes cannot touch the mixer directly; they queue sound keys here and
//! the host loop plays them once the tick is over.

/// Queue of sound keys waiting to be played
#[derive(Debug, Default)]
pub struct Playback {
    queue: Vec<String>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a one-shot play of the sound stored under `key`
    pub fn play(&mut self, key: &str) {
        self.queue.push(key.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued keys, oldest first
    pub fn pending(&self) -> &[String] {
        &self.queue
    }

    /// Take all queued keys in request order
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queue)
    }
}
