//! Game configuration
//!
//! Everything the game used to hard-code (window, tick rate, asset table,
//! sample file) lives in [`GameConfig`]. Defaults reproduce the stock game.
//! Native builds read overrides from `magnet-go.ron` in the working
//! directory when that file exists; browser builds always use defaults.

use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "magnet-go.ron";

/// Config loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("parsing config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Window settings, applied once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Magnet Go!".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Where files are read from on native builds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceConfig {
    /// Local filesystem, relative to `root`
    Local { root: String },
    /// HTTP GET against `base_url`
    Http { base_url: String },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Local {
            root: ".".to_string(),
        }
    }
}

/// One row of the asset table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub key: String,
    pub path: String,
}

impl AssetEntry {
    pub fn new(key: &str, path: &str) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
        }
    }
}

/// Asset table, loaded in listed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub images: Vec<AssetEntry>,
    pub sounds: Vec<AssetEntry>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        let images = [
            ("white_n", "resources/images/go_white_n.png"),
            ("black_n", "resources/images/go_black_n.png"),
            ("frame_white_n", "resources/images/go_frame_white_n.png"),
            ("frame_black_n", "resources/images/go_frame_black_n.png"),
            ("white_s", "resources/images/go_white_s.png"),
            ("black_s", "resources/images/go_black_s.png"),
            ("frame_white_s", "resources/images/go_frame_white_s.png"),
            ("frame_black_s", "resources/images/go_frame_black_s.png"),
        ];
        let sounds = [
            ("set_stone", "resources/se/set_stone.wav"),
            ("force_stone", "resources/se/force_stone.wav"),
        ];

        Self {
            images: images.iter().map(|(k, p)| AssetEntry::new(k, p)).collect(),
            sounds: sounds.iter().map(|(k, p)| AssetEntry::new(k, p)).collect(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Fixed update rate
    pub ticks_per_second: u32,
    /// Lines per side of the board
    pub board_size: u32,
    pub source: SourceConfig,
    pub assets: AssetManifest,
    /// JSON file shown on the hello screen
    pub sample_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            ticks_per_second: 60,
            board_size: 9,
            source: SourceConfig::default(),
            assets: AssetManifest::default(),
            sample_path: "asset/sample.json".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a RON document; missing fields keep their defaults
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("ticks_per_second must be positive".into()));
        }
        if self.board_size < 2 {
            return Err(ConfigError::Invalid(format!(
                "board_size must be at least 2, got {}",
                self.board_size
            )));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }

    /// Load `path`, falling back to defaults when it does not exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                log::info!("Loaded config from {}", path.display());
                Self::from_ron(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Load the config for this host
    pub fn load_for_host() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::load(std::path::Path::new(CONFIG_FILE))
        }
        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self::default())
        }
    }

    /// Every file the game may read, in load order (used for browser preloading)
    pub fn preload_names(&self) -> Vec<String> {
        self.assets
            .images
            .iter()
            .chain(&self.assets.sounds)
            .map(|entry| entry.path.clone())
            .chain(std::iter::once(self.sample_path.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_game() {
        let config = GameConfig::default();
        assert_eq!(config.window.title, "Magnet Go!");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.board_size, 9);
        assert_eq!(config.assets.images.len(), 8);
        assert_eq!(config.assets.sounds.len(), 2);
        assert_eq!(config.assets.images[0], AssetEntry::new("white_n", "resources/images/go_white_n.png"));
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = GameConfig::from_ron(
            r#"(
                window: (title: "Test Board"),
                source: Http(base_url: "http://localhost:8000"),
            )"#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Test Board");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.ticks_per_second, 60);
        assert_eq!(
            config.source,
            SourceConfig::Http { base_url: "http://localhost:8000".into() }
        );
        assert_eq!(config.assets, AssetManifest::default());
    }

    #[test]
    fn test_round_trip_through_ron() {
        let config = GameConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(GameConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = GameConfig::from_ron(include_str!("../magnet-go.example.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            GameConfig::from_ron("(ticks_per_second: 0)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_ron("(board_size: 1)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(GameConfig::from_ron("(window: oops)"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = GameConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "(board_size: 13)").unwrap();

        assert_eq!(GameConfig::load(&path).unwrap().board_size, 13);
    }

    #[test]
    fn test_preload_names_cover_assets_and_sample() {
        let names = GameConfig::default().preload_names();
        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "resources/images/go_white_n.png");
        assert_eq!(names[8], "resources/se/set_stone.wav");
        assert_eq!(names.last().unwrap(), "asset/sample.json");
    }
}
