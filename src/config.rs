use crate::menu::{self, MenuItem};
use crate::selection::AudioCue;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub max_item_fraction: f64,
    pub selection_scale: f64,
    pub segment_count: usize,
    pub reflow_on_select: bool,
    pub compact_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_item_fraction: menu::MAX_ITEM_FRACTION,
            selection_scale: menu::SELECTION_SCALE,
            segment_count: menu::SEGMENT_COUNT,
            reflow_on_select: true,
            compact_width: menu::COMPACT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SoundConfig {
    pub move_left: Option<PathBuf>,
    pub move_right: Option<PathBuf>,
}

impl SoundConfig {
    pub fn path(&self, cue: AudioCue) -> Option<&Path> {
        match cue {
            AudioCue::MoveLeft => self.move_left.as_deref(),
            AudioCue::MoveRight => self.move_right.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WindowConfig {
    #[serde(default)]
    pub overlay: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "MenuItem::defaults")]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub sounds: SoundConfig,
    #[serde(default)]
    pub badge: Option<MenuItem>,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default = "default_socket_path")]
    pub socket_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: MenuItem::defaults(),
            layout: LayoutConfig::default(),
            sounds: SoundConfig::default(),
            badge: None,
            window: WindowConfig::default(),
            socket_path: default_socket_path(),
        }
    }
}

fn default_socket_path() -> PathBuf {
    PathBuf::from("/tmp/strands.sock")
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Menu has no items")]
    NoItems,
    #[error("Item '{label}' has a non-absolute link '{link}'")]
    RelativeLink { label: String, link: String },
    #[error("Layout value '{0}' must be positive")]
    NonPositive(&'static str),
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if let Some(item) = self
            .items
            .iter()
            .chain(self.badge.as_ref())
            .find(|item| !item.link.is_absolute())
        {
            return Err(ConfigError::RelativeLink {
                label: item.label.to_string(),
                link: item.link.to_string(),
            });
        }
        if self.layout.max_item_fraction <= 0.0 {
            return Err(ConfigError::NonPositive("max_item_fraction"));
        }
        if self.layout.selection_scale <= 0.0 {
            return Err(ConfigError::NonPositive("selection_scale"));
        }
        Ok(self)
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "strands", "strands").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("STRANDS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    s.try_deserialize::<Config>()?.validate()
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => {
            log::info!("Loaded {} menu items", c.items.len());
            c
        }
        Err(e) => {
            log::error!("Failed to load config, using built-in menu: {}", e);
            Config::default()
        }
    }
}

/// Writes the bundled config to the user's config path unless a file is
/// already there, and returns that path.
pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    write_default_config_to(&path)?;
    Ok(path)
}

fn write_default_config_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        let s = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        s.try_deserialize::<Config>()?.validate()
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.items, MenuItem::defaults());
        assert_eq!(config.layout.max_item_fraction, 0.18);
        assert_eq!(config.layout.selection_scale, 1.5);
        assert!(config.layout.reflow_on_select);
        assert!(config.badge.is_none());
        assert!(!config.window.overlay);
        assert_eq!(config.socket_path, default_socket_path());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.items.len(), 5);
        assert_eq!(config.layout.segment_count, menu::SEGMENT_COUNT);
        assert!(config.sounds.path(AudioCue::MoveLeft).is_none());
    }

    #[test]
    fn test_partial_layout_keeps_other_defaults() {
        let config = parse(
            r#"
            [layout]
            selection_scale = 1.2

            [sounds]
            move_right = "/tmp/right.ogg"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.selection_scale, 1.2);
        assert_eq!(config.layout.compact_width, menu::COMPACT_WIDTH);
        assert_eq!(
            config.sounds.path(AudioCue::MoveRight),
            Some(Path::new("/tmp/right.ogg"))
        );
    }

    #[test]
    fn test_rejects_relative_links() {
        let err = parse(
            r#"
            [[items]]
            label = "Home"
            link = "index.html"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::RelativeLink { .. }));
    }

    #[test]
    fn test_rejects_empty_menu() {
        let config = Config {
            items: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoItems)));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let err = parse("[layout]\nselection_scale = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("selection_scale")));
    }

    #[test]
    fn test_default_config_written_once() {
        let dir = std::env::temp_dir().join(format!("strands-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");

        write_default_config_to(&path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "[layout]\nselection_scale = 1.2\n").unwrap();
        write_default_config_to(&path).unwrap();
        assert!(fs_err::read_to_string(&path).unwrap().contains("1.2"));

        fs_err::remove_dir_all(&dir).unwrap();
    }
}
