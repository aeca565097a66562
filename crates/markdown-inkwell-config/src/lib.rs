use markdown_inkwell_engine::editing::LiveConfig;
use markdown_inkwell_engine::render::{Color, HeadingStyle, RenderStyle};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings file contents. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub fonts: FontConfig,
    pub colors: ColorConfig,
    pub images: ImageConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: String,
    pub text_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1e1e1e".into(),
            text_color: "#d4d4d4".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub regular_size: f32,
    pub heading1_size: f32,
    pub heading2_size: f32,
    pub heading3_size: f32,
    pub code_font: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Consolas".into(),
            regular_size: 12.0,
            heading1_size: 26.0,
            heading2_size: 18.0,
            heading3_size: 16.0,
            code_font: "Consolas".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub regular_text: String,
    pub heading1: String,
    pub heading2: String,
    pub heading3: String,
    pub italic: String,
    pub bold: String,
    pub link: String,
    pub bullet_point: String,
    pub code_block: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            regular_text: "#d4d4d4".into(),
            heading1: "#569cd6".into(),
            heading2: "#4ec9b0".into(),
            heading3: "#dcdcaa".into(),
            italic: "#ffeb3b".into(),
            bold: "#f44336".into(),
            link: "#4fc3f7".into(),
            bullet_point: "#808080".into(),
            code_block: "#2d2d30".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub default_width: u32,
    pub enable_resize: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_width: 400,
            enable_resize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Quiet period after the last keystroke before re-rendering.
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-inkwell");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Every default as TOML, for bootstrapping a config file.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }

    /// Builds the style the render pipeline reads.
    ///
    /// Unparsable colors and a zero image width fall back to the built-in
    /// value for that setting.
    pub fn render_style(&self) -> RenderStyle {
        let defaults = RenderStyle::default();
        let fonts = &self.fonts;
        let colors = &self.colors;
        let [h1, h2, h3] = &defaults.headings;

        RenderStyle {
            background: color_or(
                "theme.background_color",
                &self.theme.background_color,
                defaults.background,
            ),
            text: color_or("theme.text_color", &self.theme.text_color, defaults.text),
            regular_text: color_or(
                "colors.regular_text",
                &colors.regular_text,
                defaults.regular_text,
            ),
            font_family: fonts.family.clone(),
            font_size: fonts.regular_size,
            headings: [
                HeadingStyle {
                    font_size: fonts.heading1_size,
                    color: color_or("colors.heading1", &colors.heading1, h1.color),
                },
                HeadingStyle {
                    font_size: fonts.heading2_size,
                    color: color_or("colors.heading2", &colors.heading2, h2.color),
                },
                HeadingStyle {
                    font_size: fonts.heading3_size,
                    color: color_or("colors.heading3", &colors.heading3, h3.color),
                },
            ],
            bold: color_or("colors.bold", &colors.bold, defaults.bold),
            italic: color_or("colors.italic", &colors.italic, defaults.italic),
            link: color_or("colors.link", &colors.link, defaults.link),
            code_background: color_or(
                "colors.code_block",
                &colors.code_block,
                defaults.code_background,
            ),
            code_font_family: fonts.code_font.clone(),
            bullet: color_or("colors.bullet_point", &colors.bullet_point, defaults.bullet),
            default_image_width: NonZeroU32::new(self.images.default_width).unwrap_or_else(|| {
                log::warn!(
                    "images.default_width must be positive, using {}",
                    defaults.default_image_width
                );
                defaults.default_image_width
            }),
            image_resize_enabled: self.images.enable_resize,
        }
    }

    pub fn live_config(&self) -> LiveConfig {
        LiveConfig {
            debounce: Duration::from_millis(self.editor.debounce_ms),
        }
    }
}

fn color_or(key: &str, value: &str, fallback: Color) -> Color {
    value.parse().unwrap_or_else(|err| {
        log::warn!("{err} for {key}, using {}", fallback.to_hex());
        fallback
    })
}
