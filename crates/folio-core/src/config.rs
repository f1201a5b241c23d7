use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the page viewer writes its log; the terminal belongs to the page
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding static files (the resume lives here)
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Resume file name inside `public_dir`
    #[serde(default = "default_resume_file")]
    pub resume_file: String,
    /// Filename advertised in Content-Disposition
    #[serde(default = "default_resume_download_name")]
    pub resume_download_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            resume_file: default_resume_file(),
            resume_download_name: default_resume_download_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the site API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Where downloaded files land
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
            download_dir: default_download_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Animation primitives
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

/// Easing curve for scroll and reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Cubic ease-in-out, used for looping accents
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate page scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per j/k press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Typewriter delay per character
    #[serde(default = "default_typer_speed")]
    pub typer_speed_ms: u64,
    /// Typewriter pause after a completed line
    #[serde(default = "default_typer_hold")]
    pub typer_hold_ms: u64,
    /// Number of background orbs
    #[serde(default = "default_orb_count")]
    pub orb_count: usize,
    /// Number of rising background motes
    #[serde(default = "default_mote_count")]
    pub mote_count: usize,
    /// Orb drift tick interval
    #[serde(default = "default_orb_tick")]
    pub orb_tick_ms: u64,
    /// How strongly orbs follow the pointer
    #[serde(default = "default_pointer_coefficient")]
    pub pointer_coefficient: f64,
    /// Keep orb base positions inside the viewport envelope
    #[serde(default = "default_true")]
    pub clamp_orbs: bool,
    /// Fixed RNG seed for orb generation (random when unset)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Rows an element must be inside the viewport before it counts as visible
    #[serde(default = "default_visibility_margin")]
    pub visibility_margin_rows: u16,
    /// Entrance animation duration
    #[serde(default = "default_reveal_duration")]
    pub reveal_duration_ms: u64,
    /// Delay before a sent contact form resets
    #[serde(default = "default_contact_reset")]
    pub contact_reset_ms: u64,
    /// Notification lifetime
    #[serde(default = "default_notification")]
    pub notification_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            typer_speed_ms: default_typer_speed(),
            typer_hold_ms: default_typer_hold(),
            orb_count: default_orb_count(),
            mote_count: default_mote_count(),
            orb_tick_ms: default_orb_tick(),
            pointer_coefficient: default_pointer_coefficient(),
            clamp_orbs: default_true(),
            seed: None,
            visibility_margin_rows: default_visibility_margin(),
            reveal_duration_ms: default_reveal_duration(),
            contact_reset_ms: default_contact_reset(),
            notification_ms: default_notification(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("~/.config/folio/folio.log")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_resume_file() -> String {
    "resume.pdf".to_string()
}

fn default_resume_download_name() -> String {
    "Alex_Morgan_Resume.pdf".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_tick_rate() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_typer_speed() -> u64 {
    80
}

fn default_typer_hold() -> u64 {
    1500
}

fn default_orb_count() -> usize {
    8
}

fn default_mote_count() -> usize {
    50
}

fn default_orb_tick() -> u64 {
    50
}

fn default_pointer_coefficient() -> f64 {
    0.01
}

fn default_visibility_margin() -> u16 {
    2
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_contact_reset() -> u64 {
    3000
}

fn default_notification() -> u64 {
    4000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Always ~/.config/folio/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Full path of the resume file served by `GET /api/download-resume`
    pub fn resume_path(&self) -> PathBuf {
        expand_tilde(&self.server.public_dir).join(&self.server.resume_file)
    }

    /// Viewer log file (with tilde expansion)
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.general.log_file)
    }

    /// Download directory (with tilde expansion)
    pub fn download_dir(&self) -> PathBuf {
        expand_tilde(&self.client.download_dir)
    }

    /// `host:port` the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.resume_download_name, "Alex_Morgan_Resume.pdf");
        assert_eq!(config.ui.motion.orb_count, 8);
        assert_eq!(config.ui.motion.mote_count, 50);
        assert_eq!(config.ui.motion.orb_tick_ms, 50);
        assert_eq!(config.ui.motion.contact_reset_ms, 3000);
        assert!((config.ui.motion.pointer_coefficient - 0.01).abs() < f64::EPSILON);
        assert!(config.ui.motion.seed.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [ui.motion]
            seed = 42
            clamp_orbs = false

            [ui.scroll]
            easing = "ease_out"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.ui.motion.seed, Some(42));
        assert!(!config.ui.motion.clamp_orbs);
        assert_eq!(config.ui.motion.typer_speed_ms, 80);
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[server]\nport = \"not a port\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_resume_path_joins_public_dir() {
        let mut config = AppConfig::default();
        config.server.public_dir = PathBuf::from("/srv/site");
        assert_eq!(config.resume_path(), PathBuf::from("/srv/site/resume.pdf"));
    }

    #[test]
    fn test_log_path_defaults_beside_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_path().parent(), AppConfig::config_path().parent());
        assert_eq!(config.log_path().file_name().and_then(|n| n.to_str()), Some("folio.log"));

        let config = AppConfig::from_toml("[general]\nlog_file = \"/tmp/folio-view.log\"").unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/folio-view.log"));
        assert_eq!(config.general.log_level, "info");
    }
}
