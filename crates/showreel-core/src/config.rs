use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::content::{default_guest_slides, default_testimonials, GuestSlide, Testimonial};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Photo carousel
    #[serde(default = "default_guests_carousel")]
    pub guests: CarouselConfig,
    /// Quote carousel, looping by default
    #[serde(default = "default_testimonials_carousel")]
    pub testimonials: CarouselConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            guests: default_guests_carousel(),
            testimonials: default_testimonials_carousel(),
            contact: ContactConfig::default(),
            keymap: KeymapConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a slide transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Width of one terminal cell in layout units.
    /// Terminal columns are multiplied by this before breakpoints apply,
    /// so an 80 column terminal measures 640 units wide.
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    #[serde(default)]
    pub theme: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width(),
            theme: ThemeColorOverrides::default(),
        }
    }
}

/// Optional color overrides, each a hex string ("#14b87a" or "14b87a")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Brand accent (active dot, focused borders)
    pub brand: Option<String>,
    /// Card background
    pub surface: Option<String>,
    /// Primary text
    pub text: Option<String>,
    /// Secondary text
    pub muted: Option<String>,
    /// Validation and failure messages
    pub error: Option<String>,
    /// Success messages
    pub success: Option<String>,
}

/// Easing curve for slide transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the transition
    None,
    Linear,
    /// Quadratic ease-out, 1 - (1-t)^2
    #[default]
    Quadratic,
    /// Cubic ease-out, 1 - (1-t)^3
    Cubic,
    /// Quintic ease-out, 1 - (1-t)^5
    Quintic,
    /// Exponential ease-out, 1 - 2^(-10t)
    EaseOut,
}

/// Where the prev/next controls sit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlsPlacement {
    /// Arrows overlaid on the left and right edges of the track
    InlineSides,
    /// Arrows and pagination dots in a row under the track
    #[default]
    BelowCenter,
}

/// How pages are derived from items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    /// One page per leftmost position that keeps the track full
    #[default]
    Bounded,
    /// Every item is a page and the track wraps seamlessly
    Looping,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemsPerViewConfig {
    #[serde(default = "default_per_view_small")]
    pub small: usize,
    #[serde(default = "default_per_view_medium")]
    pub medium: usize,
    #[serde(default = "default_per_view_large")]
    pub large: usize,
}

impl Default for ItemsPerViewConfig {
    fn default() -> Self {
        Self {
            small: default_per_view_small(),
            medium: default_per_view_medium(),
            large: default_per_view_large(),
        }
    }
}

/// Viewport width thresholds (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakpointConfig {
    #[serde(default = "default_medium_min")]
    pub medium_min: f64,
    #[serde(default = "default_large_min")]
    pub large_min: f64,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            medium_min: default_medium_min(),
            large_min: default_large_min(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate navigation; when false every move is applied immediately
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_transition_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_ms(),
            easing: EasingType::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Gap between slides in layout units
    #[serde(default = "default_gap")]
    pub gap_px: f64,
    /// Autoplay interval in milliseconds (0 disables autoplay)
    #[serde(default = "default_autoplay_delay")]
    pub autoplay_delay_ms: u64,
    #[serde(default)]
    pub items_per_view: ItemsPerViewConfig,
    #[serde(default)]
    pub breakpoints: BreakpointConfig,
    #[serde(default)]
    pub controls: ControlsPlacement,
    #[serde(default)]
    pub paging: PagingMode,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap_px: default_gap(),
            autoplay_delay_ms: default_autoplay_delay(),
            items_per_view: ItemsPerViewConfig::default(),
            breakpoints: BreakpointConfig::default(),
            controls: ControlsPlacement::default(),
            paging: PagingMode::default(),
            animation: AnimationConfig::default(),
        }
    }
}

fn default_guests_carousel() -> CarouselConfig {
    CarouselConfig {
        autoplay_delay_ms: 3200,
        ..CarouselConfig::default()
    }
}

fn default_testimonials_carousel() -> CarouselConfig {
    CarouselConfig {
        autoplay_delay_ms: 4500,
        items_per_view: ItemsPerViewConfig {
            small: 1,
            medium: 2,
            large: 3,
        },
        controls: ControlsPlacement::BelowCenter,
        paging: PagingMode::Looping,
        ..CarouselConfig::default()
    }
}

/// Credentials for the HTTP mail relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Relay endpoint, e.g. "https://relay.example.com/v1/send"
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RelayConfig {
    /// All three settings are present and non-empty
    pub fn is_complete(&self) -> bool {
        [&self.url, &self.username, &self.password]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Remote contact endpoint. When unset, submissions are handled in-process.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub relay: RelayConfig,
    /// Inbox receiving contact messages
    #[serde(default = "default_contact_to")]
    pub to: String,
    /// Sender address on outgoing messages
    #[serde(default = "default_contact_from")]
    pub from: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            relay: RelayConfig::default(),
            to: default_contact_to(),
            from: default_contact_from(),
            request_timeout_secs: default_timeout(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-s>" (Ctrl+s), "<S-Tab>" (Shift+Tab), "<CR>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Focus the next section
    #[serde(default = "default_key_focus_next")]
    pub focus_next: String,
    /// Focus the previous section
    #[serde(default = "default_key_focus_prev")]
    pub focus_prev: String,
    /// Next slide in the focused carousel
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Previous slide in the focused carousel
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    /// First page of the focused carousel
    #[serde(default = "default_key_first_page")]
    pub first_page: String,
    /// Last page of the focused carousel
    #[serde(default = "default_key_last_page")]
    pub last_page: String,
    /// Hold autoplay of the focused carousel, as if hovered
    #[serde(default = "default_key_toggle_hold")]
    pub toggle_hold: String,
    /// Start editing the contact form
    #[serde(default = "default_key_edit")]
    pub edit: String,
    /// Submit the contact form
    #[serde(default = "default_key_submit")]
    pub submit: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            focus_next: default_key_focus_next(),
            focus_prev: default_key_focus_prev(),
            next_slide: default_key_next_slide(),
            prev_slide: default_key_prev_slide(),
            first_page: default_key_first_page(),
            last_page: default_key_last_page(),
            toggle_hold: default_key_toggle_hold(),
            edit: default_key_edit(),
            submit: default_key_submit(),
            help: default_key_help(),
        }
    }
}

/// Slides shown by the two carousels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_guest_slides")]
    pub guests: Vec<GuestSlide>,
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<Testimonial>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            guests: default_guest_slides(),
            testimonials: default_testimonials(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_focus_next() -> String { "<Tab>".to_string() }
fn default_key_focus_prev() -> String { "<S-Tab>".to_string() }
fn default_key_next_slide() -> String { "l".to_string() }
fn default_key_prev_slide() -> String { "h".to_string() }
fn default_key_first_page() -> String { "g".to_string() }
fn default_key_last_page() -> String { "G".to_string() }
fn default_key_toggle_hold() -> String { "p".to_string() }
fn default_key_edit() -> String { "<CR>".to_string() }
fn default_key_submit() -> String { "<C-s>".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showreel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_gap() -> f64 {
    16.0
}

fn default_autoplay_delay() -> u64 {
    3500
}

fn default_transition_ms() -> u64 {
    600
}

fn default_per_view_small() -> usize {
    1
}

fn default_per_view_medium() -> usize {
    2
}

fn default_per_view_large() -> usize {
    4
}

fn default_medium_min() -> f64 {
    640.0
}

fn default_large_min() -> f64 {
    1024.0
}

fn default_contact_to() -> String {
    "demo@example.com".to_string()
}

fn default_contact_from() -> String {
    "no-reply@example.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Environment variables that override the contact settings
pub const ENV_RELAY_URL: &str = "SHOWREEL_RELAY_URL";
pub const ENV_RELAY_USER: &str = "SHOWREEL_RELAY_USER";
pub const ENV_RELAY_PASSWORD: &str = "SHOWREEL_RELAY_PASSWORD";
pub const ENV_CONTACT_TO: &str = "SHOWREEL_CONTACT_TO";
pub const ENV_CONTACT_FROM: &str = "SHOWREEL_CONTACT_FROM";

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
    /// Load configuration from the default path, then apply environment overrides
    pub fn load() -> crate::Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Override contact settings from environment-style lookups.
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_RELAY_URL) {
            self.contact.relay.url = Some(url);
        }
        if let Some(user) = get(ENV_RELAY_USER) {
            self.contact.relay.username = Some(user);
        }
        if let Some(password) = get(ENV_RELAY_PASSWORD) {
            self.contact.relay.password = Some(password);
        }
        if let Some(to) = get(ENV_CONTACT_TO) {
            self.contact.to = to;
        }
        if let Some(from) = get(ENV_CONTACT_FROM) {
            self.contact.from = from;
        }
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showreel")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showreel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
