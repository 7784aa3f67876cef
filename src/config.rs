use log::{LevelFilter, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use directories::ProjectDirs;

use crate::ui::color::rgb_hex;

const CONFIG_FILE: &str = "padshell.ini";

// --- Minimal INI reader ---
#[derive(Debug, Default)]
pub struct SimpleIni {
    sections: HashMap<String, HashMap<String, String>>,
}

impl SimpleIni {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        self.load_str(&content);
        Ok(())
    }

    pub fn load_str(&mut self, content: &str) {
        self.sections.clear();

        let mut current_section: Option<String> = None;

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            // Section header: [SectionName]
            if line.starts_with('[') && line.ends_with(']') && line.len() >= 2 {
                let name = &line[1..line.len() - 1];
                let section = name.trim().to_string();
                current_section = Some(section.clone());
                self.sections.entry(section).or_default();
                continue;
            }

            // Key/value pair: key=value
            if let Some(eq_idx) = line.find('=') {
                let (key_raw, value_raw) = line.split_at(eq_idx);
                let key = key_raw.trim();
                if key.is_empty() {
                    continue;
                }
                // Skip '=' and trim whitespace from the value.
                let value = value_raw[1..].trim().to_string();
                let section = current_section.clone().unwrap_or_default();
                self.sections
                    .entry(section)
                    .or_default()
                    .insert(key.to_string(), value);
            }
        }
    }

    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        self.sections.get(section).and_then(|s| s.get(key)).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultView {
    ContentList,
    GameSwitcher,
    QuickMenu,
}

impl DefaultView {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContentList => "ContentList",
            Self::GameSwitcher => "GameSwitcher",
            Self::QuickMenu => "QuickMenu",
        }
    }
}

impl FromStr for DefaultView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contentlist" => Ok(Self::ContentList),
            "gameswitcher" => Ok(Self::GameSwitcher),
            "quickmenu" => Ok(Self::QuickMenu),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Error => "Error",
            Self::Warn => "Warn",
            Self::Info => "Info",
            Self::Debug => "Debug",
            Self::Trace => "Trace",
        }
    }

    pub const fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

/// On-disk naming scheme for in-game saves (e.g. Game.gba.sav vs Game.srm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    MinUi,
    RetroArch,
    RetroArchUncompressed,
    Generic,
}

impl SaveFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MinUi => "MinUI",
            Self::RetroArch => "RetroArch",
            Self::RetroArchUncompressed => "RetroArchUncompressed",
            Self::Generic => "Generic",
        }
    }
}

impl FromStr for SaveFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minui" => Ok(Self::MinUi),
            "retroarch" => Ok(Self::RetroArch),
            "retroarchuncompressed" => Ok(Self::RetroArchUncompressed),
            "generic" => Ok(Self::Generic),
            _ => Err(()),
        }
    }
}

/// Naming scheme for save states (Game.st0 vs Game.state.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    MinUi,
    RetroArch,
    RetroArchUncompressed,
}

impl StateFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MinUi => "MinUI",
            Self::RetroArch => "RetroArch",
            Self::RetroArchUncompressed => "RetroArchUncompressed",
        }
    }
}

impl FromStr for StateFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minui" => Ok(Self::MinUi),
            "retroarch" => Ok(Self::RetroArch),
            "retroarchuncompressed" => Ok(Self::RetroArchUncompressed),
            _ => Err(()),
        }
    }
}

/// Which configured theme color a setter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Main,
    Accent,
    Accent2,
    Hint,
    List,
    ListSelected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// 0=OG, 1=Next, 2=NotoSans.
    pub font_id: u8,
    // Theme colors, packed 0xRRGGBB.
    pub color_main: u32,
    pub color_accent: u32,
    pub color_accent2: u32,
    pub color_hint: u32,
    pub color_list: u32,
    pub color_list_selected: u32,
    pub show_battery_percent: bool,
    pub menu_animations: bool,
    pub menu_transitions: bool,
    pub show_recents: bool,
    pub show_game_art: bool,
    /// Use the emulator folder's background image for its ROM list.
    pub roms_use_folder_background: bool,
    pub show_quickswitcher: bool,
    pub haptics: bool,
    pub clock_24h: bool,
    pub show_clock: bool,
    /// Corner radius of game art thumbnails, px.
    pub thumbnail_radius: u8,
    /// Game art width as a percentage of the screen, 5..=100.
    pub game_art_width: u8,
    /// 0 = never dim.
    pub screen_timeout_secs: u32,
    /// 0 = never suspend.
    pub suspend_timeout_secs: u32,
    pub default_view: DefaultView,
    pub save_format: SaveFormat,
    pub state_format: StateFormat,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_id: 0,
            color_main: rgb_hex("#FFFFFF"),
            color_accent: rgb_hex("#9B2257"),
            color_accent2: rgb_hex("#1E2329"),
            color_hint: rgb_hex("#505050"),
            color_list: rgb_hex("#FFFFFF"),
            color_list_selected: rgb_hex("#000000"),
            show_battery_percent: false,
            menu_animations: true,
            menu_transitions: true,
            show_recents: true,
            show_game_art: true,
            roms_use_folder_background: true,
            show_quickswitcher: true,
            haptics: true,
            clock_24h: true,
            show_clock: false,
            thumbnail_radius: 8,
            game_art_width: 50,
            screen_timeout_secs: 60,
            suspend_timeout_secs: 30,
            default_view: DefaultView::ContentList,
            save_format: SaveFormat::MinUi,
            state_format: StateFormat::MinUi,
            log_level: LogLevel::Info,
        }
    }
}

// Global, mutable configuration instance.
static CONFIG: std::sync::LazyLock<Mutex<Config>> =
    std::sync::LazyLock::new(|| Mutex::new(Config::default()));

// --- File I/O ---

fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "padshell")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

fn parse_rgb(s: &str) -> Option<u32> {
    let hex = s
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Serialize `cfg` as INI text. [Options] keys in alphabetical order,
/// [Theme] section last.
fn render_ini(cfg: &Config) -> String {
    let mut content = String::new();

    content.push_str("[Options]\n");
    content.push_str(&format!(
        "Clock24h={}\n",
        if cfg.clock_24h { "1" } else { "0" }
    ));
    content.push_str(&format!("DefaultView={}\n", cfg.default_view.as_str()));
    content.push_str(&format!("FontId={}\n", cfg.font_id.min(2)));
    content.push_str(&format!(
        "GameArtWidth={}\n",
        cfg.game_art_width.clamp(5, 100)
    ));
    content.push_str(&format!(
        "Haptics={}\n",
        if cfg.haptics { "1" } else { "0" }
    ));
    content.push_str(&format!("LogLevel={}\n", cfg.log_level.as_str()));
    content.push_str(&format!(
        "MenuAnimations={}\n",
        if cfg.menu_animations { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "MenuTransitions={}\n",
        if cfg.menu_transitions { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "RomsUseFolderBackground={}\n",
        if cfg.roms_use_folder_background { "1" } else { "0" }
    ));
    content.push_str(&format!("SaveFormat={}\n", cfg.save_format.as_str()));
    content.push_str(&format!(
        "ScreenTimeoutSecs={}\n",
        cfg.screen_timeout_secs
    ));
    content.push_str(&format!(
        "ShowBatteryPercent={}\n",
        if cfg.show_battery_percent { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "ShowClock={}\n",
        if cfg.show_clock { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "ShowGameArt={}\n",
        if cfg.show_game_art { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "ShowQuickswitcher={}\n",
        if cfg.show_quickswitcher { "1" } else { "0" }
    ));
    content.push_str(&format!(
        "ShowRecents={}\n",
        if cfg.show_recents { "1" } else { "0" }
    ));
    content.push_str(&format!("StateFormat={}\n", cfg.state_format.as_str()));
    content.push_str(&format!(
        "SuspendTimeoutSecs={}\n",
        cfg.suspend_timeout_secs
    ));
    content.push_str(&format!("ThumbnailRadius={}\n", cfg.thumbnail_radius.min(24)));
    content.push('\n');

    content.push_str("[Theme]\n");
    content.push_str(&format!("ColorAccent=0x{:06X}\n", cfg.color_accent));
    content.push_str(&format!("ColorAccent2=0x{:06X}\n", cfg.color_accent2));
    content.push_str(&format!("ColorHint=0x{:06X}\n", cfg.color_hint));
    content.push_str(&format!("ColorList=0x{:06X}\n", cfg.color_list));
    content.push_str(&format!(
        "ColorListSelected=0x{:06X}\n",
        cfg.color_list_selected
    ));
    content.push_str(&format!("ColorMain=0x{:06X}\n", cfg.color_main));
    content.push('\n');

    content
}

/// Populate `cfg` from parsed INI, using defaults for any missing keys.
fn apply_ini(cfg: &mut Config, conf: &SimpleIni) {
    let default = Config::default();

    cfg.font_id = conf
        .get("Options", "FontId")
        .and_then(|v| v.parse::<u8>().ok())
        .map(|v| v.min(2))
        .unwrap_or(default.font_id);
    cfg.clock_24h = conf
        .get("Options", "Clock24h")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.clock_24h, |v| v != 0);
    cfg.show_clock = conf
        .get("Options", "ShowClock")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.show_clock, |v| v != 0);
    cfg.show_battery_percent = conf
        .get("Options", "ShowBatteryPercent")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.show_battery_percent, |v| v != 0);
    cfg.menu_animations = conf
        .get("Options", "MenuAnimations")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.menu_animations, |v| v != 0);
    cfg.menu_transitions = conf
        .get("Options", "MenuTransitions")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.menu_transitions, |v| v != 0);
    cfg.show_recents = conf
        .get("Options", "ShowRecents")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.show_recents, |v| v != 0);
    cfg.show_game_art = conf
        .get("Options", "ShowGameArt")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.show_game_art, |v| v != 0);
    cfg.roms_use_folder_background = conf
        .get("Options", "RomsUseFolderBackground")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.roms_use_folder_background, |v| v != 0);
    cfg.show_quickswitcher = conf
        .get("Options", "ShowQuickswitcher")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.show_quickswitcher, |v| v != 0);
    cfg.haptics = conf
        .get("Options", "Haptics")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(default.haptics, |v| v != 0);
    cfg.thumbnail_radius = conf
        .get("Options", "ThumbnailRadius")
        .and_then(|v| v.parse::<u8>().ok())
        .map(|v| v.min(24))
        .unwrap_or(default.thumbnail_radius);
    cfg.game_art_width = conf
        .get("Options", "GameArtWidth")
        .and_then(|v| v.parse::<u8>().ok())
        .map(|v| v.clamp(5, 100))
        .unwrap_or(default.game_art_width);
    cfg.screen_timeout_secs = conf
        .get("Options", "ScreenTimeoutSecs")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default.screen_timeout_secs);
    cfg.suspend_timeout_secs = conf
        .get("Options", "SuspendTimeoutSecs")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default.suspend_timeout_secs);
    cfg.default_view = conf
        .get("Options", "DefaultView")
        .and_then(|v| DefaultView::from_str(&v).ok())
        .unwrap_or(default.default_view);
    cfg.save_format = conf
        .get("Options", "SaveFormat")
        .and_then(|v| SaveFormat::from_str(&v).ok())
        .unwrap_or(default.save_format);
    cfg.state_format = conf
        .get("Options", "StateFormat")
        .and_then(|v| StateFormat::from_str(&v).ok())
        .unwrap_or(default.state_format);
    cfg.log_level = conf
        .get("Options", "LogLevel")
        .and_then(|v| LogLevel::from_str(&v).ok())
        .unwrap_or(default.log_level);

    cfg.color_main = conf
        .get("Theme", "ColorMain")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_main);
    cfg.color_accent = conf
        .get("Theme", "ColorAccent")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_accent);
    cfg.color_accent2 = conf
        .get("Theme", "ColorAccent2")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_accent2);
    cfg.color_hint = conf
        .get("Theme", "ColorHint")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_hint);
    cfg.color_list = conf
        .get("Theme", "ColorList")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_list);
    cfg.color_list_selected = conf
        .get("Theme", "ColorListSelected")
        .and_then(|v| parse_rgb(&v))
        .unwrap_or(default.color_list_selected);
}

fn create_default_config_file(path: &Path) -> Result<(), std::io::Error> {
    info!("'{}' not found, creating with default values.", path.display());
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_ini(&Config::default()))
}

pub fn load() {
    let path = config_path();
    if !path.exists()
        && let Err(e) = create_default_config_file(&path)
    {
        warn!("Failed to create default config file: {e}");
    }

    let mut conf = SimpleIni::new();
    match conf.load(&path) {
        Ok(()) => {
            let mut cfg = CONFIG.lock().unwrap();
            apply_ini(&mut cfg, &conf);
        }
        Err(e) => {
            warn!(
                "Could not load '{}' ({e}), using default configuration.",
                path.display()
            );
        }
    }
}

fn save() {
    let cfg = CONFIG.lock().unwrap();
    let content = render_ini(&cfg);
    if let Err(e) = std::fs::write(config_path(), content) {
        warn!("Failed to save config file: {e}");
    }
}

pub fn get() -> Config {
    *CONFIG.lock().unwrap()
}

// --- Field updates; no change, no disk write. ---

pub fn update_font_id(font_id: u8) {
    let font_id = font_id.min(2);
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.font_id == font_id {
            return;
        }
        cfg.font_id = font_id;
    }
    save();
}

pub fn update_color(role: ColorRole, rgb: u32) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        let slot = match role {
            ColorRole::Main => &mut cfg.color_main,
            ColorRole::Accent => &mut cfg.color_accent,
            ColorRole::Accent2 => &mut cfg.color_accent2,
            ColorRole::Hint => &mut cfg.color_hint,
            ColorRole::List => &mut cfg.color_list,
            ColorRole::ListSelected => &mut cfg.color_list_selected,
        };
        if *slot == rgb {
            return;
        }
        *slot = rgb;
    }
    save();
}

pub fn color_of(role: ColorRole) -> u32 {
    let cfg = CONFIG.lock().unwrap();
    match role {
        ColorRole::Main => cfg.color_main,
        ColorRole::Accent => cfg.color_accent,
        ColorRole::Accent2 => cfg.color_accent2,
        ColorRole::Hint => cfg.color_hint,
        ColorRole::List => cfg.color_list,
        ColorRole::ListSelected => cfg.color_list_selected,
    }
}

pub fn update_show_battery_percent(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.show_battery_percent == on {
            return;
        }
        cfg.show_battery_percent = on;
    }
    save();
}

pub fn update_menu_animations(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.menu_animations == on {
            return;
        }
        cfg.menu_animations = on;
    }
    save();
}

pub fn update_menu_transitions(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.menu_transitions == on {
            return;
        }
        cfg.menu_transitions = on;
    }
    save();
}

pub fn update_show_recents(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.show_recents == on {
            return;
        }
        cfg.show_recents = on;
    }
    save();
}

pub fn update_show_game_art(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.show_game_art == on {
            return;
        }
        cfg.show_game_art = on;
    }
    save();
}

pub fn update_roms_use_folder_background(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.roms_use_folder_background == on {
            return;
        }
        cfg.roms_use_folder_background = on;
    }
    save();
}

pub fn update_show_quickswitcher(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.show_quickswitcher == on {
            return;
        }
        cfg.show_quickswitcher = on;
    }
    save();
}

pub fn update_haptics(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.haptics == on {
            return;
        }
        cfg.haptics = on;
    }
    save();
}

pub fn update_clock_24h(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.clock_24h == on {
            return;
        }
        cfg.clock_24h = on;
    }
    save();
}

pub fn update_show_clock(on: bool) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.show_clock == on {
            return;
        }
        cfg.show_clock = on;
    }
    save();
}

pub fn update_thumbnail_radius(px: u8) {
    let px = px.min(24);
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.thumbnail_radius == px {
            return;
        }
        cfg.thumbnail_radius = px;
    }
    save();
}

pub fn update_game_art_width(percent: u8) {
    let percent = percent.clamp(5, 100);
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.game_art_width == percent {
            return;
        }
        cfg.game_art_width = percent;
    }
    save();
}

pub fn update_screen_timeout(secs: u32) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.screen_timeout_secs == secs {
            return;
        }
        cfg.screen_timeout_secs = secs;
    }
    save();
}

pub fn update_suspend_timeout(secs: u32) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.suspend_timeout_secs == secs {
            return;
        }
        cfg.suspend_timeout_secs = secs;
    }
    save();
}

pub fn update_default_view(view: DefaultView) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.default_view == view {
            return;
        }
        cfg.default_view = view;
    }
    save();
}

pub fn update_save_format(format: SaveFormat) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.save_format == format {
            return;
        }
        cfg.save_format = format;
    }
    save();
}

pub fn update_state_format(format: StateFormat) {
    {
        let mut cfg = CONFIG.lock().unwrap();
        if cfg.state_format == format {
            return;
        }
        cfg.state_format = format;
    }
    save();
}

#[cfg(test)]
mod tests {
    use super::{
        Config, DefaultView, LogLevel, SaveFormat, SimpleIni, StateFormat, apply_ini, parse_rgb,
        render_ini,
    };
    use std::str::FromStr;

    #[test]
    fn simple_ini_skips_comments_and_trims_whitespace() {
        let mut ini = SimpleIni::new();
        ini.load_str(
            "; comment\n# another\n[Options]\n  FontId = 2  \n\n[Theme]\nColorMain=0xABCDEF\n",
        );
        assert_eq!(ini.get("Options", "FontId").as_deref(), Some("2"));
        assert_eq!(ini.get("Theme", "ColorMain").as_deref(), Some("0xABCDEF"));
        assert_eq!(ini.get("Options", "Missing"), None);
    }

    #[test]
    fn render_then_apply_round_trips_a_modified_config() {
        let mut cfg = Config {
            font_id: 2,
            color_accent: 0x00FF7F,
            show_clock: true,
            clock_24h: false,
            thumbnail_radius: 12,
            game_art_width: 75,
            screen_timeout_secs: 120,
            suspend_timeout_secs: 0,
            roms_use_folder_background: false,
            show_quickswitcher: false,
            default_view: DefaultView::GameSwitcher,
            save_format: SaveFormat::RetroArchUncompressed,
            state_format: StateFormat::RetroArch,
            log_level: LogLevel::Debug,
            ..Config::default()
        };
        let mut ini = SimpleIni::new();
        ini.load_str(&render_ini(&cfg));
        let mut parsed = Config::default();
        apply_ini(&mut parsed, &ini);
        assert_eq!(parsed, cfg);

        // Out-of-range fields are clamped on the way out.
        cfg.game_art_width = 200;
        ini.load_str(&render_ini(&cfg));
        apply_ini(&mut parsed, &ini);
        assert_eq!(parsed.game_art_width, 100);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let mut ini = SimpleIni::new();
        ini.load_str("[Options]\nFontId=1\n");
        let mut cfg = Config::default();
        apply_ini(&mut cfg, &ini);
        assert_eq!(cfg.font_id, 1);
        assert_eq!(cfg.color_main, Config::default().color_main);
        assert_eq!(cfg.default_view, DefaultView::ContentList);
    }

    #[test]
    fn rgb_values_parse_with_or_without_prefix() {
        assert_eq!(parse_rgb("0x9B2257"), Some(0x9B2257));
        assert_eq!(parse_rgb("#1E2329"), Some(0x1E2329));
        assert_eq!(parse_rgb("FFFFFF"), Some(0xFFFFFF));
        assert_eq!(parse_rgb("0xFFF"), None);
        assert_eq!(parse_rgb("nope"), None);
    }

    #[test]
    fn enum_fields_parse_case_insensitively() {
        assert_eq!(
            DefaultView::from_str("gameswitcher"),
            Ok(DefaultView::GameSwitcher)
        );
        assert_eq!(LogLevel::from_str("TRACE"), Ok(LogLevel::Trace));
        assert_eq!(SaveFormat::from_str("minui"), Ok(SaveFormat::MinUi));
        assert_eq!(
            StateFormat::from_str("RetroArchUncompressed"),
            Ok(StateFormat::RetroArchUncompressed)
        );
        assert!(DefaultView::from_str("bogus").is_err());
        assert!(SaveFormat::from_str("zip").is_err());
    }
}
