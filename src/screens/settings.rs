//! The assembled settings tree: a top-level menu deferring into
//! Appearance, Display, System and About submenus, every row bound to the
//! config store or a platform value provider.

use crate::config::{self, ColorRole, Config, DefaultView, SaveFormat, StateFormat};
use crate::core::input::Pad;
use crate::menu::{
    EntryKind, ListStyle, MenuEntry, MenuList, MenuRegistry, ReactionHint, TaggedValue,
    defer_to_submenu, reset_current_menu,
};
use crate::platform;
use crate::ui::color::{THEME_SWATCHES, theme_swatch_labels};
use crate::ui::surface::{Rect, RenderSurface, Theme};

pub const FONT_NAMES: [&str; 3] = ["OG", "Next", "NotoSans"];

/// Idle timer steps shared by the screen and suspend timeouts.
pub const TIMEOUT_SECS: [u32; 12] = [0, 5, 10, 15, 30, 45, 60, 90, 120, 240, 360, 600];
pub const TIMEOUT_LABELS: [&str; 12] = [
    "Never", "5s", "10s", "15s", "30s", "45s", "60s", "90s", "2m", "4m", "6m", "10m",
];

/// Root list plus the registry owning every submenu it can defer into.
pub struct SettingsScreen {
    root: MenuList,
    registry: MenuRegistry,
}

impl SettingsScreen {
    pub fn handle_input(&mut self, pad: &Pad, dirty: &mut bool, closed: &mut bool) -> ReactionHint {
        self.root.handle_input(pad, &mut self.registry, dirty, closed)
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface, rect: Rect, theme: &Theme) {
        self.root.draw(surface, rect, theme, &self.registry);
    }

    pub fn root(&self) -> &MenuList {
        &self.root
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }
}

/* ----------------------------- entry helpers ----------------------------- */

// Providers are free functions, so rows bind through plain fn pointers and
// the closures stay capture-light.

fn toggle(
    name: &str,
    desc: &str,
    get: fn() -> bool,
    set: fn(bool),
    default: bool,
) -> MenuEntry {
    MenuEntry::builder(name, desc)
        .values([TaggedValue::Bool(false), TaggedValue::Bool(true)])
        .get(move || Some(TaggedValue::Bool(get())))
        .set(move |v| {
            if let TaggedValue::Bool(b) = v {
                set(*b);
            }
        })
        .reset(move || set(default))
        .build()
}

fn calibration(
    name: &str,
    desc: &str,
    min: i32,
    max: i32,
    suffix: &str,
    get: fn() -> i32,
    set: fn(i32),
    default: i32,
) -> MenuEntry {
    MenuEntry::builder(name, desc)
        .range(min, max, suffix)
        .get(move || Some(TaggedValue::Int(get())))
        .set(move |v| {
            if let TaggedValue::Int(n) = v {
                set(*n);
            }
        })
        .reset(move || set(default))
        .build()
}

fn theme_color(name: &str, desc: &str, role: ColorRole, default: u32) -> MenuEntry {
    MenuEntry::builder(name, desc)
        .kind(EntryKind::Color)
        .values(THEME_SWATCHES.iter().map(|&rgb| TaggedValue::Color(rgb)))
        .labels(theme_swatch_labels())
        .get(move || Some(TaggedValue::Color(config::color_of(role))))
        .set(move |v| {
            if let TaggedValue::Color(rgb) = v {
                config::update_color(role, *rgb);
            }
        })
        .reset(move || config::update_color(role, default))
        .build()
}

fn timeout(name: &str, desc: &str, get: fn() -> u32, set: fn(u32), default: u32) -> MenuEntry {
    MenuEntry::builder(name, desc)
        .values(TIMEOUT_SECS.iter().map(|&s| TaggedValue::UInt(s)))
        .labels(TIMEOUT_LABELS)
        .get(move || Some(TaggedValue::UInt(get())))
        .set(move |v| {
            if let TaggedValue::UInt(s) = v {
                set(*s);
            }
        })
        .reset(move || set(default))
        .build()
}

fn reset_button() -> MenuEntry {
    MenuEntry::builder("Reset to defaults", "Restore every setting in this menu")
        .kind(EntryKind::Button)
        .confirm(reset_current_menu)
        .build()
}

/// Read-only About row: one candidate, no callbacks.
fn info_row(name: &str, value: &str) -> MenuEntry {
    MenuEntry::builder(name, "")
        .values([TaggedValue::Text(value.to_string())])
        .build()
}

/* ------------------------------- submenus ------------------------------- */

fn build_appearance() -> MenuList {
    let d = Config::default();
    let entries = vec![
        MenuEntry::builder("Font", "Interface typeface")
            .values((0..3).map(TaggedValue::Int))
            .labels(FONT_NAMES)
            .get(|| Some(TaggedValue::Int(i32::from(config::get().font_id))))
            .set(|v| {
                if let TaggedValue::Int(n) = v {
                    config::update_font_id(*n as u8);
                }
            })
            .reset(move || config::update_font_id(d.font_id))
            .build(),
        theme_color("Main Color", "Headings and highlights", ColorRole::Main, d.color_main),
        theme_color("Accent Color", "Pills and selection", ColorRole::Accent, d.color_accent),
        theme_color("Secondary Accent", "Panels and chips", ColorRole::Accent2, d.color_accent2),
        theme_color("Hint Color", "Hints and descriptions", ColorRole::Hint, d.color_hint),
        theme_color("List Text", "Unselected rows", ColorRole::List, d.color_list),
        theme_color(
            "Selected List Text",
            "The highlighted row",
            ColorRole::ListSelected,
            d.color_list_selected,
        ),
        toggle(
            "Battery Percentage",
            "Show the charge level next to the battery icon",
            || config::get().show_battery_percent,
            config::update_show_battery_percent,
            d.show_battery_percent,
        ),
        toggle(
            "Menu Animations",
            "Animate list scrolling",
            || config::get().menu_animations,
            config::update_menu_animations,
            d.menu_animations,
        ),
        toggle(
            "Menu Transitions",
            "Fade between screens",
            || config::get().menu_transitions,
            config::update_menu_transitions,
            d.menu_transitions,
        ),
        MenuEntry::builder("Art Corner Radius", "Rounding of game art thumbnails")
            .range(0, 24, "px")
            .get(|| Some(TaggedValue::Int(i32::from(config::get().thumbnail_radius))))
            .set(|v| {
                if let TaggedValue::Int(n) = v {
                    config::update_thumbnail_radius(*n as u8);
                }
            })
            .reset(move || config::update_thumbnail_radius(d.thumbnail_radius))
            .build(),
        MenuEntry::builder("Game Art Width", "Horizontal share of the screen")
            .range(5, 100, "%")
            .get(|| Some(TaggedValue::Int(i32::from(config::get().game_art_width))))
            .set(|v| {
                if let TaggedValue::Int(n) = v {
                    config::update_game_art_width(*n as u8);
                }
            })
            .reset(move || config::update_game_art_width(d.game_art_width))
            .build(),
        toggle(
            "Show Recents",
            "List recently played games on the home screen",
            || config::get().show_recents,
            config::update_show_recents,
            d.show_recents,
        ),
        toggle(
            "Show Game Art",
            "Display box art beside the content list",
            || config::get().show_game_art,
            config::update_show_game_art,
            d.show_game_art,
        ),
        toggle(
            "Folder Background for ROMs",
            "Use the emulator folder's background image instead of the default",
            || config::get().roms_use_folder_background,
            config::update_roms_use_folder_background,
            d.roms_use_folder_background,
        ),
        toggle(
            "Show Quickswitcher UI",
            "When hidden, the quickswitcher draws only background images",
            || config::get().show_quickswitcher,
            config::update_show_quickswitcher,
            d.show_quickswitcher,
        ),
        reset_button(),
    ];
    MenuList::new(ListStyle::FullWidth, "Appearance", entries)
}

fn build_display() -> MenuList {
    let entries = vec![
        calibration(
            "Brightness",
            "Backlight level",
            platform::BRIGHTNESS_MIN,
            platform::BRIGHTNESS_MAX,
            "",
            platform::get_brightness,
            platform::set_brightness,
            platform::BRIGHTNESS_DEFAULT,
        ),
        calibration(
            "Color Temperature",
            "Warm to cool white point",
            platform::COLORTEMP_MIN,
            platform::COLORTEMP_MAX,
            "",
            platform::get_colortemp,
            platform::set_colortemp,
            platform::COLORTEMP_DEFAULT,
        ),
        calibration(
            "Contrast",
            "",
            platform::CONTRAST_MIN,
            platform::CONTRAST_MAX,
            "",
            platform::get_contrast,
            platform::set_contrast,
            platform::CONTRAST_DEFAULT,
        ),
        calibration(
            "Saturation",
            "",
            platform::SATURATION_MIN,
            platform::SATURATION_MAX,
            "",
            platform::get_saturation,
            platform::set_saturation,
            platform::SATURATION_DEFAULT,
        ),
        calibration(
            "Exposure",
            "",
            platform::EXPOSURE_MIN,
            platform::EXPOSURE_MAX,
            "",
            platform::get_exposure,
            platform::set_exposure,
            platform::EXPOSURE_DEFAULT,
        ),
        reset_button(),
    ];
    MenuList::new(ListStyle::FullWidth, "Display", entries)
}

fn volume_labels() -> Vec<String> {
    (0..=20)
        .map(|step| {
            if step == 0 {
                "Muted".to_string()
            } else {
                format!("{}%", step * 5)
            }
        })
        .collect()
}

fn build_system() -> MenuList {
    let d = Config::default();
    let entries = vec![
        MenuEntry::builder("Volume", "Speaker loudness")
            .values((0..=20).map(TaggedValue::Int))
            .labels(volume_labels())
            .get(|| Some(TaggedValue::Int(platform::get_volume())))
            .set(|v| {
                if let TaggedValue::Int(n) = v {
                    platform::set_volume(*n);
                }
            })
            .reset(|| platform::set_volume(platform::VOLUME_DEFAULT))
            .build(),
        timeout(
            "Screen Timeout",
            "Idle time before the screen dims",
            || config::get().screen_timeout_secs,
            config::update_screen_timeout,
            d.screen_timeout_secs,
        ),
        timeout(
            "Suspend Timeout",
            "Idle time before the device sleeps",
            || config::get().suspend_timeout_secs,
            config::update_suspend_timeout,
            d.suspend_timeout_secs,
        ),
        toggle(
            "Haptics",
            "Vibration feedback on button presses",
            || config::get().haptics,
            config::update_haptics,
            d.haptics,
        ),
        MenuEntry::builder("Default View", "Screen shown at boot")
            .values(
                [
                    DefaultView::ContentList,
                    DefaultView::GameSwitcher,
                    DefaultView::QuickMenu,
                ]
                .map(|view| TaggedValue::Text(view.as_str().to_string())),
            )
            .labels(["Content List", "Game Switcher", "Quick Menu"])
            .get(|| Some(TaggedValue::Text(config::get().default_view.as_str().to_string())))
            .set(|v| {
                if let TaggedValue::Text(s) = v
                    && let Ok(view) = s.parse::<DefaultView>()
                {
                    config::update_default_view(view);
                }
            })
            .reset(move || config::update_default_view(d.default_view))
            .build(),
        toggle(
            "24-Hour Clock",
            "",
            || config::get().clock_24h,
            config::update_clock_24h,
            d.clock_24h,
        ),
        toggle(
            "Show Clock",
            "Display the time in the status bar",
            || config::get().show_clock,
            config::update_show_clock,
            d.show_clock,
        ),
        MenuEntry::builder("Save Format", "File naming for in-game saves")
            .values(
                [
                    SaveFormat::MinUi,
                    SaveFormat::RetroArch,
                    SaveFormat::RetroArchUncompressed,
                    SaveFormat::Generic,
                ]
                .map(|f| TaggedValue::Text(f.as_str().to_string())),
            )
            .labels([
                "MinUI (default)",
                "RetroArch (compressed)",
                "RetroArch (uncompressed)",
                "Generic",
            ])
            .get(|| Some(TaggedValue::Text(config::get().save_format.as_str().to_string())))
            .set(|v| {
                if let TaggedValue::Text(s) = v
                    && let Ok(format) = s.parse::<SaveFormat>()
                {
                    config::update_save_format(format);
                }
            })
            .reset(move || config::update_save_format(d.save_format))
            .build(),
        MenuEntry::builder("Save State Format", "File naming for save states")
            .values(
                [
                    StateFormat::MinUi,
                    StateFormat::RetroArch,
                    StateFormat::RetroArchUncompressed,
                ]
                .map(|f| TaggedValue::Text(f.as_str().to_string())),
            )
            .labels([
                "MinUI (default)",
                "RetroArch (compressed)",
                "RetroArch (uncompressed)",
            ])
            .get(|| Some(TaggedValue::Text(config::get().state_format.as_str().to_string())))
            .set(|v| {
                if let TaggedValue::Text(s) = v
                    && let Ok(format) = s.parse::<StateFormat>()
                {
                    config::update_state_format(format);
                }
            })
            .reset(move || config::update_state_format(d.state_format))
            .build(),
        reset_button(),
    ];
    MenuList::new(ListStyle::FullWidth, "System", entries)
}

fn build_about() -> MenuList {
    let entries = vec![
        info_row("Shell", env!("CARGO_PKG_VERSION")),
        info_row("Model", platform::device_model()),
        info_row("OS Version", platform::os_version()),
    ];
    MenuList::new(ListStyle::NameValue, "About", entries)
}

/* --------------------------------- root --------------------------------- */

pub fn build() -> SettingsScreen {
    let mut registry = MenuRegistry::new();
    let appearance = registry.insert(build_appearance());
    let display = registry.insert(build_display());
    let system = registry.insert(build_system());
    let about = registry.insert(build_about());

    let section = |name: &str, desc: &str, id| {
        MenuEntry::builder(name, desc)
            .confirm(defer_to_submenu)
            .submenu(id)
            .build()
    };
    let root = MenuList::new(
        ListStyle::TopLevel,
        "Settings",
        vec![
            section("Appearance", "Fonts, colors and home screen layout", appearance),
            section("Display", "Panel calibration", display),
            section("System", "Audio, power and boot behavior", system),
            section("About", "Device and firmware details", about),
        ],
    );

    SettingsScreen { root, registry }
}
