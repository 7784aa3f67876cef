//! System value providers for the settings screen.
//!
//! Display calibration and audio state with hardware-shaped ranges and
//! defaults. The in-memory store stands in for the device HAL; the menu
//! engine only ever sees the get/set/default functions below, so swapping
//! in real sysfs writes later does not touch any menu code.

use std::sync::Mutex;

use log::debug;

pub const BRIGHTNESS_MIN: i32 = 0;
pub const BRIGHTNESS_MAX: i32 = 10;
pub const BRIGHTNESS_DEFAULT: i32 = 5;

pub const COLORTEMP_MIN: i32 = 0;
pub const COLORTEMP_MAX: i32 = 40;
pub const COLORTEMP_DEFAULT: i32 = 20;

pub const CONTRAST_MIN: i32 = -4;
pub const CONTRAST_MAX: i32 = 5;
pub const CONTRAST_DEFAULT: i32 = 0;

pub const SATURATION_MIN: i32 = -5;
pub const SATURATION_MAX: i32 = 5;
pub const SATURATION_DEFAULT: i32 = 0;

pub const EXPOSURE_MIN: i32 = -4;
pub const EXPOSURE_MAX: i32 = 5;
pub const EXPOSURE_DEFAULT: i32 = 0;

pub const VOLUME_MIN: i32 = 0;
pub const VOLUME_MAX: i32 = 20;
pub const VOLUME_DEFAULT: i32 = 10;

#[derive(Debug, Clone, Copy)]
struct PlatformState {
    brightness: i32,
    colortemp: i32,
    contrast: i32,
    saturation: i32,
    exposure: i32,
    volume: i32,
}

impl Default for PlatformState {
    fn default() -> Self {
        Self {
            brightness: BRIGHTNESS_DEFAULT,
            colortemp: COLORTEMP_DEFAULT,
            contrast: CONTRAST_DEFAULT,
            saturation: SATURATION_DEFAULT,
            exposure: EXPOSURE_DEFAULT,
            volume: VOLUME_DEFAULT,
        }
    }
}

static STATE: std::sync::LazyLock<Mutex<PlatformState>> =
    std::sync::LazyLock::new(|| Mutex::new(PlatformState::default()));

pub fn get_brightness() -> i32 {
    STATE.lock().unwrap().brightness
}

pub fn set_brightness(value: i32) {
    let value = value.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
    STATE.lock().unwrap().brightness = value;
    debug!("brightness -> {value}");
}

pub fn get_colortemp() -> i32 {
    STATE.lock().unwrap().colortemp
}

pub fn set_colortemp(value: i32) {
    let value = value.clamp(COLORTEMP_MIN, COLORTEMP_MAX);
    STATE.lock().unwrap().colortemp = value;
    debug!("colortemp -> {value}");
}

pub fn get_contrast() -> i32 {
    STATE.lock().unwrap().contrast
}

pub fn set_contrast(value: i32) {
    let value = value.clamp(CONTRAST_MIN, CONTRAST_MAX);
    STATE.lock().unwrap().contrast = value;
    debug!("contrast -> {value}");
}

pub fn get_saturation() -> i32 {
    STATE.lock().unwrap().saturation
}

pub fn set_saturation(value: i32) {
    let value = value.clamp(SATURATION_MIN, SATURATION_MAX);
    STATE.lock().unwrap().saturation = value;
    debug!("saturation -> {value}");
}

pub fn get_exposure() -> i32 {
    STATE.lock().unwrap().exposure
}

pub fn set_exposure(value: i32) {
    let value = value.clamp(EXPOSURE_MIN, EXPOSURE_MAX);
    STATE.lock().unwrap().exposure = value;
    debug!("exposure -> {value}");
}

pub fn get_volume() -> i32 {
    STATE.lock().unwrap().volume
}

pub fn set_volume(value: i32) {
    let value = value.clamp(VOLUME_MIN, VOLUME_MAX);
    STATE.lock().unwrap().volume = value;
    debug!("volume -> {value}");
}

/// Restore every calibration channel and the volume to its default.
pub fn reset_display() {
    let mut st = STATE.lock().unwrap();
    st.brightness = BRIGHTNESS_DEFAULT;
    st.colortemp = COLORTEMP_DEFAULT;
    st.contrast = CONTRAST_DEFAULT;
    st.saturation = SATURATION_DEFAULT;
    st.exposure = EXPOSURE_DEFAULT;
}

pub fn device_model() -> &'static str {
    "TrimUI Brick"
}

pub fn os_version() -> &'static str {
    "padshell 0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the store is global and the runner is parallel.
    #[test]
    fn setters_clamp_and_reset_restores_defaults() {
        set_brightness(99);
        assert_eq!(get_brightness(), BRIGHTNESS_MAX);
        set_contrast(-99);
        assert_eq!(get_contrast(), CONTRAST_MIN);
        set_volume(21);
        assert_eq!(get_volume(), VOLUME_MAX);

        set_colortemp(0);
        set_saturation(5);
        set_exposure(-4);
        reset_display();
        assert_eq!(get_brightness(), BRIGHTNESS_DEFAULT);
        assert_eq!(get_colortemp(), COLORTEMP_DEFAULT);
        assert_eq!(get_contrast(), CONTRAST_DEFAULT);
        assert_eq!(get_saturation(), SATURATION_DEFAULT);
        assert_eq!(get_exposure(), EXPOSURE_DEFAULT);
        set_volume(VOLUME_DEFAULT);
    }
}
