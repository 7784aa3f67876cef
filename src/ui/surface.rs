//! Geometry-level rendering contract.
//!
//! The menu engine never touches pixels; it measures text, places pills and
//! rows, and hands the resulting geometry to a `RenderSurface` owned by the
//! host shell (framebuffer blitter on device, a line printer in the dev
//! harness, a recorder in tests).

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline(always)]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Shift right by `n` (narrowing the rect accordingly).
    #[inline(always)]
    pub const fn dx(self, n: i32) -> Self {
        Self {
            x: self.x + n,
            w: self.w - n,
            ..self
        }
    }

    /// Shift down by `n` (shrinking the rect accordingly).
    #[inline(always)]
    pub const fn dy(self, n: i32) -> Self {
        Self {
            y: self.y + n,
            h: self.h - n,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontSize {
    Tiny,
    Small,
    Large,
}

/// Highlight treatment for a row pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillEmphasis {
    /// Full-row backdrop behind the selected row.
    Light,
    /// Tight pill behind the selected name.
    Dark,
}

pub trait RenderSurface {
    /// Width in pixels of `text` rendered at `font`.
    fn text_width(&self, font: FontSize, text: &str) -> i32;

    fn fill_pill(&mut self, rect: Rect, emphasis: PillEmphasis);

    /// Solid fill with a packed 0xRRGGBB color (color swatches, separators).
    fn fill_rect(&mut self, rect: Rect, rgb: u32);

    fn draw_text(&mut self, font: FontSize, text: &str, x: i32, y: i32, rgb: u32);

    /// Centered standalone message (e.g. an empty list).
    fn draw_message(&mut self, text: &str, rect: Rect);
}

/* ------------------------------- theme ------------------------------- */

/// Row metrics shared by every list style.
pub const ROW_HEIGHT: i32 = 30;
pub const OPTION_PADDING: i32 = 8;
pub const BUTTON_PADDING: i32 = 12;
pub const SWATCH_SIZE: i32 = 16;

/// Resolved colors and metrics for one draw pass. Built from the config
/// store and passed explicitly into draw calls; draw code reads no globals.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub color_main: u32,
    pub color_accent: u32,
    pub color_accent2: u32,
    pub color_hint: u32,
    pub color_list: u32,
    pub color_list_selected: u32,
    pub row_h: i32,
    pub option_padding: i32,
    pub button_padding: i32,
}

impl Theme {
    pub fn from_config(cfg: &config::Config) -> Self {
        Self {
            color_main: cfg.color_main,
            color_accent: cfg.color_accent,
            color_accent2: cfg.color_accent2,
            color_hint: cfg.color_hint,
            color_list: cfg.color_list,
            color_list_selected: cfg.color_list_selected,
            row_h: ROW_HEIGHT,
            option_padding: OPTION_PADDING,
            button_padding: BUTTON_PADDING,
        }
    }
}
