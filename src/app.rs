//! Frame loop: fold input edges, dispatch to the settings tree, redraw
//! when something changed, and report when the shell should close.

use std::io::{BufRead, Write as _};
use std::time::Instant;

use crate::config;
use crate::core::input::{Button, Pad};
use crate::screens::{self, SettingsScreen};
use crate::ui::color::rgb_unpack;
use crate::ui::surface::{
    FontSize, PillEmphasis, Rect, RenderSurface, ROW_HEIGHT, Theme,
};

pub struct App {
    screen: SettingsScreen,
    pad: Pad,
    needs_redraw: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: screens::settings::build(),
            pad: Pad::new(),
            needs_redraw: true,
        }
    }

    pub fn pad_mut(&mut self) -> &mut Pad {
        &mut self.pad
    }

    /// Run one frame. Returns false when the shell wants to quit.
    pub fn frame(&mut self, now: Instant, surface: &mut dyn RenderSurface, rect: Rect) -> bool {
        self.pad.begin_frame(now);

        let mut dirty = false;
        let mut closed = false;
        // Frames with no edge and no repeat tick have nothing to dispatch.
        if self.pad.any_activity() {
            self.screen.handle_input(&self.pad, &mut dirty, &mut closed);
        }

        if dirty || self.needs_redraw {
            let theme = Theme::from_config(&config::get());
            self.screen.draw(surface, rect, &theme);
            self.needs_redraw = false;
        }

        !closed
    }
}

/* --------------------------- terminal harness --------------------------- */

const TERM_RECT: Rect = Rect::new(0, 0, 640, 480);

/// Line-oriented development surface: rows accumulate during a frame and
/// flush as text, with the highlighted row marked.
#[derive(Default)]
struct TermSurface {
    texts: Vec<(i32, i32, String)>,
    highlight_rows: Vec<i32>,
}

impl TermSurface {
    fn flush(&mut self) {
        self.texts.sort_by_key(|&(y, x, _)| (y, x));
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "----------------------------------------");
        let mut row = i32::MIN;
        let mut line = String::new();
        for (y, _, text) in self.texts.drain(..) {
            if y != row {
                if row != i32::MIN {
                    let _ = writeln!(out, "{line}");
                }
                row = y;
                line = if self.highlight_rows.contains(&y) {
                    "> ".to_string()
                } else {
                    "  ".to_string()
                };
            } else {
                line.push_str("  |  ");
            }
            line.push_str(&text);
        }
        if row != i32::MIN {
            let _ = writeln!(out, "{line}");
        }
        self.highlight_rows.clear();
    }
}

impl RenderSurface for TermSurface {
    fn text_width(&self, _font: FontSize, text: &str) -> i32 {
        text.chars().count() as i32 * 8
    }

    fn fill_pill(&mut self, rect: Rect, _emphasis: PillEmphasis) {
        self.highlight_rows.push(rect.y);
    }

    fn fill_rect(&mut self, rect: Rect, rgb: u32) {
        let (r, g, b) = rgb_unpack(rgb);
        self.texts.push((rect.y, rect.x, format!("[{r},{g},{b}]")));
    }

    fn draw_text(&mut self, _font: FontSize, text: &str, x: i32, y: i32, _rgb: u32) {
        // Snap to the row grid so value columns land on the name's line.
        self.texts.push((y / ROW_HEIGHT * ROW_HEIGHT, x, text.to_string()));
    }

    fn draw_message(&mut self, text: &str, _rect: Rect) {
        self.texts.push((0, 0, format!("( {text} )")));
    }
}

fn button_for(token: &str) -> Option<Button> {
    match token {
        "up" | "w" => Some(Button::Up),
        "down" | "s" => Some(Button::Down),
        "left" | "a" => Some(Button::Left),
        "right" | "d" => Some(Button::Right),
        "ok" | "enter" => Some(Button::A),
        "back" | "b" => Some(Button::B),
        "l1" => Some(Button::L1),
        "r1" => Some(Button::R1),
        "menu" => Some(Button::Menu),
        _ => None,
    }
}

/// Stdin-driven shell loop: one command per line (`up down ok back l1 r1`,
/// `q` quits), one press/release frame pair per token.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut surface = TermSurface::default();

    if !app.frame(Instant::now(), &mut surface, TERM_RECT) {
        return Ok(());
    }
    surface.flush();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for token in line.split_whitespace() {
            let token = token.to_ascii_lowercase();
            if token == "q" || token == "quit" {
                return Ok(());
            }
            let Some(button) = button_for(&token) else {
                log::warn!("unknown command '{token}'");
                continue;
            };
            log::trace!("pad {}", button.as_str());
            app.pad_mut().queue(button, true);
            if !app.frame(Instant::now(), &mut surface, TERM_RECT) {
                return Ok(());
            }
            app.pad_mut().queue(button, false);
            if !app.frame(Instant::now(), &mut surface, TERM_RECT) {
                return Ok(());
            }
        }
        surface.flush();
    }

    Ok(())
}
