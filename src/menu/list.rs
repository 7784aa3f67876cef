use std::sync::RwLock;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::core::input::{Button, Pad};
use crate::menu::entry::{EntryKind, MenuEntry};
use crate::menu::value::TaggedValue;
use crate::menu::{CustomDrawCallback, ListCallback, MenuRegistry, ReactionHint};
use crate::ui::surface::{FontSize, PillEmphasis, Rect, RenderSurface, SWATCH_SIZE, Theme};

/// Rows the viewport can show at once. Fixed at construction; the window
/// [start, end) never grows past it.
pub const MAX_VISIBLE_ROWS: usize = 5;

/// Presentation style of a list. Geometry only; the active style never
/// changes which entries are visible or how input is dispatched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// Full-width rows, name left and value right, backdrop highlight.
    #[default]
    FullWidth,
    /// Compact rows with the name in a tight pill, no value column.
    Chip,
    /// Name column sized to the widest name, value pill beside it.
    NameValue,
    /// Full-bleed large-type rows for the root menu.
    TopLevel,
    /// Host-drawn; the list supplies only selection state.
    Custom,
}

/// Entry collection plus viewport. Input and reset mutate per-entry state,
/// so they take the write half; drawing takes the read half. The measured
/// row width lives outside the lock so the first draw pass can fill it.
struct ListState {
    entries: Vec<MenuEntry>,
    selected: usize,
    start: usize,
    end: usize,
}

/// An ordered, owned collection of menu entries with a scrolling viewport
/// and a per-frame input dispatcher. Composes recursively: an entry may
/// defer into a child list held by the screen's [`MenuRegistry`].
pub struct MenuList {
    style: ListStyle,
    desc: String,
    state: RwLock<ListState>,
    on_change: Option<ListCallback>,
    on_confirm: Option<ListCallback>,
    custom_draw: Option<CustomDrawCallback>,
    // Widest entry name in pixels, measured on the first draw pass.
    // 0 means unmeasured.
    max_name_width: AtomicI32,
}

impl MenuList {
    pub fn new(style: ListStyle, desc: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        let count = entries.len();
        Self {
            style,
            desc: desc.into(),
            state: RwLock::new(ListState {
                entries,
                selected: 0,
                start: 0,
                end: count.min(MAX_VISIBLE_ROWS),
            }),
            on_change: None,
            on_confirm: None,
            custom_draw: None,
            max_name_width: AtomicI32::new(0),
        }
    }

    pub fn on_change(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_confirm(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn custom_draw(
        mut self,
        f: impl Fn(&mut dyn RenderSurface, Rect, &Theme) + Send + Sync + 'static,
    ) -> Self {
        self.custom_draw = Some(Box::new(f));
        self
    }

    /* ------------------------------ accessors ------------------------------ */

    pub fn style(&self) -> ListStyle {
        self.style
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn len(&self) -> usize {
        self.state.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().unwrap().entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.state.read().unwrap().selected
    }

    /// Current viewport bounds [start, end).
    pub fn window(&self) -> (usize, usize) {
        let st = self.state.read().unwrap();
        (st.start, st.end)
    }

    /// Inspect the selected entry without exposing the lock.
    pub fn with_selected_entry<R>(&self, f: impl FnOnce(&MenuEntry) -> R) -> Option<R> {
        let st = self.state.read().unwrap();
        st.entries.get(st.selected).map(f)
    }

    /// Inspect the entry at `ix` without exposing the lock.
    pub fn with_entry<R>(&self, ix: usize, f: impl FnOnce(&MenuEntry) -> R) -> Option<R> {
        self.state.read().unwrap().entries.get(ix).map(f)
    }

    /// Drop the measured row width so the next draw pass re-measures.
    /// Labels are static in this shell; hosts that rebuild them call this.
    pub fn invalidate_layout(&self) {
        self.max_name_width.store(0, Ordering::Release);
    }

    /* ------------------------------ viewport ------------------------------ */

    fn select_next_inner(st: &mut ListState) {
        let count = st.entries.len();
        if count == 0 {
            return;
        }
        st.selected += 1;
        if st.selected == count {
            // Wrap to the top and reset the window.
            st.selected = 0;
            st.start = 0;
            st.end = count.min(MAX_VISIBLE_ROWS);
        } else if st.selected == st.end {
            // Slide forward one row, window size preserved.
            st.start += 1;
            st.end += 1;
        }
    }

    fn select_prev_inner(st: &mut ListState) {
        let count = st.entries.len();
        if count == 0 {
            return;
        }
        if st.selected == 0 {
            // Wrap to the bottom and pin the window to the tail.
            st.selected = count - 1;
            st.start = count.saturating_sub(MAX_VISIBLE_ROWS);
            st.end = count;
        } else {
            st.selected -= 1;
            if st.selected < st.start {
                st.start -= 1;
                st.end -= 1;
            }
        }
    }

    pub fn select_next(&self) {
        Self::select_next_inner(&mut self.state.write().unwrap());
    }

    pub fn select_prev(&self) {
        Self::select_prev_inner(&mut self.state.write().unwrap());
    }

    /* ------------------------------- input -------------------------------- */

    /// One frame of input for this list and (recursively) any deferred
    /// submenu. Sets `closed` when the list wants to close; the caller
    /// decides what closing means (clear a deferred flag, quit the shell).
    pub fn handle_input(
        &self,
        pad: &Pad,
        registry: &mut MenuRegistry,
        dirty: &mut bool,
        closed: &mut bool,
    ) -> ReactionHint {
        let mut st = self.state.write().unwrap();

        let hint = if st.entries.is_empty() {
            ReactionHint::Unhandled
        } else {
            let ix = st.selected;
            st.entries[ix].handle_input(pad, registry, dirty)
        };

        match hint {
            ReactionHint::ResetAllItems => {
                Self::reset_all_inner(&mut st);
                *dirty = true;
                return ReactionHint::NoOp;
            }
            ReactionHint::Exit => {
                *closed = true;
                *dirty = true;
                return ReactionHint::NoOp;
            }
            ReactionHint::NoOp => return ReactionHint::NoOp,
            ReactionHint::Unhandled => {}
        }

        // Navigation. A repeat at the boundary only wraps on a fresh press,
        // so holding a direction parks at the edge instead of looping.
        let count = st.entries.len();
        if pad.just_repeated(Button::Up) && count > 0 {
            if st.selected > 0 || pad.just_pressed(Button::Up) {
                Self::select_prev_inner(&mut st);
                if let Some(on_change) = &self.on_change {
                    on_change();
                }
                *dirty = true;
            }
            return ReactionHint::NoOp;
        }
        if pad.just_repeated(Button::Down) && count > 0 {
            if st.selected + 1 < count || pad.just_pressed(Button::Down) {
                Self::select_next_inner(&mut st);
                if let Some(on_change) = &self.on_change {
                    on_change();
                }
                *dirty = true;
            }
            return ReactionHint::NoOp;
        }
        if pad.just_pressed(Button::B) {
            *closed = true;
            *dirty = true;
            return ReactionHint::NoOp;
        }
        if pad.just_pressed(Button::A)
            && let Some(on_confirm) = &self.on_confirm
        {
            // Activate fell through the selected entry; the list-level
            // confirm (if any) claims it.
            on_confirm();
            *dirty = true;
            return ReactionHint::NoOp;
        }

        ReactionHint::Unhandled
    }

    /* ------------------------------ reset-all ------------------------------ */

    fn reset_all_inner(st: &mut ListState) {
        for entry in &mut st.entries {
            if entry.has_reset() {
                entry.reset();
            }
        }
    }

    /// Reset every resettable entry to its system default and re-bind its
    /// selection from the getter.
    pub fn reset_all(&self) {
        Self::reset_all_inner(&mut self.state.write().unwrap());
    }

    /* ------------------------------- drawing ------------------------------- */

    fn name_font(&self) -> FontSize {
        match self.style {
            ListStyle::TopLevel => FontSize::Large,
            ListStyle::Chip => FontSize::Tiny,
            _ => FontSize::Small,
        }
    }

    fn measured_name_width(&self, surface: &dyn RenderSurface, st: &ListState) -> i32 {
        let cached = self.max_name_width.load(Ordering::Acquire);
        if cached != 0 {
            return cached;
        }
        let font = self.name_font();
        let mut max = 1;
        for entry in &st.entries {
            max = max.max(surface.text_width(font, entry.name()));
        }
        self.max_name_width.store(max, Ordering::Release);
        max
    }

    /// Render the windowed slice [start, end) into `rect`.
    ///
    /// Geometry only; pixels happen in the surface. When the selected entry
    /// is deferred into a submenu, that submenu takes over the whole call.
    pub fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        rect: Rect,
        theme: &Theme,
        registry: &MenuRegistry,
    ) {
        let st = self.state.read().unwrap();

        if let Some(entry) = st.entries.get(st.selected)
            && entry.is_deferred()
            && let Some(sub) = entry.submenu().and_then(|id| registry.get(id))
        {
            sub.draw(surface, rect, theme, registry);
            return;
        }

        if self.style == ListStyle::Custom {
            if let Some(custom_draw) = &self.custom_draw {
                custom_draw(surface, rect, theme);
            }
            return;
        }

        if st.entries.is_empty() {
            let text = if self.desc.is_empty() { "Empty" } else { &self.desc };
            surface.draw_message(text, rect);
            return;
        }

        let font = self.name_font();
        let name_w = self.measured_name_width(surface, &st);

        for (row, ix) in (st.start..st.end).enumerate() {
            let entry = &st.entries[ix];
            let is_selected = ix == st.selected;
            let y = rect.y + row as i32 * theme.row_h;
            let row_rect = Rect::new(rect.x, y, rect.w, theme.row_h);
            let text_rgb = if is_selected {
                theme.color_list_selected
            } else {
                theme.color_list
            };

            if is_selected {
                match self.style {
                    ListStyle::FullWidth => surface.fill_pill(row_rect, PillEmphasis::Light),
                    _ => {
                        let w = surface.text_width(font, entry.name())
                            + 2 * theme.button_padding;
                        surface.fill_pill(Rect::new(rect.x, y, w, theme.row_h), PillEmphasis::Dark);
                    }
                }
            }

            let name_pos = row_rect.dx(theme.button_padding);
            surface.draw_text(font, entry.name(), name_pos.x, name_pos.y, text_rgb);

            if self.style == ListStyle::Chip || self.style == ListStyle::TopLevel {
                continue;
            }

            // Value column: right-aligned for full-width rows, beside the
            // name column otherwise.
            if let Some(label) = entry.label() {
                let label_w = surface.text_width(font, label);
                let swatch_w = if entry.kind() == EntryKind::Color {
                    SWATCH_SIZE + theme.option_padding
                } else {
                    0
                };
                let value_x = match self.style {
                    ListStyle::FullWidth => {
                        rect.x + rect.w - theme.button_padding - label_w - swatch_w
                    }
                    _ => rect.x + name_w + 2 * theme.button_padding + theme.option_padding,
                };
                if entry.kind() == EntryKind::Color
                    && let Some(&TaggedValue::Color(rgb)) = entry.value()
                {
                    let swatch_y = y + (theme.row_h - SWATCH_SIZE) / 2;
                    surface.fill_rect(
                        Rect::new(value_x, swatch_y, SWATCH_SIZE, SWATCH_SIZE),
                        rgb,
                    );
                }
                surface.draw_text(font, label, value_x + swatch_w, y, text_rgb);
            }
        }

        // Fixed description slot beneath the list.
        if let Some(entry) = st.entries.get(st.selected)
            && !entry.desc().is_empty()
        {
            let slot = rect.dy(rect.h - theme.row_h).dx(theme.button_padding);
            surface.draw_text(FontSize::Tiny, entry.desc(), slot.x, slot.y, theme.color_hint);
        }
    }
}
