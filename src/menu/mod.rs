pub mod entry;
pub mod list;
pub mod value;

pub use entry::{EntryKind, MenuEntry};
pub use list::{ListStyle, MAX_VISIBLE_ROWS, MenuList};
pub use value::TaggedValue;

use crate::ui::surface::{Rect, RenderSurface, Theme};

/// What an input handler tells its caller about the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionHint {
    /// The handler ignored the input; the caller may navigate.
    Unhandled,
    /// Input consumed, nothing further to do.
    NoOp,
    /// Request: the hosting list should reset every entry to its default.
    ResetAllItems,
    /// Request: the hosting list should close.
    Exit,
}

/* ---------------------------- callback types ---------------------------- */

/// Reads the current value from the owning subsystem. `None` means the
/// provider could not report a value this time; the entry keeps its last
/// known selection.
pub type GetCallback = Box<dyn Fn() -> Option<TaggedValue> + Send + Sync>;
pub type SetCallback = Box<dyn Fn(&TaggedValue) + Send + Sync>;
pub type ResetCallback = Box<dyn Fn() + Send + Sync>;
pub type ConfirmCallback = Box<dyn Fn(&mut MenuEntry) -> ReactionHint + Send + Sync>;
/// Container-level hook (selection changed / unclaimed activate).
pub type ListCallback = Box<dyn Fn() + Send + Sync>;
pub type CustomDrawCallback = Box<dyn Fn(&mut dyn RenderSurface, Rect, &Theme) + Send + Sync>;

/* --------------------------- submenu registry --------------------------- */

/// Handle to a submenu list owned by a [`MenuRegistry`].
///
/// Entries never own their submenus; they hold one of these. The registry is
/// owned at screen level, which pins down the submenu lifetime that the raw
/// pointer graph of a hand-wired menu tree leaves ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmenuId(usize);

#[derive(Default)]
pub struct MenuRegistry {
    slots: Vec<Option<MenuList>>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, list: MenuList) -> SubmenuId {
        self.slots.push(Some(list));
        SubmenuId(self.slots.len() - 1)
    }

    pub fn get(&self, id: SubmenuId) -> Option<&MenuList> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Move a submenu out for the duration of a dispatch pass. The slot must
    /// be restored with [`Self::restore`] before the frame ends.
    pub(crate) fn take(&mut self, id: SubmenuId) -> Option<MenuList> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub(crate) fn restore(&mut self, id: SubmenuId, list: MenuList) {
        debug_assert!(self.slots[id.0].is_none(), "submenu slot already occupied");
        self.slots[id.0] = Some(list);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/* ---------------------------- confirm helpers ---------------------------- */

/// Standard confirm action: enter the entry's submenu. Input is forwarded
/// there from the next frame until the submenu signals close.
pub fn defer_to_submenu(entry: &mut MenuEntry) -> ReactionHint {
    if entry.submenu().is_some() {
        entry.set_deferred(true);
    } else {
        log::error!("entry '{}' confirms into a submenu it does not have", entry.name());
        debug_assert!(false, "defer_to_submenu on an entry without a submenu");
    }
    ReactionHint::NoOp
}

/// Standard confirm action for "Reset to defaults" button entries.
pub fn reset_current_menu(_entry: &mut MenuEntry) -> ReactionHint {
    ReactionHint::ResetAllItems
}

/// Standard confirm action for entries that close the hosting list.
pub fn exit_current_menu(_entry: &mut MenuEntry) -> ReactionHint {
    ReactionHint::Exit
}
