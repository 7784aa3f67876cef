use crate::core::input::{Button, Pad};
use crate::menu::value::TaggedValue;
use crate::menu::{
    ConfirmCallback, GetCallback, MenuRegistry, ReactionHint, ResetCallback, SetCallback,
    SubmenuId,
};

/// How a row presents its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Generic,
    /// Value is a packed color; rows render a swatch next to the label.
    Color,
    /// Pure action row; no value is rendered.
    Button,
}

/// One configurable or actionable menu row.
///
/// Candidate values and display labels are parallel lists; the current
/// selection is an index into them, or unbound when the entry has no
/// candidates or its getter reported a value no candidate matches.
pub struct MenuEntry {
    kind: EntryKind,
    name: String,
    desc: String,
    values: Vec<TaggedValue>,
    labels: Vec<String>,
    selection: Option<usize>,
    on_get: Option<GetCallback>,
    on_set: Option<SetCallback>,
    on_reset: Option<ResetCallback>,
    on_confirm: Option<ConfirmCallback>,
    submenu: Option<SubmenuId>,
    deferred: bool,
}

impl MenuEntry {
    pub fn builder(name: impl Into<String>, desc: impl Into<String>) -> MenuEntryBuilder {
        MenuEntryBuilder {
            kind: EntryKind::Generic,
            name: name.into(),
            desc: desc.into(),
            values: Vec::new(),
            labels: Vec::new(),
            label_suffix: String::new(),
            on_get: None,
            on_set: None,
            on_reset: None,
            on_confirm: None,
            submenu: None,
        }
    }

    /* ------------------------------ accessors ------------------------------ */

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn values(&self) -> &[TaggedValue] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Currently selected candidate value, if bound.
    pub fn value(&self) -> Option<&TaggedValue> {
        self.selection.map(|ix| &self.values[ix])
    }

    /// Display label of the selected candidate, if bound.
    pub fn label(&self) -> Option<&str> {
        self.selection.map(|ix| self.labels[ix].as_str())
    }

    pub fn has_reset(&self) -> bool {
        self.on_reset.is_some()
    }

    pub fn submenu(&self) -> Option<SubmenuId> {
        self.submenu
    }

    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    pub fn set_deferred(&mut self, deferred: bool) {
        self.deferred = deferred;
    }

    /* ------------------------------- binding ------------------------------- */

    /// Re-bind the selection to whatever the getter currently reports.
    ///
    /// First matching candidate wins. A tag mismatch between the getter and a
    /// candidate is a wiring error: asserted in debug builds, logged and left
    /// unbound in release. A getter that reports `None` keeps the previous
    /// selection (the default index when this happens at construction).
    pub fn init_selection(&mut self) {
        let prev = self.selection.take();
        if self.values.is_empty() {
            return;
        }
        // Default when nothing better is known.
        self.selection = Some(0);

        let Some(on_get) = &self.on_get else {
            return;
        };
        let Some(current) = on_get() else {
            log::warn!("getter for '{}' reported no value, keeping selection", self.name);
            self.selection = prev.or(Some(0));
            return;
        };

        let mut found = None;
        for (ix, candidate) in self.values.iter().enumerate() {
            if !candidate.same_tag(&current) {
                log::error!(
                    "tag mismatch binding '{}': candidate {} vs. getter {}",
                    self.name,
                    candidate.tag(),
                    current.tag()
                );
                debug_assert!(false, "tag mismatch binding '{}'", self.name);
                self.selection = None;
                return;
            }
            if *candidate == current {
                found = Some(ix);
                break;
            }
        }

        match found {
            Some(ix) => self.selection = Some(ix),
            None => {
                log::warn!(
                    "no candidate of '{}' matches current value {current}, leaving unbound",
                    self.name
                );
                self.selection = None;
            }
        }
    }

    /// Run the reset callback (if any) and re-bind the selection so the row
    /// reflects the restored system state.
    pub fn reset(&mut self) {
        if let Some(on_reset) = &self.on_reset {
            on_reset();
            self.init_selection();
        }
    }

    /* ------------------------------ selection ------------------------------ */

    /// Move the selection circularly by `delta` candidates.
    /// Returns false when the entry is unbound (nothing to move).
    pub fn step(&mut self, delta: isize) -> bool {
        let Some(ix) = self.selection else {
            return false;
        };
        let count = self.values.len() as isize;
        self.selection = Some((ix as isize + delta).rem_euclid(count) as usize);
        true
    }

    pub fn next_value(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev_value(&mut self) -> bool {
        self.step(-1)
    }

    fn apply_selected(&self) {
        if let (Some(on_set), Some(value)) = (&self.on_set, self.value()) {
            on_set(value);
        }
    }

    /* -------------------------------- input -------------------------------- */

    /// One frame of input. When deferred, the whole frame is forwarded to the
    /// submenu; its reaction hint passes through unchanged.
    pub fn handle_input(
        &mut self,
        pad: &Pad,
        registry: &mut MenuRegistry,
        dirty: &mut bool,
    ) -> ReactionHint {
        if self.deferred {
            let Some(id) = self.submenu else {
                debug_assert!(false, "deferred entry '{}' has no submenu", self.name);
                self.deferred = false;
                return ReactionHint::Unhandled;
            };
            let Some(sub) = registry.take(id) else {
                log::error!("submenu of '{}' missing from registry", self.name);
                self.deferred = false;
                return ReactionHint::Unhandled;
            };
            let mut closed = false;
            let hint = sub.handle_input(pad, registry, dirty, &mut closed);
            registry.restore(id, sub);
            if closed {
                self.deferred = false;
                *dirty = true;
            }
            return hint;
        }

        let mut hint = ReactionHint::Unhandled;

        if pad.just_repeated(Button::Left) {
            hint = ReactionHint::NoOp;
            if self.prev_value() {
                self.apply_selected();
                *dirty = true;
            }
        } else if pad.just_repeated(Button::Right) {
            hint = ReactionHint::NoOp;
            if self.next_value() {
                self.apply_selected();
                *dirty = true;
            }
        } else if pad.just_repeated(Button::L1) {
            hint = ReactionHint::NoOp;
            if self.step(-10) {
                self.apply_selected();
                *dirty = true;
            }
        } else if pad.just_repeated(Button::R1) {
            hint = ReactionHint::NoOp;
            if self.step(10) {
                self.apply_selected();
                *dirty = true;
            }
        } else if pad.just_pressed(Button::A) {
            // Take the callback out so it can borrow the entry mutably.
            // Without one, Activate falls through to the hosting list.
            if let Some(on_confirm) = self.on_confirm.take() {
                hint = on_confirm(self);
                self.on_confirm = Some(on_confirm);
                *dirty = true;
            }
        }

        hint
    }
}

/* -------------------------------- builder -------------------------------- */

pub struct MenuEntryBuilder {
    kind: EntryKind,
    name: String,
    desc: String,
    values: Vec<TaggedValue>,
    labels: Vec<String>,
    label_suffix: String,
    on_get: Option<GetCallback>,
    on_set: Option<SetCallback>,
    on_reset: Option<ResetCallback>,
    on_confirm: Option<ConfirmCallback>,
    submenu: Option<SubmenuId>,
}

impl MenuEntryBuilder {
    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = kind;
        self
    }

    /// Candidate values; labels are generated from them at `build` unless
    /// explicit ones are supplied.
    pub fn values(mut self, values: impl IntoIterator<Item = TaggedValue>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    /// Explicit display labels, parallel to the candidate values.
    pub fn labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Suffix appended to every generated label ("%", "px", "s", ...).
    pub fn label_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.label_suffix = suffix.into();
        self
    }

    /// Inclusive integer range with step 1 as the candidate set, with
    /// numeric labels carrying `suffix`.
    pub fn range(mut self, min: i32, max: i32, suffix: impl Into<String>) -> Self {
        self.values = (min..=max).map(TaggedValue::Int).collect();
        self.label_suffix = suffix.into();
        self
    }

    pub fn get(mut self, f: impl Fn() -> Option<TaggedValue> + Send + Sync + 'static) -> Self {
        self.on_get = Some(Box::new(f));
        self
    }

    pub fn set(mut self, f: impl Fn(&TaggedValue) + Send + Sync + 'static) -> Self {
        self.on_set = Some(Box::new(f));
        self
    }

    pub fn reset(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset = Some(Box::new(f));
        self
    }

    pub fn confirm(
        mut self,
        f: impl Fn(&mut MenuEntry) -> ReactionHint + Send + Sync + 'static,
    ) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn submenu(mut self, id: SubmenuId) -> Self {
        self.submenu = Some(id);
        self
    }

    /// Finalize the entry: generate missing labels and bind the selection.
    ///
    /// Panics when a label must be generated for a tag that has no canonical
    /// stringification (a silently dropped label would corrupt the rendered
    /// list), or when explicit labels are not parallel to the values.
    pub fn build(self) -> MenuEntry {
        let labels = if self.labels.is_empty() && !self.values.is_empty() {
            self.values
                .iter()
                .map(|v| {
                    v.default_label(&self.label_suffix).unwrap_or_else(|| {
                        panic!(
                            "cannot generate a label for {} candidate of '{}'",
                            v.tag(),
                            self.name
                        )
                    })
                })
                .collect()
        } else {
            self.labels
        };
        assert_eq!(
            labels.len(),
            self.values.len(),
            "labels of '{}' must be parallel to its values",
            self.name
        );

        let mut entry = MenuEntry {
            kind: self.kind,
            name: self.name,
            desc: self.desc,
            values: self.values,
            labels,
            selection: None,
            on_get: self.on_get,
            on_set: self.on_set,
            on_reset: self.on_reset,
            on_confirm: self.on_confirm,
            submenu: self.submenu,
            deferred: false,
        };
        entry.init_selection();
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryKind, MenuEntry};
    use crate::core::input::{Button, Pad};
    use crate::menu::value::TaggedValue;
    use crate::menu::{MenuRegistry, ReactionHint};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use std::time::Instant;

    fn pad_with(button: Button) -> Pad {
        let mut pad = Pad::new();
        pad.queue(button, true);
        pad.begin_frame(Instant::now());
        pad
    }

    #[test]
    fn range_builder_generates_inclusive_values_and_suffixed_labels() {
        let entry = MenuEntry::builder("Art width", "").range(0, 10, "%").build();
        assert_eq!(entry.values().len(), 11);
        assert_eq!(entry.values()[0], TaggedValue::Int(0));
        assert_eq!(entry.values()[10], TaggedValue::Int(10));
        let labels: Vec<&str> = entry.labels().iter().map(String::as_str).collect();
        assert_eq!(labels[0], "0%");
        assert_eq!(labels[10], "10%");
    }

    #[test]
    fn bool_labels_generate_on_off() {
        let entry = MenuEntry::builder("Haptics", "")
            .values([TaggedValue::Bool(false), TaggedValue::Bool(true)])
            .build();
        assert_eq!(entry.labels(), &["Off".to_string(), "On".to_string()]);
    }

    #[test]
    #[should_panic(expected = "cannot generate a label")]
    fn color_candidates_without_labels_are_fatal() {
        let _ = MenuEntry::builder("Main Color", "")
            .kind(EntryKind::Color)
            .values([TaggedValue::Color(0x3366FF)])
            .build();
    }

    #[test]
    fn selection_initializes_to_first_getter_match() {
        let entry = MenuEntry::builder("Volume", "")
            .range(0, 20, "")
            .get(|| Some(TaggedValue::Int(7)))
            .build();
        assert_eq!(entry.selection(), Some(7));
        assert_eq!(entry.value(), Some(&TaggedValue::Int(7)));
    }

    #[test]
    fn first_match_wins_under_duplicates() {
        let entry = MenuEntry::builder("Mode", "")
            .values([
                TaggedValue::Int(1),
                TaggedValue::Int(2),
                TaggedValue::Int(2),
            ])
            .labels(["a", "b", "c"])
            .get(|| Some(TaggedValue::Int(2)))
            .build();
        assert_eq!(entry.selection(), Some(1));
    }

    #[test]
    fn unmatched_getter_value_leaves_entry_unbound() {
        let entry = MenuEntry::builder("Timeout", "")
            .values([TaggedValue::UInt(5), TaggedValue::UInt(10)])
            .get(|| Some(TaggedValue::UInt(7)))
            .build();
        assert_eq!(entry.selection(), None);
        assert_eq!(entry.value(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "tag mismatch")]
    fn tag_mismatch_asserts_in_debug_builds() {
        let _ = MenuEntry::builder("Broken", "")
            .values([TaggedValue::Int(1)])
            .get(|| Some(TaggedValue::UInt(1)))
            .build();
    }

    #[test]
    fn failing_getter_retains_previous_selection() {
        let healthy = Arc::new(AtomicUsize::new(1));
        let flag = Arc::clone(&healthy);
        let mut entry = MenuEntry::builder("Saturation", "")
            .range(-5, 5, "")
            .get(move || {
                if flag.load(Ordering::SeqCst) == 1 {
                    Some(TaggedValue::Int(3))
                } else {
                    None
                }
            })
            .build();
        assert_eq!(entry.selection(), Some(8)); // -5..=5, value 3

        healthy.store(0, Ordering::SeqCst);
        entry.init_selection();
        assert_eq!(entry.selection(), Some(8), "selection survives a getter outage");
    }

    #[test]
    fn next_then_prev_restores_index() {
        let mut entry = MenuEntry::builder("Font", "").range(0, 2, "").build();
        let before = entry.selection();
        assert!(entry.next_value());
        assert!(entry.prev_value());
        assert_eq!(entry.selection(), before);
    }

    #[test]
    fn step_by_multiple_of_count_is_identity() {
        let mut entry = MenuEntry::builder("Font", "").range(0, 4, "").build();
        let before = entry.selection();
        assert!(entry.step(10));
        assert_eq!(entry.selection(), before);
        assert!(entry.step(-25));
        assert_eq!(entry.selection(), before);
    }

    #[test]
    fn wraparound_is_circular_in_both_directions() {
        let mut entry = MenuEntry::builder("Contrast", "").range(0, 4, "").build();
        assert!(entry.prev_value());
        assert_eq!(entry.selection(), Some(4));
        assert!(entry.next_value());
        assert_eq!(entry.selection(), Some(0));
        assert!(entry.step(-10));
        assert_eq!(entry.selection(), Some(0));
    }

    #[test]
    fn value_move_invokes_setter_and_marks_dirty() {
        let written = Arc::new(AtomicI32::new(-1));
        let sink = Arc::clone(&written);
        let mut entry = MenuEntry::builder("Brightness", "")
            .range(0, 10, "")
            .set(move |v| {
                if let TaggedValue::Int(n) = v {
                    sink.store(*n, Ordering::SeqCst);
                }
            })
            .build();

        let mut registry = MenuRegistry::new();
        let mut dirty = false;
        let hint = entry.handle_input(&pad_with(Button::Right), &mut registry, &mut dirty);
        assert_eq!(hint, ReactionHint::NoOp);
        assert!(dirty);
        assert_eq!(written.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn coarse_step_moves_by_ten() {
        let mut entry = MenuEntry::builder("Color temperature", "").range(0, 40, "").build();
        let mut registry = MenuRegistry::new();
        let mut dirty = false;
        entry.handle_input(&pad_with(Button::R1), &mut registry, &mut dirty);
        assert_eq!(entry.selection(), Some(10));
        entry.handle_input(&pad_with(Button::L1), &mut registry, &mut dirty);
        assert_eq!(entry.selection(), Some(0));
    }

    #[test]
    fn button_entry_ignores_value_input_and_reacts_to_activate() {
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);
        let mut entry = MenuEntry::builder("Reset to defaults", "")
            .kind(EntryKind::Button)
            .confirm(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
                ReactionHint::ResetAllItems
            })
            .build();
        let mut registry = MenuRegistry::new();

        for button in [Button::Left, Button::Right, Button::L1, Button::R1] {
            let mut dirty = false;
            entry.handle_input(&pad_with(button), &mut registry, &mut dirty);
            assert!(!dirty, "{button:?} must not dirty a zero-candidate entry");
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let mut dirty = false;
        let hint = entry.handle_input(&pad_with(Button::A), &mut registry, &mut dirty);
        assert_eq!(hint, ReactionHint::ResetAllItems);
        assert!(dirty);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_reapplies_default_and_rebinds() {
        let stored = Arc::new(AtomicI32::new(9));
        let (get_src, reset_src) = (Arc::clone(&stored), Arc::clone(&stored));
        let mut entry = MenuEntry::builder("Brightness", "")
            .range(0, 10, "")
            .get(move || Some(TaggedValue::Int(get_src.load(Ordering::SeqCst))))
            .reset(move || reset_src.store(5, Ordering::SeqCst))
            .build();
        assert_eq!(entry.selection(), Some(9));
        entry.reset();
        assert_eq!(entry.selection(), Some(5));
    }
}
