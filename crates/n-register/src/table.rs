//! Register table — every register the editor knows, plus the per-command
//! register selection.
//!
//! The table is built once at startup (each register with one empty slot)
//! and lives for the whole session. It owns the clipboard bridge and the
//! status line that clipboard failures are reported on, so a single
//! `&mut Registers` is all a command needs.
//!
//! # Selecting a register
//!
//! Typing `"a` before a command selects register `a` for that command only.
//! The selection lives on the command's [`Action`], not in the table:
//!
//! ```text
//! "Ayw   →  action.select('A')        →  Selected { id: a, append: true }
//!        →  registers.begin(&action)  →  "a in append mode
//!        →  registers.put_range("a, ..)
//!        →  registers.finish(&mut action)
//! ```
//!
//! A command without a `"x` prefix uses the unnamed register.

use log::debug;

use crate::clipboard::{Clipboard, CommandClipboard};
use crate::config::RegisterConfig;
use crate::error::{RegisterError, Result};
use crate::id::{REGISTER_COUNT, RegisterId, Selected};
use crate::register::{Env, Kind, Register};
use crate::selection::SelectionCount;
use crate::status::StatusLine;
use crate::text::{ByteRange, TextSource};

/// Longest preview shown in a register listing, in chars.
const PREVIEW_WIDTH: usize = 40;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Register state of the command being assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Action {
    reg: Option<Selected>,
}

impl Action {
    /// A command with no register selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { reg: None }
    }

    /// Select register `id` for this command.
    ///
    /// Uppercase letters select the lowercase register in append mode.
    /// Identifiers without storage are ignored and `false` is returned; the
    /// previous selection stays.
    pub fn select(&mut self, id: RegisterId) -> bool {
        match id.resolve() {
            Some(sel) => {
                self.reg = Some(sel);
                true
            }
            None => false,
        }
    }

    /// The register this command reads from or writes to.
    #[must_use]
    pub fn register(&self) -> Selected {
        self.reg.unwrap_or(Selected::DEFAULT)
    }

    /// Identifier of the register in use.
    #[must_use]
    pub fn used(&self) -> RegisterId {
        self.register().id
    }

    /// True if the user picked a register explicitly.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.reg.is_some()
    }

    /// Forget the selection once the command has run.
    pub const fn reset(&mut self) {
        self.reg = None;
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One row of a `:registers` style listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEntry {
    pub id: RegisterId,
    pub name: char,
    pub description: &'static str,
    /// Slot 0 content with control characters shown as `^X`, cut to a
    /// fixed width. Empty for registers without stored content.
    pub preview: String,
}

fn preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::new();
    for (i, ch) in text.chars().enumerate() {
        if i == PREVIEW_WIDTH {
            out.push('…');
            break;
        }
        if ch.is_ascii_control() {
            out.push('^');
            out.push(char::from((ch as u8) ^ 0x40));
        } else {
            out.push(ch);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Registers
// ---------------------------------------------------------------------------

/// All registers of an editor session.
pub struct Registers {
    regs: Vec<Register>,
    clipboard: Box<dyn Clipboard>,
    status: StatusLine,
    last_recorded: Option<RegisterId>,
}

impl Registers {
    /// Registers using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RegisterConfig::default())
    }

    /// Registers whose clipboard runs the helper named in `config`.
    #[must_use]
    pub fn with_config(config: &RegisterConfig) -> Self {
        Self::with_clipboard(CommandClipboard::from_config(config))
    }

    /// Registers backed by an arbitrary clipboard implementation.
    #[must_use]
    pub fn with_clipboard(clipboard: impl Clipboard + 'static) -> Self {
        let regs = (0..REGISTER_COUNT)
            .map(|i| RegisterId::from_index(i).map_or(Kind::Normal, RegisterId::kind))
            .map(Register::new)
            .collect();
        Self {
            regs,
            clipboard: Box::new(clipboard),
            status: StatusLine::new(),
            last_recorded: None,
        }
    }

    // -- Lookup -------------------------------------------------------------

    /// Resolve `id` to storage, following `@` to the last recorded macro.
    #[must_use]
    pub fn resolve(&self, id: RegisterId) -> Option<Selected> {
        match id {
            RegisterId::MacroLastRecorded => self.last_recorded?.resolve(),
            other => other.resolve(),
        }
    }

    /// Remember which register the last macro was recorded into, so that
    /// `@` refers to it. Only identifiers with storage are accepted.
    pub fn set_last_recorded(&mut self, id: RegisterId) -> bool {
        match id.resolve() {
            Some(sel) => {
                self.last_recorded = Some(sel.id);
                true
            }
            None => false,
        }
    }

    /// The register behind `id`, if it has storage.
    #[must_use]
    pub fn register(&self, id: RegisterId) -> Option<&Register> {
        let index = self.resolve(id)?.id.index()?;
        self.regs.get(index)
    }

    /// Mutable access to the register behind `id`.
    pub fn register_mut(&mut self, id: RegisterId) -> Option<&mut Register> {
        let index = self.resolve(id)?.id.index()?;
        self.regs.get_mut(index)
    }

    /// The status line register operations report on.
    #[must_use]
    pub const fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Mutable status line, for the editor to drain.
    pub const fn status_mut(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    /// Borrow the register behind `id` together with the environment its
    /// operations need. The flag tells whether `id` forces append mode.
    fn open(&mut self, id: RegisterId) -> Result<(&mut Register, Env<'_>, bool)> {
        let sel = self.resolve(id).ok_or(RegisterError::InvalidRegister(id))?;
        let index = sel.id.index().ok_or(RegisterError::InvalidRegister(id))?;
        let Self {
            regs,
            clipboard,
            status,
            ..
        } = self;
        let reg = regs
            .get_mut(index)
            .ok_or(RegisterError::InvalidRegister(id))?;
        Ok((
            reg,
            Env {
                clipboard: &**clipboard,
                status,
            },
            sel.append,
        ))
    }

    /// Run a write on the register behind `id`. An uppercase alias turns
    /// append mode on for this write only.
    fn write<T>(
        &mut self,
        id: RegisterId,
        op: impl FnOnce(&mut Register, &mut Env<'_>) -> Result<T>,
    ) -> Result<T> {
        let (reg, mut env, append) = self.open(id)?;
        if !append || reg.is_append() {
            return op(&mut *reg, &mut env);
        }
        reg.set_append(true);
        let result = op(&mut *reg, &mut env);
        reg.set_append(false);
        result
    }

    // -- Commands -----------------------------------------------------------

    /// Prepare the register selected on `action` for the command about to
    /// run and return the identifier its writes should go to.
    ///
    /// An uppercase selection keeps the register in append mode until
    /// [`finish`](Self::finish).
    pub fn begin(&mut self, action: &Action) -> RegisterId {
        let sel = action.register();
        if let Some(reg) = self.register_mut(sel.id) {
            reg.set_append(sel.append);
        }
        if sel.append {
            debug!("register {}: append mode", sel.id);
        }
        sel.id
    }

    /// End the command: leave append mode and clear the selection.
    pub fn finish(&mut self, action: &mut Action) {
        let id = action.used();
        if let Some(reg) = self.register_mut(id) {
            reg.set_append(false);
        }
        action.reset();
    }

    /// Identifier of the register `action` uses.
    #[must_use]
    pub fn used(&self, action: &Action) -> RegisterId {
        action.used()
    }

    // -- Operations ---------------------------------------------------------

    /// Content of `slot` of the register behind `id`.
    pub fn get(&mut self, id: RegisterId, slot: usize) -> Option<&[u8]> {
        let (reg, mut env, _) = self.open(id).ok()?;
        reg.slot_get(slot, &mut env)
    }

    /// Replace the register's content with `data`, collapsing it to one
    /// slot.
    ///
    /// # Errors
    ///
    /// See [`Register::put`].
    pub fn put(&mut self, id: RegisterId, data: &[u8]) -> Result<()> {
        self.write(id, |reg, _| reg.put(data))
    }

    /// [`put`](Self::put) for text.
    ///
    /// # Errors
    ///
    /// See [`Register::put`].
    pub fn put_str(&mut self, id: RegisterId, text: &str) -> Result<()> {
        self.put(id, text.as_bytes())
    }

    /// Replace the content of one slot.
    ///
    /// # Errors
    ///
    /// See [`Register::slot_put`].
    pub fn slot_put(&mut self, id: RegisterId, slot: usize, data: &[u8]) -> Result<()> {
        self.write(id, |reg, _| reg.slot_put(slot, data))
    }

    /// Yank `range` of `text` into the register, collapsing it to one slot.
    ///
    /// # Errors
    ///
    /// See [`Register::slot_put_range`].
    pub fn put_range(
        &mut self,
        id: RegisterId,
        text: &dyn TextSource,
        range: ByteRange,
    ) -> Result<()> {
        self.write(id, |reg, env| reg.put_range(text, range, env))
    }

    /// Yank `range` of `text` into one slot.
    ///
    /// # Errors
    ///
    /// See [`Register::slot_put_range`].
    pub fn slot_put_range(
        &mut self,
        id: RegisterId,
        slot: usize,
        text: &dyn TextSource,
        range: ByteRange,
    ) -> Result<()> {
        self.write(id, |reg, env| reg.slot_put_range(slot, text, range, env))
    }

    /// Yank one range per selection: `ranges[i]` goes to slot `i`.
    ///
    /// A normal register is then resized to `ranges.len()` slots. The
    /// clipboard holds one value, so each range replaces the previous one
    /// and it ends up with the last; numbered and blackhole registers keep
    /// their slot layout.
    ///
    /// # Errors
    ///
    /// Stops at the first failing slot; see [`Register::slot_put_range`].
    pub fn put_ranges(
        &mut self,
        id: RegisterId,
        text: &dyn TextSource,
        ranges: &[ByteRange],
    ) -> Result<()> {
        self.write(id, |reg, env| {
            for (slot, range) in ranges.iter().enumerate() {
                reg.slot_put_range(slot, text, *range, env)?;
            }
            if reg.kind() == Kind::Normal {
                reg.resize(ranges.len())?;
            }
            Ok(())
        })?;
        debug!("register {id}: {} slots yanked", ranges.len());
        Ok(())
    }

    /// Number of slots a multi-cursor paste should address. Zero for an
    /// identifier without storage.
    #[must_use]
    pub fn count(&self, id: RegisterId, selections: Option<&dyn SelectionCount>) -> usize {
        self.register(id).map_or(0, |reg| reg.count(selections))
    }

    /// Make the register hold exactly `count` slots.
    ///
    /// # Errors
    ///
    /// [`RegisterError::InvalidRegister`] for identifiers without storage;
    /// otherwise see [`Register::resize`].
    pub fn resize(&mut self, id: RegisterId, count: usize) -> Result<()> {
        let reg = self
            .register_mut(id)
            .ok_or(RegisterError::InvalidRegister(id))?;
        debug!("register {id}: resize to {count} slots");
        reg.resize(count)
    }

    // -- Listing ------------------------------------------------------------

    /// Every register with its name, help text and a preview of slot 0.
    ///
    /// Reads nothing from the clipboard.
    #[must_use]
    pub fn listing(&self) -> Vec<RegisterEntry> {
        RegisterId::all()
            .filter_map(|id| {
                let reg = self.register(id)?;
                Some(RegisterEntry {
                    id,
                    name: id.name()?,
                    description: id.description(),
                    preview: reg.peek(0).map(preview).unwrap_or_default(),
                })
            })
            .collect()
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::clipboard::MemoryClipboard;
    use crate::selection::Selections;
    use pretty_assertions::assert_eq;

    fn reg(name: char) -> RegisterId {
        RegisterId::from_name(name)
    }

    fn text(regs: &mut Registers, name: char, slot: usize) -> Option<String> {
        regs.get(reg(name), slot)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    fn memory() -> Registers {
        Registers::with_clipboard(MemoryClipboard::new())
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn every_register_starts_with_one_empty_slot() {
        let regs = memory();
        for id in RegisterId::all() {
            let reg = regs.register(id).unwrap();
            assert_eq!(reg.slots().len(), 1, "{id}");
        }
    }

    #[test]
    fn kinds_are_assigned_by_identifier() {
        let regs = memory();
        assert_eq!(regs.register(RegisterId::Blackhole).unwrap().kind(), Kind::Blackhole);
        assert_eq!(regs.register(RegisterId::Clipboard).unwrap().kind(), Kind::Clipboard);
        assert_eq!(regs.register(RegisterId::Number).unwrap().kind(), Kind::Numbered);
        assert_eq!(regs.register(RegisterId::Lower(b'k')).unwrap().kind(), Kind::Normal);
    }

    #[test]
    fn default_config_uses_command_clipboard() {
        // Construction alone never runs the helper.
        let regs = Registers::default();
        assert!(regs.status().message().is_none());
    }

    // -- Action -------------------------------------------------------------

    #[test]
    fn action_defaults_to_unnamed() {
        let action = Action::new();
        assert!(!action.is_selected());
        assert_eq!(action.register(), Selected::DEFAULT);
        assert_eq!(action.used(), RegisterId::Default);
    }

    #[test]
    fn action_select_uppercase_appends() {
        let mut action = Action::new();
        assert!(action.select(RegisterId::from_name('Q')));
        assert_eq!(
            action.register(),
            Selected {
                id: RegisterId::Lower(b'q'),
                append: true
            }
        );
    }

    #[test]
    fn action_select_invalid_keeps_previous() {
        let mut action = Action::new();
        action.select(RegisterId::from_name('b'));
        assert!(!action.select(RegisterId::from_name('$')));
        assert!(!action.select(RegisterId::MacroLastRecorded));
        assert_eq!(action.used(), RegisterId::Lower(b'b'));
    }

    #[test]
    fn action_reset_returns_to_default() {
        let mut action = Action::new();
        action.select(RegisterId::Zero);
        action.reset();
        assert_eq!(action.used(), RegisterId::Default);
    }

    // -- Commands -----------------------------------------------------------

    #[test]
    fn begin_applies_append_until_finish() {
        let mut regs = memory();
        let buf = Buffer::from_text("one two");
        regs.put_range(reg('w'), &buf, ByteRange::new(0, 3)).unwrap();

        let mut action = Action::new();
        action.select(reg('W'));
        let target = regs.begin(&action);
        assert_eq!(target, RegisterId::Lower(b'w'));
        assert!(regs.register(target).unwrap().is_append());

        regs.put_range(target, &buf, ByteRange::new(3, 7)).unwrap();
        regs.finish(&mut action);

        assert_eq!(text(&mut regs, 'w', 0).as_deref(), Some("one two"));
        assert!(!regs.register(target).unwrap().is_append());
        assert_eq!(regs.used(&action), RegisterId::Default);
    }

    #[test]
    fn begin_without_selection_uses_unnamed() {
        let mut regs = memory();
        let mut action = Action::new();
        assert_eq!(regs.begin(&action), RegisterId::Default);
        regs.put_str(RegisterId::Default, "plain").unwrap();
        regs.finish(&mut action);
        assert_eq!(text(&mut regs, '"', 0).as_deref(), Some("plain"));
    }

    #[test]
    fn used_reports_selection() {
        let regs = memory();
        let mut action = Action::new();
        action.select(reg('+'));
        assert_eq!(regs.used(&action), RegisterId::Clipboard);
    }

    // -- Put / get ----------------------------------------------------------

    #[test]
    fn put_then_get() {
        let mut regs = memory();
        regs.put_str(reg('a'), "alpha").unwrap();
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("alpha"));
        // Other registers untouched.
        assert_eq!(text(&mut regs, 'b', 0).as_deref(), Some(""));
    }

    #[test]
    fn uppercase_appends_to_lowercase() {
        let mut regs = memory();
        let buf = Buffer::from_text("hello world");
        regs.put_range(reg('a'), &buf, ByteRange::new(0, 5)).unwrap();
        regs.put_range(reg('A'), &buf, ByteRange::new(5, 11)).unwrap();
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("hello world"));
    }

    #[test]
    fn uppercase_put_appends_to_lowercase() {
        let mut regs = memory();
        regs.put_str(reg('a'), "foo").unwrap();
        regs.put_str(reg('A'), "bar").unwrap();
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("foobar"));
        regs.put_str(reg('a'), "baz").unwrap();
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("baz"));
    }

    #[test]
    fn lowercase_after_uppercase_replaces_again() {
        let mut regs = memory();
        let buf = Buffer::from_text("abc");
        regs.put_range(reg('A'), &buf, ByteRange::new(0, 1)).unwrap();
        regs.put_range(reg('A'), &buf, ByteRange::new(1, 2)).unwrap();
        regs.put_range(reg('a'), &buf, ByteRange::new(2, 3)).unwrap();
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("c"));
        assert!(!regs.register(RegisterId::Lower(b'a')).unwrap().is_append());
    }

    #[test]
    fn uppercase_onto_clipboard_is_impossible() {
        // Only letters have uppercase aliases; `"+` always replaces.
        assert!(!reg('+').resolve().unwrap().append);
    }

    #[test]
    fn invalid_selection_is_rejected() {
        let mut regs = memory();
        assert!(regs.get(RegisterId::Invalid, 0).is_none());
        assert!(matches!(
            regs.put(RegisterId::Invalid, b"x"),
            Err(RegisterError::InvalidRegister(RegisterId::Invalid))
        ));
        assert_eq!(regs.count(RegisterId::Invalid, None), 0);
        assert!(regs.resize(RegisterId::Invalid, 2).is_err());
        assert!(regs.register(RegisterId::from_name('%')).is_none());
    }

    // -- Multi-cursor -------------------------------------------------------

    #[test]
    fn multi_cursor_yank_and_collapse() {
        let mut regs = memory();
        let buf = Buffer::from_text("foo bar baz");
        let selections = Selections::from_ranges(vec![
            ByteRange::new(0, 3),
            ByteRange::new(4, 7),
            ByteRange::new(8, 11),
        ])
        .unwrap();

        regs.put_ranges(reg('a'), &buf, selections.ranges()).unwrap();
        assert_eq!(regs.count(RegisterId::Lower(b'a'), Some(&selections)), 3);
        assert_eq!(text(&mut regs, 'a', 0).as_deref(), Some("foo"));
        assert_eq!(text(&mut regs, 'a', 1).as_deref(), Some("bar"));
        assert_eq!(text(&mut regs, 'a', 2).as_deref(), Some("baz"));

        // The numbered register follows the selection count, not its slots.
        assert_eq!(regs.count(RegisterId::Number, Some(&selections)), 3);
        assert_eq!(text(&mut regs, '#', 2).as_deref(), Some("3"));

        regs.put_str(reg('a'), "single").unwrap();
        assert_eq!(regs.count(RegisterId::Lower(b'a'), Some(&selections)), 1);
    }

    #[test]
    fn fewer_selections_trim_leftover_slots() {
        let mut regs = memory();
        let buf = Buffer::from_text("a b c d");
        let four: Vec<_> = (0..4).map(|i| ByteRange::new(i * 2, i * 2 + 1)).collect();
        regs.put_ranges(reg('r'), &buf, &four).unwrap();
        regs.put_ranges(reg('r'), &buf, &four[..2]).unwrap();
        assert_eq!(regs.count(RegisterId::Lower(b'r'), None), 2);
        assert_eq!(text(&mut regs, 'r', 2), None);
    }

    #[test]
    fn multi_cursor_yank_to_clipboard_keeps_last_range() {
        let mut regs = memory();
        let buf = Buffer::from_text("foo bar baz");
        let ranges = [ByteRange::new(0, 3), ByteRange::new(4, 7), ByteRange::new(8, 11)];
        regs.put_ranges(reg('*'), &buf, &ranges).unwrap();
        assert_eq!(regs.count(RegisterId::Clipboard, None), 1);
        assert_eq!(text(&mut regs, '*', 0).as_deref(), Some("baz"));
    }

    #[test]
    fn multi_cursor_yank_to_blackhole_keeps_layout() {
        let mut regs = memory();
        let buf = Buffer::from_text("a b");
        regs.put_ranges(reg('_'), &buf, &[ByteRange::new(0, 1), ByteRange::new(2, 3)])
            .unwrap();
        assert_eq!(regs.count(RegisterId::Blackhole, None), 1);
        assert_eq!(regs.get(reg('_'), 0), None);
    }

    #[test]
    fn numbered_count_without_view_is_zero() {
        let regs = memory();
        assert_eq!(regs.count(RegisterId::Number, None), 0);
    }

    #[test]
    fn resize_then_count() {
        let mut regs = memory();
        regs.slot_put(reg('z'), 0, b"zero").unwrap();
        regs.slot_put(reg('z'), 1, b"one").unwrap();
        regs.resize(RegisterId::Lower(b'z'), 5).unwrap();
        assert_eq!(regs.count(RegisterId::Lower(b'z'), None), 5);
        assert_eq!(text(&mut regs, 'z', 0).as_deref(), Some("zero"));
        assert_eq!(text(&mut regs, 'z', 1).as_deref(), Some("one"));
        assert_eq!(text(&mut regs, 'z', 4).as_deref(), Some(""));
    }

    #[test]
    fn append_per_slot() {
        let mut regs = memory();
        let buf = Buffer::from_text("ab12");
        regs.put_ranges(reg('c'), &buf, &[ByteRange::new(0, 1), ByteRange::new(1, 2)])
            .unwrap();
        regs.put_ranges(reg('C'), &buf, &[ByteRange::new(2, 3), ByteRange::new(3, 4)])
            .unwrap();
        assert_eq!(text(&mut regs, 'c', 0).as_deref(), Some("a1"));
        assert_eq!(text(&mut regs, 'c', 1).as_deref(), Some("b2"));
    }

    // -- Special kinds ------------------------------------------------------

    #[test]
    fn blackhole_swallows_yanks() {
        let mut regs = memory();
        let buf = Buffer::from_text("secret");
        regs.put_range(reg('_'), &buf, ByteRange::new(0, 6)).unwrap();
        assert_eq!(regs.get(reg('_'), 0), None);
    }

    #[test]
    fn clipboard_roundtrip_through_plus_and_star() {
        let mut regs = memory();
        let buf = Buffer::from_text("to the clipboard");
        regs.put_range(reg('+'), &buf, ByteRange::new(7, 16)).unwrap();
        assert_eq!(text(&mut regs, '*', 0).as_deref(), Some("clipboard"));
    }

    #[test]
    fn clipboard_failure_surfaces_diagnostic() {
        let mut regs =
            Registers::with_clipboard(MemoryClipboard::unavailable("no clipboard available"));
        let buf = Buffer::from_text("text");
        let err = regs
            .put_range(reg('*'), &buf, ByteRange::new(0, 4))
            .unwrap_err();
        assert!(matches!(err, RegisterError::Clipboard(_)));
        assert_eq!(
            regs.status_mut().take().as_deref(),
            Some("Command failed no clipboard available")
        );
        // Reading afterwards is safe.
        assert_eq!(text(&mut regs, '*', 0).as_deref(), Some(""));
    }

    // -- Macro pointer ------------------------------------------------------

    #[test]
    fn at_follows_last_recorded_macro() {
        let mut regs = memory();
        assert!(regs.resolve(RegisterId::MacroLastRecorded).is_none());
        assert!(regs.register(RegisterId::MacroLastRecorded).is_none());

        regs.put_str(reg('q'), "dwj").unwrap();
        assert!(regs.set_last_recorded(RegisterId::from_name('Q')));
        let at = regs.resolve(RegisterId::MacroLastRecorded).unwrap();
        assert_eq!(at.id, RegisterId::Lower(b'q'));
        assert!(!at.append);
        assert_eq!(regs.get(RegisterId::MacroLastRecorded, 0), Some(&b"dwj"[..]));

        regs.put_str(RegisterId::MacroLastRecorded, "dd").unwrap();
        assert_eq!(text(&mut regs, 'q', 0).as_deref(), Some("dd"));
    }

    #[test]
    fn at_without_recording_is_invalid() {
        let mut regs = memory();
        assert!(matches!(
            regs.put(RegisterId::MacroLastRecorded, b"x"),
            Err(RegisterError::InvalidRegister(RegisterId::MacroLastRecorded))
        ));
        assert_eq!(regs.get(RegisterId::MacroLastRecorded, 0), None);
    }

    #[test]
    fn set_last_recorded_rejects_invalid() {
        let mut regs = memory();
        assert!(!regs.set_last_recorded(RegisterId::Invalid));
        assert!(regs.resolve(RegisterId::MacroLastRecorded).is_none());
    }

    // -- Listing ------------------------------------------------------------

    #[test]
    fn listing_covers_every_register() {
        let regs = memory();
        let rows = regs.listing();
        assert_eq!(rows.len(), REGISTER_COUNT);
        assert_eq!(rows[0].name, '"');
        assert_eq!(rows[0].description, "Unnamed register");
        assert_eq!(rows.last().unwrap().name, 'z');
    }

    #[test]
    fn listing_previews_content() {
        let mut regs = memory();
        regs.put_str(reg('a'), "line one\nline two").unwrap();
        regs.put_str(reg('b'), &"x".repeat(100)).unwrap();
        let rows = regs.listing();
        let a = rows.iter().find(|r| r.name == 'a').unwrap();
        assert_eq!(a.preview, "line one^Jline two");
        let b = rows.iter().find(|r| r.name == 'b').unwrap();
        assert_eq!(b.preview.chars().count(), PREVIEW_WIDTH + 1);
        assert!(b.preview.ends_with('…'));
    }

    #[test]
    fn listing_does_not_touch_clipboard() {
        let regs =
            Registers::with_clipboard(MemoryClipboard::unavailable("no clipboard available"));
        let rows = regs.listing();
        let star = rows.iter().find(|r| r.name == '*').unwrap();
        assert_eq!(star.preview, "");
        assert!(regs.status().message().is_none());
    }
}
