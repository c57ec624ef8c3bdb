//! Register identifiers and name resolution.
//!
//! Every register has a one-character name the user types after `"`:
//!
//! | Name      | Identifier          | Kind      | Purpose                        |
//! |-----------|---------------------|-----------|--------------------------------|
//! | `"`       | `Default`           | normal    | Unnamed register               |
//! | `0`       | `Zero`              | normal    | Yank register                  |
//! | `1`–`9`   | `Match(1..=9)`      | normal    | Sub-expression matches         |
//! | `&`       | `Ampersand`         | normal    | Last regex match               |
//! | `_`       | `Blackhole`         | blackhole | Discards everything            |
//! | `*` / `+` | `Clipboard`         | clipboard | System clipboard               |
//! | `.`       | `Dot`               | normal    | Last inserted text             |
//! | `/`       | `Search`            | normal    | Last search pattern            |
//! | `:`       | `Command`           | normal    | Last `:`-command               |
//! | `!`       | `Shell`             | normal    | Last shell command             |
//! | `#`       | `Number`            | numbered  | Selection number               |
//! | `a`–`z`   | `Lower(b'a'..)`     | normal    | Named registers                |
//! | `A`–`Z`   | `Upper(b'A'..)`     | —         | Append to the lowercase one    |
//! | `@`       | `MacroLastRecorded` | —         | Last recorded macro            |
//!
//! Uppercase letters have no storage of their own. [`RegisterId::resolve`]
//! turns them into the lowercase storage identifier plus a forced append
//! flag, once, so the aliasing rule lives in exactly one place.

use std::fmt;

use crate::register::Kind;

/// Number of registers with their own storage.
pub const REGISTER_COUNT: usize = 19 + 26;

/// Storage index of the first lowercase letter register.
const LETTER_BASE: usize = 19;

/// Identifies a register, or a name that refers to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterId {
    /// `"` — receives every yank and delete.
    Default,
    /// `0` — last yank.
    Zero,
    /// `1`–`9` — sub-expression matches of the last regex.
    Match(u8),
    /// `&` — whole match of the last regex.
    Ampersand,
    /// `_` — discards writes, reads nothing.
    Blackhole,
    /// `*` (or `+`) — the system clipboard.
    Clipboard,
    /// `.` — last inserted text.
    Dot,
    /// `/` — last search pattern.
    Search,
    /// `:` — last `:`-command.
    Command,
    /// `!` — last shell command.
    Shell,
    /// `#` — the number of the selection reading it.
    Number,
    /// `a`–`z`, holding the ASCII letter.
    Lower(u8),
    /// `A`–`Z`, holding the ASCII letter. Alias of the lowercase register in
    /// append mode.
    Upper(u8),
    /// `@` — whichever register the last macro was recorded into.
    MacroLastRecorded,
    /// Not a register.
    Invalid,
}

/// A resolved register: the storage to use and whether writes append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    /// Identifier of the register that owns the storage.
    pub id: RegisterId,
    /// Writes concatenate instead of replacing.
    pub append: bool,
}

impl Selected {
    /// The default register, replacing.
    pub const DEFAULT: Self = Self {
        id: RegisterId::Default,
        append: false,
    };
}

/// Registers found by scanning names, in storage order.
const NAMED: [(RegisterId, char, &str); 19] = [
    (RegisterId::Default, '"', "Unnamed register"),
    (RegisterId::Zero, '0', "Yank register"),
    (RegisterId::Match(1), '1', "1st sub-expression match"),
    (RegisterId::Match(2), '2', "2nd sub-expression match"),
    (RegisterId::Match(3), '3', "3rd sub-expression match"),
    (RegisterId::Match(4), '4', "4th sub-expression match"),
    (RegisterId::Match(5), '5', "5th sub-expression match"),
    (RegisterId::Match(6), '6', "6th sub-expression match"),
    (RegisterId::Match(7), '7', "7th sub-expression match"),
    (RegisterId::Match(8), '8', "8th sub-expression match"),
    (RegisterId::Match(9), '9', "9th sub-expression match"),
    (RegisterId::Ampersand, '&', "Last regex match"),
    (RegisterId::Blackhole, '_', "/dev/null register"),
    (RegisterId::Clipboard, '*', "System clipboard register"),
    (RegisterId::Dot, '.', "Last inserted text"),
    (RegisterId::Search, '/', "Last search pattern"),
    (RegisterId::Command, ':', "Last :-command"),
    (RegisterId::Shell, '!', "Last shell command given to either <, >, |, or !"),
    (RegisterId::Number, '#', "Register number"),
];

impl RegisterId {
    /// Resolve a typed register name.
    ///
    /// `+` and `@` are checked first, then the letter ranges, then the named
    /// table. Anything else is [`RegisterId::Invalid`].
    #[must_use]
    pub fn from_name(name: char) -> Self {
        match name {
            '+' => return Self::Clipboard,
            '@' => return Self::MacroLastRecorded,
            'a'..='z' => return Self::Lower(name as u8),
            'A'..='Z' => return Self::Upper(name as u8),
            _ => {}
        }
        NAMED
            .iter()
            .find(|(_, ch, _)| *ch == name)
            .map_or(Self::Invalid, |(id, _, _)| *id)
    }

    /// The character a user types for this register.
    #[must_use]
    pub fn name(self) -> Option<char> {
        match self {
            Self::Lower(b) if b.is_ascii_lowercase() => Some(char::from(b)),
            Self::Upper(b) if b.is_ascii_uppercase() => Some(char::from(b)),
            Self::MacroLastRecorded => Some('@'),
            other => NAMED
                .iter()
                .find(|(id, _, _)| *id == other)
                .map(|(_, ch, _)| *ch),
        }
    }

    /// One-line help text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Lower(_) => "Named register",
            Self::Upper(_) => "Append to named register",
            Self::MacroLastRecorded => "Last recorded macro",
            Self::Invalid => "Invalid register",
            other => NAMED
                .iter()
                .find(|(id, _, _)| *id == other)
                .map_or("Invalid register", |(_, _, desc)| *desc),
        }
    }

    /// Index into the register table, for identifiers that own storage.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Lower(b) if b.is_ascii_lowercase() => Some(LETTER_BASE + usize::from(b - b'a')),
            Self::Lower(_) | Self::Upper(_) | Self::MacroLastRecorded | Self::Invalid => None,
            other => NAMED.iter().position(|(id, _, _)| *id == other),
        }
    }

    /// Inverse of [`index`](Self::index).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if let Some((id, _, _)) = NAMED.get(index) {
            return Some(*id);
        }
        let letter = u8::try_from(index.checked_sub(LETTER_BASE)?).ok()?;
        (letter < 26).then_some(Self::Lower(b'a' + letter))
    }

    /// The storage to use and whether writes must append.
    ///
    /// Uppercase letters map to their lowercase register with `append`
    /// forced on; other storage identifiers replace. Identifiers without
    /// storage of their own resolve to `None`.
    #[must_use]
    pub fn resolve(self) -> Option<Selected> {
        match self {
            Self::Upper(b) if b.is_ascii_uppercase() => Some(Selected {
                id: Self::Lower(b.to_ascii_lowercase()),
                append: true,
            }),
            id => id.index().map(|_| Selected { id, append: false }),
        }
    }

    /// How the register behind this identifier stores its content.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Blackhole => Kind::Blackhole,
            Self::Clipboard => Kind::Clipboard,
            Self::Number => Kind::Numbered,
            _ => Kind::Normal,
        }
    }

    /// Every identifier that owns storage, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..REGISTER_COUNT).filter_map(Self::from_index)
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(ch) => write!(f, "\"{ch}"),
            None => f.write_str("<invalid>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
