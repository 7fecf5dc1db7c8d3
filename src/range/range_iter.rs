use log::{debug, trace};

use crate::DBError;
use crate::iterator::Cursor;
use crate::range::bounds::{Strategy, StrategyKind, analyze, key_le};
use crate::range::scan::Scan;
use crate::util::{PrefixCheck, ScanOptions};

/// Forward iteration contract shared by every range variant.
///
/// Usage:
///
/// ```ignore
/// it.rewind();
/// while it.valid() {
///     let (k, v) = it.item().unwrap();
///     // ...
///     it.next()?;
/// }
/// ```
pub trait KeyIterator {
    /// Position at the first key of the range.
    fn rewind(&mut self);

    /// Whether the current position is inside the range. Never moves the cursor.
    fn valid(&self) -> bool;

    fn next(&mut self) -> Result<(), DBError>;

    /// 当前 key（仅在 valid() == true 时有意义）
    fn key(&self) -> Option<&[u8]>;

    fn value(&self) -> Option<&[u8]>;

    fn item(&self) -> Option<(&[u8], &[u8])> {
        match (self.key(), self.value()) {
            (Some(k), Some(v)) => Some((k, v)),
            _ => None,
        }
    }

    /// Drive the rewind/valid/next loop as a std iterator of owned entries.
    fn scan(&mut self) -> Scan<'_, Self>
    where Self: Sized {
        Scan::new(self, None)
    }

    /// Like [`KeyIterator::scan`], stopping after `opts.limit` entries.
    fn scan_with(&mut self, opts: &ScanOptions) -> Scan<'_, Self>
    where Self: Sized {
        Scan::new(self, opts.limit)
    }
}

/// A cursor restricted to the keys selected by a [`Strategy`].
///
/// Holds nothing besides the cursor and the bounds of its variant; `valid()`
/// is recomputed from the cursor's current key on every call.
pub enum KeyRangeIter<C> {
    /// The bare cursor, no bound checks.
    Unconstrained(C),
    PrefixOnly {
        cursor: C,
        prefix: Vec<u8>,
        check: PrefixCheck,
    },
    LowerOnly {
        cursor: C,
        from: Vec<u8>,
    },
    UpperOnly {
        cursor: C,
        to: Vec<u8>,
    },
    Range {
        cursor: C,
        from: Vec<u8>,
        to: Vec<u8>,
    },
    PrefixWithLower {
        cursor: C,
        prefix: Vec<u8>,
        from: Vec<u8>,
        check: PrefixCheck,
    },
}

/// Wrap `cursor` so that it only yields keys matching `prefix`, `from` and `to`.
///
/// Empty slices mean "no constraint". Construction does no I/O; call
/// [`KeyIterator::rewind`] before reading.
pub fn key_range_iterator<C: Cursor>(cursor: C, prefix: &[u8], from: &[u8], to: &[u8]) -> KeyRangeIter<C> {
    key_range_iterator_with_options(cursor, prefix, from, to, &ScanOptions::default())
}

pub fn key_range_iterator_with_options<C: Cursor>(
    cursor: C,
    prefix: &[u8],
    from: &[u8],
    to: &[u8],
    opts: &ScanOptions,
) -> KeyRangeIter<C> {
    let strategy = analyze(prefix, from, to);
    debug!(
        "key range: prefix={:?} from={:?} to={:?} => {:?}",
        prefix,
        from,
        to,
        strategy.kind()
    );
    KeyRangeIter::from_strategy(cursor, strategy, opts.prefix_check)
}

impl<C: Cursor> KeyRangeIter<C> {
    pub fn from_strategy(cursor: C, strategy: Strategy, check: PrefixCheck) -> Self {
        match strategy {
            Strategy::Unconstrained => KeyRangeIter::Unconstrained(cursor),
            Strategy::PrefixOnly { prefix } => KeyRangeIter::PrefixOnly { cursor, prefix, check },
            Strategy::LowerOnly { from } => KeyRangeIter::LowerOnly { cursor, from },
            Strategy::UpperOnly { to } => KeyRangeIter::UpperOnly { cursor, to },
            Strategy::Range { from, to } => KeyRangeIter::Range { cursor, from, to },
            Strategy::PrefixWithLower { prefix, from } => KeyRangeIter::PrefixWithLower {
                cursor,
                prefix,
                from,
                check,
            },
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            KeyRangeIter::Unconstrained(_) => StrategyKind::Unconstrained,
            KeyRangeIter::PrefixOnly { .. } => StrategyKind::PrefixOnly,
            KeyRangeIter::LowerOnly { .. } => StrategyKind::LowerOnly,
            KeyRangeIter::UpperOnly { .. } => StrategyKind::UpperOnly,
            KeyRangeIter::Range { .. } => StrategyKind::Range,
            KeyRangeIter::PrefixWithLower { .. } => StrategyKind::PrefixWithLower,
        }
    }

    /// The strategy this iterator runs, bounds included.
    pub fn strategy(&self) -> Strategy {
        match self {
            KeyRangeIter::Unconstrained(_) => Strategy::Unconstrained,
            KeyRangeIter::PrefixOnly { prefix, .. } => Strategy::PrefixOnly {
                prefix: prefix.clone(),
            },
            KeyRangeIter::LowerOnly { from, .. } => Strategy::LowerOnly { from: from.clone() },
            KeyRangeIter::UpperOnly { to, .. } => Strategy::UpperOnly { to: to.clone() },
            KeyRangeIter::Range { from, to, .. } => Strategy::Range {
                from: from.clone(),
                to: to.clone(),
            },
            KeyRangeIter::PrefixWithLower { prefix, from, .. } => Strategy::PrefixWithLower {
                prefix: prefix.clone(),
                from: from.clone(),
            },
        }
    }

    pub fn cursor(&self) -> &C {
        match self {
            KeyRangeIter::Unconstrained(cursor)
            | KeyRangeIter::PrefixOnly { cursor, .. }
            | KeyRangeIter::LowerOnly { cursor, .. }
            | KeyRangeIter::UpperOnly { cursor, .. }
            | KeyRangeIter::Range { cursor, .. }
            | KeyRangeIter::PrefixWithLower { cursor, .. } => cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut C {
        match self {
            KeyRangeIter::Unconstrained(cursor)
            | KeyRangeIter::PrefixOnly { cursor, .. }
            | KeyRangeIter::LowerOnly { cursor, .. }
            | KeyRangeIter::UpperOnly { cursor, .. }
            | KeyRangeIter::Range { cursor, .. }
            | KeyRangeIter::PrefixWithLower { cursor, .. } => cursor,
        }
    }

    /// Give the cursor back to the caller.
    pub fn into_inner(self) -> C {
        match self {
            KeyRangeIter::Unconstrained(cursor)
            | KeyRangeIter::PrefixOnly { cursor, .. }
            | KeyRangeIter::LowerOnly { cursor, .. }
            | KeyRangeIter::UpperOnly { cursor, .. }
            | KeyRangeIter::Range { cursor, .. }
            | KeyRangeIter::PrefixWithLower { cursor, .. } => cursor,
        }
    }
}

fn has_prefix<C: Cursor>(cursor: &C, prefix: &[u8], check: PrefixCheck) -> bool {
    match check {
        PrefixCheck::Native => cursor.valid_for_prefix(prefix),
        PrefixCheck::Bytewise => cursor.valid() && cursor.key().is_some_and(|k| k.starts_with(prefix)),
    }
}

fn under_upper<C: Cursor>(cursor: &C, to: &[u8]) -> bool {
    cursor.valid() && cursor.key().is_some_and(|k| key_le(k, to))
}

impl<C: Cursor> KeyIterator for KeyRangeIter<C> {
    fn rewind(&mut self) {
        trace!("rewind {:?}", self.kind());
        match self {
            KeyRangeIter::Unconstrained(cursor) | KeyRangeIter::UpperOnly { cursor, .. } => {
                cursor.seek_to_first()
            }
            KeyRangeIter::PrefixOnly { cursor, prefix, .. } => cursor.seek(prefix),
            KeyRangeIter::LowerOnly { cursor, from }
            | KeyRangeIter::Range { cursor, from, .. }
            | KeyRangeIter::PrefixWithLower { cursor, from, .. } => cursor.seek(from),
        }
    }

    fn valid(&self) -> bool {
        match self {
            KeyRangeIter::Unconstrained(cursor) | KeyRangeIter::LowerOnly { cursor, .. } => cursor.valid(),
            KeyRangeIter::PrefixOnly { cursor, prefix, check }
            | KeyRangeIter::PrefixWithLower {
                cursor, prefix, check, ..
            } => has_prefix(cursor, prefix, *check),
            KeyRangeIter::UpperOnly { cursor, to } | KeyRangeIter::Range { cursor, to, .. } => {
                under_upper(cursor, to)
            }
        }
    }

    fn next(&mut self) -> Result<(), DBError> {
        self.cursor_mut().next()
    }

    fn key(&self) -> Option<&[u8]> {
        self.cursor().key()
    }

    fn value(&self) -> Option<&[u8]> {
        self.cursor().value()
    }

    fn item(&self) -> Option<(&[u8], &[u8])> {
        self.cursor().item()
    }
}
