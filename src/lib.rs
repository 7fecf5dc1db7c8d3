//! Bounded iteration over ordered key-value cursors.
//!
//! A range query combines an optional key prefix, an inclusive lower bound
//! `from` and an inclusive upper bound `to`. [`key_range_iterator`] picks, once
//! per query, the cheapest way to walk a [`Cursor`] that still yields exactly
//! the matching keys.
//!
//! ```
//! use kvrange::{KeyIterator, VecCursor, key_range_iterator};
//!
//! let cursor = VecCursor::new(
//!     (0..100u32)
//!         .map(|i| (format!("{i:02}").into_bytes(), Vec::new()))
//!         .collect(),
//! );
//!
//! let mut it = key_range_iterator(cursor, b"9", b"", b"92");
//! let mut keys = vec![];
//! it.rewind();
//! while it.valid() {
//!     keys.push(it.key().unwrap().to_vec());
//!     it.next().unwrap();
//! }
//! assert_eq!(keys, vec![b"90".to_vec(), b"91".to_vec(), b"92".to_vec()]);
//! ```

pub mod error;
pub mod iterator;
pub mod range;
pub mod util;

pub use crate::error::DBError;
pub use crate::iterator::{Cursor, EmptyCursor, VecCursor};
pub use crate::range::{
    KeyIterator, KeyRangeIter, Scan, Strategy, StrategyKind, key_range_iterator, key_range_iterator_with_options,
};
pub use crate::util::{PrefixCheck, ScanOptions, load_scan_config};
