pub mod bounds;
mod range_iter;
mod scan;

pub use bounds::{Strategy, StrategyKind, analyze, key_le, last_in_prefix};
pub use range_iter::{KeyIterator, KeyRangeIter, key_range_iterator, key_range_iterator_with_options};
pub use scan::Scan;
