use crate::DBError;
use crate::iterator::Cursor;

/// A cursor over a store that holds no data.
/// Stands in when a column family or snapshot is missing, so range queries
/// against it simply emit nothing.
#[derive(Debug, Default)]
pub struct EmptyCursor {}

impl EmptyCursor {
    pub fn new() -> Self {
        Self {}
    }
}

impl Cursor for EmptyCursor {
    fn seek_to_first(&mut self) {}

    fn seek(&mut self, _key: &[u8]) {}

    /// Always `false`; there is nothing to point at.
    fn valid(&self) -> bool {
        false
    }

    fn key(&self) -> Option<&[u8]> {
        None
    }

    fn value(&self) -> Option<&[u8]> {
        None
    }

    fn next(&mut self) -> Result<(), DBError> {
        Ok(())
    }
}
