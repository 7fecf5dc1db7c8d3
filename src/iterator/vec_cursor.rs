use crate::DBError;
use crate::iterator::Cursor;

/// In-memory cursor over sorted key/value pairs.
///
/// Useful as a materialized snapshot of a store, and as the reference store in
/// tests. `new` expects the entries sorted by key with no duplicates.
pub struct VecCursor {
    data: Vec<(Vec<u8>, Vec<u8>)>,
    /// `data.len()` means "not positioned"
    index: usize,
}

impl VecCursor {
    pub fn new(data: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        debug_assert!(
            data.windows(2).all(|w| w[0].0 < w[1].0),
            "VecCursor::new requires strictly ascending keys"
        );
        let index = data.len();
        Self { data, index }
    }

    /// Sort `data` by key. For duplicate keys the entry inserted last wins.
    pub fn from_unsorted(mut data: Vec<(Vec<u8>, Vec<u8>)>) -> Self {
        // stable sort，同 key 保持插入顺序
        data.sort_by(|a, b| a.0.cmp(&b.0));
        data.reverse();
        data.dedup_by(|a, b| a.0 == b.0);
        data.reverse();
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Cursor for VecCursor {
    fn seek_to_first(&mut self) {
        self.index = 0;
    }

    fn seek(&mut self, key: &[u8]) {
        self.index = self.data.partition_point(|(k, _)| k.as_slice() < key);
    }

    fn valid(&self) -> bool {
        self.index < self.data.len()
    }

    fn key(&self) -> Option<&[u8]> {
        self.data.get(self.index).map(|(k, _)| k.as_slice())
    }

    fn value(&self) -> Option<&[u8]> {
        self.data.get(self.index).map(|(_, v)| v.as_slice())
    }

    fn next(&mut self) -> Result<(), DBError> {
        if self.valid() {
            self.index += 1;
        }
        Ok(())
    }

    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        match self.data.get(self.index) {
            Some((k, _)) => k.starts_with(prefix),
            None => false,
        }
    }
}
