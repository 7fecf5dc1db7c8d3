use crate::DBError;

/// Forward cursor over a byte-ordered key-value store.
///
/// Keys are ordered by unsigned lexicographic comparison. The cursor is owned by
/// the caller (usually tied to a snapshot or transaction); range iterators only
/// borrow it for the duration of a scan.
pub trait Cursor {
    /// 移动到第一个元素
    fn seek_to_first(&mut self);

    /// Position at the first entry whose key is `>= key`.
    fn seek(&mut self, key: &[u8]);

    /// 是否有效（当前位置是否有值）
    fn valid(&self) -> bool;

    /// 当前 key
    fn key(&self) -> Option<&[u8]>;

    /// 当前 value
    fn value(&self) -> Option<&[u8]>;

    /// Advance to the next entry. Storage failures are reported here.
    fn next(&mut self) -> Result<(), DBError>;

    /// Current key and value, `None` when the cursor is exhausted.
    fn item(&self) -> Option<(&[u8], &[u8])> {
        match (self.key(), self.value()) {
            (Some(k), Some(v)) => Some((k, v)),
            _ => None,
        }
    }

    /// Whether the cursor is valid and sits on a key starting with `prefix`.
    ///
    /// Stores that can answer this cheaper than a byte comparison (prefix
    /// compressed blocks, bloom-backed prefix extractors) should override it.
    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        self.valid() && self.key().is_some_and(|k| k.starts_with(prefix))
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn seek_to_first(&mut self) {
        (**self).seek_to_first()
    }

    fn seek(&mut self, key: &[u8]) {
        (**self).seek(key)
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn key(&self) -> Option<&[u8]> {
        (**self).key()
    }

    fn value(&self) -> Option<&[u8]> {
        (**self).value()
    }

    fn next(&mut self) -> Result<(), DBError> {
        (**self).next()
    }

    fn item(&self) -> Option<(&[u8], &[u8])> {
        (**self).item()
    }

    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        (**self).valid_for_prefix(prefix)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn seek_to_first(&mut self) {
        (**self).seek_to_first()
    }

    fn seek(&mut self, key: &[u8]) {
        (**self).seek(key)
    }

    fn valid(&self) -> bool {
        (**self).valid()
    }

    fn key(&self) -> Option<&[u8]> {
        (**self).key()
    }

    fn value(&self) -> Option<&[u8]> {
        (**self).value()
    }

    fn next(&mut self) -> Result<(), DBError> {
        (**self).next()
    }

    fn item(&self) -> Option<(&[u8], &[u8])> {
        (**self).item()
    }

    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        (**self).valid_for_prefix(prefix)
    }
}
