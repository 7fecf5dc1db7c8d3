use crate::DBError;
use crate::range::range_iter::KeyIterator;

/// Owned key/value pairs pulled out of a [`KeyIterator`].
///
/// The first call rewinds the underlying iterator; later calls advance it.
/// A cursor error is yielded once, after which the scan is finished.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Scan<'a, I> {
    inner: &'a mut I,
    started: bool,
    done: bool,
    remaining: Option<usize>,
}

impl<'a, I: KeyIterator> Scan<'a, I> {
    pub(crate) fn new(inner: &'a mut I, limit: Option<usize>) -> Self {
        Self {
            inner,
            started: false,
            done: false,
            remaining: limit,
        }
    }

    /// Only the keys, errors still reported in order.
    pub fn keys(self) -> impl Iterator<Item = Result<Vec<u8>, DBError>> {
        self.map(|r| r.map(|(k, _)| k))
    }
}

impl<I: KeyIterator> Iterator for Scan<'_, I> {
    type Item = Result<(Vec<u8>, Vec<u8>), DBError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.remaining == Some(0) {
            self.done = true;
            return None;
        }

        if self.started {
            if let Err(e) = KeyIterator::next(&mut *self.inner) {
                self.done = true;
                return Some(Err(e));
            }
        } else {
            self.inner.rewind();
            self.started = true;
        }

        let entry = match self.inner.item() {
            Some((k, v)) if self.inner.valid() => (k.to_vec(), v.to_vec()),
            _ => {
                self.done = true;
                return None;
            }
        };

        if let Some(n) = self.remaining.as_mut() {
            *n -= 1;
        }
        Some(Ok(entry))
    }
}
