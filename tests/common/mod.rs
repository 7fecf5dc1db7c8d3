#![allow(dead_code)]

use kvrange::{KeyIterator, VecCursor};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Store holding the two-digit keys "00" ..= "99", value equal to the key.
pub fn decimal_store() -> VecCursor {
    VecCursor::new(
        (0..100u32)
            .map(|i| {
                let k = format!("{i:02}").into_bytes();
                (k.clone(), k)
            })
            .collect(),
    )
}

/// Drive the canonical rewind/valid/next loop and collect the keys as strings.
pub fn keys_of<I: KeyIterator>(it: &mut I) -> Vec<String> {
    let mut keys = vec![];
    it.rewind();
    while it.valid() {
        let (k, _) = it.item().expect("valid iterator has an item");
        keys.push(String::from_utf8_lossy(k).into_owned());
        it.next().expect("in-memory cursor does not fail");
    }
    keys
}
