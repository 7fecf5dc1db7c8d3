pub(crate) mod cursor;
pub(crate) mod empty_cursor;
pub(crate) mod vec_cursor;

pub use cursor::Cursor;
pub use empty_cursor::EmptyCursor;
pub use vec_cursor::VecCursor;
