//! Line oriented token listing used to hand tokens from the scan phase to
//! the parse phase through a file.

mod listing;

pub use listing::*;
