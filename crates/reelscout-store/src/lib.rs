pub mod error;
mod store;

pub use error::{Error, Result};
pub use store::{FileStore, FAVORITES_ENTRY, LAST_VIEWED_ENTRY};
