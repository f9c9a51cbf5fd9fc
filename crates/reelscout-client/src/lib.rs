pub mod error;
pub mod omdb;
mod schema;
pub mod traits;

pub use error::{Error, Result};
pub use omdb::{OmdbClient, DEFAULT_BASE_URL, FALLBACK_API_KEY};
pub use traits::MovieSource;
