pub mod errors;

pub use errors::{PurgeError, Result};
