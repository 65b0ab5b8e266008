mod error;
mod resolve;

pub use error::{PathError, PathResult};
pub use resolve::{DEFAULT_BASE_URL, parse_base_url, resolve_path};
