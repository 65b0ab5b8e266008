mod error;
mod lexer;
mod matcher;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::compile;
pub use matcher::{CaptureList, match_path};
pub use segment::{RoutePattern, TemplatePart};
