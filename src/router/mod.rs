mod errors;
mod handler;
mod options;
mod service;
mod table;

pub use errors::{RouterError, RouterResult};
pub use handler::{RouteHandler, Routes};
pub use options::{DuplicateParamPolicy, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::Router;
pub use table::{Registration, RouteEntry, RouteTable};
