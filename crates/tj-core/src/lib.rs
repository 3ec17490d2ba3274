pub mod error;
pub mod logging;
pub mod models;
pub mod opener;
pub mod parser;
pub mod runner;

pub use error::TjError;
pub use logging::{init, init_default, init_from_args};
pub use models::Location;
pub use parser::{fold_duplicates, TraceParser};
