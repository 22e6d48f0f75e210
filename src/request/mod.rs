pub mod controller;
pub mod error;
pub mod inflight;
pub mod query;
pub mod state;

pub use controller::{Completion, RequestController, Resolution};
pub use error::{ErrorInfo, ErrorKind, FetchError};
pub use query::SearchQuery;
pub use state::{FetchState, FetchStatus};
