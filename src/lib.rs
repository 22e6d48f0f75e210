pub mod config;
pub mod http;
pub mod model;
pub mod request;
pub mod ui;
pub mod util;
