pub mod app;
pub mod components;
pub mod form;
pub mod input;
pub mod message;
pub mod results;
pub mod tui;
pub mod util;
