pub mod gallery;
pub mod logging;
pub mod model;
pub mod notice;
pub mod remote;
pub mod tui;
pub mod upload;
pub mod viewer;

mod tui_shell;
