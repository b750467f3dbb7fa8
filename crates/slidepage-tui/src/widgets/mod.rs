//! Widget components for the presenter

mod header;
mod slide_view;
mod status_bar;

pub use header::Header;
pub use slide_view::{Diagnostics, SlideView};
pub use status_bar::{status_text, StatusBar};
