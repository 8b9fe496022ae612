//! UI components for the review screen.

mod app;
mod chat_panel;
mod detail;
mod ecg_image;
mod record_list;
mod upload_dialog;

pub use app::*;
pub use chat_panel::*;
pub use detail::*;
pub use ecg_image::*;
pub use record_list::*;
pub use upload_dialog::*;
