//! Terminal front end: rendering, prompts and clipboard

pub mod clipboard;
pub mod display;
pub mod prompt;

pub use clipboard::{copy_password, copy_to_system_clipboard, ClipboardSink, SystemClipboard};
pub use display::{fill_percent, meter_points, render_meter, render_report};
