pub mod colors;
pub mod date;
pub mod formatting;
pub mod json;
pub mod path;
pub mod time;

pub use formatting::{display_width, pad_right};
pub use time::pad2;
