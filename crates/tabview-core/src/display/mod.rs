pub mod table;

pub use table::{TableDisplay, parse_color};
