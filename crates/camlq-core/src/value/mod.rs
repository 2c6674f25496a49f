//! Value formatting: typed scalars to markup text, and CDATA escaping.
mod escape;
mod format;


pub use escape::{escape, unescape};
pub use format::{CamlValue, format_iso8601};
