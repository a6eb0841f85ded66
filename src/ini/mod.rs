//! INI text reading and writing.

pub mod parser;
pub mod writer;

pub use parser::{classify_line, parse_bytes, parse_file, parse_str, Line, ParseStats};
pub use writer::{render, write_file, RenderOptions};
