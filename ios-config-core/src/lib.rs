//! Generic parsing, writing and diffing primitives for line-oriented
//! IOS-style device configurations.

pub mod diff;
pub mod format;
pub mod parser;
pub mod tree;
pub mod writer;

pub use diff::{diff, BlockChange};
pub use format::{format_summary, format_text};
pub use parser::{parse, parse_file, ParseError, INTERFACE_KEYWORD, TERMINATOR};
pub use tree::{ConfigDocument, InterfaceBlock, Segment};
pub use writer::write;
