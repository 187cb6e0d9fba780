use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::tree::{ConfigDocument, InterfaceBlock};

/// Keyword that opens an interface block.
pub const INTERFACE_KEYWORD: &str = "interface";

/// Line that closes an interface block.
pub const TERMINATOR: &str = "!";

/// Errors that can occur while loading a configuration into a [`ConfigDocument`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read input file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Input bytes were not valid UTF-8.
    #[error("invalid UTF-8 in config file: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Split configuration text into global lines and interface blocks.
///
/// Parsing is lenient: a block still open at end of input is kept as an
/// unterminated block, and a header without an interface name is treated as
/// an ordinary global line.
pub fn parse(text: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    let mut current: Option<InterfaceBlock> = None;

    for line in text.lines() {
        let trim = line.trim();

        if let Some(name) = header_name(trim) {
            if let Some(open) = current.take() {
                doc.push_interface(open);
            }
            current = Some(InterfaceBlock::new(name, line));
            continue;
        }

        match current.as_mut() {
            Some(block) if trim == TERMINATOR => {
                block.lines.push(line.to_string());
                block.terminated = true;
                if let Some(closed) = current.take() {
                    doc.push_interface(closed);
                }
            }
            Some(block) => block.lines.push(line.to_string()),
            None => doc.push_global(line),
        }
    }

    if let Some(open) = current {
        doc.push_interface(open);
    }

    doc
}

/// Parse a configuration file into a [`ConfigDocument`].
pub fn parse_file(path: &Path) -> Result<ConfigDocument, ParseError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(parse(&text))
}

/// Interface name of a trimmed header line, if the line opens a block.
fn header_name(trim: &str) -> Option<&str> {
    let rest = trim.strip_prefix(INTERFACE_KEYWORD)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next()
}
