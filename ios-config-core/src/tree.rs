use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// One `interface <name>` block, header through terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceBlock {
    /// Interface name taken from the header line.
    pub name: String,
    /// Raw lines of the block. Line 0 is the header; the last line is the
    /// terminator when `terminated` is set.
    pub lines: Vec<String>,
    /// Whether a `!` line closed the block before end of input.
    pub terminated: bool,
}

impl InterfaceBlock {
    /// Create an open block from its header line.
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: vec![header.into()],
            terminated: false,
        }
    }

    /// Header line as it appeared in the source.
    pub fn header(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or_default()
    }

    /// Lines between the header and the terminator.
    pub fn body(&self) -> &[String] {
        let end = if self.terminated {
            self.lines.len().saturating_sub(1)
        } else {
            self.lines.len()
        };
        self.lines.get(1..end.max(1)).unwrap_or_default()
    }
}

/// A top-level piece of a configuration, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// A line outside any interface block.
    Global { line: String },
    /// An interface block.
    Interface(InterfaceBlock),
}

impl Segment {
    /// Raw lines covered by this segment.
    pub fn lines(&self) -> &[String] {
        match self {
            Segment::Global { line } => std::slice::from_ref(line),
            Segment::Interface(block) => &block.lines,
        }
    }
}

/// Parsed configuration: global lines and interface blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDocument {
    pub segments: Vec<Segment>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_global(&mut self, line: impl Into<String>) {
        self.segments.push(Segment::Global { line: line.into() });
    }

    pub fn push_interface(&mut self, block: InterfaceBlock) {
        self.segments.push(Segment::Interface(block));
    }

    /// All interface blocks in source order.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceBlock> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Interface(block) => Some(block),
            Segment::Global { .. } => None,
        })
    }

    /// All global lines in source order.
    pub fn global_lines(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Global { line } => Some(line.as_str()),
            Segment::Interface(_) => None,
        })
    }

    /// Every line of the document, flattened in source order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .flat_map(Segment::lines)
            .map(String::as_str)
    }
}

impl Display for ConfigDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
