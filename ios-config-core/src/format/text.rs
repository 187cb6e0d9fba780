use crate::diff::result::BlockChange;

/// Format block changes as plain text.
pub fn format_text(changes: &[BlockChange]) -> String {
    let mut lines = Vec::with_capacity(changes.len());
    for change in changes {
        match change {
            BlockChange::Renamed { from, to } => lines.push(format!("~ interface {from} -> {to}")),
            BlockChange::LineChanged { block, left, right } => {
                lines.push(format!("~ {block}"));
                lines.push(format!("  left:  {}", left.trim()));
                lines.push(format!("  right: {}", right.trim()));
            }
            BlockChange::OnlyLeft { line } => lines.push(format!("- {line}")),
            BlockChange::OnlyRight { line } => lines.push(format!("+ {line}")),
            BlockChange::BlockOnlyLeft { block } => lines.push(format!("- interface {block}")),
            BlockChange::BlockOnlyRight { block } => lines.push(format!("+ interface {block}")),
        }
    }
    lines.join("\n")
}

/// Format a simple summary of change counts.
pub fn format_summary(changes: &[BlockChange]) -> String {
    let mut renamed = 0;
    let mut changed = 0;
    let mut removed = 0;
    let mut added = 0;

    for change in changes {
        match change {
            BlockChange::Renamed { .. } => renamed += 1,
            BlockChange::LineChanged { .. } => changed += 1,
            BlockChange::OnlyLeft { .. } | BlockChange::BlockOnlyLeft { .. } => removed += 1,
            BlockChange::OnlyRight { .. } | BlockChange::BlockOnlyRight { .. } => added += 1,
        }
    }

    format!("renamed={renamed} changed={changed} removed={removed} added={added}")
}
