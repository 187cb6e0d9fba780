use std::collections::HashMap;

use crate::diff::result::BlockChange;
use crate::tree::{ConfigDocument, InterfaceBlock};

/// Diff two configuration documents.
///
/// Interface blocks are matched by position, which is how a rewrite that
/// renames blocks in place is best described. Global lines are compared as
/// multisets so that reordering alone produces no changes.
pub fn diff(left: &ConfigDocument, right: &ConfigDocument) -> Vec<BlockChange> {
    let mut out = Vec::new();
    diff_globals(left, right, &mut out);

    let left_blocks: Vec<&InterfaceBlock> = left.interfaces().collect();
    let right_blocks: Vec<&InterfaceBlock> = right.interfaces().collect();
    let max = left_blocks.len().max(right_blocks.len());
    for i in 0..max {
        match (left_blocks.get(i), right_blocks.get(i)) {
            (Some(l), Some(r)) => diff_block(l, r, &mut out),
            (Some(l), None) => out.push(BlockChange::BlockOnlyLeft {
                block: l.name.clone(),
            }),
            (None, Some(r)) => out.push(BlockChange::BlockOnlyRight {
                block: r.name.clone(),
            }),
            (None, None) => {}
        }
    }

    out
}

fn diff_globals(left: &ConfigDocument, right: &ConfigDocument, out: &mut Vec<BlockChange>) {
    let mut right_counts = line_counts(right.global_lines());
    for line in left.global_lines() {
        match right_counts.get_mut(line) {
            Some(count) if *count > 0 => *count -= 1,
            _ => out.push(BlockChange::OnlyLeft {
                line: line.to_string(),
            }),
        }
    }

    let mut left_counts = line_counts(left.global_lines());
    for line in right.global_lines() {
        match left_counts.get_mut(line) {
            Some(count) if *count > 0 => *count -= 1,
            _ => out.push(BlockChange::OnlyRight {
                line: line.to_string(),
            }),
        }
    }
}

fn diff_block(left: &InterfaceBlock, right: &InterfaceBlock, out: &mut Vec<BlockChange>) {
    if left.name != right.name {
        out.push(BlockChange::Renamed {
            from: left.name.clone(),
            to: right.name.clone(),
        });
    }

    let max = left.lines.len().max(right.lines.len());
    for i in 1..max {
        let l = left.lines.get(i).map(|s| s.trim_end()).unwrap_or_default();
        let r = right.lines.get(i).map(|s| s.trim_end()).unwrap_or_default();
        if l.trim() == r.trim() {
            continue;
        }
        out.push(BlockChange::LineChanged {
            block: right.name.clone(),
            left: l.to_string(),
            right: r.to_string(),
        });
    }
}

fn line_counts<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for line in lines {
        *counts.entry(line).or_insert(0) += 1;
    }
    counts
}
