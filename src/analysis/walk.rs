// src/analysis/walk.rs
//! Pre-order traversal with per-node detector dispatch.

use tree_sitter::Node;

use crate::types::Finding;

use super::detectors::ScanContext;
use super::kind::NodeKind;
use super::registry;

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;

/// Visits every node under `root` (inclusive) exactly once, depth-first,
/// parents before children, siblings in source order.
///
/// Uses a tree cursor rather than recursion, so deeply nested sources cannot
/// exhaust the stack.
pub fn for_each_preorder<'t>(root: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = root.walk();
    let mut depth = 0usize;

    loop {
        visit(cursor.node());

        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        loop {
            if depth == 0 {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}

/// Runs every registered detector for the node's kind, in registration order.
pub fn dispatch(node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
    for detector in registry::detectors_for(NodeKind::of(node)) {
        detector.detect(node, ctx, out);
    }
}

/// Walks the tree and collects findings in traversal order.
#[must_use]
pub fn walk(root: Node, ctx: &ScanContext) -> Vec<Finding> {
    let mut findings = Vec::new();
    for_each_preorder(root, |node| dispatch(node, ctx, &mut findings));
    findings
}
