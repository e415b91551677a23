// src/analysis/detectors/mod.rs
//! Idiom detectors.
//!
//! Each detector is a stateless matcher scoped to one [`NodeKind`]. It looks
//! only at the node handed to it and, for qualified references, at the
//! immediate `package.Member` pair of a type or selector. No symbol table is
//! consulted: a local `sync` identifier or a type alias of `sync.Mutex` is
//! misclassified, and that is accepted.

mod channel;
mod declaration;
mod method;

use std::path::Path;

use tree_sitter::Node;

use crate::lang;
use crate::types::{Detail, Finding, Idiom, Position};

use super::kind::NodeKind;

pub use channel::{ChannelMake, ChannelReceive, ChannelSend};
pub use declaration::{SyncDecl, SyncField};
pub use method::{MethodCall, NewCond};

/// Package name of the standard concurrency library.
pub const SYNC_PACKAGE: &str = "sync";

/// Per-file state shared by all detectors during one walk.
pub struct ScanContext<'a> {
    pub source: &'a str,
    pub path: &'a Path,
}

impl<'a> ScanContext<'a> {
    #[must_use]
    pub fn new(path: &'a Path, source: &'a str) -> Self {
        Self { source, path }
    }

    #[must_use]
    pub fn text(&self, node: Node) -> &'a str {
        lang::text(node, self.source)
    }

    #[must_use]
    pub fn render(&self, node: Node) -> String {
        lang::render(node, self.source)
    }

    #[must_use]
    pub fn position(&self, node: Node) -> Position {
        Position::new(self.path, node.start_position())
    }

    #[must_use]
    pub fn finding(&self, idiom: Idiom, node: Node, detail: Detail) -> Finding {
        Finding::new(idiom, self.position(node), detail)
    }
}

/// A stateless idiom matcher.
pub trait Detector: Sync {
    /// The idiom this detector reports.
    fn idiom(&self) -> Idiom;

    /// The node kind this detector accepts.
    fn kind(&self) -> NodeKind;

    /// One-line description for the idiom catalog.
    fn describe(&self) -> &'static str;

    /// Inspects `node` and pushes zero or more findings.
    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>);
}

/// Matches `package.member` as a qualified type or as a selector on a bare
/// identifier. Looks one level deep only.
#[must_use]
pub fn is_qualified(node: Node, source: &str, package: &str, member: &str) -> bool {
    let (pkg, name) = match node.kind() {
        "qualified_type" => (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ),
        "selector_expression" => (
            node.child_by_field_name("operand")
                .filter(|operand| operand.kind() == "identifier"),
            node.child_by_field_name("field"),
        ),
        _ => return false,
    };

    match (pkg, name) {
        (Some(pkg), Some(name)) => {
            lang::text(pkg, source) == package && lang::text(name, source) == member
        }
        _ => false,
    }
}

/// Named children of `node`, skipping comments.
pub(crate) fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}
