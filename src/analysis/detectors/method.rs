// src/analysis/detectors/method.rs
//! Method selectors on sync objects and `sync.NewCond`.

use tree_sitter::Node;

use crate::analysis::kind::NodeKind;
use crate::types::{Detail, Finding, Idiom};

use super::{is_qualified, Detector, ScanContext, SYNC_PACKAGE};

#[cfg(test)]
#[path = "method_test.rs"]
mod tests;

/// `recv.Selector`, matched on the selector name alone.
///
/// The receiver's type is unknown, so `file.Close` never matches but any
/// `x.Lock` does, whether `x` is a mutex or not.
pub struct MethodCall {
    idiom: Idiom,
    selector: &'static str,
    description: &'static str,
}

impl MethodCall {
    #[must_use]
    pub const fn new(idiom: Idiom, selector: &'static str, description: &'static str) -> Self {
        Self { idiom, selector, description }
    }
}

impl Detector for MethodCall {
    fn idiom(&self) -> Idiom {
        self.idiom
    }

    fn kind(&self) -> NodeKind {
        NodeKind::MemberAccess
    }

    fn describe(&self) -> &'static str {
        self.description
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let (Some(operand), Some(field)) = (
            node.child_by_field_name("operand"),
            node.child_by_field_name("field"),
        ) else {
            return;
        };
        if ctx.text(field) != self.selector {
            return;
        }

        out.push(ctx.finding(
            self.idiom,
            node,
            Detail::Receiver {
                receiver: ctx.render(operand),
            },
        ));
    }
}

/// `sync.NewCond(l)`.
pub struct NewCond;

impl Detector for NewCond {
    fn idiom(&self) -> Idiom {
        Idiom::NewCond
    }

    fn kind(&self) -> NodeKind {
        NodeKind::CallExpression
    }

    fn describe(&self) -> &'static str {
        "sync.NewCond(l): condition variable construction"
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if is_qualified(callee, ctx.source, SYNC_PACKAGE, "NewCond") {
            out.push(ctx.finding(self.idiom(), node, Detail::None));
        }
    }
}
