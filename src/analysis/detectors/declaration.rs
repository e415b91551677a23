// src/analysis/detectors/declaration.rs
//! Declarations of `sync` objects: `var` specs, struct fields and parameters.

use tree_sitter::Node;

use crate::analysis::kind::NodeKind;
use crate::types::{Detail, Finding, Idiom};

use super::{is_qualified, named_children, Detector, ScanContext, SYNC_PACKAGE};

#[cfg(test)]
#[path = "declaration_test.rs"]
mod tests;

/// `var name sync.Member` inside a `var` or `const` declaration.
pub struct SyncDecl {
    idiom: Idiom,
    member: &'static str,
    first_spec_only: bool,
    description: &'static str,
}

impl SyncDecl {
    /// Checks every spec of the declaration and every name in each spec.
    #[must_use]
    pub const fn every_spec(idiom: Idiom, member: &'static str, description: &'static str) -> Self {
        Self { idiom, member, first_spec_only: false, description }
    }

    /// Checks only the first spec of a grouped `var ( ... )` declaration.
    #[must_use]
    pub const fn first_spec(idiom: Idiom, member: &'static str, description: &'static str) -> Self {
        Self { idiom, member, first_spec_only: true, description }
    }
}

impl Detector for SyncDecl {
    fn idiom(&self) -> Idiom {
        self.idiom
    }

    fn kind(&self) -> NodeKind {
        NodeKind::GenericDeclaration
    }

    fn describe(&self) -> &'static str {
        self.description
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let specs = value_specs(node);
        let limit = if self.first_spec_only { 1 } else { specs.len() };

        for spec in specs.into_iter().take(limit) {
            push_matching_names(spec, self.idiom, self.member, ctx, out, |name| {
                Detail::Declared { name }
            });
        }
    }
}

/// A struct field or function parameter typed `sync.Member`.
pub struct SyncField {
    idiom: Idiom,
    member: &'static str,
    description: &'static str,
}

impl SyncField {
    #[must_use]
    pub const fn new(idiom: Idiom, member: &'static str, description: &'static str) -> Self {
        Self { idiom, member, description }
    }
}

impl Detector for SyncField {
    fn idiom(&self) -> Idiom {
        self.idiom
    }

    fn kind(&self) -> NodeKind {
        NodeKind::StructField
    }

    fn describe(&self) -> &'static str {
        self.description
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        push_matching_names(node, self.idiom, self.member, ctx, out, |name| {
            Detail::Field { name }
        });
    }
}

/// `var_spec` / `const_spec` children of a declaration, in source order.
/// Grouped declarations may nest the specs in a spec list.
fn value_specs(decl: Node) -> Vec<Node> {
    let mut specs = Vec::new();
    for child in named_children(decl) {
        match child.kind() {
            "var_spec" | "const_spec" => specs.push(child),
            "var_spec_list" | "const_spec_list" => specs.extend(
                named_children(child)
                    .into_iter()
                    .filter(|c| matches!(c.kind(), "var_spec" | "const_spec")),
            ),
            _ => {}
        }
    }
    specs
}

/// Emits one finding per `name` field of `holder` when its `type` field is
/// `sync.<member>`.
fn push_matching_names(
    holder: Node,
    idiom: Idiom,
    member: &str,
    ctx: &ScanContext,
    out: &mut Vec<Finding>,
    detail: impl Fn(String) -> Detail,
) {
    let Some(ty) = holder.child_by_field_name("type") else {
        return;
    };
    if !is_qualified(ty, ctx.source, SYNC_PACKAGE, member) {
        return;
    }

    let mut cursor = holder.walk();
    for name in holder.children_by_field_name("name", &mut cursor) {
        out.push(ctx.finding(idiom, name, detail(ctx.text(name).to_string())));
    }
}
