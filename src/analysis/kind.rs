//! Node classification for detector dispatch.

use tree_sitter::Node;

/// Dispatch discriminant of a syntax node.
///
/// Several grammar kinds fold into one variant: a field list entry in Go can
/// be a struct field or a function parameter, and both `var` and `const`
/// are value declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CallExpression,
    SendStatement,
    UnaryOperation,
    GenericDeclaration,
    StructField,
    MemberAccess,
    Other,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        NodeKind::CallExpression,
        NodeKind::SendStatement,
        NodeKind::UnaryOperation,
        NodeKind::GenericDeclaration,
        NodeKind::StructField,
        NodeKind::MemberAccess,
        NodeKind::Other,
    ];

    #[must_use]
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "call_expression" => Self::CallExpression,
            "send_statement" => Self::SendStatement,
            "unary_expression" => Self::UnaryOperation,
            "var_declaration" | "const_declaration" => Self::GenericDeclaration,
            "field_declaration" | "parameter_declaration" => Self::StructField,
            "selector_expression" => Self::MemberAccess,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn of(node: Node) -> Self {
        // Recovered error nodes never dispatch, whatever they wrap.
        if node.is_error() || node.is_missing() {
            return Self::Other;
        }
        Self::from_grammar(node.kind())
    }
}
