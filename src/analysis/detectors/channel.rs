// src/analysis/detectors/channel.rs
//! Channel allocation, send and receive.

use tree_sitter::Node;

use crate::analysis::kind::NodeKind;
use crate::types::{Buffer, Detail, Finding, Idiom, Operand};

use super::{named_children, Detector, ScanContext};

#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;

/// Builtin used to allocate channels, maps and slices.
const MAKE_BUILTIN: &str = "make";

/// `make(chan T)` and `make(chan T, size)`.
pub struct ChannelMake;

impl Detector for ChannelMake {
    fn idiom(&self) -> Idiom {
        Idiom::ChannelMake
    }

    fn kind(&self) -> NodeKind {
        NodeKind::CallExpression
    }

    fn describe(&self) -> &'static str {
        "make(chan T[, size]): element type and buffer size"
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "identifier" || ctx.text(callee) != MAKE_BUILTIN {
            return;
        }
        let Some(arguments) = node.child_by_field_name("arguments") else {
            return;
        };

        let args = named_children(arguments);
        let (chan, buffer) = match args.as_slice() {
            [chan] => (*chan, Buffer::Unbuffered),
            [chan, size] => (*chan, classify_buffer(*size, ctx)),
            _ => return,
        };

        let Some(element_type) = element_type_name(chan, ctx) else {
            return;
        };

        out.push(ctx.finding(
            self.idiom(),
            node,
            Detail::Channel {
                element_type: element_type.to_string(),
                buffer,
            },
        ));
    }
}

/// Element type of a `chan T` expression, when `T` is a plain type name.
fn element_type_name<'a>(node: Node, ctx: &ScanContext<'a>) -> Option<&'a str> {
    if node.kind() != "channel_type" {
        return None;
    }
    let value = node.child_by_field_name("value")?;
    (value.kind() == "type_identifier").then(|| ctx.text(value))
}

fn classify_buffer(size: Node, ctx: &ScanContext) -> Buffer {
    match size.kind() {
        "int_literal" => Buffer::Literal(ctx.text(size).to_string()),
        "float_literal"
        | "imaginary_literal"
        | "rune_literal"
        | "interpreted_string_literal"
        | "raw_string_literal" => Buffer::NonInteger(ctx.text(size).to_string()),
        _ => Buffer::Computed(ctx.render(size)),
    }
}

/// `ch <- value`. Only a bare identifier target is reported; a send to a
/// field or index expression yields nothing.
pub struct ChannelSend;

impl Detector for ChannelSend {
    fn idiom(&self) -> Idiom {
        Idiom::ChannelSend
    }

    fn kind(&self) -> NodeKind {
        NodeKind::SendStatement
    }

    fn describe(&self) -> &'static str {
        "ch <- v: target channel identifier and sent value"
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let (Some(channel), Some(value)) = (
            node.child_by_field_name("channel"),
            node.child_by_field_name("value"),
        ) else {
            return;
        };
        if channel.kind() != "identifier" {
            return;
        }

        out.push(ctx.finding(
            self.idiom(),
            node,
            Detail::Send {
                channel: ctx.text(channel).to_string(),
                value: ctx.render(value),
            },
        ));
    }
}

/// `<-ch` and `<-expr`.
pub struct ChannelReceive;

impl Detector for ChannelReceive {
    fn idiom(&self) -> Idiom {
        Idiom::ChannelReceive
    }

    fn kind(&self) -> NodeKind {
        NodeKind::UnaryOperation
    }

    fn describe(&self) -> &'static str {
        "<-ch: received channel identifier or expression"
    }

    fn detect(&self, node: Node, ctx: &ScanContext, out: &mut Vec<Finding>) {
        let Some(operator) = node.child_by_field_name("operator") else {
            return;
        };
        if operator.kind() != "<-" {
            return;
        }
        let Some(operand) = node.child_by_field_name("operand") else {
            return;
        };

        let channel = if operand.kind() == "identifier" {
            Operand::Ident(ctx.text(operand).to_string())
        } else {
            Operand::Expr(ctx.render(operand))
        };
        out.push(ctx.finding(self.idiom(), node, Detail::Receive { channel }));
    }
}
