//! D2 script emission.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::SynthesisError;
use crate::ir::{GraphIr, Node, NodeKind};

lazy_static! {
    // Runs of what the key normaliser keeps, single dashes between runs.
    // Marks are allowed so combining vowel signs stay with their letter.
    static ref IDENTIFIER_REGEX: Regex = Regex::new(
        r"^[\p{Alphabetic}\p{M}\p{N}]+(?:-[\p{Alphabetic}\p{M}\p{N}]+)*$"
    ).unwrap();
}

/// Check that `id` can follow a kind prefix in an unquoted D2 shape key.
pub fn validate_identifier(id: &str) -> Result<(), SynthesisError> {
    if !IDENTIFIER_REGEX.is_match(id) {
        return Err(SynthesisError::MalformedIdentifier(id.to_string()));
    }
    Ok(())
}

/// D2 key of a node. Concepts and predicates get their own prefix, so the two
/// kinds never clash and no key is a D2 keyword.
fn shape_key(kind: NodeKind, id: &str) -> String {
    match kind {
        NodeKind::Concept => format!("c-{}", id),
        NodeKind::Predicate => format!("p-{}", id),
    }
}

/// Render `ir` as a D2 script.
pub fn emit_script(ir: &GraphIr) -> Result<String, SynthesisError> {
    let mut out = String::new();

    out.push_str(&format!("direction: {}\n", ir.direction()));
    out.push_str("classes: {\n");
    for class in ir.classes() {
        out.push_str(&format!("  {}: {{\n", class.class.name()));
        if let Some(shape) = class.shape {
            out.push_str(&format!("    shape: {}\n", shape.as_str()));
        }
        out.push_str(&format!("    height: {}\n", class.height));
        if let Some(radius) = class.border_radius {
            out.push_str(&format!("    style: {{\n      border-radius: {}\n    }}\n", radius));
        }
        out.push_str("  }\n");
    }
    out.push_str("}\n");

    for node in ir.nodes() {
        validate_identifier(&node.id)?;
        emit_node(&mut out, node);
    }

    for edge in ir.edges() {
        validate_identifier(&edge.source)?;
        validate_identifier(&edge.target)?;
        out.push_str(&format!(
            "{} -> {}\n",
            shape_key(edge.source_kind, &edge.source),
            shape_key(edge.target_kind(), &edge.target)
        ));
    }

    Ok(out)
}

fn emit_node(out: &mut String, node: &Node) {
    out.push_str(&format!("{}: {{\n", shape_key(node.kind, &node.id)));
    out.push_str(&format!("  class: {}\n", node.class.name()));
    out.push_str(&format!("  label: {}\n", quote(&node.label)));
    if let Some(shape) = node.shape {
        out.push_str(&format!("  shape: {}\n", shape.as_str()));
    }

    let style = &node.style;
    if !style.is_empty() {
        out.push_str("  style: {\n");
        for (name, value) in [
            ("italic", style.italic),
            ("bold", style.bold),
            ("underline", style.underline),
        ] {
            if let Some(value) = value {
                out.push_str(&format!("    {}: {}\n", name, value));
            }
        }
        out.push_str("  }\n");
    }

    if let Some(link) = &node.link {
        out.push_str(&format!("  link: {}\n", quote(link)));
    }
    out.push_str("}\n");
}

// Double-quoted D2 strings substitute `${name}`, so that opener is escaped too
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' || ch == '\\' || (ch == '$' && chars.peek() == Some(&'{')) {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
