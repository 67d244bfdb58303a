//! Tree-sitter-based named-entity extraction. Feature-gated behind
//! `ner-syntax-tree`; `supports()` reports which languages have a grammar
//! linked in, and the caller falls back to the regex backend otherwise.

use crate::core_types::{EntityKind, NamedEntity};

/// Returns whether a tree-sitter grammar is available for `path`'s language.
#[cfg(feature = "ner-syntax-tree")]
pub fn supports(path: &str) -> bool {
    matches!(path.rsplit('.').next().unwrap_or(""), "c" | "h" | "cpp" | "hpp" | "cc" | "py" | "js" | "jsx")
}

#[cfg(not(feature = "ner-syntax-tree"))]
pub fn supports(_path: &str) -> bool {
    false
}

#[cfg(feature = "ner-syntax-tree")]
fn language_for(path: &str) -> Option<tree_sitter::Language> {
    match path.rsplit('.').next().unwrap_or("") {
        "c" | "h" => Some(tree_sitter_c::language()),
        "cpp" | "hpp" | "cc" => Some(tree_sitter_cpp::language()),
        "py" => Some(tree_sitter_python::language()),
        "js" | "jsx" => Some(tree_sitter_javascript::language()),
        _ => None,
    }
}

#[cfg(feature = "ner-syntax-tree")]
const NODE_KINDS: &[(&str, EntityKind)] = &[
    ("function_definition", EntityKind::Function),
    ("function_declarator", EntityKind::Function),
    ("function_item", EntityKind::Function),
    ("class_definition", EntityKind::Class),
    ("class_declaration", EntityKind::Class),
    ("struct_item", EntityKind::Class),
    ("enum_item", EntityKind::Enum),
    ("import_statement", EntityKind::Import),
    ("import_from_statement", EntityKind::Import),
];

/// Parses `content` with the grammar selected for `path` and walks the tree
/// collecting the name of every node whose kind appears in `NODE_KINDS`.
/// Falls back to an empty result (never panics) when parsing fails.
#[cfg(feature = "ner-syntax-tree")]
pub fn extract(content: &str, path: &str) -> Vec<NamedEntity> {
    let Some(language) = language_for(path) else {
        return Vec::new();
    };
    let mut parser = tree_sitter::Parser::new();
    if parser.set_language(&language).is_err() {
        return Vec::new();
    }
    let Some(tree) = parser.parse(content, None) else {
        return Vec::new();
    };

    let mut entities = Vec::new();
    let mut cursor = tree.walk();
    walk(&mut cursor, content.as_bytes(), &mut entities);
    entities
}

#[cfg(feature = "ner-syntax-tree")]
fn walk(cursor: &mut tree_sitter::TreeCursor, source: &[u8], out: &mut Vec<NamedEntity>) {
    loop {
        let node = cursor.node();
        if let Some((_, kind)) = NODE_KINDS.iter().find(|(k, _)| *k == node.kind()) {
            if let Some(name_node) = node.child_by_field_name("name") {
                if let Ok(name) = name_node.utf8_text(source) {
                    out.push(NamedEntity::new(name, *kind));
                }
            }
        }
        if cursor.goto_first_child() {
            walk(cursor, source, out);
            cursor.goto_parent();
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

#[cfg(not(feature = "ner-syntax-tree"))]
pub fn extract(_content: &str, _path: &str) -> Vec<NamedEntity> {
    Vec::new()
}
