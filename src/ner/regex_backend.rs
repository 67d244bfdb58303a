//! Per-language regex tables for class/function/variable/enum/import
//! declarations. The fastest backend; used as the fallback for every
//! other backend when its preferred path is unavailable.

use crate::core_types::{EntityKind, NamedEntity};
use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: &'static str,
    kind: EntityKind,
}

static RUST_RULES: Lazy<Vec<(Regex, EntityKind)>> = Lazy::new(|| {
    compile(&[
        Rule { pattern: r"\bfn\s+(\w+)", kind: EntityKind::Function },
        Rule { pattern: r"\bstruct\s+(\w+)", kind: EntityKind::Class },
        Rule { pattern: r"\benum\s+(\w+)", kind: EntityKind::Enum },
        Rule { pattern: r"\blet\s+(?:mut\s+)?(\w+)", kind: EntityKind::Variable },
        Rule { pattern: r"\buse\s+([\w:]+)", kind: EntityKind::Import },
    ])
});

static PYTHON_RULES: Lazy<Vec<(Regex, EntityKind)>> = Lazy::new(|| {
    compile(&[
        Rule { pattern: r"\bdef\s+(\w+)", kind: EntityKind::Function },
        Rule { pattern: r"\bclass\s+(\w+)", kind: EntityKind::Class },
        Rule { pattern: r"^\s*(\w+)\s*=", kind: EntityKind::Variable },
        Rule { pattern: r"\bimport\s+(\w+)", kind: EntityKind::Import },
        Rule { pattern: r"\bfrom\s+(\w+)\s+import", kind: EntityKind::Import },
    ])
});

static C_LIKE_RULES: Lazy<Vec<(Regex, EntityKind)>> = Lazy::new(|| {
    compile(&[
        Rule { pattern: r"\bclass\s+(\w+)", kind: EntityKind::Class },
        Rule { pattern: r"\benum\s+(\w+)", kind: EntityKind::Enum },
        Rule { pattern: r"\b(\w+)\s*\([^;{]*\)\s*\{", kind: EntityKind::Function },
        Rule { pattern: r#"#include\s*[<"]([\w./]+)[>"]"#, kind: EntityKind::Import },
    ])
});

static JS_RULES: Lazy<Vec<(Regex, EntityKind)>> = Lazy::new(|| {
    compile(&[
        Rule { pattern: r"\bfunction\s+(\w+)", kind: EntityKind::Function },
        Rule { pattern: r"\bclass\s+(\w+)", kind: EntityKind::Class },
        Rule { pattern: r"\b(?:const|let|var)\s+(\w+)", kind: EntityKind::Variable },
        Rule { pattern: r#"\bimport\s+.*?from\s+['"]([\w./-]+)['"]"#, kind: EntityKind::Import },
        Rule { pattern: r#"\brequire\(\s*['"]([\w./-]+)['"]\s*\)"#, kind: EntityKind::Import },
    ])
});

fn compile(rules: &[Rule]) -> Vec<(Regex, EntityKind)> {
    rules.iter().map(|r| (Regex::new(r.pattern).expect("regex rule must compile"), r.kind)).collect()
}

fn rules_for(path: &str) -> &'static [(Regex, EntityKind)] {
    match path.rsplit('.').next().unwrap_or("") {
        "rs" => &RUST_RULES,
        "py" => &PYTHON_RULES,
        "c" | "h" | "cpp" | "hpp" | "cc" => &C_LIKE_RULES,
        "js" | "ts" | "jsx" | "tsx" => &JS_RULES,
        _ => &RUST_RULES,
    }
}

/// Scans `content` with the rule table selected by `path`'s extension,
/// returning every match in order of appearance.
pub fn extract(content: &str, path: &str) -> Vec<NamedEntity> {
    let mut entities = Vec::new();
    for (regex, kind) in rules_for(path) {
        for cap in regex.captures_iter(content) {
            if let Some(m) = cap.get(1) {
                entities.push(NamedEntity::new(m.as_str(), *kind));
            }
        }
    }
    entities
}
