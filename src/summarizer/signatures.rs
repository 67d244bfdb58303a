//! Emits one line per detected top-level declaration: the declaration
//! keyword, name, and parameter list up to its opening brace or colon.

use once_cell::sync::Lazy;
use regex::Regex;

struct LangRules {
    patterns: &'static [&'static str],
}

static RUST_LIKE: Lazy<LangRules> = Lazy::new(|| LangRules {
    patterns: &[
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(fn\s+\w+\s*\([^{;]*)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(struct\s+\w+)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(enum\s+\w+)",
        r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(trait\s+\w+)",
    ],
});

static C_LIKE: Lazy<LangRules> = Lazy::new(|| LangRules {
    patterns: &[r"(?m)^\s*(?:static\s+|inline\s+)?[\w:<>, ]+\s+(\w+\s*\([^;{]*\))\s*\{"],
});

static PYTHON: Lazy<LangRules> =
    Lazy::new(|| LangRules { patterns: &[r"(?m)^\s*(def\s+\w+\s*\([^:]*)", r"(?m)^\s*(class\s+\w+)"] });

static JS_LIKE: Lazy<LangRules> = Lazy::new(|| LangRules {
    patterns: &[
        r"(?m)^\s*(?:export\s+)?(function\s+\w+\s*\([^){]*)",
        r"(?m)^\s*(?:export\s+)?(class\s+\w+)",
    ],
});

fn rules_for(path: &str) -> &'static LangRules {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "rs" => &RUST_LIKE,
        "c" | "h" | "cpp" | "hpp" | "cc" => &C_LIKE,
        "py" => &PYTHON,
        "js" | "ts" | "jsx" | "tsx" => &JS_LIKE,
        _ => &RUST_LIKE,
    }
}

/// Extracts one signature line per matched top-level declaration, in order
/// of appearance, trimmed of trailing whitespace.
pub fn extract(content: &str, path: &str) -> Vec<String> {
    let rules = rules_for(path);
    let mut found = Vec::new();
    for pattern in rules.patterns {
        let re = Regex::new(pattern).expect("signature pattern must compile");
        for cap in re.captures_iter(content) {
            if let Some(m) = cap.get(1) {
                let sig = m.as_str().trim().to_string();
                if !sig.is_empty() {
                    found.push(sig);
                }
            }
        }
    }
    found
}
