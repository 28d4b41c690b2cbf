//! Turns `{name}` placeholders into regex capture groups.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    // literal pattern, always valid
    Regex::new(r"\{([A-Za-z0-9_-]+)\}").unwrap()
});

pub const DEFAULT_CONSTRAINT: &str = r"[\w\-]+";

/// Builds the regex body for `pattern`.
///
/// Each placeholder becomes `(<constraint>)`, where the constraint is looked up with
/// `constraint_of` and falls back to `default`. Literal text is copied as is, so literal
/// segments must not contain regex metacharacters. The result carries no anchors.
pub fn tokenize<'c>(
    pattern: &str,
    constraint_of: impl Fn(&str) -> Option<&'c str>,
    default: &str,
) -> String {
    PLACEHOLDER
        .replace_all(pattern, |caps: &Captures<'_>| {
            let fragment = constraint_of(&caps[1]).unwrap_or(default);
            format!("({})", strip_group(fragment.trim()))
        })
        .into_owned()
}

/// Names of the placeholders of `pattern`, left to right.
pub fn placeholders(pattern: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Anchors a tokenized body and compiles it.
pub fn compile(body: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^{}$", body))
        .case_insensitive(case_insensitive)
        .unicode(true)
        .build()
}

/// Removes one plain capturing group wrapping the whole fragment, if there is one.
///
/// `(\d+)` becomes `\d+`; `(a)|(b)` and `(?:x)` are left alone.
pub fn strip_group(fragment: &str) -> &str {
    let bytes = fragment.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'(' || bytes[bytes.len() - 1] != b')' {
        return fragment;
    }
    if bytes.get(1) == Some(&b'?') {
        return fragment;
    }

    let mut depth = 0usize;
    let mut escaped = false;
    // character classes nest, e.g. `[a[b]]`; a `]` right after the opening
    // bracket (or `[^`) is a literal
    let mut class_depth = 0usize;
    let mut class_start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'[' => {
                class_depth += 1;
                class_start = if bytes.get(i + 1) == Some(&b'^') { i + 2 } else { i + 1 };
            }
            b']' if class_depth > 0 && i != class_start => class_depth -= 1,
            b'(' if class_depth == 0 => depth += 1,
            b')' if class_depth == 0 => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return if i == bytes.len() - 1 {
                        &fragment[1..i]
                    } else {
                        fragment
                    };
                }
            }
            _ => {}
        }
    }
    fragment
}
