//! Formula escaping around the structural parser.
//!
//! The dialect allows values the structural parser cannot be trusted with:
//! formula expressions (`key: =expr`), bare keywords the parser would
//! reinterpret, and plain scalars containing indicator characters. Before
//! parsing, [`escape`] rewrites such values into double-quoted scalars. The
//! first character of the quoted text is a marker that records why it was
//! quoted:
//!
//! ```text
//! OnSelect: =Navigate(Screen2)   →  OnSelect: "\x01Navigate(Screen2)"
//! Visible: yes                   →  Visible: "\x03yes"
//! Fill: RGBA(0, 0, 0, 1)         →  Fill: "RGBA(0, 0, 0, 1)"
//! ```
//!
//! Markers are C0 control characters. A YAML stream cannot contain them
//! unescaped, so they only ever appear where this module wrote them.
//!
//! After serialization, [`unescape`] turns marked scalars back into dialect
//! text (`key: =expr`, or a `|-` block for multi-line formulas).

use regex::Regex;
use std::sync::LazyLock;

/// Marks a formula expression (text after the `=`).
pub(crate) const FORMULA_MARK: char = '\u{1}';
/// Marks a string literal that must stay quoted in the output.
pub(crate) const LITERAL_MARK: char = '\u{2}';
/// Marks a bare keyword scalar (`true`, `no`, `off`, ...).
pub(crate) const KEYWORD_MARK: char = '\u{3}';

/// Bare scalars the structural parser may read as something other than text.
pub(crate) const KEYWORDS: &[&str] = &["true", "false", "yes", "no", "on", "off"];

/// Characters that force quoting of a plain value.
const INDICATORS: &[char] = &[':', '{', '}', '[', ']', '|', '>', '*', '&', '!', '%', ',', '#'];

/// `key: value` line, optionally as a sequence item (`- key:`).
static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<lead>[ \t]*(?:- )?)(?P<key>"[^"]*"|'[^']*'|[^\s:#'"\-][^:]*?):(?:[ \t]+(?P<value>.*))?$"#,
    )
    .expect("entry line pattern is valid")
});

/// `Control: Type@1.2.3` tag value.
static CONTROL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[\d.]+$").expect("control tag pattern is valid"));

/// Block scalar header: `|`, `|-`, `>+`, `|2-` ...
static BLOCK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[|>][0-9]?[-+]?[0-9]?$").expect("block header pattern is valid"));

// ============================================================================
// ESCAPE
// ============================================================================

/// Rewrite dialect text into text the structural parser accepts verbatim.
pub fn escape(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n");
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        let Some(caps) = ENTRY_LINE.captures(line) else {
            out.push(line.to_string());
            continue;
        };
        let Some(value) = caps.name("value").map(|m| m.as_str()) else {
            out.push(line.to_string());
            continue;
        };
        let lead = &caps["lead"];
        let key = &caps["key"];

        if BLOCK_HEADER.is_match(value.trim_end()) {
            // Block content is scalar text: copy it through untouched unless
            // it is a formula, which collapses onto one marked line.
            let end = block_end(&lines, i, column_of(lead));
            match block_formula(&lines[i..end]) {
                Some(expr) => out.push(format!("{lead}{key}: {}", quote_marked(FORMULA_MARK, &expr))),
                None => out.extend(lines[i - 1..end].iter().map(|l| l.to_string())),
            }
            i = end;
            continue;
        }

        match escape_value(unquote_key(key), value) {
            Some(escaped) => out.push(format!("{lead}{key}: {escaped}")),
            None => out.push(line.to_string()),
        }
    }

    out.join("\n")
}

/// Decide how a single value is made parser-safe. `None` leaves it as is.
fn escape_value(key: &str, value: &str) -> Option<String> {
    if let Some(expr) = value.strip_prefix('=') {
        return Some(quote_marked(FORMULA_MARK, expr));
    }

    let value = value.trim_end();
    if value.is_empty() || value.starts_with('"') || value.starts_with('\'') || value == "{}" {
        return None;
    }
    if key == "Control" && CONTROL_TAG.is_match(value) {
        return Some(quote(value));
    }
    if KEYWORDS.iter().any(|k| value.eq_ignore_ascii_case(k)) {
        return Some(quote_marked(KEYWORD_MARK, value));
    }
    if value.contains(INDICATORS) || value.starts_with(['@', '`']) {
        return Some(quote(value));
    }
    None
}

/// Index one past the last line of a block scalar starting at `start`.
/// Trailing blank lines are left to the surrounding document.
fn block_end(lines: &[&str], start: usize, parent_column: usize) -> usize {
    let mut end = start;
    for (offset, line) in lines[start..].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if indent_of(line) <= parent_column {
            break;
        }
        end = start + offset + 1;
    }
    end
}

/// Dedented block content, if its first line starts with `=`.
fn block_formula(block: &[&str]) -> Option<String> {
    let indent = block
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| indent_of(l))
        .min()?;

    let content: Vec<&str> = block
        .iter()
        .map(|l| if l.trim().is_empty() { "" } else { &l[indent..] })
        .collect();

    let first = content.iter().position(|l| !l.is_empty())?;
    let expr = content[first..].join("\n");
    expr.trim_start().strip_prefix('=').map(str::to_string)
}

// ============================================================================
// UNESCAPE
// ============================================================================

/// `key: "quoted"` entry as produced by the serializer. A double-quoted
/// value may continue over several lines.
static QUOTED_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<lead>[ \t]*(?:- )?)(?P<key>"[^"]*"|'[^']*'|[^\s:#'"\-][^:]*?): (?P<value>(?s:".*")|'.*')[ \t]*$"#,
    )
    .expect("quoted entry pattern is valid")
});

/// Start of a double-quoted entry value: `key: "...`.
static OPEN_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[ \t]*(?:- )?(?:"[^"]*"|'[^']*'|[^\s:#'"\-][^:]*?): "(?P<rest>.*)$"#)
        .expect("open quote pattern is valid")
});

/// Turn serializer output back into dialect text.
pub fn unescape(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let mut entry = lines[i].to_string();
        let mut next = i + 1;
        while next < lines.len() && is_unterminated(&entry) {
            entry.push('\n');
            entry.push_str(lines[next]);
            next += 1;
        }

        let rewritten = QUOTED_ENTRY
            .captures(&entry)
            .and_then(|caps| unescape_entry(&caps["lead"], &caps["key"], &caps["value"]));
        match rewritten {
            Some(line) => {
                out.push(line);
                i = next;
            }
            None => {
                out.push(lines[i].to_string());
                i += 1;
            }
        }
    }
    out.join("\n")
}

/// `true` if `entry` opens a double-quoted value it does not close.
fn is_unterminated(entry: &str) -> bool {
    let first = entry.split('\n').next().unwrap_or(entry);
    let Some(rest) = OPEN_QUOTE.captures(first).and_then(|caps| caps.name("rest")) else {
        return false;
    };
    let mut chars = entry[rest.start()..].chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => return false,
            _ => {}
        }
    }
    true
}

fn unescape_entry(lead: &str, key: &str, value: &str) -> Option<String> {
    let decoded: String = serde_yaml::from_str(value).ok()?;

    if let Some(expr) = decoded.strip_prefix(FORMULA_MARK) {
        return Some(formula_entry(lead, key, expr));
    }
    if let Some(literal) = decoded.strip_prefix(LITERAL_MARK) {
        // A literal that itself starts with a marker keeps its guard.
        if literal.starts_with([FORMULA_MARK, LITERAL_MARK, KEYWORD_MARK]) {
            return None;
        }
        return Some(format!("{lead}{key}: {}", quote(literal)));
    }
    if let Some(word) = decoded.strip_prefix(KEYWORD_MARK) {
        return Some(format!("{lead}{key}: {word}"));
    }
    if unquote_key(key) == "Control" && CONTROL_TAG.is_match(&decoded) {
        return Some(format!("{lead}{key}: {decoded}"));
    }
    None
}

/// `key: =expr`, or a `|-` block when the expression spans lines.
fn formula_entry(lead: &str, key: &str, expr: &str) -> String {
    if !expr.contains('\n') {
        return format!("{lead}{key}: ={expr}");
    }
    let pad = " ".repeat(column_of(lead) + 2);
    let mut out = format!("{lead}{key}: |-");
    for (i, line) in expr.split('\n').enumerate() {
        out.push('\n');
        if i == 0 {
            out.push_str(&pad);
            out.push('=');
            out.push_str(line);
        } else if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}

// ============================================================================
// HELPERS
// ============================================================================

/// Double-quoted YAML scalar for `s`.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_marked(mark: char, s: &str) -> String {
    let mut marked = String::with_capacity(s.len() + 1);
    marked.push(mark);
    marked.push_str(s);
    quote(&marked)
}

fn unquote_key(key: &str) -> &str {
    key.strip_prefix('"')
        .and_then(|k| k.strip_suffix('"'))
        .or_else(|| key.strip_prefix('\'').and_then(|k| k.strip_suffix('\'')))
        .unwrap_or(key)
}

/// Column where the key of a line with this lead starts.
fn column_of(lead: &str) -> usize {
    lead.chars().count()
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}
