// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Collapse runs of whitespace to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True for the site's "nothing here" cells: empty or a lone dash.
pub fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == "-"
}

/// First run of ASCII digits in `s`, as a number.
pub fn first_int(s: &str) -> Option<u32> {
    FIRST_INT.find(s)?.as_str().parse().ok()
}

/// "28 yrs" → 28. No plausibility check here; callers bound the value.
pub fn parse_age(s: &str) -> Option<u32> {
    if is_placeholder(s) {
        return None;
    }
    first_int(s)
}

/// Money cell → whole currency units. "$1,234,567" → 1234567, "3.5M" → 3500000,
/// "500K" → 500000. Anything unparseable is 0.
pub fn parse_money(s: &str) -> i64 {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',') && !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    let (digits, scale) = if let Some(v) = cleaned.strip_suffix('M') {
        (v, 1_000_000.0)
    } else if let Some(v) = cleaned.strip_suffix('K') {
        (v, 1_000.0)
    } else {
        (cleaned.as_str(), 1.0)
    };

    let value = match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return 0,
    };

    if scale > 1.0 {
        // "2.3M" is 2299999.9999… in binary
        (value * scale).round() as i64
    } else {
        value.trunc() as i64
    }
}
