//! Java `.properties` bundle parser.
//!
//! Supports `#`/`!` comments, `=`, `:` and whitespace separators, continuation
//! lines ending in an odd number of backslashes, and the standard escapes
//! including `\uXXXX`.

use std::{collections::HashMap, str::Chars};

use anyhow::{Result, bail};

pub fn parse_properties(content: &str) -> Result<HashMap<String, String>> {
    let mut entries = HashMap::new();

    for (line_no, logical) in logical_lines(content) {
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key).map_err(|e| anyhow::anyhow!("line {}: {}", line_no, e))?;
        let value = unescape(raw_value).map_err(|e| anyhow::anyhow!("line {}: {}", line_no, e))?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// Join continuation lines and drop blanks and comments.
///
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();

        let (start, mut text) = match current.take() {
            Some((start, text)) => (start, text),
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        if ends_with_continuation(trimmed) {
            text.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some((start, text));
        } else {
            text.push_str(trimmed);
            result.push((start, text));
        }
    }

    if let Some(pending) = current {
        result.push(pending);
    }

    result
}

fn ends_with_continuation(line: &str) -> bool {
    let backslashes = line.chars().rev().take_while(|c| *c == '\\').count();
    backslashes % 2 == 1
}

/// Split at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .unwrap_or(rest);
                return (&line[..i], rest.trim_start());
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => out.push(decode_unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Decode the code point after `\u`, joining a UTF-16 surrogate pair
/// written as two consecutive escapes.
fn decode_unicode_escape(chars: &mut Chars<'_>) -> Result<char> {
    let high = read_code_unit(chars)?;
    if !(0xD800..=0xDBFF).contains(&high) {
        return match char::from_u32(high) {
            Some(ch) => Ok(ch),
            None => bail!("unpaired surrogate \"\\u{:04X}\"", high),
        };
    }

    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        let low = read_code_unit(&mut lookahead)?;
        if (0xDC00..=0xDFFF).contains(&low) {
            *chars = lookahead;
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            if let Some(ch) = char::from_u32(code) {
                return Ok(ch);
            }
        }
    }

    bail!("unpaired surrogate \"\\u{:04X}\"", high)
}

/// Exactly four hex digits, no sign.
fn read_code_unit(chars: &mut Chars<'_>) -> Result<u32> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("invalid unicode escape \"\\u{}\"", hex);
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| anyhow::anyhow!("invalid unicode escape \"\\u{}\"", hex))
}
