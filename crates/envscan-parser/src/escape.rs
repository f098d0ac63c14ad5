//! Decoding of JavaScript string escape sequences.

use std::iter::Peekable;
use std::str::Chars;

/// Decode the escape sequences in the body of a string or template literal.
///
/// `raw` is the literal text between the delimiters. Unknown escapes yield the
/// escaped character itself (`\q` is `q`), line continuations vanish, and a
/// `\uD83D\uDE00` surrogate pair combines into one scalar value. Lone
/// surrogates and malformed hex escapes decode to U+FFFD.
#[must_use]
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '0'..='7' => out.push(legacy_octal(escaped, &mut chars)),
            'x' => out.push(
                fixed_hex(&mut chars, 2)
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            ),
            'u' => out.push(unicode_escape(&mut chars)),
            other => out.push(other),
        }
    }
    out
}

/// `\0`, `\12`, `\101`: up to three octal digits, capped at `\377`.
fn legacy_octal(first: char, chars: &mut Peekable<Chars<'_>>) -> char {
    let mut value = first.to_digit(8).unwrap_or(0);
    let max_digits = if first <= '3' { 3 } else { 2 };
    for _ in 1..max_digits {
        match chars.peek().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                value = value * 8 + digit;
                chars.next();
            }
            None => break,
        }
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> char {
    let Some(unit) = code_unit(chars) else {
        return char::REPLACEMENT_CHARACTER;
    };
    if !(0xD800..0xDC00).contains(&unit) {
        return char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER);
    }
    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        if let Some(low) = code_unit(&mut lookahead) {
            if (0xDC00..0xE000).contains(&low) {
                *chars = lookahead;
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    char::REPLACEMENT_CHARACTER
}

/// The value after `\u`: either `{X..}` or exactly four hex digits.
fn code_unit(chars: &mut Peekable<Chars<'_>>) -> Option<u32> {
    if chars.peek() != Some(&'{') {
        return fixed_hex(chars, 4);
    }
    chars.next();
    let mut value: u32 = 0;
    let mut digits = 0;
    loop {
        let c = chars.next()?;
        if c == '}' {
            break;
        }
        value = value.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
        digits += 1;
    }
    (digits > 0 && value <= 0x10_FFFF).then_some(value)
}

fn fixed_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        let digit = chars.peek()?.to_digit(16)?;
        chars.next();
        value = value * 16 + digit;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("PLAIN", "PLAIN")]
    #[case(r"it\'s", "it's")]
    #[case(r#"say \"hi\""#, "say \"hi\"")]
    #[case(r"C:\\tmp", r"C:\tmp")]
    #[case(r"a\nb\tc", "a\nb\tc")]
    #[case(r"B\u0041", "BA")]
    #[case(r"\u{42}\u{1F600}", "B\u{1F600}")]
    #[case(r"\x41\x42", "AB")]
    #[case(r"\uD83D\uDE00", "\u{1F600}")]
    #[case(r"\0", "\0")]
    #[case(r"\101", "A")]
    #[case(r"\q", "q")]
    #[case("line\\\ncontinued", "linecontinued")]
    fn decodes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(unescape(raw), expected);
    }

    #[rstest]
    #[case(r"\uD83D")]
    #[case(r"\xZZ")]
    #[case(r"\u{110000}")]
    fn malformed_escape_is_replacement(#[case] raw: &str) {
        assert!(unescape(raw).starts_with(char::REPLACEMENT_CHARACTER), "{raw}");
    }
}
