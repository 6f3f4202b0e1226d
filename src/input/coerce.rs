//! Field text to `f64` coercion
//!
//! Two dialects are supported:
//! - [`Coercion::NumberInput`]: what a browser reports as `valueAsNumber` for
//!   an `<input type="number">`. Only a *valid floating-point number* is
//!   accepted; everything else, including the empty string, is NaN.
//! - [`Coercion::NumberLiteral`]: the ECMAScript `Number(string)` conversion.
//!   Whitespace is trimmed, blank text is `0`, `Infinity` and the
//!   `0x`/`0o`/`0b` integer literals are accepted.

use serde::{Deserialize, Serialize};

use crate::math::Operand;

/// How raw field text becomes an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coercion {
    /// HTML number input `valueAsNumber`
    #[default]
    NumberInput,
    /// ECMAScript `Number(string)`
    NumberLiteral,
}

impl Coercion {
    pub fn apply(self, text: &str) -> Operand {
        match self {
            Coercion::NumberInput => value_as_number(text),
            Coercion::NumberLiteral => number_literal(text),
        }
    }
}

/// Coerce `text` with the given dialect
pub fn coerce(text: &str, coercion: Coercion) -> Operand {
    coercion.apply(text)
}

/// `valueAsNumber` of a number input holding `text`
pub fn value_as_number(text: &str) -> Operand {
    if !is_decimal(text, Grammar::FLOATING_POINT_NUMBER) {
        return f64::NAN;
    }
    match text.parse::<f64>() {
        // Values that round to an infinity are parse errors for number inputs
        Ok(value) if value.is_infinite() => f64::NAN,
        // -0 is not representable in the result set
        Ok(value) if value == 0.0 => 0.0,
        Ok(value) => value,
        Err(_) => f64::NAN,
    }
}

/// `Number(text)` as a script engine computes it
pub fn number_literal(text: &str) -> Operand {
    let trimmed = text.trim_matches(is_str_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    if !is_decimal(trimmed, Grammar::STR_DECIMAL_LITERAL) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// WhiteSpace and LineTerminator code points of the script grammar. Unlike
/// `char::is_whitespace` this excludes U+0085 and includes U+FEFF.
fn is_str_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Unsigned `0x`, `0o` or `0b` literal. `None` when there is no prefix,
/// `Some(NaN)` when the prefix is followed by anything but valid digits.
fn radix_literal(text: &str) -> Option<Operand> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }

    let value = match u128::from_str_radix(digits, radix) {
        Ok(value) => value as f64,
        Err(_) => digits.chars().fold(0.0, |acc, c| {
            acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
        }),
    };
    Some(value)
}

/// Which optional pieces of the decimal grammar are allowed
#[derive(Debug, Clone, Copy)]
struct Grammar {
    leading_plus: bool,
    trailing_dot: bool,
}

impl Grammar {
    const FLOATING_POINT_NUMBER: Grammar = Grammar {
        leading_plus: false,
        trailing_dot: false,
    };

    const STR_DECIMAL_LITERAL: Grammar = Grammar {
        leading_plus: true,
        trailing_dot: true,
    };
}

/// Check `text` against `sign? (digits ('.' digits?)? | '.' digits) exponent?`
fn is_decimal(text: &str, grammar: Grammar) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    match bytes.first() {
        Some(b'-') => i += 1,
        Some(b'+') if grammar.leading_plus => i += 1,
        _ => {}
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
        if frac_digits == 0 && (!grammar.trailing_dot || int_digits == 0) {
            return false;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
