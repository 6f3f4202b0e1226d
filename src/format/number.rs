//! Number to string conversion with script-engine output
//!
//! Produces the same text a browser shows for `String(x)`: the shortest
//! digits that round-trip, plain notation for decimal exponents in
//! `-7 < e < 21`, and `d.ddde±n` otherwise.

/// Largest decimal point position printed without an exponent
const MAX_PLAIN_POINT: i32 = 21;

/// Smallest decimal point position printed without an exponent
const MIN_PLAIN_POINT: i32 = -6;

/// Format `value` for display
pub fn to_display_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (digits, point) = shortest_digits(value.abs());
    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    write_digits(&mut out, &digits, point);
    out
}

/// Shortest round-trip decimal digits of a finite positive value, and the
/// position `n` of the decimal point, so that `value = 0.d1d2..dk × 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.2345e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }

    (digits, exponent + 1)
}

fn write_digits(out: &mut String, digits: &str, point: i32) {
    let k = digits.len() as i32;

    if k <= point && point <= MAX_PLAIN_POINT {
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= MAX_PLAIN_POINT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_PLAIN_POINT < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let exponent = point - 1;
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.abs().to_string());
    }
}
