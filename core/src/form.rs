//! Numeric coercion applied to free-text form fields at submit time.
//!
//! Fields are stored verbatim while the user types and are only turned into
//! numbers when a request body is built. The rules match the `Number()`
//! conversion the web dashboards relied on: surrounding whitespace is ignored,
//! an empty field is zero, and anything unparsable becomes NaN (which
//! `serde_json` writes as `null`).

pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix(text) {
        return value;
    }

    let (sign, magnitude) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if magnitude == "Infinity" {
        return sign * f64::INFINITY;
    }

    // Rust also accepts "inf"/"nan" spellings and a bare sign; those are not numbers here.
    let valid = !magnitude.is_empty()
        && magnitude
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && magnitude.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(text: &str) -> Option<f64> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    Some(
        u64::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}
