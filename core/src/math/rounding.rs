/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

pub struct RoundingHelper;

impl RoundingHelper {
    /// Fixed-point text with `digits` decimals, the way the dashboards print values.
    ///
    /// Nearest wins; an exact tie goes away from zero (`2.125` -> `"2.13"`).
    pub fn to_fixed(value: f64, digits: usize) -> String {
        if value.is_nan() {
            return "NaN".into();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
        }
        // -0 prints unsigned.
        let value = if value == 0.0 { 0.0 } else { value };

        let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
        let Some((whole, fraction)) = exact.split_once('.') else {
            return format!("{:.*}", digits, value);
        };
        let tail = &fraction[digits.min(fraction.len())..];
        let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
        if !is_tie {
            return format!("{:.*}", digits, value);
        }

        let mut kept: Vec<u8> = whole.bytes().chain(fraction[..digits].bytes()).collect();
        round_up(&mut kept);
        let split = kept.len() - digits;
        let mut text = String::with_capacity(kept.len() + 2);
        if value < 0.0 {
            text.push('-');
        }
        text.push_str(std::str::from_utf8(&kept[..split]).unwrap_or("0"));
        if digits > 0 {
            text.push('.');
            text.push_str(std::str::from_utf8(&kept[split..]).unwrap_or("0"));
        }
        text
    }

    /// Rounds through the fixed-point text so the result matches what is displayed.
    pub fn round_to(value: f64, digits: usize) -> f64 {
        Self::to_fixed(value, digits).parse().unwrap_or(value)
    }
}

/// Adds one unit in the last place of an ASCII digit string.
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
