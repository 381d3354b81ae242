//! Numeric rounding.

/// Rounds `number` to `decimals` fractional digits.
///
/// Rounding works on the shortest decimal form of the number (what `{}`
/// prints), rounding half away from zero. The binary representation therefore
/// never pulls a visible trailing 5 downwards: `1.2345` rounds to `1.235`.
///
/// Non-finite inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use app_utils::utils::number::round_number;
///
/// assert_eq!(round_number(1.2345, 2), 1.23);
/// assert_eq!(round_number(1.2345, 3), 1.235);
/// assert_eq!(round_number(-2.5, 0), -3.0);
/// ```
pub fn round_number(number: f64, decimals: u32) -> f64 {
    if !number.is_finite() {
        return number;
    }

    let repr = number.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let decimals = decimals as usize;
    if frac_part.len() <= decimals {
        return number;
    }

    // Kept digits as one integer-like sequence; the decimal point is re-inserted below
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();

    if frac_part.as_bytes()[decimals] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let mut rounded = String::with_capacity(digits.len() + 1);
    rounded.extend(digits[..split].iter().map(|&d| d as char));
    if decimals > 0 {
        rounded.push('.');
        rounded.extend(digits[split..].iter().map(|&d| d as char));
    }

    let magnitude: f64 = rounded.parse().unwrap_or(number.abs());
    if number.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}
