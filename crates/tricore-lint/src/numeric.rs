//! Numeric literal parsing and immediate range classification.

use crate::errors::LineError;

/// Maps an integer to the classification code of the narrowest immediate
/// field able to hold it.
///
/// Negative and positive values use separate bands with alignment
/// tie-breaks. Values beyond every band fall through to bit-pattern tests
/// on the low 32 bits: `t` (18-bit absolute address), `T` (24-bit even
/// absolute address), `V` (low 14 bits clear) and finally `M`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn classify_numeric(value: i64) -> char {
    let odd = value & 1 != 0;
    if value < 0 {
        if value >= -8 {
            return '4';
        }
        if value >= -16 {
            return 'F';
        }
        if value >= -32 && !odd {
            return 'r';
        }
        if value >= -256 {
            return if odd { '9' } else { 'R' };
        }
        if value >= -512 {
            return '0';
        }
        if value >= -32768 {
            return if odd { 'w' } else { 'o' };
        }
        if value >= -16_777_216 && !odd {
            return 'O';
        }
    } else {
        if value < 2 {
            return '1';
        }
        if value < 4 {
            return '2';
        }
        if value < 8 {
            return '3';
        }
        if value < 16 {
            return 'f';
        }
        if value < 31 {
            return if odd { '5' } else { 'v' };
        }
        if value < 32 {
            return '5';
        }
        if value < 61 && value & 3 == 0 {
            return '6';
        }
        if value < 63 && !odd {
            return 'x';
        }
        if value < 256 {
            return '8';
        }
        if value < 512 {
            return 'n';
        }
        if value < 1024 {
            return if value & 3 == 0 { 'k' } else { 'h' };
        }
        if value < 32768 {
            return 'q';
        }
        if value < 65536 {
            return 'W';
        }
        if value < 16_777_215 && !odd {
            return 'O';
        }
    }

    let bits = value as i32;
    if bits & 0x0fff_c000 == 0 {
        't'
    } else if bits & 0x0fe0_0001 == 0 {
        'T'
    } else if bits & 0x3fff == 0 {
        'V'
    } else {
        'M'
    }
}

/// Parses a numeric literal: signed decimal (optionally with fraction and
/// exponent), `0b` binary or `0x` hexadecimal.
///
/// Returns `None` if the text is not shaped like a number at all, and
/// `Some(Err(LineError::BadNumericConstant))` if it is, but does not denote
/// an integer representable as `i64`.
#[must_use]
pub fn parse_numeric_literal(text: &str) -> Option<Result<i64, LineError>> {
    if let Some(digits) = strip_radix_prefix(text, 'x') {
        return radix_literal(digits, 16);
    }
    if let Some(digits) = strip_radix_prefix(text, 'b') {
        return radix_literal(digits, 2);
    }
    decimal_literal(text)
}

fn strip_radix_prefix(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

fn radix_literal(digits: &str, radix: u32) -> Option<Result<i64, LineError>> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(i64::from_str_radix(digits, radix).map_err(|_| LineError::BadNumericConstant))
}

fn decimal_literal(text: &str) -> Option<Result<i64, LineError>> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(index) => (&unsigned[..index], Some(&unsigned[index + 1..])),
        None => (unsigned, None),
    };
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    if !is_digits(integer) || fraction.is_some_and(|digits| !is_digits(digits)) {
        return None;
    }
    let exponent = match exponent {
        Some(text) => {
            let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
            if !is_digits(digits) {
                return None;
            }
            Some(text.parse::<i64>().map_err(|_| LineError::BadNumericConstant))
        }
        None => None,
    };

    Some(scale_decimal(negative, integer, fraction.unwrap_or(""), exponent))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Evaluates `integer.fraction × 10^exponent`, requiring an integral result.
fn scale_decimal(
    negative: bool,
    integer: &str,
    fraction: &str,
    exponent: Option<Result<i64, LineError>>,
) -> Result<i64, LineError> {
    let digits = format!("{integer}{fraction}");
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    let exponent = exponent.transpose()?.unwrap_or(0);

    let fraction_len = i64::try_from(fraction.len()).map_err(|_| LineError::BadNumericConstant)?;
    let scale = exponent
        .checked_sub(fraction_len)
        .ok_or(LineError::BadNumericConstant)?;

    let magnitude: i128 = if scale >= 0 {
        let mut value: i128 = digits.parse().map_err(|_| LineError::BadNumericConstant)?;
        for _ in 0..scale {
            value = value.checked_mul(10).ok_or(LineError::BadNumericConstant)?;
        }
        value
    } else {
        let dropped = usize::try_from(scale.unsigned_abs()).map_err(|_| LineError::BadNumericConstant)?;
        if dropped >= digits.len() {
            return Err(LineError::BadNumericConstant);
        }
        let (kept, removed) = digits.split_at(digits.len() - dropped);
        if removed.bytes().any(|b| b != b'0') {
            return Err(LineError::BadNumericConstant);
        }
        kept.parse().map_err(|_| LineError::BadNumericConstant)?
    };

    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).map_err(|_| LineError::BadNumericConstant)
}
