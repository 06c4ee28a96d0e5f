// src/utils.rs

/// Formats like en-US locale output: thousands separators, at least
/// `min_frac` and at most `max_frac` fraction digits.
pub fn group_number(value: f64, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.chars().chain(frac.chars()).all(|c| c == '0');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

pub fn usd(value: f64) -> String {
    format!("${}", group_number(value, 2, 3))
}

pub fn usd_whole(value: f64) -> String {
    format!("${}", group_number(value, 0, 0))
}

pub fn usd_cents(value: f64) -> String {
    format!("${}", group_number(value, 2, 2))
}

pub fn quantity(value: f64) -> String {
    group_number(value, 0, 3)
}

pub fn multiple(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Placeholder for a value the service left out.
pub const MISSING: &str = "—";

pub fn or_missing<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map(format).unwrap_or_else(|| MISSING.to_string())
}
