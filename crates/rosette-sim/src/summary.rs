//! Parameter summary and significant-digit formatting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input and derived scalars of an orbit, for display and export
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSummary {
    pub e: f64,
    pub l: f64,
    pub ecc: f64,
    pub eta: f64,
    pub r0: f64,
}

impl fmt::Display for OrbitSummary {
    /// Five newline-terminated `key: value` lines, values to four
    /// significant digits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "e: {}", format_sig(self.e, 4))?;
        writeln!(f, "l: {}", format_sig(self.l, 4))?;
        writeln!(f, "ecc: {}", format_sig(self.ecc, 4))?;
        writeln!(f, "eta: {}", format_sig(self.eta, 4))?;
        writeln!(f, "r0: {}", format_sig(self.r0, 4))
    }
}

/// Format a value to the given number of significant digits: fixed
/// notation near unity, scientific notation for very large or very
/// small magnitudes, trailing zeros trimmed. Exponents use Rust's
/// form (`1.5e4`), not printf's zero-padded `1.5e+04`.
pub fn format_sig(value: f64, digits: usize) -> String {
    assert!(digits > 0);

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exp = value.abs().log10().floor() as i32;
    let formatted = if exp < -4 || exp >= digits as i32 {
        format!("{:.*e}", digits - 1, value)
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    };

    trim_trailing_zeros(&formatted)
}

fn trim_trailing_zeros(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => format!("{}e{}", trim_fixed(mantissa), exp),
        None => trim_fixed(s).to_string(),
    }
}

fn trim_fixed(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
