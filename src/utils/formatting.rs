//! Formatting utilities used for CLI and export outputs.

use ansi_term::Colour;

/// Hours with two decimals, e.g. `7.50`.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// Signed hours, e.g. `+2.00h` / `-4.00h`.
pub fn fmt_signed_hours(h: f64) -> String {
    let sign = if h > 0.0 { "+" } else { "" };
    format!("{sign}{:.2}h", h)
}

/// Green for surplus, red for hours owed back.
pub fn colorize_balance(h: f64) -> String {
    let text = fmt_signed_hours(h);
    if h > 0.0 {
        Colour::Green.paint(text).to_string()
    } else if h < 0.0 {
        Colour::Red.paint(text).to_string()
    } else {
        text
    }
}

/// Days without a trailing `.0` for whole numbers.
pub fn fmt_days(d: f64) -> String {
    if d.fract() == 0.0 {
        format!("{}", d as i64)
    } else {
        format!("{d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_formats() {
        assert_eq!(fmt_hours(7.5), "7.50");
        assert_eq!(fmt_signed_hours(2.0), "+2.00h");
        assert_eq!(fmt_signed_hours(-4.0), "-4.00h");
        assert_eq!(fmt_signed_hours(0.0), "0.00h");
    }

    #[test]
    fn day_formats() {
        assert_eq!(fmt_days(5.0), "5");
        assert_eq!(fmt_days(2.5), "2.5");
    }
}
