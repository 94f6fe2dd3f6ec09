use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `-1234567.891` → `"-$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = val.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Form input value: plain, no separators, at least two decimals. Extra
/// precision is kept so a save does not round stored values.
pub(crate) fn format_input(val: Decimal) -> String {
    let val = val.normalize();
    if val.scale() <= 2 {
        format!("{val:.2}")
    } else {
        val.to_string()
    }
}

/// One decimal place, for chart legends.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.1}%", val.round_dp(1))
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
