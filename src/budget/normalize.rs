use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Optional sign, at most one currency symbol on either side of it, then the
/// digits (thousands separators allowed).
#[allow(clippy::expect_used)]
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<sign1>[+-]?)\s*\p{Sc}|\p{Sc}\s*(?P<sign2>[+-]?)|(?P<sign3>[+-]?))\s*(?P<number>[0-9,]*\.?[0-9]*(?:[eE][+-]?[0-9]+)?)\s*(?P<suffix>\p{Sc}?)$",
    )
    .expect("amount pattern is a literal")
});

/// Normalize a free-form amount such as `" $1,234.56 "`.
///
/// Never fails: empty or unparsable input is zero.
pub(crate) fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    let Some(caps) = AMOUNT.captures(trimmed) else {
        return Decimal::ZERO;
    };

    let prefixed = caps.name("sign1").is_some() || caps.name("sign2").is_some();
    if prefixed && caps.name("suffix").is_some_and(|m| !m.as_str().is_empty()) {
        // two currency symbols
        return Decimal::ZERO;
    }

    let negative = ["sign1", "sign2", "sign3"]
        .iter()
        .filter_map(|n| caps.name(n))
        .any(|m| m.as_str() == "-");
    let number = caps
        .name("number")
        .map(|m| m.as_str().replace(',', ""))
        .unwrap_or_default();

    match parse_decimal(&number) {
        Some(d) if negative => -d,
        Some(d) => d,
        None => Decimal::ZERO,
    }
}

/// Normalize a value read back from storage. Stored documents may hold
/// numbers or text depending on what wrote them.
pub(crate) fn normalize_stored(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()).unwrap_or_default(),
        serde_json::Value::String(s) => parse_amount(s),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() || s == "." {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .or_else(|| out_of_range(s))
}

/// Well-formed numbers Decimal cannot hold: huge magnitudes saturate at the
/// Decimal range, tiny ones become zero.
fn out_of_range(s: &str) -> Option<Decimal> {
    let f: f64 = s.parse().ok()?;
    if f.is_nan() {
        return None;
    }
    if f.abs() >= 1.0 {
        Some(if f.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    } else {
        Some(Decimal::ZERO)
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
