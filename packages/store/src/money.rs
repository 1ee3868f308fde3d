//! Cent amounts to and from display strings.

/// `123456` → `"$1,234.56"`, `-300` → `"-$3.00"`.
pub fn format_cents(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{currency}{grouped}.{:02}", abs % 100)
}

/// Parse a non-negative amount typed into a form (`"12"`, `"12.5"`,
/// `"1,234.56"`). Commas are only accepted as thousands separators and more
/// than two decimals is rejected.
pub fn parse_amount(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let (whole, frac) = match input.split_once('.') {
        Some((w, f)) => (w, f),
        None => (input, ""),
    };
    let whole = ungroup(whole)?;
    if frac.len() > 2 || !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

/// `"1,234,567"` → `"1234567"`; `None` when commas do not split the digits
/// into groups of three.
fn ungroup(whole: &str) -> Option<String> {
    if !whole.contains(',') {
        return Some(whole.to_string());
    }
    let mut groups = whole.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 {
        return None;
    }
    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_cents(0, "$"), "$0.00");
        assert_eq!(format_cents(5, "$"), "$0.05");
        assert_eq!(format_cents(123_456, "$"), "$1,234.56");
        assert_eq!(format_cents(100_000_000, "€"), "€1,000,000.00");
        assert_eq!(format_cents(-300, "$"), "-$3.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12"), Some(1_200));
        assert_eq!(parse_amount(" 12.5 "), Some(1_250));
        assert_eq!(parse_amount("1,234.56"), Some(123_456));
        assert_eq!(parse_amount(".75"), Some(75));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.234"), None);
        assert_eq!(parse_amount("-4"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_parse_amount_thousands_groups() {
        assert_eq!(parse_amount("12,345"), Some(1_234_500));
        assert_eq!(parse_amount("1,234,567.8"), Some(123_456_780));
        assert_eq!(parse_amount("1,2,3"), None);
        assert_eq!(parse_amount("1234,567"), None);
        assert_eq!(parse_amount(",123"), None);
        assert_eq!(parse_amount("12,34.00"), None);
    }
}
