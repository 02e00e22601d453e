//! Pure formatting helpers shared by the chart widgets.
//!
//! No ratatui styles and no layout here; widgets decide where the text goes.

/// Formats a chart value with thousands grouping.
///
/// Chart boxes whose largest displayed value is small keep one decimal
/// (`"2.1"`, `"1,440.0"`); large scales drop decimals (`"27,000"`). The
/// caller decides per box via [`one_decimal_for`].
pub fn format_value(value: f64, one_decimal: bool) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if one_decimal {
        let text = format!("{:.1}", abs);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));
        format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
    } else {
        format!("{}{}", sign, group_thousands(&format!("{:.0}", abs)))
    }
}

/// One decimal for small scales, none for large ones.
pub fn one_decimal_for(window_max: f64) -> bool {
    window_max <= 100.0
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Truncates a string to `max_len` characters with a unicode ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_value(27000.0, false), "27,000");
        assert_eq!(format_value(1234567.0, false), "1,234,567");
        assert_eq!(format_value(999.0, false), "999");
        assert_eq!(format_value(0.0, false), "0");
    }

    #[test]
    fn one_decimal_keeps_a_single_digit() {
        assert_eq!(format_value(2.06, true), "2.1");
        assert_eq!(format_value(1440.0, true), "1,440.0");
        assert_eq!(format_value(99.96, true), "100.0");
    }

    #[test]
    fn negative_values_keep_the_sign_before_grouping() {
        assert_eq!(format_value(-12345.0, false), "-12,345");
        assert_eq!(format_value(-3.2, true), "-3.2");
    }

    #[test]
    fn decimal_rule_follows_the_window_maximum() {
        assert!(one_decimal_for(100.0));
        assert!(one_decimal_for(2.5));
        assert!(!one_decimal_for(100.1));
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("Germany", 10), "Germany");
        assert_eq!(truncate("United States", 10), "United St…");
        assert_eq!(truncate("Côte d'Ivoire", 6), "Côte …");
    }
}
