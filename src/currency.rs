//! PLN price formatting (pl-PL locale).
//!
//! Matches `Intl.NumberFormat("pl-PL", { style: "currency", currency: "PLN" })`:
//! comma decimals, NBSP thousands grouping from five integer digits up,
//! NBSP before the currency sign.

const NBSP: char = '\u{a0}';

/// Format an amount in grosze, e.g. `8900` -> `"89,00 zł"`
pub fn format_pln(cents: u64) -> String {
    let zloty = (cents / 100).to_string();
    let grosze = cents % 100;

    // Polish uses a minimum of two grouping digits: 1234 stays ungrouped
    let integer = if zloty.len() >= 5 {
        group_thousands(&zloty)
    } else {
        zloty
    };

    format!("{},{:02}{}zł", integer, grosze, NBSP)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    let first = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: String) -> String {
        s.replace(NBSP, " ")
    }

    #[test]
    fn test_format_basic() {
        assert_eq!(plain(format_pln(8900)), "89,00 zł");
        assert_eq!(plain(format_pln(0)), "0,00 zł");
        assert_eq!(plain(format_pln(5)), "0,05 zł");
        assert_eq!(plain(format_pln(26700)), "267,00 zł");
    }

    #[test]
    fn test_four_digits_not_grouped() {
        assert_eq!(plain(format_pln(123_456)), "1234,56 zł");
    }

    #[test]
    fn test_grouping_from_five_digits() {
        assert_eq!(plain(format_pln(1_234_500)), "12 345,00 zł");
        assert_eq!(plain(format_pln(12_345_678)), "123 456,78 zł");
        assert_eq!(plain(format_pln(123_456_789)), "1 234 567,89 zł");
    }

    #[test]
    fn test_uses_nbsp() {
        assert_eq!(format_pln(8900), "89,00\u{a0}zł");
    }
}
