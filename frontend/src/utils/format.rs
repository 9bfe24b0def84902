/// Formats an integer the way `toLocaleString('pt-BR')` does: `.` between
/// groups of three digits, no decimals.
pub fn group_thousands_pt_br(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_untouched() {
        assert_eq!(group_thousands_pt_br(0), "0");
        assert_eq!(group_thousands_pt_br(7), "7");
        assert_eq!(group_thousands_pt_br(999), "999");
    }

    #[test]
    fn groups_use_dots() {
        assert_eq!(group_thousands_pt_br(1000), "1.000");
        assert_eq!(group_thousands_pt_br(12500), "12.500");
        assert_eq!(group_thousands_pt_br(250000), "250.000");
        assert_eq!(group_thousands_pt_br(1234567), "1.234.567");
    }
}
