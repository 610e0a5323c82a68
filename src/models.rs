//! Display Models
//!
//! Data structures behind the page's content. Everything is fixed at build
//! time and rendered as-is; nothing is mutated or persisted.

/// A portfolio entry in the selected-work list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub description: &'static str,
}

/// A studio offering in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// Zero-padded two-digit label used for list indices ("01", "02", ...)
pub fn two_digit_label(n: usize) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_label_pads_single_digits() {
        assert_eq!(two_digit_label(1), "01");
        assert_eq!(two_digit_label(2), "02");
        assert_eq!(two_digit_label(9), "09");
    }

    #[test]
    fn test_two_digit_label_keeps_wider_numbers() {
        assert_eq!(two_digit_label(10), "10");
        assert_eq!(two_digit_label(42), "42");
    }
}
