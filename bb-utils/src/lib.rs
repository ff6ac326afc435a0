//! Shared utility functions for BlueBarrier crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Short day label for forecast rows, e.g. "Fri 18 Oct"
    pub fn day_label(date: &NaiveDate) -> String {
        format!("{} {:02} {}", date.weekday(), date.day(), date.format("%b"))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 10, 18).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-10-18");
            assert_eq!(parse_date(&formatted).unwrap(), date);
            assert!(parse_date("18/10/2024").is_err());
        }

        #[test]
        fn test_day_label() {
            let date = NaiveDate::from_ymd_opt(2024, 10, 18).unwrap();
            assert_eq!(day_label(&date), "Fri 18 Oct");
        }
    }
}

/// Number formatting the way the landing page displayed figures
pub mod numbers {
    /// Group digits the Indian way: last three, then pairs.
    /// e.g. 7100000 -> "71,00,000"
    pub fn format_indian(n: u64) -> String {
        let digits = n.to_string();
        if digits.len() <= 3 {
            return digits;
        }
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    }

    /// Score in [0, 1] as a whole percentage.
    pub fn percent(score: f64) -> u32 {
        (score.clamp(0.0, 1.0) * 100.0).round() as u32
    }

}
