pub fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn count_label(count: usize, noun: &str) -> String {
    format!("Showing {}", plural(count as u64, noun))
}

/// `part / whole` as a whole percentage, rounded half up. Zero when `whole` is zero.
pub fn rounded_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part * 200 + whole) / (whole * 2)
}

pub fn format_percent(value: u64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_counts() {
        assert_eq!(plural(0, "day"), "0 days");
        assert_eq!(plural(1, "day"), "1 day");
        assert_eq!(count_label(1, "employee"), "Showing 1 employee");
        assert_eq!(count_label(3, "record"), "Showing 3 records");
    }

    #[test]
    fn percentages_round_half_up() {
        assert_eq!(rounded_percent(0, 0), 0);
        assert_eq!(rounded_percent(3, 4), 75);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(5, 5), 100);
        assert_eq!(format_percent(rounded_percent(0, 0)), "0%");
    }
}
