//! Savings estimate for the ROI calculator.
//!
//! The recovery rate is 18% of monthly spend, floored to whole rupees.

pub const MIN_MONTHLY_SPEND: u64 = 25_000;
pub const MAX_MONTHLY_SPEND: u64 = 500_000;
pub const SPEND_STEP: u64 = 5_000;
pub const DEFAULT_MONTHLY_SPEND: u64 = 50_000;

/// Recovery rate in percent.
pub const RECOVERY_PERCENT: u64 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiEstimate {
    pub monthly_spend: u64,
    pub monthly: u64,
    pub annual: u64,
    pub five_year: u64,
}

impl RoiEstimate {
    pub fn from_monthly_spend(spend: u64) -> Self {
        let monthly_spend = clamp_spend(spend);
        let monthly = monthly_spend * RECOVERY_PERCENT / 100;
        let annual = monthly * 12;
        Self {
            monthly_spend,
            monthly,
            annual,
            five_year: annual * 5,
        }
    }
}

pub fn clamp_spend(spend: u64) -> u64 {
    spend.clamp(MIN_MONTHLY_SPEND, MAX_MONTHLY_SPEND)
}

/// Parses the slider value; anything unparsable keeps the previous spend.
pub fn parse_spend(raw: &str, previous: u64) -> u64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| clamp_spend(v.max(0.0) as u64))
        .unwrap_or(previous)
}

/// Groups digits the Indian way: last three, then pairs (12,34,567).
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spend_estimate() {
        let est = RoiEstimate::from_monthly_spend(DEFAULT_MONTHLY_SPEND);
        assert_eq!(est.monthly, 9_000);
        assert_eq!(est.annual, 108_000);
        assert_eq!(est.five_year, 540_000);
    }

    #[test]
    fn annual_is_twelve_floored_monthly_across_range() {
        let mut spend = MIN_MONTHLY_SPEND;
        while spend <= MAX_MONTHLY_SPEND {
            let est = RoiEstimate::from_monthly_spend(spend);
            let floored = (spend as f64 * 0.18).floor() as u64;
            assert_eq!(est.monthly, floored, "spend {}", spend);
            assert_eq!(est.annual, 12 * floored);
            assert_eq!(est.five_year, 5 * est.annual);
            spend += SPEND_STEP;
        }
    }

    #[test]
    fn floors_fractional_recovery() {
        // 25_003 * 0.18 = 4500.54
        assert_eq!(RoiEstimate::from_monthly_spend(25_003).monthly, 4_500);
    }

    #[test]
    fn out_of_range_spend_is_clamped() {
        assert_eq!(RoiEstimate::from_monthly_spend(0).monthly_spend, MIN_MONTHLY_SPEND);
        assert_eq!(
            RoiEstimate::from_monthly_spend(9_000_000).monthly_spend,
            MAX_MONTHLY_SPEND
        );
    }

    #[test]
    fn parse_spend_keeps_previous_on_garbage() {
        assert_eq!(parse_spend("75000", 50_000), 75_000);
        assert_eq!(parse_spend("", 50_000), 50_000);
        assert_eq!(parse_spend("abc", 60_000), 60_000);
        assert_eq!(parse_spend("-10", 60_000), MIN_MONTHLY_SPEND);
        assert_eq!(parse_spend("1e9", 60_000), MAX_MONTHLY_SPEND);
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(9_000), "9,000");
        assert_eq!(format_inr(108_000), "1,08,000");
        assert_eq!(format_inr(5_400_000), "54,00,000");
        assert_eq!(format_inr(12_345_678), "1,23,45,678");
    }
}
