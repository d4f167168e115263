use chrono::{TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_MIN * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_MIN * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const MS_IN_1_MO: i64 = Self::MS_IN_D * 30;

    /// Current wall-clock time as epoch milliseconds.
    pub fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Convert epoch milliseconds to a short UTC label for chart axes (e.g. `08-21 14:30`).
pub fn epoch_ms_to_axis_label(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms) {
        chrono::LocalResult::Single(datetime) => datetime.format("%m-%d %H:%M").to_string(),
        _ => String::new(),
    }
}

/// Convert epoch milliseconds to a full UTC timestamp string for logs.
pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms) {
        chrono::LocalResult::Single(datetime) => {
            datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_constants() {
        assert_eq!(TimeUtils::MS_IN_5_MIN, 300_000);
        assert_eq!(TimeUtils::MS_IN_H, 3_600_000);
        assert_eq!(TimeUtils::MS_IN_W, 7 * TimeUtils::MS_IN_D);
    }

    #[test]
    fn test_epoch_ms_formatting() {
        // 2021-01-01 00:00:00 UTC
        assert_eq!(epoch_ms_to_utc(1_609_459_200_000), "2021-01-01 00:00:00 UTC");
        assert_eq!(epoch_ms_to_axis_label(1_609_459_200_000), "01-01 00:00");
    }
}
