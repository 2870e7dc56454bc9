use chrono::{DateTime, Utc};

/// Current wall-clock time in UTC.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp as `HH:MM` for chat bubbles.
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock() {
        // テスト項目: 時刻が HH:MM 形式で整形される
        // given (前提条件):
        let ts = Utc.with_ymd_and_hms(2024, 1, 20, 10, 31, 0).unwrap();

        // then (期待する結果):
        assert_eq!(format_clock(&ts), "10:31");
    }
}
