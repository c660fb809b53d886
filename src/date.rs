//! Date Helpers

/// ISO date (YYYY-MM-DD) to slash form (YYYY/MM/DD)
pub fn format_date_slash(date: &str) -> String {
    date.replace('-', "/")
}

/// Current time in milliseconds since the epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_slash() {
        assert_eq!(format_date_slash("2024-01-15"), "2024/01/15");
        assert_eq!(format_date_slash("2024"), "2024");
    }

    #[test]
    fn test_now_ms_is_positive() {
        assert!(now_ms() > 0);
    }
}
