use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The calendar date it currently is in `tz`
    fn today(&self, tz: &Tz) -> NaiveDate {
        let now = Utc
            .timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .unwrap_or_else(Utc::now);
        now.with_timezone(tz).date_naive()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn today_depends_on_the_timezone() {
        // 2024-06-09T23:30:00Z
        let sys = StaticTimeSys(1717975800000);
        assert_eq!(
            sys.today(&chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()
        );
        assert_eq!(
            sys.today(&chrono_tz::Europe::Oslo),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
    }
}
