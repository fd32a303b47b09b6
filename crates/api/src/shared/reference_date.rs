use chrono::NaiveDate;
use travel_desk_domain::date::parse_date;
use travel_desk_infra::TravelDeskContext;

#[derive(Debug, PartialEq)]
pub struct InvalidReferenceDate(pub String);

/// The date derivations are computed against: the given `YYYY-MM-DD` date,
/// or today in the configured timezone
pub fn reference_date(
    date: Option<&str>,
    ctx: &TravelDeskContext,
) -> Result<NaiveDate, InvalidReferenceDate> {
    match date {
        Some(date) => parse_date(date).map_err(|_| InvalidReferenceDate(date.to_string())),
        None => Ok(ctx.sys.today(&ctx.config.timezone)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;
    use travel_desk_infra::{ISys, Tz};

    struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            // 2024-06-10T12:00:00Z
            1718020800000
        }
    }

    fn ctx() -> TravelDeskContext {
        let mut ctx = TravelDeskContext::create_inmemory();
        ctx.config.timezone = Tz::UTC;
        ctx.sys = Arc::new(StaticTimeSys);
        ctx
    }

    #[test]
    fn it_prefers_the_given_date() {
        let ctx = ctx();
        assert_eq!(
            reference_date(Some("2023-01-31"), &ctx),
            Ok(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
        );
        assert_eq!(
            reference_date(None, &ctx),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
        );
        assert_eq!(
            reference_date(Some("yesterday"), &ctx),
            Err(InvalidReferenceDate("yesterday".into()))
        );
    }
}
