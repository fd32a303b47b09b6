use crate::{
    booking::Booking,
    client::{Client, UNKNOWN_CLIENT_NAME},
    date::{full_years_between, parse_optional_date, MONTH_NAMES},
    reminder::{Reminder, ReminderKind},
    shared::entity::ID,
    snapshot::Snapshot,
};
use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, hash::Hash};

pub const TOP_CLIENTS: usize = 5;
pub const TOP_DESTINATIONS: usize = 7;
pub const UNKNOWN_NATIONALITY: &str = "Unknown";
pub const UNKNOWN_DESTINATION: &str = "N/A";
pub const OTHER_BOOKING_TYPE: &str = "Other";
pub const UNKNOWN_AGE_BAND: &str = "Unknown";
pub const AGE_BANDS: [&str; 5] = ["18-30", "31-45", "46-60", "61+", UNKNOWN_AGE_BAND];

/// One named value of a chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

impl ChartPoint {
    fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBookings {
    pub client_id: Option<ID>,
    pub name: String,
    pub bookings: usize,
}

/// Counts items per key. Keys come out by descending count, ties broken by
/// the position the key was first seen at.
fn count_by<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (position, key) in keys.into_iter().enumerate() {
        counts.entry(key).or_insert((position, 0)).1 += 1;
    }
    counts
        .into_iter()
        .sorted_by(|(_, (first_a, count_a)), (_, (first_b, count_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .map(|(key, (_, count))| (key, count))
        .collect()
}

fn label_or(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => placeholder.to_string(),
    }
}

fn into_points(counts: Vec<(String, usize)>) -> Vec<ChartPoint> {
    counts
        .into_iter()
        .map(|(name, value)| ChartPoint::new(name, value))
        .collect()
}

/// Clients per nationality. Missing nationalities are counted as their own group.
pub fn nationality_breakdown(clients: &[Client]) -> Vec<ChartPoint> {
    into_points(count_by(
        clients
            .iter()
            .map(|c| label_or(&c.nationality, UNKNOWN_NATIONALITY)),
    ))
}

/// Twelve buckets `Jan`..`Dec` counting bookings by check-in month
pub fn bookings_by_month(bookings: &[Booking]) -> Vec<ChartPoint> {
    let mut counts = [0usize; 12];
    for month in bookings.iter().filter_map(|b| b.check_in_date()).map(|d| d.month0()) {
        counts[month as usize] += 1;
    }
    MONTH_NAMES
        .iter()
        .zip(counts.iter())
        .map(|(name, count)| ChartPoint::new(*name, *count))
        .collect()
}

pub fn top_clients_by_bookings(clients: &[Client], bookings: &[Booking]) -> Vec<ClientBookings> {
    let lookup = clients.iter().map(|c| (&c.id, c)).collect::<HashMap<_, _>>();
    count_by(bookings.iter().map(|b| b.client_id.as_ref()))
        .into_iter()
        .take(TOP_CLIENTS)
        .map(|(client_id, bookings)| ClientBookings {
            name: client_id
                .and_then(|id| lookup.get(id))
                .map(|c| c.display_name())
                .unwrap_or_else(|| UNKNOWN_CLIENT_NAME.to_string()),
            client_id: client_id.cloned(),
            bookings,
        })
        .collect()
}

fn age_band(age: u32) -> &'static str {
    match age {
        0..=30 => AGE_BANDS[0],
        31..=45 => AGE_BANDS[1],
        46..=60 => AGE_BANDS[2],
        _ => AGE_BANDS[3],
    }
}

/// Clients per age band as of `today`. Every band is always present, in
/// fixed order. Minors and dates of birth after `today` count towards the
/// youngest band.
pub fn client_age_distribution(clients: &[Client], today: NaiveDate) -> Vec<ChartPoint> {
    let mut counts = [0usize; 5];
    for client in clients {
        let band = parse_optional_date(client.date_of_birth.as_deref())
            .map(|dob| full_years_between(dob, today).unwrap_or(0))
            .map(age_band)
            .unwrap_or(UNKNOWN_AGE_BAND);
        if let Some(index) = AGE_BANDS.iter().position(|b| *b == band) {
            counts[index] += 1;
        }
    }
    AGE_BANDS
        .iter()
        .zip(counts.iter())
        .map(|(name, count)| ChartPoint::new(*name, *count))
        .collect()
}

pub fn popular_destinations(bookings: &[Booking]) -> Vec<ChartPoint> {
    let counts = count_by(
        bookings
            .iter()
            .map(|b| label_or(&b.destination, UNKNOWN_DESTINATION)),
    );
    into_points(counts.into_iter().take(TOP_DESTINATIONS).collect())
}

pub fn booking_type_breakdown(bookings: &[Booking]) -> Vec<ChartPoint> {
    into_points(count_by(
        bookings
            .iter()
            .map(|b| label_or(&b.booking_type, OTHER_BOOKING_TYPE)),
    ))
}

/// Mean trip length in whole days. Only trips with both dates and a positive
/// length take part. Zero when there are none.
pub fn average_trip_duration(bookings: &[Booking]) -> u32 {
    let durations = bookings
        .iter()
        .filter_map(|b| b.duration_days())
        .filter(|days| *days > 0)
        .collect::<Vec<_>>();
    if durations.is_empty() {
        return 0;
    }
    let total: i64 = durations.iter().sum();
    (total as f64 / durations.len() as f64).round() as u32
}

/// Documents and trips due within `days` of the reference date
pub fn expiring_soon(reminders: &[Reminder], days: i64) -> usize {
    reminders
        .iter()
        .filter(|r| r.kind != ReminderKind::Birthday)
        .filter(|r| matches!(r.days_left, Some(left) if (0..=days).contains(&left)))
        .count()
}

/// Every figure and series shown on the summary dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub total_bookings: usize,
    pub average_trip_duration: u32,
    pub expiring_soon: usize,
    pub nationalities: Vec<ChartPoint>,
    pub bookings_by_month: Vec<ChartPoint>,
    pub top_clients: Vec<ClientBookings>,
    pub age_distribution: Vec<ChartPoint>,
    pub popular_destinations: Vec<ChartPoint>,
    pub booking_types: Vec<ChartPoint>,
}

impl DashboardSummary {
    pub fn new(
        snapshot: &Snapshot,
        reminders: &[Reminder],
        today: NaiveDate,
        expiring_within_days: i64,
    ) -> Self {
        Self {
            total_clients: snapshot.clients.len(),
            total_bookings: snapshot.bookings.len(),
            average_trip_duration: average_trip_duration(&snapshot.bookings),
            expiring_soon: expiring_soon(reminders, expiring_within_days),
            nationalities: nationality_breakdown(&snapshot.clients),
            bookings_by_month: bookings_by_month(&snapshot.bookings),
            top_clients: top_clients_by_bookings(&snapshot.clients, &snapshot.bookings),
            age_distribution: client_age_distribution(&snapshot.clients, today),
            popular_destinations: popular_destinations(&snapshot.bookings),
            booking_types: booking_type_breakdown(&snapshot.bookings),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{passport::Passport, reminder::generate_reminders};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn id(value: &str) -> ID {
        value.parse().unwrap()
    }

    fn trip(check_in: &str, check_out: &str) -> Booking {
        Booking {
            check_in: Some(check_in.into()),
            check_out: Some(check_out.into()),
            ..Default::default()
        }
    }

    fn booking_for(client_id: &str) -> Booking {
        Booking::new(id(client_id))
    }

    fn client_with(nationality: Option<&str>, dob: Option<&str>) -> Client {
        Client {
            nationality: nationality.map(String::from),
            date_of_birth: dob.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn average_ignores_zero_length_trips() {
        let bookings = vec![trip("2024-01-01", "2024-01-05"), trip("2024-02-01", "2024-02-01")];
        assert_eq!(average_trip_duration(&bookings), 4);
    }

    #[test]
    fn average_rounds_and_defaults_to_zero() {
        assert_eq!(average_trip_duration(&[]), 0);
        assert_eq!(average_trip_duration(&[trip("2024-01-05", "2024-01-01")]), 0);
        assert_eq!(average_trip_duration(&[trip("2024-01-01", "bad")]), 0);
        let bookings = vec![trip("2024-01-01", "2024-01-02"), trip("2024-01-01", "2024-01-03")];
        // 1.5 rounds half away from zero
        assert_eq!(average_trip_duration(&bookings), 2);
    }

    #[test]
    fn nationality_counts_cover_every_client() {
        let clients = vec![
            client_with(Some("Norwegian"), None),
            client_with(None, None),
            client_with(Some("Indian"), None),
            client_with(Some("Indian"), None),
            client_with(Some(""), None),
        ];
        let breakdown = nationality_breakdown(&clients);
        assert_eq!(
            breakdown,
            vec![
                ChartPoint::new(UNKNOWN_NATIONALITY, 2),
                ChartPoint::new("Indian", 2),
                ChartPoint::new("Norwegian", 1),
            ]
        );
        let total: usize = breakdown.iter().map(|p| p.value).sum();
        assert_eq!(total, clients.len());
        assert!(nationality_breakdown(&[]).is_empty());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let clients = vec![
            client_with(Some("B"), None),
            client_with(Some("A"), None),
            client_with(Some("C"), None),
            client_with(Some("A"), None),
            client_with(Some("B"), None),
        ];
        let names = nationality_breakdown(&clients)
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn bookings_are_bucketed_by_check_in_month() {
        let bookings = vec![
            trip("2024-01-10", "2024-01-12"),
            trip("2023-01-02", "2023-01-03"),
            trip("2024-12-24", "2024-12-26"),
            trip("not a date", "2024-12-26"),
            Booking::default(),
        ];
        let months = bookings_by_month(&bookings);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], ChartPoint::new("Jan", 2));
        assert_eq!(months[11], ChartPoint::new("Dec", 1));
        assert_eq!(months.iter().map(|p| p.value).sum::<usize>(), 3);
    }

    #[test]
    fn top_clients_are_capped_and_resolved() {
        let clients = vec![
            Client {
                id: id("c1"),
                ..Client::new("Ann", "Lee")
            },
            Client {
                id: id("c2"),
                ..Client::new("Bob", "Stone")
            },
        ];
        let mut bookings = vec![];
        for (client_id, count) in &[("c2", 3), ("c1", 4), ("x1", 1), ("x2", 1), ("x3", 1), ("x4", 1)] {
            for _ in 0..*count {
                bookings.push(booking_for(client_id));
            }
        }
        let top = top_clients_by_bookings(&clients, &bookings);
        assert_eq!(top.len(), TOP_CLIENTS);
        assert_eq!(top[0].name, "Ann");
        assert_eq!(top[0].bookings, 4);
        assert_eq!(top[1].name, "Bob");
        assert_eq!(top[2].client_id, Some(id("x1")));
        assert_eq!(top[2].name, UNKNOWN_CLIENT_NAME);
        assert!(top.iter().all(|c| c.client_id != Some(id("x4"))));
    }

    #[test]
    fn ages_fall_into_fixed_bands() {
        let today = ymd(2024, 6, 10);
        let clients = vec![
            client_with(None, Some("2010-01-01")),
            client_with(None, Some("1993-06-10")),
            client_with(None, Some("1993-06-11")),
            client_with(None, Some("1979-01-01")),
            client_with(None, Some("1964-01-01")),
            client_with(None, Some("1940-01-01")),
            client_with(None, None),
            client_with(None, Some("31/12/1980")),
            client_with(None, Some("2030-01-01")),
        ];
        let bands = client_age_distribution(&clients, today);
        assert_eq!(
            bands,
            vec![
                ChartPoint::new("18-30", 3),
                ChartPoint::new("31-45", 2),
                ChartPoint::new("46-60", 1),
                ChartPoint::new("61+", 1),
                ChartPoint::new("Unknown", 2),
            ]
        );
    }

    #[test]
    fn future_date_of_birth_counts_as_youngest_band() {
        let clients = vec![client_with(None, Some("2030-01-01"))];
        let bands = client_age_distribution(&clients, ymd(2024, 6, 10));
        assert_eq!(bands[0], ChartPoint::new("18-30", 1));
        assert_eq!(bands[4], ChartPoint::new("Unknown", 0));
    }

    #[test]
    fn destinations_and_types_use_placeholders() {
        let mut bookings = vec![];
        for (destination, kind) in &[
            (Some("Paris"), Some("Flight")),
            (None, None),
            (Some("Paris"), Some("Hotel")),
            (Some(""), Some("Flight")),
            (Some("Oslo"), None),
        ] {
            bookings.push(Booking {
                destination: destination.map(String::from),
                booking_type: kind.map(String::from),
                ..Default::default()
            });
        }
        assert_eq!(
            popular_destinations(&bookings),
            vec![
                ChartPoint::new("Paris", 2),
                ChartPoint::new(UNKNOWN_DESTINATION, 2),
                ChartPoint::new("Oslo", 1),
            ]
        );
        assert_eq!(
            booking_type_breakdown(&bookings),
            vec![
                ChartPoint::new("Flight", 2),
                ChartPoint::new(OTHER_BOOKING_TYPE, 2),
                ChartPoint::new("Hotel", 1),
            ]
        );
    }

    #[test]
    fn destinations_are_capped() {
        let bookings = (0..10)
            .map(|i| Booking {
                destination: Some(format!("City {}", i)),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let top = popular_destinations(&bookings);
        assert_eq!(top.len(), TOP_DESTINATIONS);
        assert_eq!(top[0].name, "City 0");
    }

    #[test]
    fn summary_counts_documents_expiring_soon() {
        let today = ymd(2024, 1, 1);
        let snapshot = Snapshot {
            clients: vec![Client {
                id: id("c1"),
                date_of_birth: Some("1990-01-05".into()),
                ..Client::new("Ann", "Lee")
            }],
            passports: vec![
                Passport::new(id("c1"), "2024-01-31"),
                Passport::new(id("c1"), "2024-02-01"),
            ],
            bookings: vec![trip("2024-03-01", "2024-03-08")],
            ..Default::default()
        };
        let reminders = generate_reminders(&snapshot, today);
        let summary = DashboardSummary::new(&snapshot, &reminders, today, 30);
        assert_eq!(summary.total_clients, 1);
        assert_eq!(summary.total_bookings, 1);
        assert_eq!(summary.average_trip_duration, 7);
        // the birthday in 4 days does not count, the passport at 31 days neither
        assert_eq!(summary.expiring_soon, 1);
        assert_eq!(summary.bookings_by_month[2], ChartPoint::new("Mar", 1));
        assert_eq!(summary.age_distribution[1], ChartPoint::new("31-45", 1));
    }
}
