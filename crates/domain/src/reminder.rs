use crate::{
    client::{Client, UNKNOWN_CLIENT_NAME},
    date::{days_between, format_date, format_month_day, next_anniversary, parse_optional_date},
    shared::entity::{Entity, ID},
    snapshot::Snapshot,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// How far ahead, in days, reminders are generated
pub const REMINDER_HORIZON_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReminderKind {
    Birthday,
    Passport,
    Visa,
    Policy,
    Booking,
}

impl ReminderKind {
    /// Passports, visas and policies expire; birthdays and trips do not
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Passport | Self::Visa | Self::Policy)
    }
}

impl Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Birthday => "Birthday",
            Self::Passport => "Passport",
            Self::Visa => "Visa",
            Self::Policy => "Policy",
            Self::Booking => "Booking",
        };
        write!(f, "{}", name)
    }
}

/// A time sensitive event derived from a `Snapshot`. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    /// The record the reminder was derived from
    pub subject_id: ID,
    /// Owning client. For birthdays this is the subject itself.
    pub client_id: Option<ID>,
    pub name: String,
    /// Signed whole days from the reference date to the event
    pub days_left: Option<i64>,
    /// Date of birth, expiry date or departure date depending on `kind`
    pub date: NaiveDate,
    pub pnr: Option<String>,
}

impl Reminder {
    /// One line description shown in the reminder drawer
    pub fn message(&self) -> String {
        let mut message = format!("{} for {}", self.kind, self.name);
        match self.kind {
            ReminderKind::Birthday => {
                message.push_str(&format!(" on {}", format_month_day(&self.date)));
            }
            ReminderKind::Booking => {
                message.push_str(&format!(" check-in on {}", format_date(&self.date)));
            }
            _ => {
                message.push_str(&format!(" expiring on {}", format_date(&self.date)));
            }
        }
        match self.days_left {
            Some(0) => message.push_str(" (Today)."),
            Some(days) if days > 0 => message.push_str(&format!(" (in {} days).", days)),
            Some(days) => message.push_str(&format!(" (Expired {} days ago).", days.abs())),
            None => (),
        }
        message
    }
}

fn within_horizon(days_left: i64) -> bool {
    (0..=REMINDER_HORIZON_DAYS).contains(&days_left)
}

fn client_name(clients: &HashMap<&ID, &Client>, client_id: &Option<ID>) -> String {
    client_id
        .as_ref()
        .and_then(|id| clients.get(id))
        .map(|client| client.display_name())
        .unwrap_or_else(|| UNKNOWN_CLIENT_NAME.to_string())
}

fn birthday_reminder(client: &Client, today: NaiveDate) -> Option<Reminder> {
    let dob = parse_optional_date(client.date_of_birth.as_deref())?;
    let next = next_anniversary(dob, today)?;
    let days_left = days_between(today, next);
    if !within_horizon(days_left) {
        return None;
    }
    let name = match client.full_name() {
        name if name.is_empty() => UNKNOWN_CLIENT_NAME.to_string(),
        name => name,
    };
    Some(Reminder {
        kind: ReminderKind::Birthday,
        subject_id: client.id.clone(),
        client_id: Some(client.id.clone()),
        name,
        days_left: Some(days_left),
        date: dob,
        pnr: None,
    })
}

/// Builds every reminder due within the horizon of `today`, most urgent first.
///
/// Birthdays roll forward to their next occurrence. Documents and trips do
/// not, so anything already in the past is left out. Records with a missing
/// or unparseable date are skipped.
pub fn generate_reminders(snapshot: &Snapshot, today: NaiveDate) -> Vec<Reminder> {
    let clients = snapshot.client_lookup();

    let birthdays = snapshot
        .clients
        .iter()
        .filter_map(|client| birthday_reminder(client, today));

    let documents = snapshot
        .passports
        .iter()
        .map(|p| (ReminderKind::Passport, p.id(), &p.client_id, p.expiry()))
        .chain(
            snapshot
                .visas
                .iter()
                .map(|v| (ReminderKind::Visa, v.id(), &v.client_id, v.expiry())),
        )
        .chain(
            snapshot
                .policies
                .iter()
                .map(|p| (ReminderKind::Policy, p.id(), &p.client_id, p.expiry())),
        )
        .filter_map(|(kind, subject_id, client_id, expiry)| {
            let expiry = expiry?;
            let days_left = days_between(today, expiry);
            if !within_horizon(days_left) {
                return None;
            }
            Some(Reminder {
                kind,
                subject_id: subject_id.clone(),
                client_id: client_id.clone(),
                name: client_name(&clients, client_id),
                days_left: Some(days_left),
                date: expiry,
                pnr: None,
            })
        });

    let departures = snapshot.bookings.iter().filter_map(|booking| {
        let departure = booking.departure()?;
        let days_left = days_between(today, departure);
        if !within_horizon(days_left) {
            return None;
        }
        Some(Reminder {
            kind: ReminderKind::Booking,
            subject_id: booking.id.clone(),
            client_id: booking.client_id.clone(),
            name: client_name(&clients, &booking.client_id),
            days_left: Some(days_left),
            date: departure,
            pnr: booking.pnr.clone(),
        })
    });

    let mut reminders = birthdays.chain(documents).chain(departures).collect::<Vec<_>>();
    sort_reminders(&mut reminders);
    reminders
}

/// Stable ascending sort on `days_left`, reminders without one go last
pub fn sort_reminders(reminders: &mut [Reminder]) {
    reminders.sort_by_key(|r| r.days_left.unwrap_or(i64::MAX));
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderGroup {
    pub kind: ReminderKind,
    pub reminders: Vec<Reminder>,
}

/// Groups reminders by kind. Groups appear in the order their first member
/// does and keep the input order inside.
pub fn group_by_kind(reminders: &[Reminder]) -> Vec<ReminderGroup> {
    let mut groups: Vec<ReminderGroup> = Vec::new();
    for reminder in reminders {
        match groups.iter_mut().find(|g| g.kind == reminder.kind) {
            Some(group) => group.reminders.push(reminder.clone()),
            None => groups.push(ReminderGroup {
                kind: reminder.kind,
                reminders: vec![reminder.clone()],
            }),
        }
    }
    groups
}
