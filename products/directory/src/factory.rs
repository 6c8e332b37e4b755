//! Maps raw provider records onto [`Employee`].

use chrono::{DateTime, Datelike, Utc};
use platform_people::PersonRecord;

use crate::employee::{Employee, Profile};

/// Build a fresh employee from one provider record.
pub fn create_employee(record: PersonRecord) -> Employee {
    let PersonRecord {
        name,
        email,
        location,
        picture,
        cell,
        dob,
        login,
    } = record;

    let detailed_address = format!(
        "{} {}, {}  {}",
        location.street, location.city, location.state, location.postcode
    );

    Employee::new(Profile {
        name: format!("{} {}", name.first, name.last),
        email,
        location: location.city,
        photo: picture.large,
        cell,
        detailed_address,
        birthday: format_birthday(&dob.date),
        username: login.username,
    })
}

/// `M/D/YYYY`, no zero padding.
pub fn format_birthday(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
