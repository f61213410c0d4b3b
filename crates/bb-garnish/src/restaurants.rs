use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::QueryError;
use crate::records::RestaurantRow;

const ENTITY: &str = "restaurant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    /// Address lines, in display order.
    pub address: Vec<String>,
    /// Opening hours as display lines.
    pub hours_of_operation: Vec<String>,
    pub hours_table: Option<HoursTable>,
    pub latitude: f64,
    pub longitude: f64,
    pub website: String,
}

/// Opening intervals keyed by weekday, 0 being Monday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u32, Vec<Interval>>")]
pub struct HoursTable(BTreeMap<u32, Vec<Interval>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(rename = "start_time", alias = "start")]
    pub start: TimeOfDay,
    #[serde(rename = "end_time", alias = "end")]
    pub end: TimeOfDay,
}

/// A wall-clock time stored as `{"h": .., "m": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ClockTime", into = "ClockTime")]
pub struct TimeOfDay(NaiveTime);

#[derive(Serialize, Deserialize)]
struct ClockTime {
    h: u32,
    m: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl TryFrom<ClockTime> for TimeOfDay {
    type Error = String;

    fn try_from(time: ClockTime) -> Result<Self, String> {
        TimeOfDay::new(time.h, time.m)
            .ok_or_else(|| format!("{:02}:{:02} is not a valid time of day", time.h, time.m))
    }
}

impl From<TimeOfDay> for ClockTime {
    fn from(time: TimeOfDay) -> Self {
        Self {
            h: time.0.hour(),
            m: time.0.minute(),
        }
    }
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Only the hours are compared: `22:00-02:00` crosses midnight, `10:30-10:15` does not.
    pub fn crosses_midnight(&self) -> bool {
        self.end.hour() < self.start.hour()
    }
}

impl HoursTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, weekday: Weekday, intervals: Vec<Interval>) -> Self {
        self.0.insert(weekday.num_days_from_monday(), intervals);
        self
    }

    /// Intervals scheduled for `weekday`, or `None` when the table has no entry for it.
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&[Interval]> {
        self.0
            .get(&weekday.num_days_from_monday())
            .map(Vec::as_slice)
    }
}

impl TryFrom<BTreeMap<u32, Vec<Interval>>> for HoursTable {
    type Error = String;

    fn try_from(days: BTreeMap<u32, Vec<Interval>>) -> Result<Self, String> {
        if let Some(day) = days.keys().find(|day| **day > 6) {
            return Err(format!("weekday {day} is out of range"));
        }
        Ok(Self(days))
    }
}

fn decode_column<T: DeserializeOwned>(
    id: i64,
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, QueryError> {
    raw.map(|text| {
        serde_json::from_str(text).map_err(|e| QueryError::MalformedRecord {
            entity: ENTITY,
            id,
            field,
            reason: e.to_string(),
        })
    })
    .transpose()
}

/// Decode just the schedule of a row.
pub fn decode_hours_table(row: &RestaurantRow) -> Result<Option<HoursTable>, QueryError> {
    decode_column(row.id, "hours_table", row.hours_table.as_deref())
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = QueryError;

    fn try_from(row: RestaurantRow) -> Result<Self, QueryError> {
        let address = decode_column(row.id, "address", row.address.as_deref())?;
        let hours_of_operation =
            decode_column(row.id, "hours_of_operation", row.hours_of_operation.as_deref())?;
        let hours_table = decode_hours_table(&row)?;
        Ok(Self {
            id: row.id,
            name: row.name,
            phone_number: row.phone_number.unwrap_or_default(),
            address: address.unwrap_or_default(),
            hours_of_operation: hours_of_operation.unwrap_or_default(),
            hours_table,
            latitude: row.latitude,
            longitude: row.longitude,
            website: row.website.unwrap_or_default(),
        })
    }
}

impl TryFrom<&Restaurant> for RestaurantRow {
    type Error = serde_json::Error;

    fn try_from(restaurant: &Restaurant) -> Result<Self, serde_json::Error> {
        let hours_table = restaurant
            .hours_table
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        Ok(Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            phone_number: Some(restaurant.phone_number.clone()),
            address: Some(serde_json::to_string(&restaurant.address)?),
            hours_of_operation: Some(serde_json::to_string(&restaurant.hours_of_operation)?),
            hours_table,
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
            website: Some(restaurant.website.clone()),
        })
    }
}
