use chrono::{NaiveDate, NaiveDateTime, Weekday};
use tempfile::TempDir;

use crate::burgers::Burger;
use crate::dump::Dump;
use crate::records::ServesRow;
use crate::restaurants::{HoursTable, Interval, Restaurant, TimeOfDay};
use crate::store::Store;

pub(crate) const ALL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub(crate) async fn empty_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("garnish.db")).await.unwrap();
    store.create_schema().await.unwrap();
    (dir, store)
}

pub(crate) async fn seeded_store() -> (TempDir, Store) {
    let (dir, store) = empty_store().await;
    sample_dump().import(&store).await.unwrap();
    (dir, store)
}

/// 2024-03-05 is a Tuesday.
pub(crate) fn tuesday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub(crate) fn interval(start: (u32, u32), end: (u32, u32)) -> Interval {
    Interval::new(
        TimeOfDay::new(start.0, start.1).unwrap(),
        TimeOfDay::new(end.0, end.1).unwrap(),
    )
}

fn schedule(days: &[Weekday], hours: Interval) -> HoursTable {
    days.iter()
        .fold(HoursTable::new(), |table, day| table.with_day(*day, vec![hours]))
}

fn burger(id: i64, name: &str, quote: &str, ingredients: &str) -> Burger {
    Burger {
        id,
        name: name.to_string(),
        quote: quote.to_string(),
        ingredients: ingredients.to_string(),
        url_suffix: name.to_lowercase().replace(' ', "-"),
    }
}

fn restaurant(id: i64, name: &str, address: &[&str], hours_table: Option<HoursTable>) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        phone_number: format!("(902)555-010{id}"),
        address: address.iter().map(|line| line.to_string()).collect(),
        hours_of_operation: vec!["See website".to_string()],
        hours_table,
        latitude: 46.2 + id as f64 / 100.0,
        longitude: -63.1 - id as f64 / 100.0,
        website: format!("https://example.com/{id}"),
    }
}

/// Five restaurants and four burgers.
///
/// - burger 1 is a partnership between restaurants 1 and 2
/// - burger 2 mentions "burger" only in its ingredients and is served by 3
/// - burger 3 is served by 4, burger 4 by nobody, restaurant 5 serves nothing
/// - restaurant 1 is open 11:00-22:00 daily, 2 is open 22:00-02:00 daily,
///   3 has no schedule, 4 opens on Sundays only, 5 on weekdays 9:00-17:00
pub(crate) fn sample_dump() -> Dump {
    Dump {
        burgers: vec![
            burger(1, "Smokin Gun", "Hot hot hot", "brisket, jalapeno, cheddar"),
            burger(2, "The Islander", "From the sea", "lobster, burger sauce"),
            burger(3, "Veg Out", "Greens", "chickpea patty, sprouts"),
            burger(4, "Orphan", "Nobody serves me", "mystery meat"),
        ],
        restaurants: vec![
            restaurant(
                1,
                "Burger Love Diner",
                &["1 Queen St", "Charlottetown"],
                Some(schedule(&ALL_WEEK, interval((11, 0), (22, 0)))),
            ),
            restaurant(
                2,
                "Pier Pub",
                &["5 Water St", "Summerside"],
                Some(schedule(&ALL_WEEK, interval((22, 0), (2, 0)))),
            ),
            restaurant(3, "Lobster Shack", &["9 Harbour Rd", "North Rustico"], None),
            restaurant(
                4,
                "Green Table",
                &["12 Grafton St", "Charlottetown"],
                Some(schedule(&[Weekday::Sun], interval((10, 0), (14, 0)))),
            ),
            restaurant(
                5,
                "Lonely Cafe",
                &["3 Main St", "Montague"],
                Some(schedule(&ALL_WEEK[..5], interval((9, 0), (17, 0)))),
            ),
        ],
        serves: vec![
            ServesRow { burger_id: 1, restaurant_id: 1 },
            ServesRow { burger_id: 1, restaurant_id: 2 },
            ServesRow { burger_id: 2, restaurant_id: 3 },
            ServesRow { burger_id: 3, restaurant_id: 4 },
        ],
    }
}

/// Insert a restaurant row with raw column text, bypassing the entity encoder.
pub(crate) async fn insert_raw_restaurant(
    store: &Store,
    id: i64,
    name: &str,
    address: &str,
    hours_table: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO restaurants (id, name, address, hours_table, latitude, longitude)
         VALUES (?, ?, ?, ?, 46.0, -63.0)",
    )
    .bind(id)
    .bind(name)
    .bind(address)
    .bind(hours_table)
    .execute(store.pool())
    .await
    .unwrap();
}
