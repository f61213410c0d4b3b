use serde::{Deserialize, Serialize};

// Structured columns are kept as raw JSON text here; each entity decodes its own.

/// Raw burger row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BurgerRow {
    pub id: i64,
    pub name: String,
    pub quote: Option<String>,
    pub ingredients: Option<String>,
    pub url_suffix: Option<String>,
}

/// Raw restaurant row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub hours_of_operation: Option<String>,
    pub hours_table: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub website: Option<String>,
}

/// Projection used by the coordinate listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CoordinateRow {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One burger/restaurant association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ServesRow {
    pub burger_id: i64,
    pub restaurant_id: i64,
}
