use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use crate::error::QueryError;
use crate::records::{BurgerRow, CoordinateRow, RestaurantRow, ServesRow};

const SCHEMA: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS burgers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        quote TEXT,
        ingredients TEXT,
        url_suffix TEXT
    )",
    "CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        phone_number TEXT,
        address TEXT,
        hours_of_operation TEXT,
        hours_table TEXT,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL,
        website TEXT
    )",
    "CREATE TABLE IF NOT EXISTS restaurant_burgers (
        burger_id INTEGER NOT NULL REFERENCES burgers(id),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id),
        PRIMARY KEY (burger_id, restaurant_id)
    )",
    "CREATE INDEX IF NOT EXISTS restaurant_burgers_by_restaurant
        ON restaurant_burgers (restaurant_id, burger_id)",
];

const RESTAURANT_COLUMNS: &str = "id, name, phone_number, address, hours_of_operation, \
                                  hours_table, latitude, longitude, website";

#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the SQLite file at `path`, creating it if it does not exist yet.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, QueryError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        debug!("opened store at {}", path.as_ref().display());
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn create_schema(&self) -> Result<(), QueryError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn fetch_burgers(&self) -> Result<Vec<BurgerRow>, QueryError> {
        let rows = sqlx::query_as::<_, BurgerRow>(
            "SELECT id, name, quote, ingredients, url_suffix FROM burgers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_burger(&self, id: i64) -> Result<Option<BurgerRow>, QueryError> {
        let row = sqlx::query_as::<_, BurgerRow>(
            "SELECT id, name, quote, ingredients, url_suffix FROM burgers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Ids of burgers whose name, quote or ingredients match a LIKE pattern.
    pub async fn fetch_burger_ids_matching(&self, pattern: &str) -> Result<Vec<i64>, QueryError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT DISTINCT id FROM burgers
             WHERE name LIKE ?1 OR quote LIKE ?1 OR ingredients LIKE ?1
             ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    pub async fn fetch_restaurants(&self) -> Result<Vec<RestaurantRow>, QueryError> {
        let rows = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_restaurant(&self, id: i64) -> Result<Option<RestaurantRow>, QueryError> {
        let row = sqlx::query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn fetch_coordinates(&self) -> Result<Vec<CoordinateRow>, QueryError> {
        let rows = sqlx::query_as::<_, CoordinateRow>(
            "SELECT id, name, latitude, longitude FROM restaurants ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_coordinate(&self, id: i64) -> Result<Option<CoordinateRow>, QueryError> {
        let row = sqlx::query_as::<_, CoordinateRow>(
            "SELECT id, name, latitude, longitude FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Coordinates of restaurants whose name or address text match a LIKE pattern.
    pub async fn fetch_coordinates_matching(
        &self,
        pattern: &str,
    ) -> Result<Vec<CoordinateRow>, QueryError> {
        let rows = sqlx::query_as::<_, CoordinateRow>(
            "SELECT id, name, latitude, longitude FROM restaurants
             WHERE name LIKE ?1 OR address LIKE ?1
             ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_serves(&self) -> Result<Vec<ServesRow>, QueryError> {
        let rows = sqlx::query_as::<_, ServesRow>(
            "SELECT burger_id, restaurant_id FROM restaurant_burgers
             ORDER BY burger_id, restaurant_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_serves_for_burger(&self, burger_id: i64) -> Result<Vec<ServesRow>, QueryError> {
        let rows = sqlx::query_as::<_, ServesRow>(
            "SELECT burger_id, restaurant_id FROM restaurant_burgers
             WHERE burger_id = ?
             ORDER BY restaurant_id",
        )
        .bind(burger_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn fetch_serves_for_restaurant(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<ServesRow>, QueryError> {
        let rows = sqlx::query_as::<_, ServesRow>(
            "SELECT burger_id, restaurant_id FROM restaurant_burgers
             WHERE restaurant_id = ?
             ORDER BY burger_id",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
