use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::burgers::Burger;
use crate::client;
use crate::error::{ImportError, LoadError, QueryError, SaveError};
use crate::records::{BurgerRow, RestaurantRow, ServesRow};
use crate::restaurants::Restaurant;
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dump {
    pub burgers: Vec<Burger>,
    pub restaurants: Vec<Restaurant>,
    pub serves: Vec<ServesRow>,
}

/// Row counts written by an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub burgers: usize,
    pub restaurants: usize,
    pub serves: usize,
}

impl Dump {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file_contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(file_contents.as_str())?)
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let serialized = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, serialized).await?;
        Ok(())
    }

    /// Read everything back out of the store. Malformed restaurants and their serves rows are left out
    pub async fn export(store: &Store) -> Result<Self, QueryError> {
        let burgers = client::all_burgers(store).await?;
        let restaurants = client::all_restaurants(store).await?;
        let kept: HashSet<i64> = restaurants.iter().map(|restaurant| restaurant.id).collect();
        let (serves, dropped): (Vec<_>, Vec<_>) = store
            .fetch_serves()
            .await?
            .into_iter()
            .partition(|row| kept.contains(&row.restaurant_id));
        for row in &dropped {
            warn!(
                "leaving out serves row ({}, {}): restaurant was not exported",
                row.burger_id, row.restaurant_id
            );
        }
        Ok(Self {
            burgers,
            restaurants,
            serves,
        })
    }

    /// Write the dump into `store`. Nothing is written if any row is rejected.
    pub async fn import(&self, store: &Store) -> Result<ImportSummary, ImportError> {
        let mut tx = store.pool().begin().await?;

        for burger in &self.burgers {
            let row = BurgerRow::from(burger);
            sqlx::query(
                "INSERT INTO burgers (id, name, quote, ingredients, url_suffix)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(row.id)
            .bind(row.name)
            .bind(row.quote)
            .bind(row.ingredients)
            .bind(row.url_suffix)
            .execute(&mut *tx)
            .await?;
        }

        for restaurant in &self.restaurants {
            let row = RestaurantRow::try_from(restaurant)?;
            sqlx::query(
                "INSERT INTO restaurants (id, name, phone_number, address, hours_of_operation,
                                          hours_table, latitude, longitude, website)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(row.id)
            .bind(row.name)
            .bind(row.phone_number)
            .bind(row.address)
            .bind(row.hours_of_operation)
            .bind(row.hours_table)
            .bind(row.latitude)
            .bind(row.longitude)
            .bind(row.website)
            .execute(&mut *tx)
            .await?;
        }

        for serves in &self.serves {
            sqlx::query("INSERT INTO restaurant_burgers (burger_id, restaurant_id) VALUES (?, ?)")
                .bind(serves.burger_id)
                .bind(serves.restaurant_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        let summary = ImportSummary {
            burgers: self.burgers.len(),
            restaurants: self.restaurants.len(),
            serves: self.serves.len(),
        };
        info!(
            "imported {} burgers, {} restaurants, {} serves rows",
            summary.burgers, summary.restaurants, summary.serves
        );
        Ok(summary)
    }
}
