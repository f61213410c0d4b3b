use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::warn;

use crate::burgers::Burger;
use crate::error::QueryError;
use crate::hours::Offset;
use crate::open::open_restaurants;
use crate::records::CoordinateRow;
use crate::restaurants::Restaurant;
use crate::search::SearchHit;
use crate::store::Store;
use crate::{relations, search as text_search};

const UNKNOWN_ID: &str = "The given ID does not exist.";

/// A burger with the restaurants serving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurgerDetail {
    #[serde(flatten)]
    pub burger: Burger,
    pub restaurants: Vec<i64>,
}

/// A restaurant with the burgers it serves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub burgers: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<CoordinateRow> for Coordinate {
    fn from(row: CoordinateRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

impl From<Restaurant> for Coordinate {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
        }
    }
}

pub async fn all_burgers(store: &Store) -> Result<Vec<Burger>, QueryError> {
    Ok(store
        .fetch_burgers()
        .await?
        .into_iter()
        .map(Burger::from)
        .collect())
}

pub async fn burger(store: &Store, id: i64) -> Result<BurgerDetail, QueryError> {
    let row = store
        .fetch_burger(id)
        .await?
        .ok_or_else(|| QueryError::NotFound(UNKNOWN_ID.to_string()))?;
    Ok(BurgerDetail {
        burger: Burger::from(row),
        restaurants: relations::serving_restaurants(store, id).await?,
    })
}

pub async fn restaurants_for_burger(store: &Store, id: i64) -> Result<Vec<i64>, QueryError> {
    relations::restaurants_for_burger(store, id).await
}

/// Every restaurant that decodes cleanly.
pub async fn all_restaurants(store: &Store) -> Result<Vec<Restaurant>, QueryError> {
    let mut restaurants = Vec::new();
    for row in store.fetch_restaurants().await? {
        match Restaurant::try_from(row) {
            Ok(restaurant) => restaurants.push(restaurant),
            Err(e) => warn!("skipping restaurant: {e}"),
        }
    }
    Ok(restaurants)
}

pub async fn restaurant(store: &Store, id: i64) -> Result<RestaurantDetail, QueryError> {
    let row = store
        .fetch_restaurant(id)
        .await?
        .ok_or_else(|| QueryError::NotFound(UNKNOWN_ID.to_string()))?;
    let restaurant = Restaurant::try_from(row).map_err(|e| {
        warn!("restaurant lookup hit a bad record: {e}");
        QueryError::NotFound(format!("Restaurant {id} could not be read."))
    })?;
    Ok(RestaurantDetail {
        restaurant,
        burgers: relations::served_burgers(store, id).await?,
    })
}

pub async fn partners(store: &Store, id: i64) -> Result<Vec<i64>, QueryError> {
    relations::partners(store, id).await
}

pub async fn coordinates(store: &Store) -> Result<Vec<Coordinate>, QueryError> {
    Ok(store
        .fetch_coordinates()
        .await?
        .into_iter()
        .map(Coordinate::from)
        .collect())
}

/// Coordinates of restaurants open at `now`. `offset` is the caller's raw hour offset.
pub async fn open_coordinates(
    store: &Store,
    offset: &str,
    now: NaiveDateTime,
) -> Result<Vec<Coordinate>, QueryError> {
    Ok(open_restaurants(store, Offset::parse(offset), now)
        .await?
        .into_iter()
        .map(Coordinate::from)
        .collect())
}

pub async fn search<S: AsRef<str>>(store: &Store, terms: &[S]) -> Result<Vec<SearchHit>, QueryError> {
    text_search::search(store, terms).await
}

#[derive(Clone, Debug)]
pub struct Client {
    store: Store,
}

impl Client {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn all_burgers(&self) -> Result<Vec<Burger>, QueryError> {
        all_burgers(&self.store).await
    }

    pub async fn burger(&self, id: i64) -> Result<BurgerDetail, QueryError> {
        burger(&self.store, id).await
    }

    pub async fn restaurants_for_burger(&self, id: i64) -> Result<Vec<i64>, QueryError> {
        restaurants_for_burger(&self.store, id).await
    }

    pub async fn all_restaurants(&self) -> Result<Vec<Restaurant>, QueryError> {
        all_restaurants(&self.store).await
    }

    pub async fn restaurant(&self, id: i64) -> Result<RestaurantDetail, QueryError> {
        restaurant(&self.store, id).await
    }

    pub async fn partners(&self, id: i64) -> Result<Vec<i64>, QueryError> {
        partners(&self.store, id).await
    }

    pub async fn coordinates(&self) -> Result<Vec<Coordinate>, QueryError> {
        coordinates(&self.store).await
    }

    /// Open coordinates against the local wall clock.
    pub async fn open_coordinates(&self, offset: &str) -> Result<Vec<Coordinate>, QueryError> {
        open_coordinates(&self.store, offset, Local::now().naive_local()).await
    }

    pub async fn search<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<SearchHit>, QueryError> {
        search(&self.store, terms).await
    }
}
