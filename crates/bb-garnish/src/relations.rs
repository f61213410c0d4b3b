use tracing::debug;

use crate::error::QueryError;
use crate::store::Store;

/// Restaurants serving `burger_id`, ascending. Empty when nothing serves it.
pub async fn serving_restaurants(store: &Store, burger_id: i64) -> Result<Vec<i64>, QueryError> {
    Ok(store
        .fetch_serves_for_burger(burger_id)
        .await?
        .into_iter()
        .map(|row| row.restaurant_id)
        .collect())
}

/// Burgers served at `restaurant_id`, ascending. Empty when it serves nothing.
pub async fn served_burgers(store: &Store, restaurant_id: i64) -> Result<Vec<i64>, QueryError> {
    Ok(store
        .fetch_serves_for_restaurant(restaurant_id)
        .await?
        .into_iter()
        .map(|row| row.burger_id)
        .collect())
}

pub async fn restaurants_for_burger(store: &Store, burger_id: i64) -> Result<Vec<i64>, QueryError> {
    let restaurants = serving_restaurants(store, burger_id).await?;
    if restaurants.is_empty() {
        return Err(QueryError::NotFound(
            "No restaurants found for this burger.".to_string(),
        ));
    }
    Ok(restaurants)
}

pub async fn burgers_for_restaurant(
    store: &Store,
    restaurant_id: i64,
) -> Result<Vec<i64>, QueryError> {
    let burgers = served_burgers(store, restaurant_id).await?;
    if burgers.is_empty() {
        return Err(QueryError::NotFound(
            "No burgers found for this restaurant.".to_string(),
        ));
    }
    Ok(burgers)
}

/// Restaurants that team up with `restaurant_id` on a burger.
///
/// When the restaurant serves several burgers only the lowest burger id is
/// considered. The result never contains `restaurant_id` itself.
pub async fn partners(store: &Store, restaurant_id: i64) -> Result<Vec<i64>, QueryError> {
    let burger_id = served_burgers(store, restaurant_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| QueryError::NotFound("The given ID does not exist.".to_string()))?;
    debug!("partners of restaurant {restaurant_id} via burger {burger_id}");
    Ok(serving_restaurants(store, burger_id)
        .await?
        .into_iter()
        .filter(|id| *id != restaurant_id)
        .collect())
}
