use chrono::{Datelike, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::QueryError;
use crate::hours::{is_open_now, Offset};
use crate::restaurants::Restaurant;
use crate::store::Store;

/// Restaurants open at `now` shifted by `offset`, in id order.
///
/// Today's weekday comes from `now` alone. Restaurants without a schedule for
/// today, or whose record does not decode, are left out.
pub async fn open_restaurants(
    store: &Store,
    offset: Offset,
    now: NaiveDateTime,
) -> Result<Vec<Restaurant>, QueryError> {
    let weekday = now.weekday();
    let mut open = Vec::new();
    for row in store.fetch_restaurants().await? {
        let restaurant = match Restaurant::try_from(row) {
            Ok(restaurant) => restaurant,
            Err(e) => {
                warn!("skipping restaurant: {e}");
                continue;
            }
        };
        let Some(today) = restaurant
            .hours_table
            .as_ref()
            .and_then(|table| table.for_weekday(weekday))
        else {
            debug!("restaurant {} has no hours for {weekday:?}", restaurant.id);
            continue;
        };
        if is_open_now(Some(today), offset, now) {
            open.push(restaurant);
        }
    }
    Ok(open)
}
