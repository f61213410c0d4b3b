use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MAX_SEARCH_TERMS, SEARCH_WILDCARD};
use crate::error::QueryError;
use crate::relations;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Join terms into a single LIKE pattern: `["a", "b"]` becomes `%a%b%`.
///
/// No terms yields `%%`, which matches everything.
pub fn search_pattern<S: AsRef<str>>(terms: &[S]) -> String {
    let joined = terms
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SEARCH_WILDCARD);
    format!("{SEARCH_WILDCARD}{joined}{SEARCH_WILDCARD}")
}

/// Direct name/address matches first, then venues reached through a matching burger. Each venue appears once
pub async fn search<S: AsRef<str>>(store: &Store, terms: &[S]) -> Result<Vec<SearchHit>, QueryError> {
    if terms.len() > MAX_SEARCH_TERMS {
        return Err(QueryError::InvalidQuery(format!(
            "at most {MAX_SEARCH_TERMS} search terms are allowed, got {}",
            terms.len()
        )));
    }
    if terms.is_empty() {
        debug!("empty search matches every restaurant");
    }
    let pattern = search_pattern(terms);
    debug!("searching with pattern {pattern}");

    let mut seen = HashSet::new();
    let mut hits = Vec::new();

    for row in store.fetch_coordinates_matching(&pattern).await? {
        if seen.insert(row.id) {
            hits.push(SearchHit {
                id: row.id,
                latitude: row.latitude,
                longitude: row.longitude,
            });
        }
    }

    for burger_id in store.fetch_burger_ids_matching(&pattern).await? {
        for restaurant_id in relations::serving_restaurants(store, burger_id).await? {
            if seen.contains(&restaurant_id) {
                continue;
            }
            let row = store.fetch_coordinate(restaurant_id).await?.ok_or(
                QueryError::DanglingReference {
                    burger_id,
                    restaurant_id,
                },
            )?;
            seen.insert(row.id);
            hits.push(SearchHit {
                id: row.id,
                latitude: row.latitude,
                longitude: row.longitude,
            });
        }
    }

    Ok(hits)
}
