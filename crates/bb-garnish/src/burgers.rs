use serde::{Deserialize, Serialize};

use crate::records::BurgerRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burger {
    pub id: i64,
    pub name: String,
    pub quote: String,
    pub ingredients: String,
    pub url_suffix: String,
}

// Burgers carry no structured columns, so decoding cannot fail.
impl From<BurgerRow> for Burger {
    fn from(row: BurgerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quote: row.quote.unwrap_or_default(),
            ingredients: row.ingredients.unwrap_or_default(),
            url_suffix: row.url_suffix.unwrap_or_default(),
        }
    }
}

impl From<&Burger> for BurgerRow {
    fn from(burger: &Burger) -> Self {
        Self {
            id: burger.id,
            name: burger.name.clone(),
            quote: Some(burger.quote.clone()),
            ingredients: Some(burger.ingredients.clone()),
            url_suffix: Some(burger.url_suffix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_from_row_fills_missing_text() {
        let row = BurgerRow {
            id: 4,
            name: "The Big Dill".to_string(),
            quote: None,
            ingredients: Some("pickles, beef".to_string()),
            url_suffix: None,
        };

        let burger = Burger::from(row);

        assert_eq!(burger.id, 4);
        assert_eq!(burger.quote, "");
        assert_eq!(burger.ingredients, "pickles, beef");
        assert_eq!(burger.url_suffix, "");
    }
}
