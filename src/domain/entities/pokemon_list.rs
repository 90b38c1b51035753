//! Paginated Pokemon listing.

use serde::Serialize;
use serde_json::Value;

use super::pokemon::NamedResource;
use crate::domain::contract::{ShapeCheck, Violations};

/// One entry of a listing page: the Pokemon name and its detail URL.
pub type PokemonListItem = NamedResource;

/// A page of the upstream `/pokemon` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonListPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonListItem>,
}

impl PokemonListPage {
    /// Validates an upstream `/pokemon?limit=&offset=` payload.
    ///
    /// # Errors
    ///
    /// Returns the field-level violations when the payload does not conform.
    pub fn from_upstream(payload: &Value) -> Result<Self, Violations> {
        let mut check = ShapeCheck::new();

        let Some(object) = check.expect_object(payload, "") else {
            return check.finish(|| None);
        };

        let count = check.non_negative_integer(object, "", "count");
        let next = check.optional_url(object, "", "next");
        let previous = check.optional_url(object, "", "previous");

        let results = check.list(object, "", "results").map(|items| {
            check.each(items, "results", |check, item, path| {
                let entry = check.expect_object(item, path)?;
                PokemonListItem::read(check, entry, path)
            })
        });

        check.finish(|| {
            Some(Self {
                count: count?,
                next,
                previous,
                results: results?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{NOT_BLANK, NOT_NEGATIVE};
    use serde_json::json;

    fn first_page() -> Value {
        json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        })
    }

    #[test]
    fn test_valid_page() {
        let page = PokemonListPage::from_upstream(&first_page()).unwrap();

        assert_eq!(page.count, 1302);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results[1].name, "ivysaur");
    }

    #[test]
    fn test_missing_next_and_previous_are_accepted() {
        let payload = json!({ "count": 0, "results": [] });

        let page = PokemonListPage::from_upstream(&payload).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut payload = first_page();
        payload["count"] = json!(-1);

        let violations = PokemonListPage::from_upstream(&payload).unwrap_err();
        assert_eq!(violations.get("count").unwrap(), [NOT_NEGATIVE]);
    }

    #[test]
    fn test_bad_result_entries_are_indexed() {
        let mut payload = first_page();
        payload["results"] = json!([
            { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
            { "name": "", "url": "https://pokeapi.co/api/v2/pokemon/2/" },
            "venusaur"
        ]);

        let violations = PokemonListPage::from_upstream(&payload).unwrap_err();

        assert_eq!(violations.get("results[1].name").unwrap(), [NOT_BLANK]);
        assert!(violations.get("results[2]").is_some());
        assert_eq!(violations.len(), 2);
    }
}
