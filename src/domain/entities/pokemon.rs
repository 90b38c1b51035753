//! Pokemon record entity and its shape contract.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::contract::{ShapeCheck, Violations, join};

/// A single Pokemon as returned by the ID and name lookups.
///
/// Only the fields below cross the boundary; anything else PokeAPI sends is
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub base_experience: Option<i64>,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

/// A `{name, url}` reference to another PokeAPI resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSlot {
    pub slot: i64,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: NamedResource,
}

impl PokemonRecord {
    /// Validates an upstream `/pokemon/{id|name}` payload and reshapes it.
    ///
    /// # Errors
    ///
    /// Returns every field-level violation found when the payload does not
    /// conform.
    pub fn from_upstream(payload: &Value) -> Result<Self, Violations> {
        let mut check = ShapeCheck::new();

        let Some(object) = check.expect_object(payload, "") else {
            return check.finish(|| None);
        };

        let id = check.integer(object, "", "id");
        let name = check.string(object, "", "name");
        let height = check.integer(object, "", "height");
        let weight = check.integer(object, "", "weight");
        let base_experience = check.optional_integer(object, "", "base_experience");

        let sprites = check
            .object(object, "", "sprites")
            .map(|sprites| Sprites::read(&mut check, sprites, "sprites"));

        let types = check
            .list(object, "", "types")
            .map(|items| check.each(items, "types", TypeSlot::read));

        let stats = check
            .list(object, "", "stats")
            .map(|items| check.each(items, "stats", StatSlot::read));

        check.finish(|| {
            Some(Self {
                id: id?,
                name: name?,
                height: height?,
                weight: weight?,
                base_experience,
                sprites: sprites?,
                types: types?,
                stats: stats?,
            })
        })
    }
}

impl Sprites {
    fn read(check: &mut ShapeCheck, object: &Map<String, Value>, path: &str) -> Self {
        Self {
            front_default: check.optional_url(object, path, "front_default"),
            back_default: check.optional_url(object, path, "back_default"),
        }
    }
}

impl NamedResource {
    pub(crate) fn read(check: &mut ShapeCheck, object: &Map<String, Value>, path: &str) -> Option<Self> {
        let name = check.string(object, path, "name");
        let url = check.url(object, path, "url");

        Some(Self {
            name: name?,
            url: url?,
        })
    }

    fn read_field(
        check: &mut ShapeCheck,
        object: &Map<String, Value>,
        parent: &str,
        key: &str,
    ) -> Option<Self> {
        let nested = check.object(object, parent, key)?;
        Self::read(check, nested, &join(parent, key))
    }
}

impl TypeSlot {
    fn read(check: &mut ShapeCheck, item: &Value, path: &str) -> Option<Self> {
        let object = check.expect_object(item, path)?;
        let slot = check.integer(object, path, "slot");
        let kind = NamedResource::read_field(check, object, path, "type");

        Some(Self {
            slot: slot?,
            kind: kind?,
        })
    }
}

impl StatSlot {
    fn read(check: &mut ShapeCheck, item: &Value, path: &str) -> Option<Self> {
        let object = check.expect_object(item, path)?;
        let base_stat = check.integer(object, path, "base_stat");
        let effort = check.integer(object, path, "effort");
        let stat = NamedResource::read_field(check, object, path, "stat");

        Some(Self {
            base_stat: base_stat?,
            effort: effort?,
            stat: stat?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{NOT_NULL, NOT_URL, REQUIRED};
    use serde_json::json;

    fn bulbasaur() -> Value {
        json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "order": 1,
            "is_default": true,
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
                "back_default": null,
                "front_shiny": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/shiny/1.png"
            },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
            ],
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
                { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
            ]
        })
    }

    #[test]
    fn test_valid_payload_is_reshaped() {
        let record = PokemonRecord::from_upstream(&bulbasaur()).unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "bulbasaur");
        assert_eq!(record.base_experience, Some(64));
        assert_eq!(record.sprites.back_default, None);
        assert_eq!(record.types.len(), 2);
        assert_eq!(record.types[0].kind.name, "grass");
        assert_eq!(record.types[1].slot, 2);
        assert_eq!(record.stats[1].stat.name, "attack");
    }

    #[test]
    fn test_unknown_fields_are_dropped_on_output() {
        let record = PokemonRecord::from_upstream(&bulbasaur()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("order").is_none());
        assert!(json["sprites"].get("front_shiny").is_none());
        assert_eq!(json["types"][0]["type"]["name"], "grass");
        assert_eq!(json["sprites"]["back_default"], Value::Null);
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let mut payload = bulbasaur();
        let object = payload.as_object_mut().unwrap();
        object.remove("base_experience");
        object.insert("sprites".into(), json!({}));

        let record = PokemonRecord::from_upstream(&payload).unwrap();
        assert_eq!(record.base_experience, None);
        assert_eq!(record.sprites, Sprites::default());
    }

    #[test]
    fn test_all_violations_are_reported() {
        let mut payload = bulbasaur();
        let object = payload.as_object_mut().unwrap();
        object.remove("name");
        object.insert("weight".into(), Value::Null);
        object.insert(
            "types".into(),
            json!([{ "slot": 1, "type": { "name": "grass", "url": "nope" } }, { "type": {} }]),
        );

        let violations = PokemonRecord::from_upstream(&payload).unwrap_err();

        assert_eq!(violations.get("name").unwrap(), [REQUIRED]);
        assert_eq!(violations.get("weight").unwrap(), [NOT_NULL]);
        assert_eq!(violations.get("types[0].type.url").unwrap(), [NOT_URL]);
        assert_eq!(violations.get("types[1].slot").unwrap(), [REQUIRED]);
        assert_eq!(violations.get("types[1].type.name").unwrap(), [REQUIRED]);
        assert_eq!(violations.get("types[1].type.url").unwrap(), [REQUIRED]);
    }

    #[test]
    fn test_numeric_strings_and_integral_floats_are_coerced() {
        let mut payload = bulbasaur();
        payload["height"] = json!(7.0);
        payload["weight"] = json!("69");
        payload["types"][0]["slot"] = json!("1");

        let record = PokemonRecord::from_upstream(&payload).unwrap();
        assert_eq!(record.height, 7);
        assert_eq!(record.weight, 69);
        assert_eq!(record.types[0].slot, 1);
    }

    #[test]
    fn test_sprites_object_is_required() {
        let mut payload = bulbasaur();
        payload.as_object_mut().unwrap().remove("sprites");

        let violations = PokemonRecord::from_upstream(&payload).unwrap_err();
        assert_eq!(violations.get("sprites").unwrap(), [REQUIRED]);
    }

    #[test]
    fn test_non_object_payload() {
        let violations = PokemonRecord::from_upstream(&json!("pikachu")).unwrap_err();
        assert!(violations.get("non_field_errors").is_some());
    }
}
