use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::RecipeError;

/// Number of positional ingredient/measure slots a meal record carries
pub const INGREDIENT_SLOTS: usize = 20;

/// A trimmed, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input and reject it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, RecipeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecipeError::EmptyQuery);
        }
        Ok(SearchQuery(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minimal recipe record shown as a card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
}

/// Full recipe record shown in the overlay
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Slot {
    ingredient: Option<String>,
    measure: Option<String>,
}

/// One scanned ingredient slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub measure: Option<String>,
    pub name: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measure {
            Some(measure) => write!(f, "{} {}", measure, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl RecipeDetail {
    /// Ingredients in slot order.
    ///
    /// Slots are assumed contiguous: the scan stops at the first slot whose
    /// trimmed ingredient is empty, so anything after a gap is dropped.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.slots
            .iter()
            .map_while(|slot| {
                let name = non_blank(slot.ingredient.as_deref())?;
                Some(Ingredient {
                    measure: non_blank(slot.measure.as_deref()).map(str::to_string),
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

/// Response envelope shared by the search, random and lookup endpoints
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// A missing or null list means "no records"
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Wire shape of a meal record before narrowing
#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    thumbnail: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMeal> for RecipeDetail {
    fn from(raw: RawMeal) -> Self {
        let text_field = |key: String| raw.rest.get(&key).and_then(Value::as_str).map(str::to_string);

        let slots = (1..=INGREDIENT_SLOTS)
            .map(|n| Slot {
                ingredient: text_field(format!("strIngredient{}", n)),
                measure: text_field(format!("strMeasure{}", n)),
            })
            .collect();

        RecipeDetail {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail,
            category: present(raw.category),
            area: present(raw.area),
            instructions: present(raw.instructions),
            slots,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: Value) -> RecipeDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_search_query_trims() {
        let query = SearchQuery::parse("  chicken curry \n").unwrap();
        assert_eq!(query.as_str(), "chicken curry");
        assert_eq!(query.to_string(), "chicken curry");
    }

    #[test]
    fn test_search_query_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(
                SearchQuery::parse(raw),
                Err(RecipeError::EmptyQuery)
            ));
        }
    }

    #[test]
    fn test_summary_ignores_extra_fields() {
        let summary: RecipeSummary = serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strCategory": "Chicken",
            "strTags": "Meat,Casserole"
        }))
        .unwrap();

        assert_eq!(summary.id, "52772");
        assert_eq!(summary.name, "Teriyaki Chicken Casserole");
        assert!(summary.thumbnail.ends_with("wvpsxx1468256321.jpg"));
    }

    #[test]
    fn test_summary_null_thumbnail() {
        let summary: RecipeSummary = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Toast",
            "strMealThumb": null
        }))
        .unwrap();
        assert_eq!(summary.thumbnail, "");
    }

    #[test]
    fn test_envelope_null_meals() {
        let envelope: MealsEnvelope<RecipeSummary> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.into_meals().is_empty());

        let envelope: MealsEnvelope<RecipeSummary> = serde_json::from_str("{}").unwrap();
        assert!(envelope.into_meals().is_empty());
    }

    #[test]
    fn test_envelope_rejects_non_list() {
        let result: Result<MealsEnvelope<RecipeSummary>, _> =
            serde_json::from_str(r#"{"meals": "Invalid ID"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ingredients_stop_at_first_gap() {
        let recipe = detail(json!({
            "idMeal": "1",
            "strMeal": "Cake",
            "strMealThumb": "cake.jpg",
            "strIngredient1": "Flour",
            "strIngredient2": "",
            "strIngredient3": "Sugar",
            "strMeasure1": "",
            "strMeasure3": "100g"
        }));

        let ingredients = recipe.ingredients();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].name, "Flour");
        assert_eq!(ingredients[0].measure, None);
        assert_eq!(ingredients[0].to_string(), "Flour");
    }

    #[test]
    fn test_ingredients_trim_and_pair_measures() {
        let recipe = detail(json!({
            "idMeal": "2",
            "strMeal": "Pancakes",
            "strMealThumb": "p.jpg",
            "strIngredient1": " Flour ",
            "strMeasure1": " 100g ",
            "strIngredient2": "Eggs",
            "strMeasure2": "2",
            "strIngredient3": "   ",
            "strMeasure3": "300ml"
        }));

        let rendered: Vec<String> = recipe.ingredients().iter().map(|i| i.to_string()).collect();
        assert_eq!(rendered, vec!["100g Flour", "2 Eggs"]);
    }

    #[test]
    fn test_ingredients_null_slots() {
        let recipe = detail(json!({
            "idMeal": "3",
            "strMeal": "Water",
            "strMealThumb": "w.jpg",
            "strIngredient1": null,
            "strMeasure1": null
        }));
        assert!(recipe.ingredients().is_empty());
    }

    #[test]
    fn test_ingredients_all_twenty_slots() {
        let mut value = json!({
            "idMeal": "4",
            "strMeal": "Everything Stew",
            "strMealThumb": "s.jpg"
        });
        for n in 1..=21 {
            value[format!("strIngredient{}", n)] = json!(format!("Item {}", n));
        }

        let ingredients = detail(value).ingredients();
        assert_eq!(ingredients.len(), INGREDIENT_SLOTS);
        assert_eq!(ingredients.last().unwrap().name, "Item 20");
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let recipe = detail(json!({
            "idMeal": "5",
            "strMeal": "Mystery",
            "strMealThumb": "m.jpg",
            "strCategory": "",
            "strArea": null,
            "strInstructions": "  "
        }));

        assert_eq!(recipe.category, None);
        assert_eq!(recipe.area, None);
        assert_eq!(recipe.instructions, None);
    }
}
