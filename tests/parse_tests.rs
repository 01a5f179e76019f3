use serde_json::json;

use mealdash::api::models::Source;
use mealdash::api::{catalog, collection};

// --- Catalog search ---

#[test]
fn test_null_meals_parses_as_empty() {
    let data = json!({ "meals": null });
    assert!(catalog::parse_search_results(&data).is_empty());
}

#[test]
fn test_missing_meals_field_parses_as_empty() {
    let data = json!({});
    assert!(catalog::parse_search_results(&data).is_empty());
}

#[test]
fn test_search_results_become_catalog_cards() {
    let data = json!({
        "meals": [
            {
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strMealThumb": "https://example.com/teriyaki.jpg"
            },
            {
                "idMeal": "52959",
                "strMeal": "Baked salmon with fennel & tomatoes",
                "strMealThumb": "https://example.com/salmon.jpg"
            }
        ]
    });

    let cards = catalog::parse_search_results(&data);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].source, Source::Catalog);
    assert_eq!(cards[0].id, "52772");
    assert_eq!(cards[0].name, "Teriyaki Chicken Casserole");
    assert_eq!(cards[0].thumb, "https://example.com/teriyaki.jpg");
}

#[test]
fn test_malformed_search_entries_are_skipped() {
    let data = json!({
        "meals": [
            { "strMeal": "No id here" },
            { "idMeal": "1", "strMeal": "Fine" }
        ]
    });
    let cards = catalog::parse_search_results(&data);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Fine");
}

// --- Catalog recipe ---

#[test]
fn test_ingredient_measure_pairs_are_joined() {
    let meal = json!({
        "idMeal": "1",
        "strMeal": "Bread",
        "strInstructions": "Bake.",
        "strIngredient1": "flour",
        "strMeasure1": "2 cups",
        "strIngredient2": "water",
        "strMeasure2": "1 cup"
    });

    let recipe = catalog::parse_recipe(&meal).unwrap();
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[0].display(), "2 cups flour");
    assert_eq!(recipe.ingredients[1].display(), "1 cup water");
}

#[test]
fn test_blank_ingredient_slots_are_skipped() {
    let meal = json!({
        "idMeal": "1",
        "strMeal": "Salt water",
        "strIngredient1": "salt",
        "strMeasure1": "",
        "strIngredient2": "",
        "strMeasure2": "2 cups",
        "strIngredient3": null,
        "strIngredient4": "  ",
        "strIngredient5": "water"
    });

    let recipe = catalog::parse_recipe(&meal).unwrap();
    let items: Vec<String> = recipe.ingredients.iter().map(|i| i.display()).collect();
    assert_eq!(items, vec!["salt", "water"]);
}

#[test]
fn test_ingredient_whitespace_is_trimmed() {
    let meal = json!({
        "idMeal": "1",
        "strMeal": "Bread",
        "strIngredient1": " flour ",
        "strMeasure1": " 2 cups "
    });

    let recipe = catalog::parse_recipe(&meal).unwrap();
    assert_eq!(recipe.ingredients[0].name, "flour");
    assert_eq!(recipe.ingredients[0].measure.as_deref(), Some("2 cups"));
}

#[test]
fn test_recipe_without_id_is_rejected() {
    let meal = json!({ "strMeal": "Nameless" });
    assert!(catalog::parse_recipe(&meal).is_none());
}

#[test]
fn test_optional_catalog_fields() {
    let meal = json!({
        "idMeal": "1",
        "strMeal": "Stew",
        "strCategory": "Beef",
        "strArea": "Irish",
        "strSource": "https://example.com/stew",
        "strYoutube": ""
    });

    let recipe = catalog::parse_recipe(&meal).unwrap();
    assert_eq!(recipe.category.as_deref(), Some("Beef"));
    assert_eq!(recipe.area.as_deref(), Some("Irish"));
    assert_eq!(recipe.source_url.as_deref(), Some("https://example.com/stew"));
    assert_eq!(recipe.youtube_url, None);
}

// --- Local recipes ---

#[test]
fn test_local_recipe_with_string_id() {
    let v = json!({
        "id": "abc1",
        "name": "My Soup",
        "ingredients": ["water", "salt"],
        "instructions": "boil",
        "image": "https://example.com/soup.png"
    });

    let recipe = collection::parse_recipe(&v).unwrap();
    assert_eq!(recipe.id, "abc1");
    assert_eq!(recipe.ingredients, vec!["water", "salt"]);
}

#[test]
fn test_local_recipe_with_numeric_id_is_normalized() {
    let v = json!({
        "id": 7,
        "name": "My Soup",
        "ingredients": [],
        "instructions": "",
        "image": ""
    });

    let recipe = collection::parse_recipe(&v).unwrap();
    assert_eq!(recipe.id, "7");
}

#[test]
fn test_local_recipe_without_name_is_rejected() {
    let v = json!({ "id": "1", "ingredients": [] });
    assert!(collection::parse_recipe(&v).is_none());
}
