use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::models::{CatalogRecipe, Ingredient, RecipeCard, Source};

/// The catalog exposes up to this many (ingredient, measure) slots per
/// recipe, most of them blank.
const MAX_INGREDIENT_SLOTS: usize = 20;

/// Client for the third-party recipe catalog (TheMealDB-compatible).
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().user_agent("mealdash").build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, req: reqwest::RequestBuilder) -> ApiResult<Value> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        Ok(resp.json().await?)
    }

    /// Free-text search. A null `meals` field means no matches, which is
    /// an empty result rather than an error.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<RecipeCard>> {
        let url = format!("{}/search.php", self.base_url);
        let data = self
            .get_json(self.client.get(&url).query(&[("s", query)]))
            .await?;

        let cards = parse_search_results(&data);
        debug!(query = query, count = cards.len(), "Catalog search complete");
        Ok(cards)
    }

    /// Look up one recipe by id. The response is an array-wrapped
    /// singleton; an empty array means the id is unknown.
    pub async fn lookup(&self, id: &str) -> ApiResult<CatalogRecipe> {
        let url = format!("{}/lookup.php", self.base_url);
        let data = self
            .get_json(self.client.get(&url).query(&[("i", id)]))
            .await?;

        let recipe = data["meals"]
            .as_array()
            .and_then(|meals| meals.first())
            .and_then(parse_recipe)
            .ok_or_else(|| ApiError::Decode(format!("no recipe with id {id}")))?;

        debug!(id = id, name = %recipe.name, "Catalog lookup complete");
        Ok(recipe)
    }

    /// Fetch a single random recipe.
    pub async fn random(&self) -> ApiResult<CatalogRecipe> {
        let url = format!("{}/random.php", self.base_url);
        let data = self.get_json(self.client.get(&url)).await?;

        let recipe = data["meals"]
            .as_array()
            .and_then(|meals| meals.first())
            .and_then(parse_recipe)
            .ok_or_else(|| ApiError::Decode("no recipe in random response".into()))?;

        debug!(name = %recipe.name, "Random recipe fetched");
        Ok(recipe)
    }
}

/// Project a search response into result cards. Tolerates a null or
/// missing `meals` field and skips malformed entries.
pub fn parse_search_results(data: &Value) -> Vec<RecipeCard> {
    let Some(meals) = data["meals"].as_array() else {
        return Vec::new();
    };

    meals
        .iter()
        .filter_map(|meal| {
            let id = meal["idMeal"].as_str()?;
            let name = meal["strMeal"].as_str()?;
            Some(RecipeCard {
                source: Source::Catalog,
                id: id.to_string(),
                name: name.to_string(),
                thumb: meal["strMealThumb"].as_str().unwrap_or("").to_string(),
            })
        })
        .collect()
}

/// Parse one full catalog record. The indexed `strIngredientN` /
/// `strMeasureN` fields are walked in order; slots with a blank
/// ingredient are dropped, and blank measures become `None`.
pub fn parse_recipe(meal: &Value) -> Option<CatalogRecipe> {
    let id = meal["idMeal"].as_str()?;
    let name = meal["strMeal"].as_str()?;

    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENT_SLOTS {
        let ingredient = meal[format!("strIngredient{i}")]
            .as_str()
            .map(str::trim)
            .unwrap_or("");
        if ingredient.is_empty() {
            continue;
        }
        let measure = meal[format!("strMeasure{i}")]
            .as_str()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        ingredients.push(Ingredient {
            name: ingredient.to_string(),
            measure,
        });
    }

    Some(CatalogRecipe {
        id: id.to_string(),
        name: name.to_string(),
        thumb: meal["strMealThumb"].as_str().unwrap_or("").to_string(),
        category: non_empty(&meal["strCategory"]),
        area: non_empty(&meal["strArea"]),
        instructions: meal["strInstructions"].as_str().unwrap_or("").to_string(),
        ingredients,
        source_url: non_empty(&meal["strSource"]),
        youtube_url: non_empty(&meal["strYoutube"]),
    })
}

fn non_empty(v: &Value) -> Option<String> {
    v.as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
