use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use super::models::{LocalRecipe, NewRecipe};

/// Client for the local CRUD backend holding user-created recipes.
#[derive(Clone)]
pub struct CollectionClient {
    client: Client,
    base_url: String,
}

impl CollectionClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().user_agent("mealdash").build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn recipes_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    async fn check(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        Ok(resp)
    }

    pub async fn list(&self) -> ApiResult<Vec<LocalRecipe>> {
        let resp = self.client.get(self.recipes_url()).send().await?;
        let data: Value = Self::check(resp).await?.json().await?;

        let recipes: Vec<LocalRecipe> = data
            .as_array()
            .ok_or_else(|| ApiError::Decode("expected a recipe array".into()))?
            .iter()
            .filter_map(parse_recipe)
            .collect();

        debug!(count = recipes.len(), "Fetched local recipes");
        Ok(recipes)
    }

    /// Fetch one local recipe. Unlike the catalog, the backend returns
    /// the object directly rather than array-wrapped.
    pub async fn get(&self, id: &str) -> ApiResult<LocalRecipe> {
        let url = format!("{}/{}", self.recipes_url(), id);
        let resp = self.client.get(&url).send().await?;
        let data: Value = Self::check(resp).await?.json().await?;

        parse_recipe(&data).ok_or_else(|| ApiError::Decode(format!("malformed recipe {id}")))
    }

    pub async fn create(&self, recipe: &NewRecipe) -> ApiResult<()> {
        let resp = self
            .client
            .post(self.recipes_url())
            .json(recipe)
            .send()
            .await?;
        Self::check(resp).await?;
        debug!(name = %recipe.name, "Created local recipe");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = format!("{}/{}", self.recipes_url(), id);
        let resp = self.client.delete(&url).send().await?;
        Self::check(resp).await?;
        debug!(id = id, "Deleted local recipe");
        Ok(())
    }
}

/// Parse one backend record. Ids arrive as JSON strings or numbers
/// depending on how the entry was created; both normalize to `String`.
pub fn parse_recipe(v: &Value) -> Option<LocalRecipe> {
    let id = match &v["id"] {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let name = v["name"].as_str()?;

    let ingredients = v["ingredients"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|i| i.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Some(LocalRecipe {
        id,
        name: name.to_string(),
        ingredients,
        instructions: v["instructions"].as_str().unwrap_or("").to_string(),
        image: v["image"].as_str().unwrap_or("").to_string(),
    })
}
