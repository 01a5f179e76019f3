use serde::Serialize;

/// Where a recipe came from. Identity is always the (source, id) pair;
/// catalog and local ids live in separate namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Catalog,
    Local,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Catalog => write!(f, "catalog"),
            Source::Local => write!(f, "local"),
        }
    }
}

/// One (ingredient, measure) pair from a catalog recipe. The measure is
/// optional; the catalog leaves it blank for things like "salt to taste".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Ingredient {
    /// "2 cups flour" when a measure is present, "flour" otherwise.
    pub fn display(&self) -> String {
        match &self.measure {
            Some(m) => format!("{} {}", m, self.name),
            None => self.name.clone(),
        }
    }
}

/// A full recipe from the remote catalog, read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecipe {
    pub id: String,
    pub name: String,
    pub thumb: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
    pub source_url: Option<String>,
    pub youtube_url: Option<String>,
}

/// A user-owned recipe stored in the local backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalRecipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
}

/// POST body for creating a local recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
}

/// Tagged union consumed by the detail renderer, so it can match
/// exhaustively instead of probing for field presence.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeDetail {
    Catalog(CatalogRecipe),
    Local(LocalRecipe),
}

impl RecipeDetail {
    pub fn name(&self) -> &str {
        match self {
            RecipeDetail::Catalog(r) => &r.name,
            RecipeDetail::Local(r) => &r.name,
        }
    }

    pub fn source(&self) -> Source {
        match self {
            RecipeDetail::Catalog(_) => Source::Catalog,
            RecipeDetail::Local(_) => Source::Local,
        }
    }

    pub fn instructions(&self) -> &str {
        match self {
            RecipeDetail::Catalog(r) => &r.instructions,
            RecipeDetail::Local(r) => &r.instructions,
        }
    }

    /// URL worth opening in a browser, if the record carries one.
    /// Only catalog recipes do; the source page wins over the video.
    pub fn link(&self) -> Option<&str> {
        match self {
            RecipeDetail::Catalog(r) => r
                .source_url
                .as_deref()
                .or(r.youtube_url.as_deref()),
            RecipeDetail::Local(_) => None,
        }
    }
}

/// List-item projection shown in the results grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub source: Source,
    pub id: String,
    pub name: String,
    pub thumb: String,
}

impl From<&LocalRecipe> for RecipeCard {
    fn from(r: &LocalRecipe) -> Self {
        RecipeCard {
            source: Source::Local,
            id: r.id.clone(),
            name: r.name.clone(),
            thumb: r.image.clone(),
        }
    }
}
