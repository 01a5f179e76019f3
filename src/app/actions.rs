use crate::api::models::{LocalRecipe, NewRecipe, RecipeCard, RecipeDetail, Source};

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    Select,
    Back,
    SwitchView,
    Refresh,
    RandomRecipe,
    OpenInBrowser,
    ToggleTheme,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    OpenAddForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    SubmitForm,
    DeleteSelected,
    DataLoaded(DataPayload),
    LoadError(FetchError),
    Quit,
}

/// Successful results reported back from background requests.
#[derive(Debug)]
pub enum DataPayload {
    SearchResults {
        query: String,
        cards: Vec<RecipeCard>,
    },
    Collection(Vec<LocalRecipe>),
    Detail {
        seq: u64,
        detail: RecipeDetail,
    },
    Created,
    Deleted,
}

/// Failed requests, already reduced to user-facing message text at the
/// spawn site; the variant decides where the message lands.
#[derive(Debug)]
pub enum FetchError {
    Search(String),
    Collection(String),
    Detail { seq: u64, message: String },
    Create(String),
    Delete(String),
}

#[derive(Debug, PartialEq)]
pub enum SideEffect {
    SearchCatalog(String),
    FetchDetail { seq: u64, source: Source, id: String },
    FetchRandom { seq: u64 },
    LoadCollection,
    CreateRecipe(NewRecipe),
    DeleteRecipe(String),
    OpenUrl(String),
}
