use crate::api::models::{NewRecipe, RecipeCard, RecipeDetail, Source};
use crate::ui::theme::ThemeMode;

/// Which list the results pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Search,
    Collection,
}

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    AddForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Loading,
}

/// Banner message shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

/// Lifecycle of the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(RecipeDetail),
    Failed(String),
}

pub const ADD_FORM_FIELDS: usize = 4;

/// Input buffer for the create-recipe form. Field order: name,
/// ingredients (comma-separated), instructions, image URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
    pub field: usize,
}

impl AddForm {
    pub fn field_mut(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.name,
            1 => &mut self.ingredients,
            2 => &mut self.instructions,
            _ => &mut self.image,
        }
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % ADD_FORM_FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + ADD_FORM_FIELDS - 1) % ADD_FORM_FIELDS;
    }

    /// Validate and build the POST body. Name, ingredients, and
    /// instructions must be non-empty after trimming; the image falls
    /// back to the configured placeholder.
    pub fn build(&self, placeholder_image: &str) -> Option<NewRecipe> {
        let name = self.name.trim();
        let instructions = self.instructions.trim();
        let ingredients: Vec<String> = self
            .ingredients
            .split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect();

        if name.is_empty() || ingredients.is_empty() || instructions.is_empty() {
            return None;
        }

        let image = self.image.trim();
        Some(NewRecipe {
            name: name.to_string(),
            ingredients,
            instructions: instructions.to_string(),
            image: if image.is_empty() {
                placeholder_image.to_string()
            } else {
                image.to_string()
            },
        })
    }
}

#[derive(Debug)]
pub struct AppState {
    // Data
    pub search_results: Vec<RecipeCard>,
    pub collection: Vec<RecipeCard>,
    pub last_query: Option<String>,

    // Navigation
    pub view: ResultsView,
    pub cursor: usize,
    pub input_mode: InputMode,
    pub search_input: String,
    pub add_form: AddForm,

    // Overlay
    pub overlay: Option<DetailState>,
    pub detail_scroll: u16,
    pub detail_seq: u64,

    // UI chrome
    pub message: Option<Message>,
    pub theme_mode: ThemeMode,
    pub placeholder_image: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode, placeholder_image: String) -> Self {
        Self {
            search_results: Vec::new(),
            collection: Vec::new(),
            last_query: None,
            view: ResultsView::Collection,
            cursor: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            add_form: AddForm::default(),
            overlay: None,
            detail_scroll: 0,
            detail_seq: 0,
            message: None,
            theme_mode,
            placeholder_image,
            should_quit: false,
        }
    }

    pub fn visible_cards(&self) -> &[RecipeCard] {
        match self.view {
            ResultsView::Search => &self.search_results,
            ResultsView::Collection => &self.collection,
        }
    }

    pub fn selected_card(&self) -> Option<&RecipeCard> {
        self.visible_cards().get(self.cursor)
    }

    /// Id of the selected card when it is deletable, i.e. a local one.
    pub fn selected_local_id(&self) -> Option<String> {
        self.selected_card()
            .filter(|card| card.source == Source::Local)
            .map(|card| card.id.clone())
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_cards().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Start a new detail fetch; only a response carrying the returned
    /// sequence number may populate the overlay.
    pub fn begin_detail_fetch(&mut self) -> u64 {
        self.detail_seq += 1;
        self.overlay = Some(DetailState::Loading);
        self.detail_scroll = 0;
        self.detail_seq
    }

    /// True when the given sequence number belongs to the fetch the
    /// overlay is currently waiting on. Stale responses are dropped.
    pub fn detail_current(&self, seq: u64) -> bool {
        self.overlay.is_some() && seq == self.detail_seq
    }

    pub fn set_message(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.message = Some(Message {
            text: text.into(),
            kind,
        });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
