use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure slots on an API record
pub const INGREDIENT_SLOTS: usize = 20;

/// Lightweight recipe record shown as a card in the result grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
}

/// Full recipe record shown in the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: String,
    /// "measure name" entries in slot order, empty slots skipped
    pub ingredients: Vec<String>,
    pub youtube_url: Option<String>,
}

/// One entry of a filter drop-down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            label: name,
        }
    }

    /// The "no filter applied" entry every drop-down starts with
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// The two drop-downs a result list can be narrowed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Category,
    Area,
}

impl FilterKind {
    /// Label of the drop-down's placeholder option
    pub fn placeholder_label(&self) -> &'static str {
        match self {
            FilterKind::Category => "All Categories",
            FilterKind::Area => "All Areas",
        }
    }

    /// Heading prefix shown above filtered results
    pub fn heading_label(&self) -> &'static str {
        match self {
            FilterKind::Category => "Category",
            FilterKind::Area => "Cuisine",
        }
    }

    /// Query key used by the list and filter endpoints
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterKind::Category => "c",
            FilterKind::Area => "a",
        }
    }
}

/// Envelope every endpoint answers with; `meals` is `null` when nothing matched
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub meals: Option<Vec<T>>,
}

/// Meal record as returned by the API
///
/// Search, lookup and random return the full record, filter endpoints only
/// carry id, name and thumbnail.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    /// strIngredientN / strMeasureN and any field we do not model
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ApiMeal {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Ingredient name in slot `index` (1-based), `None` when blank
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.slot("strIngredient", index)
    }

    /// Measure in slot `index` (1-based), `None` when blank
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.slot("strMeasure", index)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AreaEntry {
    #[serde(rename = "strArea")]
    pub name: String,
}

impl From<CategoryEntry> for FilterOption {
    fn from(entry: CategoryEntry) -> Self {
        FilterOption::new(entry.name)
    }
}

impl From<AreaEntry> for FilterOption {
    fn from(entry: AreaEntry) -> Self {
        FilterOption::new(entry.name)
    }
}

/// Treat empty strings and absent values the same way
fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Builds the ingredient list from the numbered slots, keeping slot order
/// and skipping every slot without an ingredient name.
pub fn extract_ingredients(meal: &ApiMeal) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|i| {
            let name = meal.ingredient(i)?;
            Some(match meal.measure(i) {
                Some(measure) => format!("{} {}", measure, name),
                None => name.to_string(),
            })
        })
        .collect()
}

impl From<&ApiMeal> for MealSummary {
    fn from(meal: &ApiMeal) -> Self {
        MealSummary {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail.clone().unwrap_or_default(),
            category: non_empty(meal.category.as_ref()),
        }
    }
}

impl From<ApiMeal> for MealSummary {
    fn from(meal: ApiMeal) -> Self {
        MealSummary::from(&meal)
    }
}

impl From<&ApiMeal> for MealDetail {
    fn from(meal: &ApiMeal) -> Self {
        MealDetail {
            id: meal.id.clone(),
            name: meal.name.clone(),
            thumbnail_url: meal.thumbnail.clone().unwrap_or_default(),
            category: non_empty(meal.category.as_ref()),
            area: non_empty(meal.area.as_ref()),
            instructions: meal.instructions.clone().unwrap_or_default(),
            ingredients: extract_ingredients(meal),
            youtube_url: non_empty(meal.youtube.as_ref()),
        }
    }
}

impl From<ApiMeal> for MealDetail {
    fn from(meal: ApiMeal) -> Self {
        MealDetail::from(&meal)
    }
}
