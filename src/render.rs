//! HTML fragments for each region of the page.
//!
//! Every value coming from the API is escaped before it is interpolated.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::model::{FilterOption, MealDetail, MealSummary};
use crate::view::ViewState;

/// Marker placed in front of every ingredient line
pub const INGREDIENT_MARKER: &str = "🍴";

const NOT_AVAILABLE: &str = "N/A";

fn hidden_class(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

/// One card per meal, in the given order
pub fn render_grid(meals: &[MealSummary]) -> String {
    meals.iter().map(render_card).collect()
}

fn render_card(meal: &MealSummary) -> String {
    format!(
        r#"
    <div class="meal" data-meal-id="{id}">
      <img src="{thumb}" alt="{alt}">
      <div class="meal-info">
        <h3>{name}</h3>
        <div class="meal-category">{category}</div>
      </div>
    </div>"#,
        id = attr(&meal.id),
        thumb = attr(&meal.thumbnail_url),
        alt = attr(&meal.name),
        name = text(&meal.name),
        category = text(meal.category.as_deref().unwrap_or("")),
    )
}

/// Content of the detail panel
pub fn render_detail(meal: &MealDetail) -> String {
    let ingredients: String = meal
        .ingredients
        .iter()
        .map(|ingredient| format!("<li>{} {}</li>", INGREDIENT_MARKER, text(ingredient)))
        .collect();

    let video = meal
        .youtube_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" class="youtube-link"><i class="fab fa-youtube"></i> Watch on YouTube</a>"#,
                attr(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
    <img src="{thumb}" alt="{alt}" class="meal-details-img">
    <h2 class="meal-details-title">{name}</h2>
    <p><strong>Category:</strong> {category}</p>
    <p><strong>Area:</strong> {area}</p>
    <div class="meal-details-instructions">
      <h3>Instructions</h3>
      <p>{instructions}</p>
    </div>
    <div class="meal-details-ingredients">
      <h3>Ingredients</h3>
      <ul class="ingredients-list">
        {ingredients}
      </ul>
    </div>
    {video}
  "#,
        thumb = attr(&meal.thumbnail_url),
        alt = attr(&meal.name),
        name = text(&meal.name),
        category = text(meal.category.as_deref().unwrap_or(NOT_AVAILABLE)),
        area = text(meal.area.as_deref().unwrap_or(NOT_AVAILABLE)),
        instructions = text(&meal.instructions),
        ingredients = ingredients,
        video = video,
    )
}

pub fn render_heading(heading: &str) -> String {
    format!(r#"<h2 id="result-heading">{}</h2>"#, text(heading))
}

/// The shared error banner, hidden when there is nothing to show
pub fn render_error(message: Option<&str>) -> String {
    format!(
        r#"<div id="error-container" class="error-message{}">{}</div>"#,
        hidden_class(message.is_some()),
        text(message.unwrap_or(""))
    )
}

pub fn render_options(options: &[FilterOption]) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}">{}</option>"#,
                attr(&option.value),
                text(&option.label)
            )
        })
        .collect()
}

/// The whole page body for a state snapshot
pub fn render_page(state: &ViewState) -> String {
    let detail = state
        .detail
        .content
        .as_ref()
        .map(render_detail)
        .unwrap_or_default();

    format!(
        r#"<div class="container">
  <div class="search-container">
    <input type="text" id="search-input" placeholder="Search for recipes...">
    <button id="search-btn">Search</button>
    <button id="random-btn">Random</button>
  </div>
  <div class="filters">
    <select id="category-filter">{categories}</select>
    <select id="area-filter">{areas}</select>
  </div>
  {error}
  <div class="results">
    {heading}
    <div id="meals" class="meals-container">{grid}</div>
  </div>
  <div id="meal-details" class="meal-details{detail_hidden}">
    <button id="back-btn" class="back-btn">Back</button>
    <div class="meal-details-content">{detail}</div>
  </div>
</div>
"#,
        categories = render_options(&state.category_options),
        areas = render_options(&state.area_options),
        error = render_error(state.error.as_deref()),
        heading = render_heading(&state.heading),
        grid = render_grid(&state.grid),
        detail_hidden = hidden_class(state.detail.visible),
        detail = detail,
    )
}

/// Wraps [`render_page`] in a standalone HTML document
pub fn render_document(state: &ViewState) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>Recipe Finder</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        render_page(state)
    )
}
