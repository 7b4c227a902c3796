#![allow(dead_code)]

use recipe_browser::{MealDbClient, RecipeBrowser, StalePolicy};
use serde_json::{json, Value};

pub fn browser(server: &mockito::Server) -> RecipeBrowser<MealDbClient> {
    RecipeBrowser::new(
        MealDbClient::with_base_url(server.url()),
        StalePolicy::LastWriteWins,
    )
}

pub fn summary_json(id: &str, name: &str, category: Option<&str>) -> Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
        "strCategory": category,
    })
}

pub fn meals_body(meals: Vec<Value>) -> String {
    json!({ "meals": meals }).to_string()
}

pub const NULL_MEALS: &str = r#"{"meals": null}"#;
