//! Simple API usage
//!
//! Loads the filter drop-downs, runs a search, opens the first result and
//! prints the rendered page.

use recipe_browser::render::render_page;
use recipe_browser::{connect, BrowserConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let browser = connect(&BrowserConfig::default())?;

    browser.load_filters().await;
    browser.search("arrabiata").await;

    let state = browser.snapshot();
    println!("{}", state.heading);
    for meal in &state.grid {
        println!("- {} ({})", meal.name, meal.id);
    }

    if browser.open_card(0).await {
        println!("{}", render_page(&browser.snapshot()));
    }

    Ok(())
}
