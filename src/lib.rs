pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use client::{Endpoint, MealApi, MealDbClient};
pub use self::config::BrowserConfig;
pub use controller::RecipeBrowser;
pub use error::BrowserError;
pub use model::{FilterKind, FilterOption, MealDetail, MealSummary};
pub use view::{StalePolicy, ViewState};

/// Creates a browser talking to the API described by `config`
///
/// # Example
/// ```no_run
/// # use recipe_browser::{connect, BrowserConfig};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let browser = connect(&BrowserConfig::default())?;
/// browser.load_filters().await;
/// browser.search("arrabiata").await;
/// println!("{}", recipe_browser::render::render_page(&browser.snapshot()));
/// # Ok(())
/// # }
/// ```
pub fn connect(config: &BrowserConfig) -> Result<RecipeBrowser<MealDbClient>, BrowserError> {
    let client = MealDbClient::new(config)?;
    Ok(RecipeBrowser::new(client, config.stale_policy))
}
