mod endpoint;
mod meal_db;

pub use endpoint::Endpoint;
pub use meal_db::MealDbClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{ApiMeal, AreaEntry, CategoryEntry};

/// The recipe API as seen by the controller.
///
/// `Ok(None)` means the response carried no result collection, which is
/// different from an empty list.
#[async_trait]
pub trait MealApi: Send + Sync {
    /// Meals whose name matches `term`
    async fn search(&self, term: &str) -> Result<Option<Vec<ApiMeal>>>;

    /// A single random meal
    async fn random(&self) -> Result<Option<Vec<ApiMeal>>>;

    /// Full record for `id`
    async fn lookup(&self, id: &str) -> Result<Option<Vec<ApiMeal>>>;

    async fn list_categories(&self) -> Result<Option<Vec<CategoryEntry>>>;

    async fn list_areas(&self) -> Result<Option<Vec<AreaEntry>>>;

    async fn filter_by_category(&self, category: &str) -> Result<Option<Vec<ApiMeal>>>;

    async fn filter_by_area(&self, area: &str) -> Result<Option<Vec<ApiMeal>>>;
}
