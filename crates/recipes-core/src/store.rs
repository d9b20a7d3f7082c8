//! The `RecipeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `recipes-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend, so
//! handlers can be exercised against any substitute store.

use std::future::Future;

use crate::recipe::{NewRecipe, Recipe};

/// Abstraction over a recipe store backend.
///
/// Ids arrive exactly as they appear in the request path and are handed to
/// the backend verbatim; matching them against stored rows is the backend's
/// business. Lookups that match nothing return `None` rather than an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecipeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a recipe, stamping `created_at` and `updated_at` with the store's
  /// current time, and return the row as re-read by its new id.
  fn create(
    &self,
    input: NewRecipe,
  ) -> impl Future<Output = Result<Recipe, Self::Error>> + Send + '_;

  /// All recipes, in store order.
  fn list(&self) -> impl Future<Output = Result<Vec<Recipe>, Self::Error>> + Send + '_;

  /// Retrieve a recipe by id. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + 'a;

  /// Rewrite all five fields of a recipe and bump `updated_at`.
  ///
  /// Returns `None` when the update touched zero rows; otherwise the row as
  /// re-read after the update.
  fn update<'a>(
    &'a self,
    id: &'a str,
    input: NewRecipe,
  ) -> impl Future<Output = Result<Option<Recipe>, Self::Error>> + Send + 'a;

  /// Hard-delete a recipe. Returns the number of rows removed.
  fn delete<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;
}
