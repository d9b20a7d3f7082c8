//! JSON REST API for recipes.
//!
//! Exposes an axum [`Router`] backed by any [`recipes_core::store::RecipeStore`].
//! Transport concerns (listening, tracing layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = recipes_api::api_router(Arc::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod recipes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use recipes_core::store::RecipeStore;

pub use error::ApiError;

use error::not_found;

/// Build a fully-materialised API router for `store`.
///
/// Both paths also answer with a single trailing slash. Anything else,
/// including an unsupported method on a known path, is answered with
/// `404 {"message":"Not Found"}`.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecipeStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let collection = post(recipes::create::<S>)
    .get(recipes::list::<S>)
    .fallback(not_found);
  let item = get(recipes::get_one::<S>)
    .patch(recipes::update::<S>)
    .delete(recipes::delete::<S>)
    .fallback(not_found);

  Router::new()
    .route("/recipes", collection.clone())
    .route("/recipes/", collection)
    .route("/recipes/{id}", item.clone())
    .route("/recipes/{id}/", item)
    .fallback(not_found)
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
