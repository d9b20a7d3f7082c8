//! [`SqliteStore`] — the SQLite implementation of [`RecipeStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use recipes_core::{
  recipe::{NewRecipe, Recipe},
  store::RecipeStore,
};

use crate::{
  Result,
  encode::{RawRecipe, encode_cost},
  schema::{SCHEMA, SELECT_RECIPE},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A recipe store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone funnels its statements through the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, initialising the default schema if
  /// the file did not exist yet.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::open_with_schema(path, SCHEMA).await
  }

  /// Like [`open`](Self::open), but a freshly created file is initialised
  /// with `schema` instead of the built-in script.
  pub async fn open_with_schema(path: impl AsRef<Path>, schema: &str) -> Result<Self> {
    let path = path.as_ref();
    let fresh = !path.exists();

    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    if fresh {
      tracing::info!(path = %path.display(), "initialising schema for new store");
      store.init_schema(schema).await?;
    }
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema(SCHEMA).await?;
    Ok(store)
  }

  async fn init_schema(&self, schema: &str) -> Result<()> {
    let schema = schema.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&schema)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecipeStore impl ────────────────────────────────────────────────────────

impl RecipeStore for SqliteStore {
  type Error = crate::Error;

  async fn create(&self, input: NewRecipe) -> Result<Recipe> {
    let cost = encode_cost(&input.cost);

    let raw: RawRecipe = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO recipes (
             title, making_time, serves, ingredients, cost, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'), datetime('now'))",
          rusqlite::params![
            input.title,
            input.making_time,
            input.serves,
            input.ingredients,
            cost,
          ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(
          &format!("{SELECT_RECIPE} WHERE id = ?1"),
          rusqlite::params![id],
          RawRecipe::from_row,
        )?)
      })
      .await?;

    raw.into_recipe()
  }

  async fn list(&self) -> Result<Vec<Recipe>> {
    let raws: Vec<RawRecipe> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SELECT_RECIPE)?;
        let rows = stmt
          .query_map([], RawRecipe::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecipe::into_recipe).collect()
  }

  async fn get(&self, id: &str) -> Result<Option<Recipe>> {
    let id = id.to_owned();

    let raw: Option<RawRecipe> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{SELECT_RECIPE} WHERE id = ?1"),
              rusqlite::params![id],
              RawRecipe::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecipe::into_recipe).transpose()
  }

  async fn update(&self, id: &str, input: NewRecipe) -> Result<Option<Recipe>> {
    let id = id.to_owned();
    let cost = encode_cost(&input.cost);

    let raw: Option<RawRecipe> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE recipes
           SET title = ?1, making_time = ?2, serves = ?3, ingredients = ?4, cost = ?5,
               updated_at = datetime('now')
           WHERE id = ?6",
          rusqlite::params![
            input.title,
            input.making_time,
            input.serves,
            input.ingredients,
            cost,
            id,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              &format!("{SELECT_RECIPE} WHERE id = ?1"),
              rusqlite::params![id],
              RawRecipe::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecipe::into_recipe).transpose()
  }

  async fn delete(&self, id: &str) -> Result<usize> {
    let id = id.to_owned();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM recipes WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(removed)
  }
}
