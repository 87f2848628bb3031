//! Persistence for the `cars` table: schema bootstrap, seeding and row operations.

use crate::error::BootstrapError;
use crate::model::{Car, CarInput};
use crate::seed::seed_cars;
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

const CREATE_CARS: &str = r#"
    CREATE TABLE IF NOT EXISTS cars (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        brand TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        color TEXT,
        price REAL,
        mileage INTEGER,
        description TEXT,
        imageUrl TEXT,
        highlights TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

const INSERT_CAR: &str = "INSERT INTO cars \
    (brand, model, year, color, price, mileage, description, imageUrl, highlights) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *";

const UPDATE_CAR: &str = "UPDATE cars SET \
    brand = ?, model = ?, year = ?, color = ?, price = ?, mileage = ?, \
    description = ?, imageUrl = ?, highlights = ? \
    WHERE id = ? RETURNING *";

/// What `seed_if_empty` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    Skipped { existing: i64 },
}

/// Handle on the SQLite file. Cheap to clone; all clones share one pool.
#[derive(Clone)]
pub struct CarStore {
    pool: SqlitePool,
}

impl CarStore {
    /// Open (or create) the database file, ensure the schema, then seed if empty.
    /// The store is only returned once all three steps succeeded.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, BootstrapError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|source| BootstrapError::Open {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(path = %path.display(), "connected to database");

        let store = Self { pool };
        store.ensure_schema().await.map_err(BootstrapError::Schema)?;
        tracing::info!("table \"cars\" created or already present");

        match store.seed_if_empty().await.map_err(BootstrapError::Seed)? {
            SeedOutcome::Inserted(n) => tracing::info!(rows = n, "empty database seeded with example cars"),
            SeedOutcome::Skipped { existing } => tracing::info!(rows = existing, "database already holds cars"),
        }
        Ok(store)
    }

    /// Idempotent: `CREATE TABLE IF NOT EXISTS`.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_CARS).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert the example listings when the table has no rows. Count and inserts
    /// share one transaction so a partial seed is never committed.
    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.rollback().await?;
            return Ok(SeedOutcome::Skipped { existing });
        }
        let cars = seed_cars();
        for car in &cars {
            bind_fields(sqlx::query_as::<_, Car>(INSERT_CAR), car)
                .fetch_one(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(SeedOutcome::Inserted(cars.len()))
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
    }

    /// All rows, newest model year first; equal years keep insertion order.
    pub async fn list_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        tracing::debug!("list cars");
        sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY year DESC, id ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        tracing::debug!(id, "get car");
        sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert one row; `id` and `created_at` are assigned by the database.
    pub async fn insert(&self, car: &CarInput) -> Result<Car, sqlx::Error> {
        tracing::debug!(brand = ?car.brand, model = ?car.model, "insert car");
        bind_fields(sqlx::query_as::<_, Car>(INSERT_CAR), car)
            .fetch_one(&self.pool)
            .await
    }

    /// Overwrite every mutable column of row `id`. Fields that are `None` are
    /// written as NULL. Returns `None` when no row has that id.
    ///
    /// Full replace rather than merge; callers that send a partial body will
    /// null out the rest (or hit NOT NULL on `brand`/`model`/`year`).
    pub async fn update(&self, id: i64, car: &CarInput) -> Result<Option<Car>, sqlx::Error> {
        tracing::debug!(id, "update car");
        bind_fields(sqlx::query_as::<_, Car>(UPDATE_CAR), car)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        tracing::debug!(id, "delete car");
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cheap round trip used by the readiness probe.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Bind the nine mutable columns in table order.
fn bind_fields<'q>(
    query: QueryAs<'q, Sqlite, Car, SqliteArguments<'q>>,
    car: &'q CarInput,
) -> QueryAs<'q, Sqlite, Car, SqliteArguments<'q>> {
    query
        .bind(car.brand.as_deref())
        .bind(car.model.as_deref())
        .bind(car.year)
        .bind(car.color.as_deref())
        .bind(car.price)
        .bind(car.mileage)
        .bind(car.description.as_deref())
        .bind(car.image_url.as_deref())
        .bind(car.highlights.as_deref())
}
