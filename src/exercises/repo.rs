use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use time::Date;
use uuid::Uuid;

use crate::error::ApiError;
use crate::exercises::query::DateRange;

#[derive(Debug, Clone, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: Date,
}

/// Denormalized row for the log query: only what the log echoes back.
#[derive(Debug, FromRow)]
pub struct LogRow {
    pub description: String,
    pub duration: i32,
    pub date: Date,
}

/// Insert an exercise. `description`/`duration` go through as-is; when
/// absent the NOT NULL constraints reject the row and the caller sees a
/// store failure.
pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    description: Option<&str>,
    duration: Option<i32>,
    date: Date,
) -> Result<Exercise, ApiError> {
    let exercise = sqlx::query_as::<_, Exercise>(
        r#"
        INSERT INTO exercises (user_id, description, duration, date)
        VALUES ($1, $2, $3, $4)
        RETURNING id, description, duration, date
        "#,
    )
    .bind(user_id)
    .bind(description)
    .bind(duration)
    .bind(date)
    .fetch_one(db)
    .await?;
    Ok(exercise)
}

/// Assemble the log query: owner filter, inclusive date bounds per range
/// variant, ordered by date with insertion order as tiebreak, optional cap.
fn build_log_query(
    user_id: Uuid,
    range: DateRange,
    limit: Option<i64>,
) -> QueryBuilder<'static, Postgres> {
    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT description, duration, date FROM exercises WHERE user_id = ");
    qb.push_bind(user_id);

    match range {
        DateRange::Between(from, to) => {
            qb.push(" AND date >= ").push_bind(from);
            qb.push(" AND date <= ").push_bind(to);
        }
        DateRange::From(from) => {
            qb.push(" AND date >= ").push_bind(from);
        }
        DateRange::Until(to) => {
            qb.push(" AND date <= ").push_bind(to);
        }
        DateRange::All => {}
    }

    qb.push(" ORDER BY date, created_at");
    if let Some(n) = limit {
        qb.push(" LIMIT ").push_bind(n);
    }
    qb
}

/// Fetch a user's log, constrained by an inclusive date range and an
/// optional cap.
pub async fn find_log(
    db: &PgPool,
    user_id: Uuid,
    range: DateRange,
    limit: Option<i64>,
) -> Result<Vec<LogRow>, ApiError> {
    let mut qb = build_log_query(user_id, range, limit);
    let rows = qb.build_query_as::<LogRow>().fetch_all(db).await?;
    Ok(rows)
}
