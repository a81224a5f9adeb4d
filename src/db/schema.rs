//! Idempotent schema bootstrap.
//!
//! Invoked once at process start by the transaction boundary owner (`main`).
//! Every statement is `CREATE ... IF NOT EXISTS`, so repeated startups are
//! harmless and no "already initialized" flag is needed.

use sqlx::PgPool;

const CREATE_APP_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS app_user (
    id       BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE
)
"#;

const CREATE_ACCOUNT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS account (
    id      BIGSERIAL PRIMARY KEY,
    user_id BIGINT NOT NULL REFERENCES app_user (id),
    balance NUMERIC(19, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0)
)
"#;

/// Create the `app_user` and `account` tables if they do not exist yet.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_APP_USER_TABLE).execute(pool).await?;
    sqlx::query(CREATE_ACCOUNT_TABLE).execute(pool).await?;

    tracing::info!("database schema ready");
    Ok(())
}
