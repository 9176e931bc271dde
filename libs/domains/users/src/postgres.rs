use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, Statement};
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// PostgreSQL implementation of UserRepository using SeaORM.
///
/// Works against a pre-existing `users(id, first_name, last_name, email)`
/// table with a unique index on `email`. The unique index is the backstop
/// for the service-level duplicate check under concurrent writers.
#[derive(Clone)]
pub struct PgUserRepository {
    db: sea_orm::DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Helper struct for deserializing user rows from the database
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

fn map_write_error(e: sea_orm::DbErr, email: &str) -> UserError {
    let err_str = e.to_string();
    if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
        UserError::DuplicateEmail(email.to_string())
    } else {
        UserError::Internal(format!("Database error: {}", e))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = "SELECT id, first_name, last_name, email FROM users";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, []);

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let sql = "SELECT id, first_name, last_name, email FROM users WHERE id = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let sql = "SELECT id, first_name, last_name, email FROM users WHERE email = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: User) -> UserResult<()> {
        let sql = r#"
            INSERT INTO users (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.first_name.into(),
                user.last_name.into(),
                user.email.clone().into(),
            ],
        );

        self.db
            .execute_raw(stmt)
            .await
            .map_err(|e| map_write_error(e, &user.email))?;

        Ok(())
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let sql = r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4
            WHERE id = $1
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                user.id.into(),
                user.first_name.into(),
                user.last_name.into(),
                user.email.clone().into(),
            ],
        );

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| map_write_error(e, &user.email))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let sql = "DELETE FROM users WHERE id = $1";

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| UserError::Internal(format!("Database error: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
