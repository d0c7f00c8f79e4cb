//! Database repository for contact operations.
//!
//! Each method maps onto exactly one statement against the `contacts` table.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Contact, ContactInput, Phone};

const CONTACT_COLUMNS: &str = "id, name, email, phone_mobile, phone_work, create_date";

/// Database repository for all contact operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all contacts in insertion order.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM contacts ORDER BY rowid",
            CONTACT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(contact_from_row).collect())
    }

    /// Get a contact by ID.
    pub async fn get_contact(&self, id: &str) -> Result<Option<Contact>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM contacts WHERE id = ?",
            CONTACT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(contact_from_row))
    }

    /// Create a new contact, assigning its id and creation date.
    pub async fn create_contact(&self, input: ContactInput) -> Result<Contact, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let phone = input.phone.unwrap_or_default();

        sqlx::query(
            "INSERT INTO contacts (id, name, email, phone_mobile, phone_work, create_date) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&phone.mobile)
        .bind(&phone.work)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Contact {
            id,
            name: input.name,
            email: input.email,
            phone: phone_from_parts(phone.mobile, phone.work),
            create_date: Some(now),
        })
    }

    /// Replace every field of a contact except its id and creation date.
    ///
    /// Matching no row is not an error: callers get the same success either way.
    pub async fn replace_contact(&self, id: &str, input: &ContactInput) -> Result<(), AppError> {
        let phone = input.phone.clone().unwrap_or_default();

        let result = sqlx::query(
            "UPDATE contacts SET name = ?, email = ?, phone_mobile = ?, phone_work = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&phone.mobile)
        .bind(&phone.work)
        .bind(id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id, matched = result.rows_affected(), "Replaced contact");
        Ok(())
    }

    /// Delete a contact. Deleting a missing id succeeds.
    pub async fn delete_contact(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, deleted = result.rows_affected(), "Deleted contact");
        Ok(())
    }

    /// Close the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn phone_from_parts(mobile: Option<String>, work: Option<String>) -> Option<Phone> {
    if mobile.is_none() && work.is_none() {
        None
    } else {
        Some(Phone { mobile, work })
    }
}

fn contact_from_row(row: &sqlx::sqlite::SqliteRow) -> Contact {
    let create_date: DateTime<Utc> = row.get("create_date");
    Contact {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: phone_from_parts(row.get("phone_mobile"), row.get("phone_work")),
        create_date: Some(create_date),
    }
}
