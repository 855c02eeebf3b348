//! Row mapping helpers for `SQLite` queries.

use pantry_core::{Item, ItemType, RepositoryError, Unit};
use sqlx::Row;

/// Shared SELECT column list for item queries.
pub const ITEM_SELECT_COLUMNS: &str = "id, name, quantity, type, unit";

/// Map a sqlx error into a repository error.
///
/// CHECK and NOT NULL failures surface as constraint violations; everything
/// else is a storage failure.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            sqlx::error::ErrorKind::CheckViolation | sqlx::error::ErrorKind::NotNullViolation => {
                return RepositoryError::Constraint(db_err.message().to_string());
            }
            _ => {}
        }
    }
    RepositoryError::Storage(err.to_string())
}

/// Convert a gram quantity into the signed column representation.
pub fn quantity_to_column(quantity: u64) -> Result<i64, RepositoryError> {
    i64::try_from(quantity).map_err(|_| {
        RepositoryError::Constraint(format!("quantity {quantity} exceeds storage range"))
    })
}

/// Parse a database row into an Item.
pub fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> Result<Item, RepositoryError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let quantity: i64 = row
        .try_get("quantity")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let quantity = u64::try_from(quantity).map_err(|_| {
        RepositoryError::Serialization(format!("item {id} has negative quantity {quantity}"))
    })?;

    let type_str: String = row
        .try_get("type")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let item_type = ItemType::parse(&type_str).ok_or_else(|| {
        RepositoryError::Serialization(format!("item {id} has unknown type '{type_str}'"))
    })?;

    let unit_str: String = row
        .try_get("unit")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let unit = Unit::parse(&unit_str).ok_or_else(|| {
        RepositoryError::Serialization(format!("item {id} has unknown unit '{unit_str}'"))
    })?;

    Ok(Item {
        id,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        quantity,
        item_type,
        unit,
    })
}

/// Case-fold a name for searching.
///
/// Both backends match on this form so that search ignores case for every
/// script, not only ASCII. `SQLite` stores it in the `name_folded` column.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Escape `LIKE` wildcards so a search term matches literally.
///
/// Pairs with `ESCAPE '\'` in the query.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
