//! Input validation helpers
//!
//! Centralized text length constants and validation for the caller-facing
//! API layer. The store itself does not validate payload fields; everything
//! here runs before the store is touched.

use shared::models::{LayoutUpsert, Table};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: room, table
pub const MAX_NAME_LEN: usize = 200;

/// Icon asset references
pub const MAX_SRC_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a single table submitted through a layout call.
///
/// Checks name and asset reference, enforces `0 <= min <= max`, and
/// normalizes `rotation` into [0, 360).
pub fn validate_table(table: &mut Table) -> Result<(), AppError> {
    validate_required_text(&table.name, "table name", MAX_NAME_LEN)?;
    if table.src.len() > MAX_SRC_LEN {
        return Err(AppError::validation(format!(
            "table {}: src is too long",
            table.name
        )));
    }
    if table.min < 0 {
        return Err(AppError::validation(format!(
            "table {}: min capacity must be >= 0",
            table.name
        )));
    }
    if table.min > table.max {
        return Err(AppError::validation(format!(
            "table {}: min capacity {} exceeds max {}",
            table.name, table.min, table.max
        )));
    }
    table.rotation = table.rotation.rem_euclid(360);
    Ok(())
}

/// Validate a full layout submission in place (room name + every table).
pub fn validate_layout(layout: &mut LayoutUpsert) -> Result<(), AppError> {
    validate_required_text(&layout.name, "room name", MAX_NAME_LEN)?;
    if let Some(tables) = layout.tables.as_mut() {
        for table in tables {
            validate_table(table)?;
        }
    }
    Ok(())
}
