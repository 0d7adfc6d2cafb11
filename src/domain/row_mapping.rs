use thiserror::Error;

use super::roster::{AdminRole, User};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowShapeError {
    #[error("Row has {found} column(s), expected at least {expected}")]
    MissingColumn { expected: usize, found: usize },
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|value| value.trim().to_owned())
        .unwrap_or_default()
}

fn optional_cell(row: &[String], index: usize) -> Option<String> {
    Some(cell(row, index)).filter(|value| !value.is_empty())
}

/// Maps a `[name, value]` row. Blank rows yield `Ok(None)`.
///
/// ```
/// use squadsheets::domain::row_mapping::row_to_admin_role;
/// use squadsheets::domain::roster::AdminRole;
/// let row = vec!["Admin".to_string(), "admin".to_string()];
/// assert_eq!(row_to_admin_role(&row), Ok(Some(AdminRole::new("Admin", "admin"))));
/// ```
pub fn row_to_admin_role(row: &[String]) -> Result<Option<AdminRole>, RowShapeError> {
    if is_blank(row) {
        return Ok(None);
    }
    if row.len() < 2 {
        return Err(RowShapeError::MissingColumn {
            expected: 2,
            found: row.len(),
        });
    }
    Ok(Some(AdminRole::new(cell(row, 0), cell(row, 1))))
}

/// Maps a `[name, steam64, role, notes]` row; missing trailing columns count as empty.
pub fn row_to_admin(row: &[String]) -> Option<User> {
    if is_blank(row) {
        return None;
    }
    Some(User {
        name: cell(row, 0),
        steam64: cell(row, 1),
        role: optional_cell(row, 2),
        notes: optional_cell(row, 3),
    })
}

/// Maps a `[name, steam64, notes]` row and assigns it `whitelist_role`.
pub fn row_to_whitelist_user(row: &[String], whitelist_role: &str) -> Option<User> {
    if is_blank(row) {
        return None;
    }
    Some(User {
        name: cell(row, 0),
        steam64: cell(row, 1),
        role: Some(whitelist_role.to_owned()),
        notes: optional_cell(row, 2),
    })
}
