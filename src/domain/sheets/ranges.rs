// Roster sheets share a fixed layout: a header row, then one record per row starting at column A.

use super::a1_notation::{quote_sheet_title, A1Notation, ToA1Notation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub first_column: char,
    pub last_column: char,
    pub first_row: u32,
}

/// `[name, value]`
pub const ADMIN_ROLES: ColumnSpan = ColumnSpan {
    first_column: 'A',
    last_column: 'B',
    first_row: 2,
};

/// `[name, steam64, role, notes]`
pub const ADMINS: ColumnSpan = ColumnSpan {
    first_column: 'A',
    last_column: 'D',
    first_row: 2,
};

/// `[name, steam64, notes]`
pub const WHITELIST: ColumnSpan = ColumnSpan {
    first_column: 'A',
    last_column: 'C',
    first_row: 2,
};

impl ColumnSpan {
    /// Sheet row number of the `index`-th row returned for this span.
    pub fn row_number(&self, index: usize) -> usize {
        self.first_row as usize + index
    }
}

impl ToA1Notation for ColumnSpan {
    fn to_a1_notation(&self, sheet_title: Option<&str>) -> A1Notation {
        let local = format!(
            "{}{}:{}",
            self.first_column, self.first_row, self.last_column
        );
        match sheet_title {
            Some(sheet_title) => A1Notation(format!("{}!{}", quote_sheet_title(sheet_title), local)),
            None => A1Notation(local),
        }
    }
}
