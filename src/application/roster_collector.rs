use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::roster::{AdminRoles, Roster, User, WHITELIST_ROLE};
use crate::domain::row_mapping::{row_to_admin, row_to_admin_role, row_to_whitelist_user};
use crate::domain::sheets::a1_notation::ToA1Notation;
use crate::domain::sheets::ranges::{self, ColumnSpan};
use crate::ports::sheet_source::SheetSource;

#[derive(Error, Debug)]
pub enum RosterCollectionError {
    #[error("Failed to list sheets of the spreadsheet")]
    FailedToListSheets,
    #[error("Sheet '{0}' not found in spreadsheet")]
    SheetNotFound(String),
    #[error("Failed to read sheet '{0}'")]
    FailedToReadSheet(String),
    #[error("Malformed row {row} in sheet '{sheet}'")]
    MalformedRow { sheet: String, row: usize },
}

/// Matches a configured sheet name against the spreadsheet titles, ignoring case.
fn resolve_sheet_title<'t>(
    titles: &'t [String],
    name: &str,
) -> error_stack::Result<&'t str, RosterCollectionError> {
    titles
        .iter()
        .find(|title| title.to_lowercase() == name.to_lowercase())
        .map(String::as_str)
        .ok_or_else(|| {
            report!(RosterCollectionError::SheetNotFound(name.to_owned()))
                .attach_printable(format!("available sheets: {}", titles.join(", ")))
        })
}

async fn read_sheet(
    source: &dyn SheetSource,
    sheet_title: &str,
    span: ColumnSpan,
) -> error_stack::Result<Vec<Vec<String>>, RosterCollectionError> {
    let range = span.to_a1_notation(Some(sheet_title));
    let rows = source
        .read_rows(&range)
        .await
        .change_context(RosterCollectionError::FailedToReadSheet(
            sheet_title.to_owned(),
        ))?;
    debug!(range = %range, rows = rows.len(), "read sheet range");
    Ok(rows)
}

/// Reads roles, admins and whitelist from one spreadsheet.
///
/// Every configured sheet must exist before anything is read. Every whitelist
/// entry is assigned the `Whitelist` role; a missing `Whitelist` group is
/// synthesized once the rosters of all sources are merged.
#[instrument(skip_all, fields(spreadsheet = source.spreadsheet_id()))]
pub async fn collect_roster(
    source: &dyn SheetSource,
    config: &SpreadsheetConfig,
) -> error_stack::Result<Roster, RosterCollectionError> {
    let titles = source
        .sheet_titles()
        .await
        .change_context(RosterCollectionError::FailedToListSheets)?;

    let roles_title = resolve_sheet_title(&titles, &config.roles_sheet)?;
    let admin_titles = config
        .admin_sheets
        .iter()
        .map(|name| resolve_sheet_title(&titles, name))
        .collect::<Result<Vec<_>, _>>()?;
    let whitelist_titles = config
        .whitelist_sheets
        .iter()
        .map(|name| resolve_sheet_title(&titles, name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut roles = AdminRoles::new();
    for (index, row) in read_sheet(source, roles_title, ranges::ADMIN_ROLES)
        .await?
        .iter()
        .enumerate()
    {
        let role = row_to_admin_role(row).change_context(
            RosterCollectionError::MalformedRow {
                sheet: roles_title.to_owned(),
                row: ranges::ADMIN_ROLES.row_number(index),
            },
        )?;
        if let Some(role) = role {
            roles.insert(role);
        }
    }

    let mut admins: Vec<User> = Vec::new();
    for title in admin_titles {
        let rows = read_sheet(source, title, ranges::ADMINS).await?;
        admins.extend(rows.iter().filter_map(|row| row_to_admin(row)));
    }

    let mut whitelist: Vec<User> = Vec::new();
    for title in whitelist_titles {
        let rows = read_sheet(source, title, ranges::WHITELIST).await?;
        whitelist.extend(
            rows.iter()
                .filter_map(|row| row_to_whitelist_user(row, WHITELIST_ROLE)),
        );
    }

    info!(
        roles = roles.len(),
        admins = admins.len(),
        whitelist = whitelist.len(),
        "collected roster"
    );

    Ok(Roster {
        roles,
        admins,
        whitelist,
    })
}
