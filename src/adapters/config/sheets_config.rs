use std::path::PathBuf;

/// One spreadsheet holding a roles sheet plus any number of admin and whitelist sheets.
///
/// The camelCase aliases accept config files written for the older key names.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetConfig {
    #[serde(alias = "sheetID", alias = "sheetid")]
    pub sheet_id: String,
    /// Service account key used to authenticate against the Sheets API.
    #[serde(alias = "secretJSONPath", alias = "secretjsonpath")]
    pub credentials_path: PathBuf,
    #[serde(alias = "rolesSheet", alias = "rolessheet")]
    pub roles_sheet: String,
    #[serde(default, alias = "adminSheets", alias = "adminsheets")]
    pub admin_sheets: Vec<String>,
    #[serde(default, alias = "whitelistSheets", alias = "whitelistsheets")]
    pub whitelist_sheets: Vec<String>,
}

impl SpreadsheetConfig {
    /// Every sheet this source reads, roles first.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.roles_sheet.as_str())
            .chain(self.admin_sheets.iter().map(String::as_str))
            .chain(self.whitelist_sheets.iter().map(String::as_str))
    }
}
