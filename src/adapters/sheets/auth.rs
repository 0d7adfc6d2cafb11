use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::ports::sheet_source::SheetSourceError;

use super::http_client::HttpsConnector;

pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SheetSourceError> {
    let key_path = config.credentials_path.as_path();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(key_path)
        .await
        .change_context(SheetSourceError::Authentication)
        .attach_printable_lazy(|| {
            format!(
                "could not read service account key at '{}'",
                key_path.display()
            )
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SheetSourceError::Authentication)
        .attach_printable("could not create an authenticator")
}
