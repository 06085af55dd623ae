//! Google Sheets `values.get` client.
//!
//! Reads named ranges from one spreadsheet as raw string grids. Auth
//! failures map onto the pipeline's error taxonomy so the caller can tell
//! "sign in again" (401/403) apart from transport trouble; the retry itself
//! happens outside, by re-running the whole fetch cycle with a fresh token.

use std::time::Duration;

use sheetboard_core::error::SourceError;
use sheetboard_core::source::TableSource;
use sheetboard_core::table::RawTable;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, token: String) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            spreadsheet_id,
            token,
        })
    }
}

impl TableSource for SheetsClient {
    async fn fetch_table(&self, range: &str) -> Result<RawTable, SourceError> {
        let url = format!("{}/{}/values/{}", SHEETS_API_BASE, self.spreadsheet_id, range);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            401 => return Err(SourceError::Unauthenticated),
            403 => return Err(SourceError::PermissionDenied),
            _ if !status.is_success() => {
                return Err(SourceError::Transport(format!(
                    "sheets API returned status {status} for range {range}"
                )));
            }
            _ => {}
        }

        // An entirely empty range omits `values`; RawTable defaults it.
        response
            .json::<RawTable>()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))
    }
}
