//! Schema-validated decoding of the rates endpoint payload.

use serde::Deserialize;
use serde_json::error::Category;
use thiserror::Error;

use super::state::RateTable;

/// Why a fetched payload was rejected. Either way the caller keeps its
/// previous rates; the kind only matters for diagnostics.
#[derive(Debug, Error)]
pub enum RatesError {
    /// Body was not syntactically valid JSON.
    #[error("Rates response is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Valid JSON with the wrong shape: not an object, no "rates"
    /// field, or "rates" not a string-to-number object.
    #[error("Rates response does not match the expected schema: {0}")]
    Schema(#[source] serde_json::Error),
}

/// The subset of the endpoint's response the application consumes.
/// Extra fields (base currency, date, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RatesPayload {
    rates: RateTable,
}

/// Parse a response body into a rate table.
pub fn parse_rates(body: &[u8]) -> Result<RateTable, RatesError> {
    match serde_json::from_slice::<RatesPayload>(body) {
        Ok(payload) => Ok(payload.rates),
        Err(err) => match err.classify() {
            Category::Data => Err(RatesError::Schema(err)),
            _ => Err(RatesError::Syntax(err)),
        },
    }
}
