//! Root application state and the converter sub-entity.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::mvu::Model;

/// Exchange rates keyed by currency code, relative to the configured
/// base currency. A `BTreeMap` so iteration is already in the
/// lexicographic order the rates screen wants.
pub type RateTable = BTreeMap<String, f64>;

/// Input text a freshly selected converter starts with.
const INITIAL_INPUT: &str = "100";

/// Errors from resolving a currency selection against the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No rates have been loaded yet, so nothing is selectable.
    #[error("No rates loaded; nothing can be selected")]
    RatesNotLoaded,

    /// The requested code is missing from the loaded table.
    #[error("Currency '{currency}' is not in the loaded rates")]
    UnknownCurrency { currency: String },
}

/// The single root state value, owned by the driver and mutated only
/// through the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Loaded exchange rates; `None` until the first successful fetch.
    pub rates: Option<RateTable>,
    /// Open conversion screen; `None` until a currency is selected,
    /// then replaced wholesale on every re-selection.
    pub converter: Option<Converter>,
}

impl Model for AppState {}

impl AppState {
    /// Resolve `currency` against the loaded rates and build the
    /// converter that a selection would open.
    ///
    /// The selection list is always derived from `rates`, so an error
    /// here means the UI wiring is broken; the caller decides between
    /// failing fast and ignoring the selection.
    pub fn select_currency(&self, currency: &str) -> Result<Converter, SelectionError> {
        let rates = self.rates.as_ref().ok_or(SelectionError::RatesNotLoaded)?;
        let rate = rates
            .get(currency)
            .copied()
            .ok_or_else(|| SelectionError::UnknownCurrency {
                currency: currency.to_string(),
            })?;
        Ok(Converter::new(rate, currency))
    }
}

/// One open conversion: a fixed rate captured at selection time plus
/// whatever the user has typed.
///
/// The rate is deliberately NOT resynced when the rate table refreshes;
/// an open converter keeps the rate it was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    /// Raw user-entered text; `None` when the field was cleared by the
    /// platform rather than edited to empty.
    pub input_text: Option<String>,
    /// Conversion factor captured at creation time.
    pub rate: f64,
    /// Selected currency code.
    pub currency: String,
}

impl Converter {
    pub fn new(rate: f64, currency: impl Into<String>) -> Self {
        Self {
            input_text: Some(INITIAL_INPUT.to_string()),
            rate,
            currency: currency.into(),
        }
    }

    /// The typed amount, or `None` when the text is absent or not a
    /// decimal number. Parsing is a plain `f64` parse with no trimming
    /// and no separators.
    pub fn input_amount(&self) -> Option<f64> {
        self.input_text.as_deref().and_then(|text| text.parse().ok())
    }

    /// The converted amount, derived on demand and never stored.
    pub fn output_amount(&self) -> Option<f64> {
        Some(self.input_amount()? * self.rate)
    }
}
