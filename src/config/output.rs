//! Output formatting configuration section.

use serde::Deserialize;

use crate::adapters::document::CurrencyStyle;

/// Output configuration for the template renderer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    /// ARR format in the customer-info block.
    #[serde(default)]
    pub currency_style: CurrencyStyle,
}
