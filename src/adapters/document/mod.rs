//! Document adapter - markdown ticket generation and text shaping.

mod currency;
mod sanitize;
mod ticket_template;

pub use currency::{format_currency, CurrencyStyle};
pub use sanitize::sanitize;
pub use ticket_template::MarkdownTicketRenderer;
