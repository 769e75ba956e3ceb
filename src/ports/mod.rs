//! Ports module - trait seams between the core and its adapters.

mod renderer;

pub use renderer::{ScoreSummary, TicketRenderer};
