//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the triage domain.

mod custom_plan_score;
mod errors;
mod ids;
mod report_source;
mod report_type;
mod state_machine;
mod ticket_type;
mod tier_score;
mod timestamp;

pub use custom_plan_score::CustomPlanScore;
pub use errors::ValidationError;
pub use ids::ReportId;
pub use report_source::ReportSource;
pub use report_type::ReportType;
pub use state_machine::StateMachine;
pub use ticket_type::TicketType;
pub use tier_score::TierScore;
pub use timestamp::Timestamp;
