//! Flow module - the wizard's step-sequencing state machine.

mod controller;
mod step;
mod validation;

pub use controller::FlowController;
pub use step::WizardStep;
pub use validation::StepValidation;
