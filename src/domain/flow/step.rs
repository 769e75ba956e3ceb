//! WizardStep enum - the screens of the triage wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The wizard screens: seven main steps plus the quick-calculator side flow.
///
/// Step numbers are 1-based for host progress displays; the quick
/// calculator continues the numbering at 8 and 9 but sits outside the
/// main sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ReportType,
    TicketType,
    DueDiligence,
    CustomerDetails,
    Assessment,
    BugDocumentation,
    FinalReport,
    QuickAssessment,
    QuickResults,
}

impl WizardStep {
    /// The main sequence, in order.
    pub const MAIN_SEQUENCE: [WizardStep; 7] = [
        WizardStep::ReportType,
        WizardStep::TicketType,
        WizardStep::DueDiligence,
        WizardStep::CustomerDetails,
        WizardStep::Assessment,
        WizardStep::BugDocumentation,
        WizardStep::FinalReport,
    ];

    /// Returns the 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::ReportType => 1,
            WizardStep::TicketType => 2,
            WizardStep::DueDiligence => 3,
            WizardStep::CustomerDetails => 4,
            WizardStep::Assessment => 5,
            WizardStep::BugDocumentation => 6,
            WizardStep::FinalReport => 7,
            WizardStep::QuickAssessment => 8,
            WizardStep::QuickResults => 9,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<WizardStep> {
        match number {
            1 => Some(WizardStep::ReportType),
            2 => Some(WizardStep::TicketType),
            3 => Some(WizardStep::DueDiligence),
            4 => Some(WizardStep::CustomerDetails),
            5 => Some(WizardStep::Assessment),
            6 => Some(WizardStep::BugDocumentation),
            7 => Some(WizardStep::FinalReport),
            8 => Some(WizardStep::QuickAssessment),
            9 => Some(WizardStep::QuickResults),
            _ => None,
        }
    }

    /// Returns the progress title shown for this step.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::ReportType => "Report Type",
            WizardStep::TicketType => "Ticket Type",
            WizardStep::DueDiligence => "Due Diligence",
            WizardStep::CustomerDetails => "Customer Information",
            WizardStep::Assessment => "Impact Assessment",
            WizardStep::BugDocumentation => "Documentation",
            WizardStep::FinalReport => "Final Report",
            WizardStep::QuickAssessment => "Impact Assessment",
            WizardStep::QuickResults => "Results",
        }
    }

    /// Returns true for the quick-calculator side-flow steps.
    pub fn is_quick_flow(&self) -> bool {
        matches!(self, WizardStep::QuickAssessment | WizardStep::QuickResults)
    }

    /// Returns true for the terminal display steps.
    pub fn is_final(&self) -> bool {
        matches!(self, WizardStep::FinalReport | WizardStep::QuickResults)
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            ReportType => vec![TicketType, QuickAssessment],
            TicketType => vec![DueDiligence, CustomerDetails, ReportType],
            DueDiligence => vec![CustomerDetails, TicketType],
            CustomerDetails => vec![Assessment, FinalReport, DueDiligence],
            Assessment => vec![BugDocumentation, FinalReport, CustomerDetails],
            BugDocumentation => vec![FinalReport, Assessment],
            FinalReport => vec![BugDocumentation, ReportType],
            QuickAssessment => vec![QuickResults, ReportType],
            QuickResults => vec![QuickAssessment, ReportType],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
