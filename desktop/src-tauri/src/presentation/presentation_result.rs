use crate::presentation::PresentationMode;

/// Outcome of presenting the UI, produced once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationResult {
    pub mode: PresentationMode,
    pub succeeded: bool,
}
