use crate::core::appliance::ApplianceLookupError;
use crate::core::solar::InvalidRooftopArea;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WattwiseError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Invalid appliance input: {0}")]
    InvalidApplianceInput(#[from] ApplianceLookupError),
    #[error("Error identified during calculation: {0}")]
    FailureInCalculation(#[from] InvalidRooftopArea),
    #[error("Error while writing results: {0}")]
    ErrorInOutput(OutputError),
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct OutputError {
    error: anyhow::Error,
}

impl OutputError {
    pub(crate) fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}
