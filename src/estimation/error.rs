use std::num::ParseFloatError;

use thiserror::Error;

/// Failure talking to the completion endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response contained no completion choice")]
    MalformedResponse,

    #[error("OPENROUTER_API_KEY is not configured")]
    MissingApiKey,
}

/// The model answered, but not with a usable number.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no valid number found in: {0}")]
    NoNumberFound(String),

    #[error("could not parse {input:?} as a number: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("number out of range: {0}")]
    OutOfRange(String),
}

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
