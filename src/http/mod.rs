mod client;
mod response;

pub use client::{Headers, HttpClient};
pub use response::{parse, ResponseHandler};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send request")]
    Request {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
}
