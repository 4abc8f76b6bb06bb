use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to connect to the status endpoint: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Failed to send the request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Response status: {0}")]
    Status(StatusCode),

    #[error("Failed to read the response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Failed to parse the response as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`icestats` is missing in the response.")]
    MissingIcestats,

    #[error("`icestats.source` is missing in the response.")]
    MissingSource,

    #[error("`icestats.source[{index}]` does not exist (the number of sources is {len}).")]
    SourceOutOfRange { index: usize, len: usize },

    #[error("`icestats.source[{index}]` is not an object.")]
    MalformedSource { index: usize },

    #[error("`icestats.source[{index}].listeners` is missing in the response.")]
    MissingListeners { index: usize },

    #[error("`listeners` is not a non-negative integer: {0}")]
    MalformedListeners(Value),
}

impl FetchError {
    //classifies an error returned from `RequestBuilder::send()`
    pub fn from_send(e: reqwest::Error) -> Self {
        if (e.is_connect()) {
            FetchError::Connect(e)
        } else {
            FetchError::Request(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test01() {
        let e = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!("Response status: 500 Internal Server Error", e.to_string());

        let e = FetchError::SourceOutOfRange { index: 1, len: 1 };
        assert!(e.to_string().contains("source[1]"));

        let e = FetchError::MalformedListeners(Value::from("abc"));
        assert!(e.to_string().contains(r#""abc""#));
    }
}
