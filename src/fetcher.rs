use log::{debug, error};
use reqwest::{Client, Response};

use super::config;
use super::constant;
use super::error::FetchError;
use super::models::StatusJson;
use super::util;

pub type ListenerCount = u64;

/*-------------------------------------*/

//projects `icestats.source[<source_index>].listeners` out of a `status-json.xsl` body
pub fn extract_listener_count(
    body: &str,
    source_index: usize,
) -> Result<ListenerCount, FetchError> {
    let status: StatusJson = serde_json::from_str(body)?;
    let sources = status
        .icestats
        .ok_or(FetchError::MissingIcestats)?
        .source
        .ok_or(FetchError::MissingSource)?;
    let source = sources
        .get(source_index)
        .ok_or(FetchError::SourceOutOfRange {
            index: source_index,
            len: sources.len(),
        })?
        .map_err(|_| FetchError::MalformedSource {
            index: source_index,
        })?;
    let listeners = source.listeners.ok_or(FetchError::MissingListeners {
        index: source_index,
    })?;
    util::coerce_listener_count(&listeners).ok_or(FetchError::MalformedListeners(listeners))
}

/*-------------------------------------*/

//Retrieves the current listener count from an Icecast status endpoint.
//
//Holds no mutable state, so a single instance can be shared by concurrent callers.
pub struct ListenerCountFetcher {
    client: Client,
    url: String,
    source_index: usize,
}

impl ListenerCountFetcher {
    pub fn new(url: &str, source_index: usize) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            url: url.to_string(),
            source_index,
        })
    }

    pub fn from_config(config: &config::Status) -> Result<Self, FetchError> {
        Self::new(&config.url, config.source_index)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<ListenerCount, FetchError> {
        let res: Response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::from_send)?;

        let response_status = res.status();
        if (!response_status.is_success()) {
            return Err(FetchError::Status(response_status));
        }

        let body: String = res.text().await.map_err(FetchError::Body)?;
        let count = extract_listener_count(&body, self.source_index)?;
        debug!("{} listener(s) reported by {}", count, self.url);
        Ok(count)
    }

    //Same as `fetch()` but the error is logged and swallowed.
    pub async fn fetch_or_log(&self) -> Option<ListenerCount> {
        match self.fetch().await {
            Ok(c) => Some(c),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}

/*-------------------------------------*/

//fetches the listener count of the default stream; `None` when it is unavailable for any reason
pub async fn get_listener_count() -> Option<ListenerCount> {
    match ListenerCountFetcher::new(constant::DEFAULT_STATUS_URL, constant::DEFAULT_SOURCE_INDEX) {
        Ok(fetcher) => fetcher.fetch_or_log().await,
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/*-------------------------------------*/
