// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::SourceConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &SourceConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Build `{base_url}/affairs/{id}?format=json&lang={lang}`.
pub fn affair_url(base_url: &str, id: &str, lang: &str) -> Result<url::Url> {
    let mut url = url::Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push("affairs")
        .push(id);
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("lang", lang);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affair_url() {
        let url = affair_url("http://ws-old.parlament.ch", "20212355", "de").unwrap();
        assert_eq!(
            url.as_str(),
            "http://ws-old.parlament.ch/affairs/20212355?format=json&lang=de"
        );
    }

    #[test]
    fn test_affair_url_keeps_base_path() {
        let url = affair_url("http://localhost:8080/api/", "20220001", "fr").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/affairs/20220001?format=json&lang=fr"
        );
    }

    #[test]
    fn test_affair_url_rejects_garbage() {
        assert!(affair_url("not a url", "20220001", "de").is_err());
    }
}
