use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, YtMp3Error};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Initialize HTTP client with default configuration
fn get_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Get default headers for requests
fn get_default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Merge custom headers over the defaults
fn create_custom_headers(additional_headers: HeaderMap) -> HeaderMap {
    let mut headers = get_default_headers();
    headers.extend(additional_headers);
    headers
}

/// Execute GET request with error handling
async fn execute_request(url: &str, headers: HeaderMap) -> Result<reqwest::Response> {
    let client = get_http_client();
    let request = client.get(url).headers(create_custom_headers(headers));

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            YtMp3Error::RequestTimeout(url.to_string())
        } else {
            YtMp3Error::Network(e)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(YtMp3Error::Http {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Download text content from URL with custom headers
pub async fn download_text_with_headers(url: &str, headers: HeaderMap) -> Result<String> {
    let response = execute_request(url, headers).await?;
    response.text().await.map_err(YtMp3Error::from)
}

/// Download binary data from URL with custom headers
pub async fn download_binary_with_headers(url: &str, headers: HeaderMap) -> Result<Vec<u8>> {
    let response = execute_request(url, headers).await?;
    let bytes = response.bytes().await.map_err(YtMp3Error::from)?;
    Ok(bytes.to_vec())
}

/// Download URL contents to a file on disk
pub async fn download_to_file(url: &str, headers: HeaderMap, dest: &Path) -> Result<()> {
    let bytes = download_binary_with_headers(url, headers).await?;
    tokio::fs::write(dest, bytes).await?;
    Ok(())
}

/// Execute POST request with JSON body and custom headers
pub async fn post_json_with_headers<T: DeserializeOwned, B: Serialize>(
    url: &str,
    body: &B,
    headers: HeaderMap,
) -> Result<T> {
    let client = get_http_client();
    let request = client
        .post(url)
        .headers(create_custom_headers(headers))
        .json(body);

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            YtMp3Error::RequestTimeout(url.to_string())
        } else {
            YtMp3Error::Network(e)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(YtMp3Error::from)
    } else {
        Err(YtMp3Error::Http {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
