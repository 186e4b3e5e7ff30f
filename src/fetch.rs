//! # Fetch & Filter Pipeline
//!
//! Walks the registered sources in order, decodes each payload, and returns
//! the first record that is valid, unseen, locale-matched, and inside its
//! time window. First match wins; everything after it is never fetched.
//!
//! Every failure is contained: a broken source skips to the next source, a
//! broken record skips to the next record. The pipeline itself cannot fail.

use anyhow::Context;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, SkipReason};
use crate::locale::ActiveLocale;
use crate::record::Announcement;
use crate::store::SeenSet;

/// Retrieval seam. Production uses [`HttpTransport`]; tests substitute
/// fixtures keyed by URL.
pub trait Transport {
    fn fetch_text(&self, url: &Url) -> anyhow::Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch_text(&self, url: &Url) -> anyhow::Result<String> {
        (**self).fetch_text(url)
    }
}

/// Blocking HTTPS retrieval. The orchestrator runs synchronously on the
/// caller's thread, so the blocking client is the right shape here.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch_text(&self, url: &Url) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .with_context(|| format!("GET {url}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        response.text().context("reading response body")
    }
}

/// Select at most one admissible, unseen record, first-match-wins across
/// `sources` in registration order.
pub fn select_announcement<T: Transport>(
    transport: &T,
    sources: &[Url],
    seen: &SeenSet,
    locale: &ActiveLocale,
) -> Option<Announcement> {
    for url in sources {
        let batch = match fetch_batch(transport, url) {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, "source skipped");
                continue;
            }
        };

        for element in batch {
            let record = match Announcement::decode(element) {
                Ok(record) => record,
                Err(e) => {
                    warn!(source = %url, error = %e, "invalid announcement record");
                    continue;
                }
            };
            match admissible(&record, seen, locale) {
                Ok(()) => return Some(record),
                Err(reason) => {
                    debug!(uuid = %record.uuid, source = %url, %reason, "announcement filtered");
                }
            }
        }
    }
    None
}

/// Fetch one source and decode its top-level payload. A payload that is not
/// a non-empty JSON array is a source-level failure.
fn fetch_batch<T: Transport>(transport: &T, url: &Url) -> Result<Vec<Value>, FetchError> {
    let body = transport.fetch_text(url).map_err(|cause| FetchError::Http {
        url: url.to_string(),
        cause,
    })?;
    let payload: Value = serde_json::from_str(&body).map_err(|source| FetchError::Json {
        url: url.to_string(),
        source,
    })?;
    match payload {
        Value::Null => Err(FetchError::EmptyPayload {
            url: url.to_string(),
        }),
        Value::Array(elements) if elements.is_empty() => Err(FetchError::EmptyPayload {
            url: url.to_string(),
        }),
        Value::Array(elements) => Ok(elements),
        _ => Err(FetchError::NotAnArray {
            url: url.to_string(),
        }),
    }
}

/// Admissibility of one structurally valid record: unseen, locale-matched,
/// and inside its time window. "Now" is captured per check, not per run.
pub fn admissible(
    record: &Announcement,
    seen: &SeenSet,
    locale: &ActiveLocale,
) -> Result<(), SkipReason> {
    if seen.contains(&record.uuid) {
        return Err(SkipReason::AlreadySeen);
    }
    if let Some(pattern) = &record.locale {
        if !locale.matches(pattern) {
            return Err(SkipReason::LocaleMismatch);
        }
    }
    if record.from.is_some() || record.expire.is_some() {
        let now = Utc::now();
        if let Some(from) = record.from {
            if now < from.with_timezone(&Utc) {
                return Err(SkipReason::TooEarly);
            }
        }
        if let Some(expire) = record.expire {
            if now > expire.with_timezone(&Utc) {
                return Err(SkipReason::Expired);
            }
        }
    }
    Ok(())
}
