use super::feed::{self, FilingRef};
use super::{LocateError, EDGAR_URL, FORM_13F_HR, INDEX_COUNT};
use crate::http::*;
use crate::markup::elements;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, error, info, trace};
use url::Url;

lazy_static! {
    // the "Complete submission text file" of a filing detail page
    static ref SUBMISSION_TEXT_FILE: Regex =
        Regex::new(r"\.txt").expect("valid submission text file pattern");
}

/// Finds the latest filing of one type for an entity, and downloads its
/// complete submission text file.
///
/// To retrieve the document:
///  1. fetch the company browse feed (the `count` most recent filings whose type begins with
///     `form_type`)
///  2. take the first entry whose type is exactly `form_type`, skipping amendments
///  3. fetch the filing detail page, and find the complete submission text file link
///  4. download the complete submission text file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locator {
    pub base_url: String,
    pub form_type: String,
    pub count: u16,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            base_url: EDGAR_URL.to_string(),
            form_type: FORM_13F_HR.to_string(),
            count: INDEX_COUNT,
        }
    }
}

impl Locator {
    /// Default locator, with the index origin read from `EDGAR_URL` when set.
    pub fn from_env() -> Self {
        match var("EDGAR_URL") {
            Ok(base_url) => Self {
                base_url,
                ..Default::default()
            },
            Err(_) => Self::default(),
        }
    }

    /// The company browse feed url; `identifier` is a ticker or a CIK.
    pub fn index_url(&self, identifier: &str) -> Result<Url, LocateError> {
        let mut url = self.join("/cgi-bin/browse-edgar")?;
        url.query_pairs_mut()
            .append_pair("action", "getcompany")
            .append_pair("CIK", identifier)
            .append_pair("type", &self.form_type)
            .append_pair("dateb", "")
            .append_pair("owner", "exclude")
            .append_pair("start", "0")
            .append_pair("count", &self.count.to_string())
            .append_pair("output", "atom");
        Ok(url)
    }

    /// Download the complete submission text file of the latest `form_type`
    /// filing of `identifier`.
    pub async fn locate<F: Fetch>(
        &self,
        fetcher: &F,
        identifier: &str,
    ) -> Result<String, LocateError> {
        let time = std::time::Instant::now();

        // 1. company browse feed
        let index_url = self.index_url(identifier)?;
        debug!("fetching filing index for {identifier} at {index_url}");
        let feed = get(fetcher, index_url.as_str()).await.map_err(|reason| {
            error!("failed to download filing index at {index_url}, error({reason})");
            LocateError::IndexUnavailable {
                identifier: identifier.to_string(),
                url: index_url.to_string(),
                reason,
            }
        })?;

        let entries = feed::parse(&feed);
        if entries.is_empty() {
            error!("no filings for ticker or CIK {identifier:?}");
            return Err(LocateError::NoFilingsFound {
                identifier: identifier.to_string(),
            });
        }
        trace!("{} filings listed for {identifier}", entries.len());

        // 2. latest filing of the exact type
        let filing = self.select(&entries).ok_or_else(|| {
            error!(
                "failed to find a {} filing in the {} most recent filings of {identifier}",
                self.form_type,
                entries.len()
            );
            LocateError::TargetTypeNotFound {
                identifier: identifier.to_string(),
                form_type: self.form_type.clone(),
                searched: entries.len(),
            }
        })?;
        debug!(
            "selected {} filing {} from {}",
            filing.filing_type, filing.accession_number, filing.filing_date
        );

        // 3. filing detail page
        let detail_url = self.join(&filing.link)?;
        let detail = get(fetcher, detail_url.as_str()).await.map_err(|reason| {
            error!("failed to download filing detail at {detail_url}, error({reason})");
            LocateError::DetailPageUnavailable {
                url: detail_url.to_string(),
                reason,
            }
        })?;

        let href = submission_text_file(&detail).ok_or_else(|| {
            error!("no complete submission text file linked from {detail_url}");
            LocateError::DocumentLinkNotFound {
                url: detail_url.to_string(),
            }
        })?;

        // 4. complete submission text file
        let document_url = self.join(&href)?;
        trace!("fetching complete submission text file at {document_url}");
        let document = get(fetcher, document_url.as_str())
            .await
            .map_err(|reason| {
                error!(
                    "failed to download complete submission text file at {document_url}, error({reason})"
                );
                LocateError::DocumentUnavailable {
                    url: document_url.to_string(),
                    reason,
                }
            })?;

        info!(
            "{} filing for {identifier} downloaded from {document_url}, {}",
            self.form_type,
            crate::time_elapsed(time)
        );

        Ok(document)
    }

    /// First entry, in feed order, whose type is exactly `form_type`.
    fn select<'a>(&self, entries: &'a [FilingRef]) -> Option<&'a FilingRef> {
        entries
            .iter()
            .find(|entry| entry.filing_type == self.form_type)
    }

    // resolve `href` against the index origin; absolute urls pass through
    fn join(&self, href: &str) -> Result<Url, LocateError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(href))
            .map_err(|source| LocateError::InvalidUrl {
                url: href.to_string(),
                source,
            })
    }
}

/// First link of a filing detail page to a `.txt` file; the link may carry a
/// query or fragment.
fn submission_text_file(html: &str) -> Option<String> {
    elements(html, "a")
        .into_iter()
        .filter_map(|a| a.attribute("href").map(str::to_string))
        .find(|href| SUBMISSION_TEXT_FILE.is_match(href))
}

// GET `url`; a transport error or non-2xx status gives the reason as text.
async fn get<F: Fetch>(fetcher: &F, url: &str) -> Result<String, String> {
    match fetcher.fetch(url).await {
        Ok(page) if page.is_success() => Ok(page.body),
        Ok(page) => Err(format!("status {}", page.status)),
        Err(err) => Err(err.to_string()),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
