/// Holdings disclosed within a 13F filing, and their tabular (`.tsv`) form.
pub mod holding;
pub mod tsv;

/// Lenient markup scanning, shared by the feed, detail page and filing parsers.
pub mod markup;

/// Filing documents, from the [EDGAR] company browse feed through to the
/// information table of a complete submission text file.
///
/// [EDGAR]: https://www.sec.gov/edgar/search-and-access
pub mod edgar;

pub mod report;

pub(crate) mod tui;

/// Shortcut for required API elements.
pub mod http {
    pub use dotenv::var;
    pub use reqwest::Client as HttpClient;

    /// A fetched page; the status code and the body text.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Page {
        pub status: u16,
        pub body: String,
    }

    impl Page {
        pub fn new(status: u16, body: impl Into<String>) -> Self {
            Self {
                status,
                body: body.into(),
            }
        }

        /// `2xx` status codes.
        pub fn is_success(&self) -> bool {
            (200..300).contains(&self.status)
        }
    }

    /// The transport capability: GET `url`, returning the status and body.
    ///
    /// Implemented for [`HttpClient`]; tests substitute an in-memory map of
    /// pages.
    #[allow(async_fn_in_trait)]
    pub trait Fetch {
        async fn fetch(&self, url: &str) -> anyhow::Result<Page>;
    }

    impl Fetch for HttpClient {
        async fn fetch(&self, url: &str) -> anyhow::Result<Page> {
            let response = self.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(Page { status, body })
        }
    }
}

/// Build the standard http client; EDGAR rejects requests without a
/// `USER_AGENT` identifying the caller.
pub fn std_client_build() -> anyhow::Result<http::HttpClient> {
    let user_agent = http::var("USER_AGENT")
        .map_err(|err| anyhow::anyhow!("environment variable USER_AGENT: {err}"))?;
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
