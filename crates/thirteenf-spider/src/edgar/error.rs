/// Failures while locating a filing; each is terminal for that `locate` call.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("failed to download filing index for {identifier} at {url}, error({reason})")]
    IndexUnavailable {
        identifier: String,
        url: String,
        reason: String,
    },

    #[error("no filings found for ticker or CIK {identifier:?}")]
    NoFilingsFound { identifier: String },

    #[error("failed to find a {form_type} filing in the {searched} most recent filings of {identifier:?}")]
    TargetTypeNotFound {
        identifier: String,
        form_type: String,
        searched: usize,
    },

    #[error("failed to download filing detail at {url}, error({reason})")]
    DetailPageUnavailable { url: String, reason: String },

    #[error("no complete submission text file linked from {url}")]
    DocumentLinkNotFound { url: String },

    #[error("failed to download complete submission text file at {url}, error({reason})")]
    DocumentUnavailable { url: String, reason: String },

    #[error("invalid url {url:?}, error({source})")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
