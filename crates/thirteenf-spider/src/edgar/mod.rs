mod error;

/// The company browse feed; one entry per filing, newest first.
pub mod feed;

/// The information table of a 13F complete submission text file.
pub mod info_table;

/// Walks from an entity identifier to the complete submission text file of
/// its latest filing.
pub mod locator;

pub use error::LocateError;
pub use locator::Locator;

/// Origin of the EDGAR index; override with the `EDGAR_URL` environment
/// variable.
pub const EDGAR_URL: &str = "https://www.sec.gov";

/// Quarterly holdings report; amendments are filed as `13F-HR/A`.
pub const FORM_13F_HR: &str = "13F-HR";

/// Number of filings requested from the index.
pub const INDEX_COUNT: u16 = 50;
