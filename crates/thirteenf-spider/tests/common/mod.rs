#![allow(dead_code)]

use std::collections::HashMap;
use thirteenf_spider::http::{Fetch, Page};

pub const INDEX_URL: &str = "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany\
    &CIK=0000102909&type=13F-HR&dateb=&owner=exclude&start=0&count=50&output=atom";
pub const DETAIL_URL: &str = "https://www.sec.gov/Archives/edgar/data/102909/000010290924000123/0000102909-24-000123-index.htm";
pub const DOCUMENT_URL: &str =
    "https://www.sec.gov/Archives/edgar/data/102909/000010290924000123/0000102909-24-000123.txt";

pub const FEED: &str = include_str!("../files/feed.xml");
pub const DETAIL: &str = include_str!("../files/detail.htm");
pub const FILING: &str = include_str!("../files/13f-hr.txt");

/// In-memory EDGAR; unknown urls are `404`, and urls marked as broken fail
/// at the transport level.
#[derive(Default)]
pub struct Pages {
    pages: HashMap<String, Page>,
    broken: Vec<String>,
}

impl Pages {
    /// Every page of a successful Vanguard Group 13F-HR lookup.
    pub fn vanguard() -> Self {
        Self::default()
            .with(INDEX_URL, Page::new(200, FEED))
            .with(DETAIL_URL, Page::new(200, DETAIL))
            .with(DOCUMENT_URL, Page::new(200, FILING))
    }

    pub fn with(mut self, url: &str, page: Page) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn broken(mut self, url: &str) -> Self {
        self.broken.push(url.to_string());
        self
    }
}

impl Fetch for Pages {
    async fn fetch(&self, url: &str) -> anyhow::Result<Page> {
        if self.broken.iter().any(|broken| broken == url) {
            return Err(anyhow::anyhow!("connection reset by peer"));
        }
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Page::new(404, "Not Found")))
    }
}
