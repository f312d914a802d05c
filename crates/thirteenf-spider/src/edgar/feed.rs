use crate::markup::{attribute, elements, extract};

/// A filing, as listed by the company browse feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilingRef {
    // e.g., "13F-HR", "13F-HR/A", "13F-NT"
    pub filing_type: String,
    // the filing detail page
    pub link: String,
    pub accession_number: String,
    pub filing_date: String,
}

/// Read the entries of an EDGAR `output=atom` company feed, in feed order.
///
/// Each entry looks like:
// <entry>
//     <category label="form type" scheme="https://www.sec.gov/" term="13F-HR"/>
//     <content type="text/xml">
//         <accession-number>0000102909-24-000123</accession-number>
//         <filing-date>2024-11-14</filing-date>
//         <filing-href>https://www.sec.gov/Archives/edgar/data/102909/.../...-index.htm</filing-href>
//         <filing-type>13F-HR</filing-type>
//         ...
//     </content>
//     <link href="https://www.sec.gov/Archives/edgar/data/102909/.../...-index.htm" rel="alternate" type="text/html"/>
//     <title>13F-HR  - Quarterly report filed by institutional managers, Holdings</title>
//     ...
// </entry>
pub fn parse(text: &str) -> Vec<FilingRef> {
    elements(text, "entry")
        .iter()
        .map(|entry| {
            let entry = Some(entry);
            FilingRef {
                filing_type: or_else(extract(entry, &["content", "filing-type"]), || {
                    attribute(entry, &["category"], "term")
                }),
                link: or_else(attribute(entry, &["link"], "href"), || {
                    extract(entry, &["content", "filing-href"])
                }),
                accession_number: extract(entry, &["content", "accession-number"]),
                filing_date: extract(entry, &["content", "filing-date"]),
            }
        })
        .collect()
}

fn or_else(value: String, fallback: impl FnOnce() -> String) -> String {
    match value.is_empty() {
        true => fallback(),
        false => value,
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
