mod common;

use common::*;
use thirteenf_spider::edgar::{info_table, Locator};
use thirteenf_spider::holding::HEADERS;
use thirteenf_spider::{report, tsv};

#[test]
fn parses_every_info_table_in_order() {
    let holdings = info_table::parse(FILING);
    assert_eq!(holdings.len(), 3);

    let issuers: Vec<&str> = holdings.iter().map(|h| h.name_of_issuer.as_str()).collect();
    assert_eq!(issuers, vec!["APPLE INC", "AT&T INC", "TESLA INC"]);

    // missing <otherManager>
    assert_eq!(holdings[0].other_manager, "");
    assert_eq!(holdings[0].voting_authority_none, "734358");

    // missing <votingAuthority><None>
    assert_eq!(holdings[1].other_manager, "1,4");
    assert_eq!(holdings[1].voting_authority_none, "");
    assert_eq!(holdings[1].voting_authority_shared, "2780");

    // values stay as written
    assert_eq!(holdings[1].value, "0000941");
    assert_eq!(holdings[2].ssh_prnamt, "250000000");
    assert_eq!(holdings[2].ssh_prnamt_type, "PRN");
    assert_eq!(holdings[2].title_of_class, "NOTE 2.000% 5/1");
}

#[test]
fn serialized_report_is_header_plus_rows() {
    let holdings = info_table::parse(FILING);
    let text = tsv::to_string(&holdings).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADERS.join("\t"));
    assert_eq!(
        lines[2],
        "AT&T INC\tCOM\t00206R102\t0000941\t42780\tSH\tDFND\t1,4\t40000\t2780\t"
    );
    assert_eq!(tsv::from_str(&text).unwrap(), holdings);
}

#[tokio::test]
async fn generate_writes_and_returns_the_holdings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0000102909.tsv");

    let holdings = report::generate(
        &Pages::vanguard(),
        &Locator::default(),
        "0000102909",
        &path,
        false,
    )
    .await
    .unwrap();

    assert_eq!(holdings.len(), 3);
    assert_eq!(tsv::read(&path).await.unwrap(), holdings);
}

#[tokio::test]
async fn generate_writes_nothing_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0000102909.tsv");
    let pages = Pages::vanguard().broken(DOCUMENT_URL);

    let result = report::generate(&pages, &Locator::default(), "0000102909", &path, false).await;

    assert!(result.is_err());
    assert!(!path.exists());
}
