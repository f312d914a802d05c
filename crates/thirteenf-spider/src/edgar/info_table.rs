use crate::holding::Holding;
use crate::markup::{elements, extract, Node};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

lazy_static! {
    // the complete submission envelope wraps each embedded XML document
    static ref XML_FRAGMENT: Regex =
        Regex::new(r"(?s)<XML>(.*?)</XML>").expect("valid XML fragment pattern");
}

/// Parse every `<infoTable>` of a complete submission text file into a
/// [`Holding`], in document order.
///
/// Never fails: fields the filing leaves out are empty, and a file without an
/// information table gives no holdings.
pub fn parse(raw: &str) -> Vec<Holding> {
    let time = std::time::Instant::now();

    let holdings: Vec<Holding> = fragments(raw)
        .into_iter()
        .flat_map(|fragment| elements(fragment, "infoTable"))
        .map(|info_table| holding(&info_table))
        .collect();

    debug!(
        "parsed {} holdings, {}",
        holdings.len(),
        crate::time_elapsed(time)
    );
    holdings
}

// The envelope itself is SGML, so only the `<XML>` documents inside it are
// scanned; text without any is scanned whole.
fn fragments(raw: &str) -> Vec<&str> {
    let fragments: Vec<&str> = XML_FRAGMENT
        .captures_iter(raw)
        .filter_map(|captures| captures.get(1))
        .map(|fragment| fragment.as_str())
        .collect();
    trace!("{} embedded XML documents", fragments.len());

    match fragments.is_empty() {
        true => vec![raw],
        false => fragments,
    }
}

fn holding(info_table: &Node) -> Holding {
    let node = Some(info_table);
    Holding {
        name_of_issuer: extract(node, &["nameOfIssuer"]),
        title_of_class: extract(node, &["titleOfClass"]),
        cusip: extract(node, &["cusip"]),
        value: extract(node, &["value"]),
        ssh_prnamt: extract(node, &["shrsOrPrnAmt", "sshPrnamt"]),
        ssh_prnamt_type: extract(node, &["shrsOrPrnAmt", "sshPrnamtType"]),
        investment_discretion: extract(node, &["investmentDiscretion"]),
        other_manager: extract(node, &["otherManager"]),
        voting_authority_sole: extract(node, &["votingAuthority", "Sole"]),
        voting_authority_shared: extract(node, &["votingAuthority", "Shared"]),
        voting_authority_none: extract(node, &["votingAuthority", "None"]),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
