use serde::Deserialize;

/// Header row of a holdings report, in field order.
pub const HEADERS: [&str; 11] = [
    "nameOfIssuer",
    "titleOfClass",
    "cusip",
    "value",
    "sshPrnamt",
    "sshPrnamtType",
    "investmentDiscretion",
    "otherManager",
    "votingAuthoritySole",
    "votingAuthorityShared",
    "votingAuthorityNone",
];

/// One disclosed position within a 13F filing.
///
/// Every field is kept exactly as the filing writes it; `value` is whatever
/// unit the filing reports in (usually thousands of dollars), and amounts are
/// never parsed to numbers. Missing fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub name_of_issuer: String,
    pub title_of_class: String,
    pub cusip: String,
    pub value: String,
    pub ssh_prnamt: String,
    // "SH" (shares) or "PRN" (principal amount)
    pub ssh_prnamt_type: String,
    pub investment_discretion: String,
    pub other_manager: String,
    pub voting_authority_sole: String,
    pub voting_authority_shared: String,
    pub voting_authority_none: String,
}

impl Holding {
    /// The field values, in [`HEADERS`] order.
    pub fn to_record(&self) -> [&str; 11] {
        [
            self.name_of_issuer.as_str(),
            self.title_of_class.as_str(),
            self.cusip.as_str(),
            self.value.as_str(),
            self.ssh_prnamt.as_str(),
            self.ssh_prnamt_type.as_str(),
            self.investment_discretion.as_str(),
            self.other_manager.as_str(),
            self.voting_authority_sole.as_str(),
            self.voting_authority_shared.as_str(),
            self.voting_authority_none.as_str(),
        ]
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////
