//! Fixed identification header constants.
//!
//! These headers are merged into every outbound request so scanned endpoints
//! can attribute the traffic. A spec's own headers override them on key
//! collision (see the header precedence rules on `dispatch`).

/// Bug bounty program identification header.
pub const HEADER_BUG_BOUNTY: &str = "X-Bug-Bounty";
/// HackerOne researcher handle header.
pub const HEADER_HACKERONE: &str = "X-HackerOne";
/// Researcher contact address header.
pub const HEADER_RESEARCHER_CONTACT: &str = "ResearcherContact";

/// Identification headers sent with every request unless overridden.
///
/// To change the advertised identity, modify this array.
pub const IDENTIFICATION_HEADERS: &[(&str, &str)] = &[
    (HEADER_BUG_BOUNTY, "HackerOne-savik"),
    (HEADER_HACKERONE, "savik"),
    (HEADER_RESEARCHER_CONTACT, "savik@wearehackerone.com"),
];
