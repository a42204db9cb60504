//! RFC 4514 Distinguished Name Parsing
//!
//! A self-contained library for parsing textual distinguished names, as used
//! in LDAP and in certificate subject/issuer fields, into a structured
//! [`Name`]. Handles character escaping, hex-octet escaping, inline
//! BER-encoded values and multi-valued RDNs per the RFC 4514 string grammar.

pub mod error;
pub mod name;
pub mod oids;
pub mod parser;

pub use error::{DnError, DnResult};
pub use name::{
    AttributeTypeAndValue, AttributeValue, Name, RdnSequence, RelativeDistinguishedName,
    TaggedValue,
};
pub use parser::parse_rdn_sequence;

/// Parse a DN string into a structured [`Name`].
///
/// The string is scanned once into an ordered [`RdnSequence`], projected onto
/// the conventional directory fields, and post-processed so domain-component
/// attributes also surface in [`Name::extra_names`] as IA5-tagged values.
///
/// ```
/// let name = x500_dn::parse_dn("CN=John Doe,OU=People,O=MyCompany")?;
/// assert_eq!(name.common_name.as_deref(), Some("John Doe"));
/// assert_eq!(name.organization, vec!["MyCompany"]);
/// # Ok::<(), x500_dn::DnError>(())
/// ```
pub fn parse_dn(input: &str) -> DnResult<Name> {
    let sequence = parser::parse_rdn_sequence(input)?;
    let mut name = Name::from_rdn_sequence(&sequence);
    name::fill_extra_names(&sequence, &mut name);
    log::trace!("parsed DN string into {} RDNs", sequence.len());
    Ok(name)
}
