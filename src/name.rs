//! Structured representation of parsed distinguished names.
//!
//! The parser produces an [`RdnSequence`]; [`Name::from_rdn_sequence`]
//! projects it onto the conventional directory fields (common name,
//! organization, ...) with a fallback bucket for attribute types it does not
//! recognize.

use der::asn1::ObjectIdentifier;
use der::Tag;

use crate::oids;

/// A raw ASN.1 value carrying its tag (with class) and content octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedValue {
    pub tag: Tag,
    pub bytes: Vec<u8>,
}

/// The value half of an attribute-type-and-value pair.
///
/// Values scanned from the string form are [`Text`](AttributeValue::Text);
/// the domain-component post-pass produces [`Tagged`](AttributeValue::Tagged)
/// entries wrapping the value bytes as an IA5 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Tagged(TaggedValue),
}

impl AttributeValue {
    /// The textual value, or `None` for tagged raw values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Tagged(_) => None,
        }
    }
}

/// One attribute-type-and-value pair of an RDN.
///
/// `oid` is `None` when the attribute type in the input was not found in the
/// short-name table; such pairs are kept rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTypeAndValue {
    pub oid: Option<ObjectIdentifier>,
    pub value: AttributeValue,
}

/// A relative distinguished name: the attributes joined by `+` in the input.
///
/// Semantically a set, kept in insertion order for determinism. Duplicate
/// attribute types are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeDistinguishedName {
    pub attributes: Vec<AttributeTypeAndValue>,
}

/// An ordered sequence of RDNs, as encountered left to right in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RdnSequence {
    pub rdns: Vec<RelativeDistinguishedName>,
}

impl RdnSequence {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rdns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }
}

/// A distinguished name projected onto named directory fields.
///
/// Single-valued fields keep the last value encountered; multi-valued fields
/// append in encounter order. `names` records every attribute of the
/// sequence, so no attribute is lost to the projection; `extra_names`
/// additionally collects attributes whose type did not resolve, plus the
/// IA5-tagged domain-component entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    pub common_name: Option<String>,
    pub serial_number: Option<String>,
    pub country: Vec<String>,
    pub locality: Vec<String>,
    pub province: Vec<String>,
    pub street_address: Vec<String>,
    pub postal_code: Vec<String>,
    pub organization: Vec<String>,
    pub organizational_unit: Vec<String>,
    /// Every attribute of the sequence, in encounter order.
    pub names: Vec<AttributeTypeAndValue>,
    /// Attributes with unresolved types, and re-tagged domain components.
    pub extra_names: Vec<AttributeTypeAndValue>,
}

impl Name {
    /// Project an RDN sequence onto the named fields.
    #[must_use]
    pub fn from_rdn_sequence(sequence: &RdnSequence) -> Self {
        let mut name = Name::default();
        for rdn in &sequence.rdns {
            for atv in &rdn.attributes {
                name.names.push(atv.clone());
                let Some(oid) = atv.oid else {
                    name.extra_names.push(atv.clone());
                    continue;
                };
                let AttributeValue::Text(value) = &atv.value else {
                    continue;
                };
                if oid == oids::COMMON_NAME {
                    name.common_name = Some(value.clone());
                } else if oid == oids::SERIAL_NUMBER {
                    name.serial_number = Some(value.clone());
                } else if oid == oids::COUNTRY {
                    name.country.push(value.clone());
                } else if oid == oids::LOCALITY {
                    name.locality.push(value.clone());
                } else if oid == oids::STATE_OR_PROVINCE {
                    name.province.push(value.clone());
                } else if oid == oids::STREET_ADDRESS {
                    name.street_address.push(value.clone());
                } else if oid == oids::POSTAL_CODE {
                    name.postal_code.push(value.clone());
                } else if oid == oids::ORGANIZATION {
                    name.organization.push(value.clone());
                } else if oid == oids::ORGANIZATIONAL_UNIT {
                    name.organizational_unit.push(value.clone());
                }
            }
        }
        name
    }
}

/// Re-tag domain-component attributes as IA5 strings into `extra_names`.
///
/// Domain component has a registered OID and therefore never reaches the
/// unresolved-type bucket on its own; this pass surfaces it there with the
/// string type its schema registers (IA5String, universal tag 22).
pub(crate) fn fill_extra_names(sequence: &RdnSequence, name: &mut Name) {
    for rdn in &sequence.rdns {
        for atv in &rdn.attributes {
            if atv.oid != Some(oids::DOMAIN_COMPONENT) {
                continue;
            }
            let AttributeValue::Text(value) = &atv.value else {
                continue;
            };
            name.extra_names.push(AttributeTypeAndValue {
                oid: atv.oid,
                value: AttributeValue::Tagged(TaggedValue {
                    tag: Tag::Ia5String,
                    bytes: value.clone().into_bytes(),
                }),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_atv(oid: Option<ObjectIdentifier>, value: &str) -> AttributeTypeAndValue {
        AttributeTypeAndValue {
            oid,
            value: AttributeValue::Text(value.to_string()),
        }
    }

    fn sequence_of(attributes: Vec<AttributeTypeAndValue>) -> RdnSequence {
        RdnSequence {
            rdns: attributes
                .into_iter()
                .map(|atv| RelativeDistinguishedName {
                    attributes: vec![atv],
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_valued_fields_keep_last_value() {
        let sequence = sequence_of(vec![
            text_atv(Some(oids::COMMON_NAME), "first"),
            text_atv(Some(oids::COMMON_NAME), "second"),
        ]);
        let name = Name::from_rdn_sequence(&sequence);
        assert_eq!(name.common_name.as_deref(), Some("second"));
        assert_eq!(name.names.len(), 2);
    }

    #[test]
    fn test_multi_valued_fields_append_in_order() {
        let sequence = sequence_of(vec![
            text_atv(Some(oids::ORGANIZATIONAL_UNIT), "a"),
            text_atv(Some(oids::ORGANIZATIONAL_UNIT), "b"),
            text_atv(Some(oids::COUNTRY), "NO"),
        ]);
        let name = Name::from_rdn_sequence(&sequence);
        assert_eq!(name.organizational_unit, vec!["a", "b"]);
        assert_eq!(name.country, vec!["NO"]);
    }

    #[test]
    fn test_unresolved_types_fall_back_to_extra_names() {
        let sequence = sequence_of(vec![
            text_atv(Some(oids::COMMON_NAME), "x"),
            text_atv(None, "anything"),
        ]);
        let name = Name::from_rdn_sequence(&sequence);
        assert_eq!(name.extra_names.len(), 1);
        assert_eq!(name.extra_names[0].oid, None);
        assert_eq!(name.extra_names[0].value.as_text(), Some("anything"));
    }

    #[test]
    fn test_registered_but_unprojected_types_stay_in_names_only() {
        let title = crate::oids::lookup("title");
        let sequence = sequence_of(vec![text_atv(title, "boss")]);
        let name = Name::from_rdn_sequence(&sequence);
        assert_eq!(name.names.len(), 1);
        assert!(name.extra_names.is_empty());
    }

    #[test]
    fn test_fill_extra_names_retags_domain_component() {
        let sequence = sequence_of(vec![text_atv(Some(oids::DOMAIN_COMPONENT), "example")]);
        let mut name = Name::from_rdn_sequence(&sequence);
        assert!(name.extra_names.is_empty());

        fill_extra_names(&sequence, &mut name);
        assert_eq!(name.extra_names.len(), 1);
        match &name.extra_names[0].value {
            AttributeValue::Tagged(tagged) => {
                assert_eq!(tagged.tag, Tag::Ia5String);
                assert_eq!(tagged.bytes, b"example");
            }
            other => panic!("expected tagged value, got {other:?}"),
        }
    }
}
