//! Single-pass scanner for the RFC 4514 DN string grammar.
//!
//! The scanner walks the input bytes once with an explicit index so it can
//! skip ahead over two-digit hex escapes and inline `#`-prefixed BER values.
//! Escape handling is byte-oriented; multi-byte UTF-8 text that is not part
//! of an escape sequence passes through the default arm untouched.

use der::{Any, Decode, Tagged};

use crate::error::{DnError, DnResult};
use crate::name::{AttributeTypeAndValue, AttributeValue, RdnSequence, RelativeDistinguishedName};
use crate::oids;

/// Characters a backslash escapes literally. Anything else after a backslash
/// must be a two-digit hex escape.
fn is_reserved(ch: u8) -> bool {
    matches!(
        ch,
        b' ' | b'"' | b'#' | b'+' | b',' | b';' | b'<' | b'=' | b'>' | b'\\'
    )
}

/// Drain the accumulation buffer into a token, trimming the unescaped
/// trailing spaces counted so far.
fn flush(buffer: &mut Vec<u8>, trailing_spaces: &mut usize) -> String {
    buffer.truncate(buffer.len() - *trailing_spaces);
    let token = String::from_utf8_lossy(buffer).into_owned();
    buffer.clear();
    *trailing_spaces = 0;
    token
}

/// Decode an inline `#`-prefixed value: a hex string wrapping one BER/DER
/// packet whose content octets become the attribute value.
fn decode_ber_value(hex_digits: &[u8]) -> DnResult<String> {
    let raw = hex::decode(hex_digits).map_err(|e| DnError::BerHexDecode(e.to_string()))?;
    let packet = Any::from_der(&raw).map_err(|e| DnError::BerPacketDecode(e.to_string()))?;
    log::debug!(
        "decoded inline BER value: tag {:?}, {} content bytes",
        packet.tag(),
        packet.value().len()
    );
    Ok(String::from_utf8_lossy(packet.value()).into_owned())
}

/// Parse a DN string into its ordered sequence of RDNs.
///
/// Attribute types are resolved case-insensitively through
/// [`oids::lookup`]; names absent from the table are carried with no OID
/// rather than rejected. A `+` separator appends the pair to the open RDN,
/// a `,` closes the RDN into the sequence.
pub fn parse_rdn_sequence(input: &str) -> DnResult<RdnSequence> {
    let bytes = input.as_bytes();
    let mut rdns: Vec<RelativeDistinguishedName> = Vec::new();
    let mut current = RelativeDistinguishedName::default();

    let mut buffer: Vec<u8> = Vec::new();
    let mut escaping = false;
    let mut trailing_spaces = 0usize;

    // Type staged for the pair under construction. `type_seen` records that
    // an `=` was consumed even when the name resolved to no OID.
    let mut attr_oid = None;
    let mut type_seen = false;

    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        if escaping {
            trailing_spaces = 0;
            escaping = false;
            if is_reserved(ch) {
                buffer.push(ch);
            } else {
                // Not a special character, assume a hex encoded octet.
                if i + 1 >= bytes.len() {
                    return Err(DnError::CorruptedEscape);
                }
                let mut octet = [0u8; 1];
                hex::decode_to_slice(&bytes[i..i + 2], &mut octet)
                    .map_err(|e| DnError::EscapeDecode(e.to_string()))?;
                buffer.push(octet[0]);
                i += 1;
            }
        } else if ch == b'\\' {
            trailing_spaces = 0;
            escaping = true;
        } else if ch == b'=' && !type_seen {
            attr_oid = oids::lookup(&flush(&mut buffer, &mut trailing_spaces));
            type_seen = true;
            // A `#` right after `=` introduces a hex-wrapped BER value; fast
            // forward over it and scan the delimiter normally afterwards.
            if bytes.get(i + 1) == Some(&b'#') {
                let start = i + 2;
                let end = start
                    + bytes[start..]
                        .iter()
                        .position(|b| *b == b',' || *b == b'+')
                        .unwrap_or(bytes.len() - start);
                let rendered = decode_ber_value(&bytes[start..end])?;
                buffer.extend_from_slice(rendered.as_bytes());
                i = end - 1;
            }
        } else if ch == b',' || ch == b'+' {
            // The pair is done, push it.
            if !type_seen {
                return Err(DnError::IncompletePair(format!(
                    "no attribute type before separator at byte {i}"
                )));
            }
            current.attributes.push(AttributeTypeAndValue {
                oid: attr_oid.take(),
                value: AttributeValue::Text(flush(&mut buffer, &mut trailing_spaces)),
            });
            type_seen = false;
            if ch == b',' {
                rdns.push(std::mem::take(&mut current));
            }
        } else if ch == b' ' && buffer.is_empty() {
            // Ignore unescaped leading spaces.
        } else {
            if ch == b' ' {
                // Track unescaped spaces in case they are trailing and must
                // be trimmed at the next flush.
                trailing_spaces += 1;
            } else {
                trailing_spaces = 0;
            }
            buffer.push(ch);
        }
        i += 1;
    }

    if escaping {
        return Err(DnError::CorruptedEscape);
    }
    if !buffer.is_empty() {
        if !type_seen {
            return Err(DnError::IncompletePair(
                "DN ended with no attribute type".to_string(),
            ));
        }
        current.attributes.push(AttributeTypeAndValue {
            oid: attr_oid.take(),
            value: AttributeValue::Text(flush(&mut buffer, &mut trailing_spaces)),
        });
    } else if type_seen {
        return Err(DnError::IncompletePair(
            "DN ended with an attribute type but no value".to_string(),
        ));
    }
    if !current.attributes.is_empty() {
        rdns.push(current);
    }

    Ok(RdnSequence { rdns })
}
