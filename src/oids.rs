//! Attribute type resolution.
//!
//! Maps the short attribute names of RFC 4514 / X.520 (plus `dc` and `uid`)
//! to their object identifiers. The table is process-wide immutable data,
//! built lazily on first lookup and never mutated afterwards.

use std::collections::HashMap;

use der::asn1::ObjectIdentifier;
use once_cell::sync::Lazy;

/// id-at-commonName (2.5.4.3)
pub const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");
/// id-at-serialNumber (2.5.4.5)
pub const SERIAL_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.5");
/// id-at-countryName (2.5.4.6)
pub const COUNTRY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");
/// id-at-localityName (2.5.4.7)
pub const LOCALITY: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");
/// id-at-stateOrProvinceName (2.5.4.8)
pub const STATE_OR_PROVINCE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");
/// id-at-streetAddress (2.5.4.9)
pub const STREET_ADDRESS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.9");
/// id-at-organizationName (2.5.4.10)
pub const ORGANIZATION: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");
/// id-at-organizationalUnitName (2.5.4.11)
pub const ORGANIZATIONAL_UNIT: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");
/// id-at-postalCode (2.5.4.17)
pub const POSTAL_CODE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.17");
/// domainComponent (0.9.2342.19200300.100.1.25)
pub const DOMAIN_COMPONENT: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.25");
/// userId (0.9.2342.19200300.100.1.1)
pub const USER_ID: ObjectIdentifier = ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.1");

/// Short attribute names, keyed lowercase.
static ATTRIBUTE_TYPES: Lazy<HashMap<&'static str, ObjectIdentifier>> = Lazy::new(|| {
    HashMap::from([
        ("businesscategory", ObjectIdentifier::new_unwrap("2.5.4.15")),
        ("c", COUNTRY),
        ("cn", COMMON_NAME),
        ("dc", DOMAIN_COMPONENT),
        ("description", ObjectIdentifier::new_unwrap("2.5.4.13")),
        ("destinationindicator", ObjectIdentifier::new_unwrap("2.5.4.27")),
        ("distinguishedname", ObjectIdentifier::new_unwrap("2.5.4.49")),
        ("dnqualifier", ObjectIdentifier::new_unwrap("2.5.4.46")),
        ("enhancedsearchguide", ObjectIdentifier::new_unwrap("2.5.4.47")),
        ("facsimiletelephonenumber", ObjectIdentifier::new_unwrap("2.5.4.23")),
        ("generationqualifier", ObjectIdentifier::new_unwrap("2.5.4.44")),
        ("givenname", ObjectIdentifier::new_unwrap("2.5.4.42")),
        ("houseidentifier", ObjectIdentifier::new_unwrap("2.5.4.51")),
        ("initials", ObjectIdentifier::new_unwrap("2.5.4.43")),
        ("internationalisdnnumber", ObjectIdentifier::new_unwrap("2.5.4.25")),
        ("l", LOCALITY),
        ("member", ObjectIdentifier::new_unwrap("2.5.4.31")),
        ("name", ObjectIdentifier::new_unwrap("2.5.4.41")),
        ("o", ORGANIZATION),
        ("ou", ORGANIZATIONAL_UNIT),
        ("owner", ObjectIdentifier::new_unwrap("2.5.4.32")),
        (
            "physicaldeliveryofficename",
            ObjectIdentifier::new_unwrap("2.5.4.19"),
        ),
        ("postaladdress", ObjectIdentifier::new_unwrap("2.5.4.16")),
        ("postalcode", POSTAL_CODE),
        ("postofficebox", ObjectIdentifier::new_unwrap("2.5.4.18")),
        ("preferreddeliverymethod", ObjectIdentifier::new_unwrap("2.5.4.28")),
        ("registeredaddress", ObjectIdentifier::new_unwrap("2.5.4.26")),
        ("roleoccupant", ObjectIdentifier::new_unwrap("2.5.4.33")),
        ("searchguide", ObjectIdentifier::new_unwrap("2.5.4.14")),
        ("seealso", ObjectIdentifier::new_unwrap("2.5.4.34")),
        ("serialnumber", SERIAL_NUMBER),
        ("sn", ObjectIdentifier::new_unwrap("2.5.4.4")),
        ("st", STATE_OR_PROVINCE),
        ("street", STREET_ADDRESS),
        ("telephonenumber", ObjectIdentifier::new_unwrap("2.5.4.20")),
        (
            "teletexterminalidentifier",
            ObjectIdentifier::new_unwrap("2.5.4.22"),
        ),
        ("telexnumber", ObjectIdentifier::new_unwrap("2.5.4.21")),
        ("title", ObjectIdentifier::new_unwrap("2.5.4.12")),
        ("uid", USER_ID),
        ("uniquemember", ObjectIdentifier::new_unwrap("2.5.4.50")),
        ("userpassword", ObjectIdentifier::new_unwrap("2.5.4.35")),
        ("x121address", ObjectIdentifier::new_unwrap("2.5.4.24")),
    ])
});

/// Resolve a short attribute name, case-insensitively, to its OID.
///
/// Returns `None` for names not in the table. Unknown or vendor-specific
/// attribute types are not an error at this layer; the parser carries them
/// forward without a type and the projector routes them to
/// [`Name::extra_names`](crate::Name::extra_names).
#[must_use]
pub fn lookup(short_name: &str) -> Option<ObjectIdentifier> {
    ATTRIBUTE_TYPES
        .get(short_name.to_ascii_lowercase().as_str())
        .copied()
}
