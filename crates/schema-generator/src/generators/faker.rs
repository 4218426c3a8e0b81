//! Realistic words and named string formats.
//!
//! Everything here draws from the caller's RNG, so re-seeding the generator
//! also resets these values.

use chrono::{DateTime, SecondsFormat, Utc};
use fake::faker::internet::en::{DomainSuffix, IPv4, IPv6, SafeEmail};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use uuid::Uuid;

/// Earliest generated timestamp (2000-01-01T00:00:00Z).
const TIMESTAMP_RANGE_START: i64 = 946_684_800;

/// Latest generated timestamp (2030-12-31T23:59:59Z).
const TIMESTAMP_RANGE_END: i64 = 1_924_991_999;

/// Named `format` values with dedicated generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Uuid,
    Email,
    DateTime,
    Date,
    Time,
    Ipv4,
    Ipv6,
    Uri,
    Hostname,
}

impl StringFormat {
    /// Look up a format by its keyword value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "uuid" => Some(Self::Uuid),
            "email" => Some(Self::Email),
            "date-time" => Some(Self::DateTime),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "ipv4" => Some(Self::Ipv4),
            "ipv6" => Some(Self::Ipv6),
            "uri" | "url" => Some(Self::Uri),
            "hostname" => Some(Self::Hostname),
            _ => None,
        }
    }
}

/// Generate a string for a `format` keyword.
///
/// Unknown format names produce a generic word; that is not an error.
pub fn generate_format<R: Rng>(rng: &mut R, format: &str) -> String {
    let Some(format) = StringFormat::from_name(format) else {
        return word(rng);
    };

    match format {
        StringFormat::Uuid => uuid_v4(rng).to_string(),
        StringFormat::Email => SafeEmail().fake_with_rng(rng),
        StringFormat::DateTime => timestamp(rng).to_rfc3339_opts(SecondsFormat::Secs, true),
        StringFormat::Date => timestamp(rng).format("%Y-%m-%d").to_string(),
        StringFormat::Time => timestamp(rng).format("%H:%M:%S").to_string(),
        StringFormat::Ipv4 => IPv4().fake_with_rng(rng),
        StringFormat::Ipv6 => IPv6().fake_with_rng(rng),
        StringFormat::Uri => {
            let host = hostname(rng);
            let path = word(rng).to_lowercase();
            format!("https://{host}/{path}")
        }
        StringFormat::Hostname => hostname(rng),
    }
}

/// A single lorem word.
pub fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// `length` random lowercase ASCII letters.
pub fn letters<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

/// Generate a random UUID v4 using the provided RNG.
pub fn uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// A random UTC timestamp with whole seconds.
pub fn timestamp<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let secs = rng.gen_range(TIMESTAMP_RANGE_START..=TIMESTAMP_RANGE_END);
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn hostname<R: Rng>(rng: &mut R) -> String {
    let name = word(rng).to_lowercase();
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    format!("{name}.{suffix}")
}
