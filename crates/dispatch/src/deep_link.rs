//! Dispatch encoder: message text to a messaging-service deep link.
//!
//! Layout: `https://<host>/<destination>?text=<percent-encoded text>`. The text
//! is percent-encoded as UTF-8 with everything outside the RFC 3986 unreserved
//! set escaped (`%20` for space, `%0A` for line feed, `%26` for `&`).

use serde::{Deserialize, Serialize};

use varahi_core::{DomainError, DomainResult, ValueObject};

use crate::config::DEFAULT_MESSAGING_HOST;

const TEXT_PARAM: &str = "text";

/// Recipient phone identifier embedded in every deep link (`+` and digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(pub(crate) String);

impl ValueObject for Destination {}

impl Destination {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let digits = id.strip_prefix('+').unwrap_or(&id);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "destination must be an optional '+' followed by digits, got {id:?}"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Destination {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Destination {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Destination> for String {
    fn from(value: Destination) -> Self {
        value.0
    }
}

/// A fully encoded deep link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl ValueObject for DeepLink {}

impl DeepLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The message text carried by this link.
    pub fn text(&self) -> DomainResult<String> {
        decode_text(&self.0)
    }
}

impl core::fmt::Display for DeepLink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeepLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds deep links for one messaging host and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkEncoder {
    host: String,
    destination: Destination,
}

impl DeepLinkEncoder {
    /// Encoder for the default messaging host.
    pub fn new(destination: Destination) -> Self {
        Self::with_host(DEFAULT_MESSAGING_HOST, destination)
    }

    /// Encoder for a specific host. The host is taken as already validated
    /// (see `DispatchConfig`).
    pub fn with_host(host: impl Into<String>, destination: Destination) -> Self {
        Self {
            host: host.into(),
            destination,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Encode `text` as the `text` query parameter of a deep link.
    pub fn encode(&self, text: &str) -> DeepLink {
        DeepLink(format!(
            "https://{}/{}?{}={}",
            self.host,
            self.destination,
            TEXT_PARAM,
            urlencoding::encode(text)
        ))
    }
}

/// Recover the exact message text from a deep link's `text` parameter.
pub fn decode_text(url: &str) -> DomainResult<String> {
    let (_, query) = url
        .split_once('?')
        .ok_or_else(|| DomainError::validation("deep link has no query string"))?;
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    let raw = query
        .split('&')
        .find_map(|pair| match pair.split_once('=') {
            Some((TEXT_PARAM, value)) => Some(value),
            _ => None,
        })
        .ok_or_else(|| DomainError::validation("deep link has no text parameter"))?;

    urlencoding::decode(raw)
        .map(|text| text.into_owned())
        .map_err(|e| DomainError::validation(format!("deep link text is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DESTINATION;

    fn encoder() -> DeepLinkEncoder {
        DeepLinkEncoder::new(Destination::new(DEFAULT_DESTINATION).unwrap())
    }

    #[test]
    fn link_has_host_destination_and_text_param() {
        let link = encoder().encode("Hi");
        assert_eq!(link.as_str(), "https://wa.me/+918333876725?text=Hi");
    }

    #[test]
    fn unsafe_characters_are_escaped() {
        let link = encoder().encode("a b\nc&d=e#f+g");
        let query = link.as_str().split_once('?').unwrap().1;

        assert_eq!(query, "text=a%20b%0Ac%26d%3De%23f%2Bg");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let link = encoder().encode("Namaste 🌱 café");
        assert!(link.as_str().is_ascii());
        assert!(link.as_str().contains("%F0%9F%8C%B1"));
        assert_eq!(link.text().unwrap(), "Namaste 🌱 café");
    }

    #[test]
    fn decode_ignores_other_params_and_fragment() {
        let text =
            decode_text("https://wa.me/+91?lang=en&text=Line%201%0ALine%202#top").unwrap();
        assert_eq!(text, "Line 1\nLine 2");
    }

    #[test]
    fn decode_without_text_param_fails() {
        assert!(matches!(
            decode_text("https://wa.me/+91?lang=en"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            decode_text("https://wa.me/+91"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode_text("https://wa.me/+91?text=%FF%FE").is_err());
    }

    #[test]
    fn destination_accepts_plus_and_digits_only() {
        assert!(Destination::new("+918333876725").is_ok());
        assert!(Destination::new("918333876725").is_ok());
        assert!(Destination::new("").is_err());
        assert!(Destination::new("+").is_err());
        assert!(Destination::new("+91 83338 76725").is_err());
        assert!(Destination::new("91/evil").is_err());
    }

    #[test]
    fn custom_host_is_used() {
        let encoder =
            DeepLinkEncoder::with_host("api.whatsapp.com", Destination::new("+1555").unwrap());
        assert!(encoder.encode("x").as_str().starts_with("https://api.whatsapp.com/+1555?text="));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: decoding the encoded link yields the exact text.
            #[test]
            fn decode_reverses_encode(text in "(?s).{0,200}") {
                let link = encoder().encode(&text);
                prop_assert_eq!(link.text().unwrap(), text);
            }

            /// Property: the query never carries raw separators or whitespace.
            #[test]
            fn encoded_query_has_no_raw_unsafe_bytes(text in "(?s).{0,200}") {
                let link = encoder().encode(&text);
                let (_, value) = link.as_str().split_once("?text=").unwrap();
                prop_assert!(value.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.~%".contains(&b)));
            }
        }
    }
}
