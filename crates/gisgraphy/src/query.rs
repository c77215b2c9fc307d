//! Query string construction
//!
//! Parameters keep insertion order and are form-encoded (`+` for spaces).

use std::fmt::Display;

use url::form_urlencoded;

use crate::config::GisgraphyConfig;

/// Ordered set of query parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base parameters sent with every request: `format`, `indent` and `api_key` when set
    #[must_use]
    pub fn with_defaults(config: &GisgraphyConfig) -> Self {
        let mut params = Self::new();
        params.push("format", "JSON");
        params.push_bool("indent", false);
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            params.push("api_key", key);
        }
        params
    }

    /// Append a string parameter
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Append a boolean as `true`/`false`
    pub fn push_bool(&mut self, key: &str, value: bool) {
        self.push(key, if value { "true" } else { "false" });
    }

    /// Append a number in decimal form
    pub fn push_number(&mut self, key: &str, value: impl Display) {
        self.push(key, value.to_string());
    }

    /// Append a string parameter only if it is present and non-empty
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
    }

    /// Look up the first value for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters were added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as `?k=v&k=v`; an empty set encodes to an empty string
    #[must_use]
    pub fn encode(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
        serializer.extend_pairs(self.pairs.iter());
        serializer.finish()
    }

    /// Same as [`Self::encode`] with the `api_key` value masked, for logs
    #[must_use]
    pub fn encode_redacted(&self) -> String {
        let redacted = Self {
            pairs: self
                .pairs
                .iter()
                .map(|(k, v)| {
                    if k == "api_key" {
                        (k.clone(), "***".to_string())
                    } else {
                        (k.clone(), v.clone())
                    }
                })
                .collect(),
        };
        redacted.encode()
    }

    /// Decode a query string produced by [`Self::encode`] (leading `?` optional)
    #[must_use]
    pub fn decode(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }
}
