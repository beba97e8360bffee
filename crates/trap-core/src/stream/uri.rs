/// Schemes accepted for an external stream link.
pub const SUPPORTED_SCHEMES: [&str; 2] = ["rtsp", "rtsps"];

/// Scheme and authority of a `scheme://authority/...` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamUri {
    pub scheme: String,
    pub authority: String,
    pub raw: String,
}

impl StreamUri {
    /// Parse `value` as a supported stream URI.
    ///
    /// The value is trimmed. The scheme is compared case-insensitively and
    /// must be one of `SUPPORTED_SCHEMES`; the authority (the part after
    /// `//` up to the next `/`, `?` or `#`) must be non-blank.
    pub fn parse(value: &str) -> Option<Self> {
        let raw = value.trim();
        if raw.is_empty() {
            return None;
        }
        let (scheme, rest) = raw.split_once(':')?;
        if !is_valid_scheme(scheme) {
            return None;
        }
        let scheme = scheme.to_ascii_lowercase();
        if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
            return None;
        }
        let authority = rest
            .strip_prefix("//")?
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        if authority.is_empty() {
            return None;
        }
        Some(Self {
            scheme,
            authority: authority.to_string(),
            raw: raw.to_string(),
        })
    }
}

impl std::fmt::Display for StreamUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

pub fn is_supported_uri(value: &str) -> bool {
    StreamUri::parse(value).is_some()
}
