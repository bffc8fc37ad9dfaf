use anyhow::{Context, Result};

/// An allowed redirect origin.
///
/// URLs are normalised down to `(scheme, host, port)`; paths, queries and
/// fragments never affect whether two URLs share an origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl Origin {
    /// Parse an origin from a URL string such as `https://example.com`.
    ///
    /// A bare host (`example.com`) is read as `https://example.com`.
    pub fn parse(s: &str) -> Result<Self> {
        let with_scheme = if s.contains("://") {
            s.to_string()
        } else {
            format!("https://{s}")
        };
        let parsed = url::Url::parse(&with_scheme)
            .with_context(|| format!("invalid redirect origin: {s}"))?;
        Self::from_url(&parsed).ok_or_else(|| anyhow::anyhow!("redirect origin missing host: {s}"))
    }

    /// Origin of a parsed URL; `None` for URLs without a host or known port.
    pub fn from_url(url: &url::Url) -> Option<Self> {
        Some(Self {
            scheme: url.scheme().to_string(),
            host: url.host_str()?.to_ascii_lowercase(),
            port: url.port_or_known_default()?,
        })
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_host_port() {
        let o = Origin::parse("https://example.com:8443/path").unwrap();
        assert_eq!(o.scheme, "https");
        assert_eq!(o.host, "example.com");
        assert_eq!(o.port, 8443);
    }

    #[test]
    fn uses_default_port_when_missing() {
        let o = Origin::parse("http://example.com").unwrap();
        assert_eq!(o.port, 80);
        let o = Origin::parse("example.com").unwrap();
        assert_eq!(o.scheme, "https");
        assert_eq!(o.port, 443);
    }

    #[test]
    fn rejects_hostless() {
        assert!(Origin::parse("file:///tmp/x").is_err());
        assert!(Origin::parse("https://").is_err());
    }
}
