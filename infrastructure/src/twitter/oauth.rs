//! OAuth 1.0a request signing (HMAC-SHA1, user context).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;
use rand::distributions::Alphanumeric;
use ring::hmac;
use std::time::{SystemTime, UNIX_EPOCH};

/// App and user credentials for signing requests.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

/// RFC 3986 percent-encoding (everything except `A-Z a-z 0-9 - . _ ~`).
fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Per-request nonce and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    pub nonce: String,
    pub timestamp: u64,
}

impl Nonce {
    pub fn generate() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self { nonce, timestamp }
    }
}

impl OAuthCredentials {
    fn oauth_params(&self, nonce: &Nonce) -> Vec<(&'static str, String)> {
        vec![
            ("oauth_consumer_key", self.consumer_key.clone()),
            ("oauth_nonce", nonce.nonce.clone()),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", nonce.timestamp.to_string()),
            ("oauth_token", self.token.clone()),
            ("oauth_version", "1.0".to_string()),
        ]
    }

    /// Signature over the OAuth parameters plus `request_params`
    /// (query string and form-encoded body parameters only).
    pub fn signature(
        &self,
        method: &str,
        url: &str,
        request_params: &[(&str, &str)],
        nonce: &Nonce,
    ) -> String {
        let oauth = self.oauth_params(nonce);
        let all = oauth
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(request_params.iter().copied());

        let base = signature_base_string(method, url, all);
        let key = format!("{}&{}", encode(&self.consumer_secret), encode(&self.token_secret));
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key.as_bytes());
        STANDARD.encode(hmac::sign(&key, base.as_bytes()).as_ref())
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        request_params: &[(&str, &str)],
        nonce: &Nonce,
    ) -> String {
        let signature = self.signature(method, url, request_params, nonce);
        let mut params = self.oauth_params(nonce);
        params.push(("oauth_signature", signature));
        params.sort_by(|a, b| a.0.cmp(b.0));

        let fields = params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {}", fields)
    }
}

/// `METHOD&url&params`, each part percent-encoded, params sorted.
pub fn signature_base_string<'a>(
    method: &str,
    url: &str,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&param_string)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from Twitter's "Creating a signature" guide
    fn example() -> (OAuthCredentials, Nonce) {
        (
            OAuthCredentials {
                consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
                consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
                token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
                token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
            },
            Nonce {
                nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".to_string(),
                timestamp: 1318622958,
            },
        )
    }

    const URL: &str = "https://api.twitter.com/1.1/statuses/update.json";
    const PARAMS: &[(&str, &str)] = &[
        ("include_entities", "true"),
        ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
    ];

    #[test]
    fn test_signature_matches_documented_example() {
        let (creds, nonce) = example();
        assert_eq!(
            creds.signature("POST", URL, PARAMS, &nonce),
            "hCtSmYh+iHYCEqBWrE7C7hYmtUk="
        );
    }

    #[test]
    fn test_base_string_encoding() {
        let base = signature_base_string("post", "https://e.com/a b", [("b", "2"), ("a", "x y")]);
        assert_eq!(base, "POST&https%3A%2F%2Fe.com%2Fa%20b&a%3Dx%2520y%26b%3D2");
    }

    #[test]
    fn test_authorization_header() {
        let (creds, nonce) = example();
        let header = creds.authorization_header("POST", URL, PARAMS, &nonce);

        assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", "));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.ends_with("oauth_version=\"1.0\""));
    }

    #[test]
    fn test_generated_nonce() {
        let a = Nonce::generate();
        let b = Nonce::generate();
        assert_eq!(a.nonce.len(), 32);
        assert!(a.nonce.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a.nonce, b.nonce);
        assert!(a.timestamp > 1_600_000_000);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let (creds, _) = example();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
        assert!(debug.contains("<redacted>"));
    }
}
