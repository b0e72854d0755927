use std::sync::OnceLock;

use regex::Regex;

use crate::adapters::http::client;
use crate::core::errors::Result;
use crate::core::models::app_identifier::AppIdentifier;
use crate::core::models::discovery::{DiscoveredKeys, DiscoveryAttempt};
use crate::core::traits::discovery::KeyDiscovery;

const PUBKEYS_META: &str = "ac-discovery-pubkeys";

fn meta_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("static regex is valid"))
}

fn attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?is)([a-z][a-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("static regex is valid")
    })
}

/// Extract key URLs from `<meta name="ac-discovery-pubkeys" content="prefix url">`
/// tags whose prefix covers `app_name`.
pub fn parse_pubkey_meta(html: &str, app_name: &str) -> Vec<String> {
    let mut urls = Vec::new();

    for tag in meta_tag_pattern().find_iter(html) {
        let mut name = None;
        let mut content = None;
        for cap in attribute_pattern().captures_iter(tag.as_str()) {
            let value = cap.get(2).or_else(|| cap.get(3)).map(|m| m.as_str());
            match cap[1].to_ascii_lowercase().as_str() {
                "name" => name = value,
                "content" => content = value,
                _ => {}
            }
        }

        if name != Some(PUBKEYS_META) {
            continue;
        }
        let Some(content) = content else { continue };

        let fields: Vec<&str> = content.split_whitespace().collect();
        if let [prefix, url] = fields[..] {
            if app_name.starts_with(prefix) {
                urls.push(url.to_string());
            }
        }
    }

    urls
}

/// Public key discovery through HTML meta tags served at
/// `https://<prefix>?ac-discovery=1`.
#[derive(Debug, Default, Clone)]
pub struct MetaDiscovery;

impl MetaDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Walk the name's prefixes, longest first, until one yields keys.
    ///
    /// `fetch_page` returns the body of a 200 response or a description of
    /// the failure.
    pub fn walk<F>(
        app: &AppIdentifier,
        allow_insecure_http: bool,
        mut fetch_page: F,
    ) -> DiscoveredKeys
    where
        F: FnMut(&str) -> std::result::Result<String, String>,
    {
        let mut found = DiscoveredKeys::default();

        for prefix in app.walk_prefixes() {
            let mut schemes = vec!["https"];
            if allow_insecure_http {
                schemes.push("http");
            }

            let mut last_error = String::new();
            let mut page = None;
            for scheme in schemes {
                match fetch_page(&format!("{scheme}://{prefix}?ac-discovery=1")) {
                    Ok(body) => {
                        page = Some(body);
                        break;
                    }
                    Err(e) => last_error = e,
                }
            }

            let Some(page) = page else {
                found.attempts.push(DiscoveryAttempt {
                    prefix: prefix.to_string(),
                    error: last_error,
                });
                continue;
            };

            let urls = parse_pubkey_meta(&page, &app.name);
            if urls.is_empty() {
                found.attempts.push(DiscoveryAttempt {
                    prefix: prefix.to_string(),
                    error: "no matching meta tags".into(),
                });
                continue;
            }

            found.key_locations = urls;
            break;
        }

        found
    }
}

impl KeyDiscovery for MetaDiscovery {
    fn discover(&self, app: &AppIdentifier, allow_insecure_http: bool) -> Result<DiscoveredKeys> {
        let rt = client::runtime()?;
        let http = client::build_client()?;

        let fetch_page = |url: &str| {
            rt.block_on(async {
                let resp = http.get(url).send().await.map_err(|e| e.to_string())?;
                if resp.status() != reqwest::StatusCode::OK {
                    return Err(format!("bad HTTP status code: {}", resp.status().as_u16()));
                }
                let body = resp.text().await.map_err(|e| e.to_string())?;
                Ok::<_, String>(body)
            })
        };

        Ok(Self::walk(app, allow_insecure_http, fetch_page))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta name="ac-discovery" content="example.com https://example.com/{name}-{version}.{ext}">
    <meta name="ac-discovery-pubkeys" content="example.com https://example.com/pubkeys.gpg">
    <META content='example.com/other https://example.com/other.gpg' NAME='ac-discovery-pubkeys'/>
    <meta name="ac-discovery-pubkeys" content="example.com/app https://example.com/app.gpg">
  </head>
</html>"#;

    fn app(name: &str) -> AppIdentifier {
        AppIdentifier::parse(name).unwrap()
    }

    #[test]
    fn keeps_only_tags_covering_the_app() {
        let urls = parse_pubkey_meta(PAGE, "example.com/app");
        assert_eq!(
            urls,
            vec!["https://example.com/pubkeys.gpg", "https://example.com/app.gpg"]
        );
    }

    #[test]
    fn attribute_order_and_case_do_not_matter() {
        let urls = parse_pubkey_meta(PAGE, "example.com/other");
        assert!(urls.contains(&"https://example.com/other.gpg".to_string()));
    }

    #[test]
    fn malformed_content_is_skipped() {
        let page = r#"<meta name="ac-discovery-pubkeys" content="example.com">"#;
        assert!(parse_pubkey_meta(page, "example.com").is_empty());
    }

    #[test]
    fn walk_stops_at_first_prefix_with_keys() {
        let pages: HashMap<&str, &str> = [
            ("https://example.com/team?ac-discovery=1", PAGE),
            ("https://example.com?ac-discovery=1", PAGE),
        ]
        .into_iter()
        .collect();
        let mut requested = Vec::new();

        let found = MetaDiscovery::walk(&app("example.com/team/app"), false, |url| {
            requested.push(url.to_string());
            pages
                .get(url)
                .map(|p| p.to_string())
                .ok_or_else(|| "404".to_string())
        });

        assert_eq!(found.key_locations, vec!["https://example.com/pubkeys.gpg"]);
        assert_eq!(
            requested,
            vec![
                "https://example.com/team/app?ac-discovery=1",
                "https://example.com/team?ac-discovery=1",
            ]
        );
        assert_eq!(found.attempts.len(), 1);
        assert_eq!(found.attempts[0].prefix, "example.com/team/app");
    }

    #[test]
    fn plaintext_fallback_only_when_allowed() {
        let mut requested = Vec::new();
        let found = MetaDiscovery::walk(&app("example.com"), false, |url| {
            requested.push(url.to_string());
            Err("connection refused".into())
        });
        assert!(found.key_locations.is_empty());
        assert_eq!(requested, vec!["https://example.com?ac-discovery=1"]);

        requested.clear();
        let found = MetaDiscovery::walk(&app("example.com"), true, |url| {
            requested.push(url.to_string());
            if url.starts_with("http://") {
                Ok(PAGE.to_string())
            } else {
                Err("connection refused".into())
            }
        });
        assert_eq!(found.key_locations, vec!["https://example.com/pubkeys.gpg"]);
        assert_eq!(requested.len(), 2);
    }

    #[test]
    fn every_failed_step_is_an_attempt() {
        let found = MetaDiscovery::walk(&app("example.com/a/b"), false, |_| {
            Ok("<html></html>".to_string())
        });
        assert!(found.key_locations.is_empty());
        let prefixes: Vec<&str> = found.attempts.iter().map(|a| a.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["example.com/a/b", "example.com/a", "example.com"]);
    }
}
