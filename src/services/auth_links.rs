//! Auth0 endpoints derived from an environment record.

use anyhow::{Context, Result};
use url::Url;

use crate::domain::models::{Auth0Config, ClientEnvironmentConfig};

/// Full tenant domain, e.g. `dev-vccrnzts.us.auth0.com`
pub fn auth0_domain(auth0: &Auth0Config) -> String {
    format!("{}.auth0.com", auth0.url)
}

/// Token issuer the backend expects in the `iss` claim
pub fn issuer(auth0: &Auth0Config) -> String {
    format!("https://{}/", auth0_domain(auth0))
}

/// Key set used to verify tokens issued by the tenant
pub fn jwks_url(auth0: &Auth0Config) -> Result<Url> {
    tenant_url(auth0, "/.well-known/jwks.json")
}

/// Implicit-flow authorize link for the client
///
/// `callback_path` is appended to the configured callback URL to form the
/// `redirect_uri`, e.g. `/tabs/user-page`. A trailing `/` on the callback
/// URL is dropped before a non-empty path is appended.
pub fn login_url(config: &ClientEnvironmentConfig, callback_path: &str) -> Result<Url> {
    let auth0 = &config.auth0;
    let redirect_uri = if callback_path.is_empty() {
        auth0.callback_url.clone()
    } else {
        format!(
            "{}/{}",
            auth0.callback_url.trim_end_matches('/'),
            callback_path.trim_start_matches('/')
        )
    };

    let mut url = tenant_url(auth0, "/authorize")?;
    url.query_pairs_mut()
        .append_pair("audience", &auth0.audience)
        .append_pair("response_type", "token")
        .append_pair("client_id", &auth0.client_id)
        .append_pair("redirect_uri", &redirect_uri);
    Ok(url)
}

fn tenant_url(auth0: &Auth0Config, path: &str) -> Result<Url> {
    let raw = format!("https://{}{}", auth0_domain(auth0), path);
    Url::parse(&raw).with_context(|| format!("Invalid Auth0 tenant URL: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_and_issuer() {
        let auth0 = &ClientEnvironmentConfig::development().auth0;
        assert_eq!(auth0_domain(auth0), "dev-vccrnzts.us.auth0.com");
        assert_eq!(issuer(auth0), "https://dev-vccrnzts.us.auth0.com/");
    }

    #[test]
    fn test_jwks_url() {
        let url = jwks_url(&ClientEnvironmentConfig::development().auth0).unwrap();
        assert_eq!(
            url.as_str(),
            "https://dev-vccrnzts.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_login_url_query() {
        let url = login_url(ClientEnvironmentConfig::development(), "/tabs/user-page").unwrap();
        assert_eq!(url.host_str(), Some("dev-vccrnzts.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("audience".to_string(), "coffee".to_string()),
                ("response_type".to_string(), "token".to_string()),
                (
                    "client_id".to_string(),
                    "lJ0mOD58ItQm2QmdwhCF6hIBFzQkkSv1".to_string()
                ),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:8100/tabs/user-page".to_string()
                ),
            ]
        );
    }

    fn redirect_uri(url: &Url) -> String {
        url.query_pairs()
            .find(|(k, _)| k == "redirect_uri")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default()
    }

    #[test]
    fn test_login_url_joins_callback_with_single_slash() {
        let mut config = ClientEnvironmentConfig::development().clone();
        config.auth0.callback_url = "http://localhost:8100/".to_string();

        let url = login_url(&config, "/tabs/user-page").unwrap();
        assert_eq!(redirect_uri(&url), "http://localhost:8100/tabs/user-page");

        let url = login_url(&config, "tabs/user-page").unwrap();
        assert_eq!(redirect_uri(&url), "http://localhost:8100/tabs/user-page");
    }

    #[test]
    fn test_login_url_without_path_keeps_callback() {
        let mut config = ClientEnvironmentConfig::development().clone();
        config.auth0.callback_url = "http://localhost:8100/".to_string();

        let url = login_url(&config, "").unwrap();
        assert_eq!(redirect_uri(&url), "http://localhost:8100/");
    }

    #[test]
    fn test_login_url_rejects_malformed_prefix() {
        let mut config = ClientEnvironmentConfig::development().clone();
        config.auth0.url = "bad prefix".to_string();
        assert!(login_url(&config, "").is_err());
    }
}
