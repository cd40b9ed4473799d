use httpmock::prelude::*;
use serde_json::json;

use mrlint_core::{
    AuthConfig, ChangeSetRef, GitLabClient, ProviderClient, ProviderKind, ProxyConfig,
    ReviewError,
};

fn changeset(base_url: &str) -> ChangeSetRef {
    ChangeSetRef::new(
        ProviderKind::GitLab,
        Some(base_url.to_string()),
        Some("42".to_string()),
        None,
        Some(7),
    )
    .unwrap()
}

#[test]
fn invalid_proxy_address_fails_construction() {
    let proxy = ProxyConfig {
        server: "not a proxy address".to_string(),
        username: None,
        password: None,
    };

    let err = GitLabClient::new(
        &changeset("https://git.example.com"),
        AuthConfig::Token("tok".to_string()),
        Some(&proxy),
    )
    .unwrap_err();

    assert!(matches!(err, ReviewError::ConfigurationInvalid(_)));
}

#[test]
fn requests_route_through_the_configured_proxy() {
    let proxy_server = MockServer::start();
    let mock = proxy_server.mock(|when, then| {
        when.method(GET)
            .path("/api/v4/projects/42/merge_requests/7/changes")
            .header("PRIVATE-TOKEN", "tok");
        then.status(200).json_body(json!({
            "changes": [ { "new_path": "src/main/java/A.java" } ]
        }));
    });

    // The upstream host cannot resolve, so a successful fetch proves the
    // request went to the proxy.
    let proxy = ProxyConfig {
        server: proxy_server.base_url(),
        username: None,
        password: None,
    };
    let client = GitLabClient::new(
        &changeset("http://gitlab.upstream.invalid"),
        AuthConfig::Token("tok".to_string()),
        Some(&proxy),
    )
    .unwrap();

    let paths = client.affected_paths().unwrap();

    mock.assert();
    assert_eq!(paths, vec!["src/main/java/A.java"]);
}
