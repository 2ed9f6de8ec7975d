#![cfg(all(feature = "reqwest", feature = "test"))]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_headhunter::{_preludet::*, error::ResponseError, provider::ProviderConfig};

const CLIENT_ID: &str = "mock_client_id";
const CLIENT_SECRET: &str = "mock_secret";
const REDIRECT_URI: &str = "mock_redirect_uri";

fn config() -> ProviderConfig {
	ProviderConfig::new(CLIENT_ID).with_client_secret(CLIENT_SECRET).with_redirect_uri(REDIRECT_URI)
}

#[tokio::test]
async fn access_token_exchange_parses_hh_token_payload() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), config());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.query_param("code", "mock_authorization_code")
				.query_param("grant_type", "authorization_code")
				.query_param("client_id", CLIENT_ID)
				.query_param("redirect_uri", REDIRECT_URI)
				.header("content-type", "application/x-www-form-urlencoded");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"mock_access_token\",\"token_type\":\"bearer\",\"expires_in\":1209600,\"refresh_token\":\"mock_refresh_token\"}",
			);
		})
		.await;
	let before = OffsetDateTime::now_utc();
	let token = client
		.access_token("mock_authorization_code")
		.await
		.expect("Authorization code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.expose(), "mock_access_token");
	assert_eq!(
		token.refresh_token.as_ref().map(|secret| secret.expose()),
		Some("mock_refresh_token")
	);
	assert_eq!(token.token_type.as_deref(), Some("bearer"));
	assert!(token.resource_owner_id.is_none());

	let expires_at = token.expires_at.expect("Token should carry an expiry.");

	assert!(expires_at >= before + Duration::seconds(1209600));
	assert!(!token.is_expired());
}

#[tokio::test]
async fn token_error_payload_surfaces_provider_error() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), config());
	let body = "{\"error\":\"Foo error\",\"error_description\":\"Error description\"}";
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400).header("content-type", "application/json").body(body);
		})
		.await;
	let err = client
		.access_token("mock_authorization_code")
		.await
		.expect_err("Error payloads must fail the exchange.");

	mock.assert_async().await;

	let Error::Provider(err) = err else {
		panic!("Expected a provider error, got {err:?}.");
	};

	assert_eq!(err.message(), "Foo error: Error description");
	assert_eq!(err.status(), 400);
	assert_eq!(err.body(), body);
}

#[tokio::test]
async fn refresh_exchange_sends_refresh_grant() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), config());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.query_param("grant_type", "refresh_token")
				.query_param("refresh_token", "old-refresh")
				.query_param("code", "");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"new-access\",\"refresh_token\":\"new-refresh\",\"expires_in\":3600}");
		})
		.await;
	let token = client
		.refresh_access_token("old-refresh")
		.await
		.expect("Refresh exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.expose(), "new-access");
	assert_eq!(token.refresh_token.as_ref().map(|secret| secret.expose()), Some("new-refresh"));
}

#[tokio::test]
async fn non_json_token_response_is_rejected() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), config());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(502).header("content-type", "text/html").body("<html>Bad gateway</html>");
		})
		.await;
	let err = client
		.access_token("code")
		.await
		.expect_err("Non-JSON bodies must fail the exchange.");

	mock.assert_async().await;

	assert!(matches!(err, Error::Response(ResponseError::NotAnObject { status: 502, .. })));
}
