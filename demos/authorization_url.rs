//! Builds a HeadHunter authorization redirect and validates the state echoed back by hh.ru.

// std
use std::collections::BTreeMap;
// crates.io
use color_eyre::Result;
// self
use oauth2_headhunter::{
	flows::ProviderClient,
	provider::{HeadHunter, ProviderConfig},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ProviderConfig::new("demo-client")
		.with_client_secret("demo-secret")
		.with_redirect_uri("https://app.example.com/oauth/hh/callback");
	let client = ProviderClient::new(HeadHunter::new(config)?);
	let request = client.authorization_url(BTreeMap::new());

	println!("Send your user to {}.", request.url);
	println!("Remember the state `{}` until hh.ru redirects back.", request.state);

	// Simulate the redirect handler receiving the state query parameter.
	let returned_state = request.state.clone();

	request.validate_state(&returned_state)?;
	println!("State validated; call ProviderClient::access_token with the returned code.");

	Ok(())
}
