use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::error::{Error, Result};

/// Marker the meal plan site puts in the page when a login is rejected.
pub const INVALID_LOGIN_MARKER: &str = "Your login information is not valid";
/// Query parameter every resolved event page carries.
pub const EVENT_ID_MARKER: &str = "event_id";

pub fn make_client() -> Result<Client> {
    Ok(Client::builder().gzip(true).build()?)
}

/// Login details for the meal plan account pages.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fetches a calendar page. The registrar redirects missing courses to a
/// generic page, so any change of url means the course does not exist.
#[instrument(skip_all, fields(url = %url), level = Level::TRACE)]
pub async fn fetch_source(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    ensure_resolved(url, response.url())?;
    let start = std::time::Instant::now();
    let text = response.text().await?;
    log::trace!("Got text of {url} in \t {:?}", start.elapsed());
    Ok(text)
}

/// Fetches an event page; the event exists when the final url still names an event.
#[instrument(skip_all, fields(url = %url), level = Level::TRACE)]
pub async fn fetch_event_source(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    ensure_event_resolved(url, response.url())?;
    Ok(response.text().await?)
}

/// Logs in to the meal plan site and returns the balance page.
#[instrument(skip_all, fields(url = %login_url, username = %credentials.username), level = Level::TRACE)]
pub async fn fetch_balance_source(
    client: &Client,
    login_url: &Url,
    credentials: &Credentials,
) -> Result<String> {
    let form = [
        ("j_username", credentials.username.as_str()),
        ("j_password", credentials.password.as_str()),
        ("args", "action=balance"),
        ("redirect", "/accountservices/chooseaccount.cfm"),
    ];
    let response = client.post(login_url.clone()).form(&form).send().await?;
    let text = response.text().await?;
    ensure_logged_in(&text)?;
    Ok(text)
}

pub fn ensure_resolved(requested: &Url, resolved: &Url) -> Result<()> {
    if requested == resolved {
        Ok(())
    } else {
        log::debug!("{requested} resolved to {resolved}");
        Err(Error::NotFound(requested.to_string()))
    }
}

pub fn ensure_event_resolved(requested: &Url, resolved: &Url) -> Result<()> {
    if resolved.as_str().contains(EVENT_ID_MARKER) {
        Ok(())
    } else {
        log::debug!("{requested} resolved to {resolved}, which is not an event");
        Err(Error::NotFound(requested.to_string()))
    }
}

pub fn ensure_logged_in(body: &str) -> Result<()> {
    if body.contains(INVALID_LOGIN_MARKER) {
        Err(Error::Authentication)
    } else {
        Ok(())
    }
}
