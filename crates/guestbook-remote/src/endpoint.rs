use std::fmt;
use std::time::Duration;

use ureq::Agent;

use crate::error::RemoteError;

/// A remote URL plus the HTTP agent used to reach it.
///
/// Every method blocks. Async callers run them on the blocking pool.
#[derive(Clone)]
pub struct Endpoint {
    agent: Agent,
    url: String,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint").field("url", &self.url).finish()
    }
}

impl Endpoint {
    /// Non-2xx answers fail with [`RemoteError::Status`].
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// Any status comes back as a body. Only transport failures are errors.
    pub fn passthrough(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET with extra query parameters, returning the raw body.
    pub fn get_text(&self, query: &[(&str, &str)]) -> Result<String, RemoteError> {
        let mut request = self.agent.get(self.url.as_str());
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        let mut response = request.call()?;
        Ok(response.body_mut().read_to_string()?)
    }

    /// POST a JSON document, returning the raw body.
    pub fn post_json(&self, body: &str) -> Result<String, RemoteError> {
        let mut response = self
            .agent
            .post(self.url.as_str())
            .header("Content-Type", "application/json")
            .send(body.as_bytes())?;
        Ok(response.body_mut().read_to_string()?)
    }

    /// POST a URL-encoded form. The fields are repeated in the query string
    /// because script-hosted endpoints often read parameters from there
    /// instead of the body.
    pub fn post_form(&self, fields: &[(&str, &str)]) -> Result<String, RemoteError> {
        let mut request = self.agent.post(self.url.as_str());
        for (key, value) in fields {
            request = request.query(*key, *value);
        }
        let mut response = request.send_form(fields.iter().copied())?;
        Ok(response.body_mut().read_to_string()?)
    }
}
