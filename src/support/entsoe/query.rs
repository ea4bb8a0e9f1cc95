use serde::Deserialize;

use super::TimeInterval;

/// Base URL of the ENTSO-E Transparency Platform REST API.
pub const API_URL: &str = "https://web-api.tp.entsoe.eu/api";

/// Parameters of an "Actual Generation per Production Type" request.
///
/// Defaults target the Czech control area (`10YCZ-CEPS-----N`) with realised
/// process type `A16` and document type `A75`. The security token has no
/// default and is never read from the environment; callers pass it in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntsoeQuery {
    pub security_token: Option<String>,
    pub in_domain: String,
    pub process_type: String,
    pub document_type: String,
}

impl Default for EntsoeQuery {
    fn default() -> Self {
        Self {
            security_token: None,
            in_domain: "10YCZ-CEPS-----N".to_owned(),
            process_type: "A16".to_owned(),
            document_type: "A75".to_owned(),
        }
    }
}

impl EntsoeQuery {
    /// Returns a copy of this query that authenticates with `token`.
    #[must_use]
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = Some(token.into());
        self
    }

    /// Request parameters for `interval`, in the order the API documents them.
    ///
    /// `securityToken` is omitted when no token is set.
    #[must_use]
    pub fn params(&self, interval: &TimeInterval) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(token) = &self.security_token {
            params.push(("securityToken", token.clone()));
        }
        params.push(("In_Domain", self.in_domain.clone()));
        params.push(("ProcessType", self.process_type.clone()));
        params.push(("DocumentType", self.document_type.clone()));
        params.push(("TimeInterval", interval.to_string()));
        params
    }

    /// Full request URL for `interval`.
    ///
    /// # Example
    ///
    /// ```
    /// use energy_mix::support::entsoe::{EntsoeQuery, TimeInterval};
    ///
    /// let interval = TimeInterval::past_hour("2021-07-07T06:05:00Z".parse().unwrap()).unwrap();
    /// let url = EntsoeQuery::default().url(&interval);
    ///
    /// assert_eq!(
    ///     url,
    ///     "https://web-api.tp.entsoe.eu/api?In_Domain=10YCZ-CEPS-----N\
    ///      &ProcessType=A16&DocumentType=A75&TimeInterval=2021-07-07T05%2F2021-07-07T06",
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, interval: &TimeInterval) -> String {
        let query: Vec<String> = self
            .params(interval)
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("{API_URL}?{}", query.join("&"))
    }
}
