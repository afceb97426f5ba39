use std::time::Duration;

/// The default timeout, if needed but unspecified
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Identifier used for both client id and consumer group when none is given.
pub const DEFAULT_CLIENT_ID: &str = "kf";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Options passed through to the cluster client. They carry no local semantics.
pub struct ClusterOptions {
    client_id: String,
    group: String,
    timeout: Option<Duration>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            client_id: DEFAULT_CLIENT_ID.to_owned(),
            group: DEFAULT_CLIENT_ID.to_owned(),
            timeout: None,
        }
    }
}

impl ClusterOptions {
    pub fn set_client_id<S: Into<String>>(&mut self, id: S) -> &mut Self {
        self.client_id = id.into();
        self
    }
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Consumer group reported to the brokers. Offsets are never committed under it.
    pub fn set_group<S: Into<String>>(&mut self, group: S) -> &mut Self {
        self.group = group.into();
        self
    }
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Timeout for network and metadata requests.
    ///
    /// If unset, defaults to [`DEFAULT_TIMEOUT`].
    pub fn set_timeout(&mut self, v: Duration) -> &mut Self {
        self.timeout = Some(v);
        self
    }
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}
