use std::time::Duration;
use zookeeper::{WatchedEvent, Watcher, ZooKeeper};

use kf_types::{export::async_trait, runtime_error, BrokerEndpoint, BrokerResolver, KfErr};

use crate::{zk_err, BrokerRegistration, ZkErr, ZkResult, BROKER_IDS_PATH};

/// Session timeout used when none is given
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
/// Looks up the brokers registered in ZooKeeper. Each lookup opens and closes its own session.
pub struct ZkResolver {
    session_timeout: Duration,
}

struct LogWatcher;

impl Watcher for LogWatcher {
    fn handle(&self, event: WatchedEvent) {
        log::debug!("zookeeper: {event:?}");
    }
}

impl Default for ZkResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TIMEOUT)
    }
}

impl ZkResolver {
    pub fn new(session_timeout: Duration) -> Self {
        Self { session_timeout }
    }

    pub fn session_timeout(&self) -> Duration {
        self.session_timeout
    }
}

#[async_trait]
impl BrokerResolver for ZkResolver {
    type Error = ZkErr;

    async fn resolve(&self, address: &str) -> ZkResult<Vec<BrokerEndpoint>> {
        let address = address.to_owned();
        let timeout = self.session_timeout;
        // the zookeeper client is sync
        match tokio::task::spawn_blocking(move || lookup_brokers(&address, timeout)).await {
            Ok(res) => res,
            Err(err) => Err(runtime_error(err)),
        }
    }
}

fn lookup_brokers(address: &str, timeout: Duration) -> ZkResult<Vec<BrokerEndpoint>> {
    let zk = ZooKeeper::connect(address, timeout, LogWatcher).map_err(zk_err)?;
    let res = read_brokers(&zk);
    if let Err(err) = zk.close() {
        log::warn!("Failed to close zookeeper session: {err}");
    }
    res
}

fn read_brokers(zk: &ZooKeeper) -> ZkResult<Vec<BrokerEndpoint>> {
    let mut ids = zk.get_children(BROKER_IDS_PATH, false).map_err(zk_err)?;
    sort_broker_ids(&mut ids);

    let mut brokers = Vec::with_capacity(ids.len());
    for id in ids {
        let (data, _) = zk
            .get_data(&format!("{BROKER_IDS_PATH}/{id}"), false)
            .map_err(zk_err)?;
        let endpoint = BrokerRegistration::parse(&id, &data)
            .and_then(|reg| reg.endpoint(&id))
            .map_err(KfErr::Backend)?;
        log::debug!("broker {id} at {endpoint}");
        brokers.push(endpoint);
    }

    if brokers.is_empty() {
        return Err(zk_err(ZkErr::NoBroker));
    }
    Ok(brokers)
}

/// Numeric order; ids that are not numbers go last, in string order.
pub fn sort_broker_ids(ids: &mut [String]) {
    ids.sort_by_cached_key(|id| match id.parse::<i64>() {
        Ok(n) => (false, n, String::new()),
        Err(_) => (true, 0, id.clone()),
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sort_broker_ids() {
        let mut ids: Vec<String> = ["10", "2", "x", "1", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_broker_ids(&mut ids);
        assert_eq!(ids, ["1", "2", "10", "b", "x"]);
    }

    #[test]
    fn test_default() {
        assert_eq!(
            ZkResolver::default().session_timeout(),
            DEFAULT_SESSION_TIMEOUT
        );
    }
}
