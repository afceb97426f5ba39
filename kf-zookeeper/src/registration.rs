use kf_types::BrokerEndpoint;
use serde::Deserialize;

use crate::ZkErr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// The JSON a broker writes to `/brokers/ids/<id>`. Only the fields we need.
pub struct BrokerRegistration {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<i32>,
    /// `PROTOCOL://host:port`, one per listener
    #[serde(default)]
    endpoints: Vec<String>,
}

impl BrokerRegistration {
    pub fn parse(id: &str, data: &[u8]) -> Result<Self, ZkErr> {
        serde_json::from_slice(data).map_err(|source| ZkErr::Registration {
            id: id.to_owned(),
            source,
        })
    }

    /// `host`/`port` when set. Brokers with only named listeners register `null` / `-1`
    /// there; then the first parsable listener endpoint is used.
    pub fn endpoint(&self, id: &str) -> Result<BrokerEndpoint, ZkErr> {
        if let (Some(host), Some(port)) = (&self.host, self.port) {
            if !host.is_empty() {
                if let Ok(port) = u16::try_from(port) {
                    if port != 0 {
                        return Ok(BrokerEndpoint::new(host.as_str(), port));
                    }
                }
            }
        }
        self.endpoints
            .iter()
            .find_map(|e| parse_listener(e))
            .ok_or_else(|| ZkErr::NoEndpoint(id.to_owned()))
    }
}

/// Parse `PROTOCOL://host:port`. The protocol prefix is optional.
pub fn parse_listener(listener: &str) -> Option<BrokerEndpoint> {
    let address = match listener.split_once("://") {
        Some((_, address)) => address,
        None => listener,
    };
    let (host, port) = address.rsplit_once(':')?;
    let port: u16 = port.parse().ok()?;
    if host.is_empty() || port == 0 {
        return None;
    }
    Some(BrokerEndpoint::new(host, port))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_host_and_port() {
        let json = br#"{"listener_security_protocol_map":{"PLAINTEXT":"PLAINTEXT"},"endpoints":["PLAINTEXT://kafka-1:9092"],"jmx_port":-1,"host":"kafka-1","timestamp":"1700000000000","port":9092,"version":4}"#;
        let reg = BrokerRegistration::parse("1", json).unwrap();
        assert_eq!(
            reg.endpoint("1").unwrap(),
            BrokerEndpoint::new("kafka-1", 9092)
        );
    }

    #[test]
    fn test_listener_only() {
        let json = br#"{"endpoints":["SASL_SSL://secure:9094","PLAINTEXT://plain:9092"],"host":null,"port":-1,"version":4}"#;
        let reg = BrokerRegistration::parse("2", json).unwrap();
        assert_eq!(
            reg.endpoint("2").unwrap(),
            BrokerEndpoint::new("secure", 9094)
        );
    }

    #[test]
    fn test_no_endpoint() {
        let json = br#"{"endpoints":[],"host":"","port":9092}"#;
        let reg = BrokerRegistration::parse("3", json).unwrap();
        assert!(matches!(reg.endpoint("3"), Err(ZkErr::NoEndpoint(id)) if id == "3"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            BrokerRegistration::parse("4", b"not json"),
            Err(ZkErr::Registration { id, .. }) if id == "4"
        ));
    }

    #[test]
    fn test_parse_listener() {
        assert_eq!(
            parse_listener("PLAINTEXT://node:9092"),
            Some(BrokerEndpoint::new("node", 9092))
        );
        assert_eq!(
            parse_listener("SSL://[::1]:9093"),
            Some(BrokerEndpoint::new("[::1]", 9093))
        );
        assert_eq!(
            parse_listener("node:9092"),
            Some(BrokerEndpoint::new("node", 9092))
        );
        assert_eq!(parse_listener("PLAINTEXT://:9092"), None);
        assert_eq!(parse_listener("PLAINTEXT://node"), None);
        assert_eq!(parse_listener("PLAINTEXT://node:http"), None);
    }
}
