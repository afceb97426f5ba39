use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use kf::{
    broker_list, execute,
    kafka::KafkaCluster,
    zookeeper::ZkResolver,
    BrokerResolver, Cluster, Config, Flags, Offset,
};

#[derive(Debug, Parser)]
#[clap(name = "kf", version, about = "Print the messages of one partition of a Kafka topic")]
struct Args {
    #[clap(
        short,
        long,
        help = "host:port of zookeeper server (defaults to value of ZOOKEEPER environment variable)",
        env = "ZOOKEEPER"
    )]
    zookeeper: Option<String>,
    #[clap(short, long, help = "list available topics and quit")]
    list: bool,
    #[clap(short = 'a', long, help = "show latest available offset and quit")]
    latest: bool,
    #[clap(short, long, help = "log informative messages (including offsets)")]
    verbose: bool,
    #[clap(
        short,
        long,
        default_value_t = 0,
        help = "maximum number of messages before stopping (0 = never stop)"
    )]
    max: usize,
    #[clap(short = 'b', long, help = "get messages from the beginning")]
    from_beginning: bool,
    #[clap(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "get messages from this offset (0 = get only new messages)"
    )]
    offset: Offset,
    #[clap(short, long, default_value = "kf", help = "consumer group")]
    group: String,
    #[clap(short = 'c', long = "clientid", default_value = "kf", help = "client id")]
    client_id: String,
    #[clap(short, long, default_value_t = 0, help = "partition")]
    partition: i32,
    #[clap(help = "topic to listen for")]
    topic: Option<String>,
}

impl From<Args> for Flags {
    fn from(args: Args) -> Self {
        Flags {
            zookeeper: args.zookeeper,
            list: args.list,
            latest: args.latest,
            verbose: args.verbose,
            max: args.max,
            from_beginning: args.from_beginning,
            offset: args.offset,
            group: Some(args.group),
            client_id: Some(args.client_id),
            partition: args.partition,
            topic: args.topic,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are printed as errors too
            let _ = err.print();
            std::process::exit(exit_code(&err));
        }
    };
    let config = Config::resolve(args.into())?;
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(&config)))
        .init();

    let brokers = ZkResolver::default().resolve(config.zookeeper()).await?;
    log::info!(
        "connecting to kafka, using brokers from zookeeper: {}",
        broker_list(&brokers)
    );
    let cluster = KafkaCluster::connect(&brokers, config.options().clone()).await?;
    log::info!("connected to {} broker(s)", cluster.brokers().len());

    let outcome = execute(cluster, &config, interrupt(), &mut std::io::stdout()).await?;
    log::debug!("{outcome:?}");

    Ok(())
}

/// Usage errors are fatal like any other error.
fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn log_level(config: &Config) -> &'static str {
    if config.verbose() {
        "info"
    } else {
        "warn"
    }
}

/// Resolves on the first Ctrl-C.
async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Cannot listen for interrupt: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("kf").chain(args.iter().copied()))
    }

    #[test]
    fn test_usage_errors_exit_1() {
        let err = parse(&["-z", "zk:2181", "--max", "-1", "x"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
        let err = parse(&["-z", "zk:2181", "--partition", "one", "x"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
        let err = parse(&["--no-such-flag"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_help_and_version_exit_0() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(exit_code(&err), 0);
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(exit_code(&err), 0);
    }

    #[test]
    fn test_negative_offset_parses() {
        let args = parse(&["-z", "zk:2181", "--offset", "-5", "x"]).unwrap();
        assert_eq!(args.offset, -5);
    }

    #[test]
    fn test_log_level_from_config() {
        let args = parse(&["-z", "zk:2181", "-v", "x"]).unwrap();
        assert_eq!(log_level(&Config::resolve(args.into()).unwrap()), "info");
        let args = parse(&["-z", "zk:2181", "x"]).unwrap();
        assert_eq!(log_level(&Config::resolve(args.into()).unwrap()), "warn");
    }
}
