use std::{future::Future, io::Write};

use kf_types::{
    consume, Cluster, KfResult, Offset, PartitionStream, RunMode, RunSummary, TopicSet,
};

use crate::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a run did.
pub enum Outcome {
    /// Number of topics listed
    Listed(usize),
    LatestOffset(Offset),
    Streamed(RunSummary),
}

/// Run the configured mode against a connected cluster. Data goes to `out`.
///
/// The cluster, and the partition reader if one is opened, are dropped before this returns,
/// on every path.
pub async fn execute<C, I, W>(
    cluster: C,
    config: &Config,
    interrupt: I,
    out: &mut W,
) -> KfResult<Outcome, C::Error>
where
    C: Cluster,
    I: Future<Output = ()>,
    W: Write,
{
    let topics = TopicSet::new(cluster.topics().await?);
    let partition = config.partition();

    match config.mode() {
        RunMode::ListTopics => {
            for topic in topics.iter() {
                writeln!(out, "{topic}")?;
            }
            out.flush()?;
            Ok(Outcome::Listed(topics.len()))
        }
        RunMode::ShowLatestOffset => {
            let topic = topics.validate(config.topic())?;
            let offset = cluster.latest_offset(topic, partition).await?;
            writeln!(out, "{offset}")?;
            out.flush()?;
            Ok(Outcome::LatestOffset(offset))
        }
        RunMode::Stream {
            start,
            max_messages,
        } => {
            let topic = topics.validate(config.topic())?;
            let mut reader = cluster.open_partition(topic, partition, start).await?;
            log::info!("consumer ready");
            let summary = consume(reader.stream(), interrupt, max_messages, out).await?;
            log::debug!("{summary:?}");
            Ok(Outcome::Streamed(summary))
        }
    }
}
