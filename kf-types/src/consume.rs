use futures::{pin_mut, select_biased, FutureExt, Stream, StreamExt};
use std::{fmt::Display, future::Future, io::Write};

use crate::{KfResult, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a consumption run ended.
pub enum Termination {
    /// The message limit was reached.
    Completed,
    /// The interrupt signal was received.
    Interrupted,
    /// The partition stream ended on its own.
    Exhausted,
}

#[derive(Debug)]
/// One wake-up of the consumption loop.
pub enum Event<E> {
    Message(Record),
    Error(E),
    Interrupt,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State of a consumption run. Once terminated, further events are ignored.
pub struct RunState {
    consumed: usize,
    max_messages: usize,
    terminated: Option<Termination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub consumed: usize,
    pub termination: Termination,
}

impl RunState {
    /// `max_messages == 0` never terminates on count.
    pub fn new(max_messages: usize) -> Self {
        Self {
            consumed: 0,
            max_messages,
            terminated: None,
        }
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn terminated(&self) -> Option<Termination> {
        self.terminated
    }

    /// Apply one event. A message is written to `out` as one line of raw value bytes.
    /// Returns the termination once reached; it is absorbing.
    pub fn advance<E, W>(
        &mut self,
        event: Event<E>,
        out: &mut W,
    ) -> std::io::Result<Option<Termination>>
    where
        E: Display,
        W: Write,
    {
        if self.terminated.is_some() {
            return Ok(self.terminated);
        }
        match event {
            Event::Message(record) => {
                log::info!("offset {}", record.offset());
                out.write_all(record.value())?;
                out.write_all(b"\n")?;
                out.flush()?;
                self.consumed += 1;
                if self.max_messages != 0 && self.consumed >= self.max_messages {
                    self.terminated = Some(Termination::Completed);
                }
            }
            Event::Error(err) => {
                // a fetch error does not end the session
                log::warn!("{err}");
            }
            Event::Interrupt => {
                log::info!("stopping");
                self.terminated = Some(Termination::Interrupted);
            }
            Event::End => {
                log::warn!("partition stream ended");
                self.terminated = Some(Termination::Exhausted);
            }
        }
        Ok(self.terminated)
    }
}

/// Drive the consumption loop until the message limit is reached, `interrupt` resolves,
/// or the stream ends.
///
/// Exactly one source is serviced per wake-up. An interrupt that is ready takes effect
/// before any further message is printed.
pub async fn consume<S, E, I, W>(
    stream: S,
    interrupt: I,
    max_messages: usize,
    out: &mut W,
) -> std::io::Result<RunSummary>
where
    S: Stream<Item = KfResult<Record, E>>,
    E: std::error::Error,
    I: Future<Output = ()>,
    W: Write,
{
    let stream = stream.fuse();
    let interrupt = interrupt.fuse();
    pin_mut!(stream, interrupt);

    let mut state = RunState::new(max_messages);
    let termination = loop {
        let event = select_biased! {
            _ = interrupt => Event::Interrupt,
            res = stream.next() => match res {
                Some(Ok(record)) => Event::Message(record),
                Some(Err(err)) => Event::Error(err),
                None => Event::End,
            },
        };
        if let Some(termination) = state.advance(event, &mut *out)? {
            break termination;
        }
    };
    log::info!("got {} message(s)", state.consumed());

    Ok(RunSummary {
        consumed: state.consumed(),
        termination,
    })
}
