//! In-process world of workers connected by rendezvous channels.
//!
//! Every ordered pair of ranks gets its own zero-capacity channel, so a
//! send completes only once the peer has taken the message, and a worker
//! that drops its endpoint disconnects exactly the links that touch it.

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, trace};

use sievecalc_core::{SieveError, MAX_WORKERS};

use crate::communicator::Communicator;
use crate::message::Message;

/// Factory for a fully connected set of [`ChannelCommunicator`]s.
pub struct ChannelWorld;

impl ChannelWorld {
    /// Create `size` connected endpoints, indexed by rank.
    pub fn create(size: usize) -> Result<Vec<ChannelCommunicator>, SieveError> {
        if size == 0 {
            return Err(SieveError::Config("worker count must be at least 1".into()));
        }
        if size > MAX_WORKERS {
            return Err(SieveError::Config(format!(
                "worker count {size} exceeds the maximum of {MAX_WORKERS}"
            )));
        }

        let mut outgoing: Vec<Vec<Option<Sender<Message>>>> =
            (0..size).map(|_| (0..size).map(|_| None).collect()).collect();
        let mut incoming: Vec<Vec<Option<Receiver<Message>>>> =
            (0..size).map(|_| (0..size).map(|_| None).collect()).collect();

        for src in 0..size {
            for dst in (0..size).filter(|&dst| dst != src) {
                let (tx, rx) = bounded(0);
                outgoing[src][dst] = Some(tx);
                incoming[dst][src] = Some(rx);
            }
        }

        debug!(size, links = size * size.saturating_sub(1), "Channel world created");

        Ok(outgoing
            .into_iter()
            .zip(incoming)
            .enumerate()
            .map(|(rank, (outgoing, incoming))| ChannelCommunicator {
                rank,
                size,
                outgoing,
                incoming,
            })
            .collect())
    }
}

/// One worker's endpoint in a [`ChannelWorld`].
pub struct ChannelCommunicator {
    rank: usize,
    size: usize,
    outgoing: Vec<Option<Sender<Message>>>,
    incoming: Vec<Option<Receiver<Message>>>,
}

impl ChannelCommunicator {
    fn check_peer(&self, peer: usize) -> Result<(), SieveError> {
        if peer >= self.size {
            return Err(SieveError::InvalidRank {
                rank: peer,
                size: self.size,
            });
        }
        if peer == self.rank {
            return Err(SieveError::Transfer(format!(
                "worker {peer} cannot exchange messages with itself"
            )));
        }
        Ok(())
    }
}

impl Communicator for ChannelCommunicator {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send(&self, dest: usize, message: Message) -> Result<(), SieveError> {
        self.check_peer(dest)?;
        trace!(from = self.rank, to = dest, %message, "send");
        self.outgoing[dest]
            .as_ref()
            .ok_or(SieveError::Disconnected { peer: dest })?
            .send(message)
            .map_err(|_| SieveError::Disconnected { peer: dest })
    }

    fn recv(&self, source: usize) -> Result<Message, SieveError> {
        self.check_peer(source)?;
        let message = self.incoming[source]
            .as_ref()
            .ok_or(SieveError::Disconnected { peer: source })?
            .recv()
            .map_err(|_| SieveError::Disconnected { peer: source })?;
        trace!(from = source, to = self.rank, %message, "recv");
        Ok(message)
    }
}
