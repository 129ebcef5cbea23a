//! # sievecalc-comm
//!
//! Message passing between sieve workers. A [`Communicator`] is one
//! worker's endpoint; [`ChannelWorld`] builds a set of in-process endpoints
//! connected by rendezvous channels.

pub mod channel;
pub mod communicator;
pub mod message;

pub use channel::{ChannelCommunicator, ChannelWorld};
pub use communicator::Communicator;
pub use message::Message;
