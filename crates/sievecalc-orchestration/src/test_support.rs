//! Scripted communicator for driving a single worker in unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use sievecalc_comm::{Communicator, Message};
use sievecalc_core::SieveError;

/// Communicator that replays a fixed inbox and records every send.
pub struct ScriptedComm {
    rank: usize,
    size: usize,
    inbox: RefCell<VecDeque<(usize, Message)>>,
    pub sent: RefCell<Vec<(usize, Message)>>,
}

impl ScriptedComm {
    pub fn new(rank: usize, size: usize, inbox: Vec<(usize, Message)>) -> Self {
        Self {
            rank,
            size,
            inbox: RefCell::new(inbox.into()),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Communicator for ScriptedComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send(&self, dest: usize, message: Message) -> Result<(), SieveError> {
        self.sent.borrow_mut().push((dest, message));
        Ok(())
    }

    fn recv(&self, source: usize) -> Result<Message, SieveError> {
        match self.inbox.borrow_mut().pop_front() {
            Some((from, message)) if from == source => Ok(message),
            Some((from, message)) => Err(SieveError::Transfer(format!(
                "script expected a message from {source}, next is {message} from {from}"
            ))),
            None => Err(SieveError::Disconnected { peer: source }),
        }
    }
}
