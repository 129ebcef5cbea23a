//! The communicator trait: one worker's view of the world.

use sievecalc_core::SieveError;

use crate::message::Message;

/// A worker's endpoint into a fixed-size world of peers.
///
/// Sends and receives are point-to-point and blocking. Messages between a
/// given pair of ranks arrive in the order they were sent.
pub trait Communicator: Send {
    /// This worker's rank, in `0..size()`.
    fn rank(&self) -> usize;

    /// Number of workers in the world.
    fn size(&self) -> usize;

    /// Send `message` to `dest`, blocking until it is delivered.
    fn send(&self, dest: usize, message: Message) -> Result<(), SieveError>;

    /// Receive the next message from `source`, blocking until one arrives.
    fn recv(&self, source: usize) -> Result<Message, SieveError>;

    /// Collective broadcast from `root`.
    ///
    /// The root passes `Some(message)`, which is delivered to every other
    /// rank; other ranks pass `None` and receive the root's message. Every
    /// rank returns the broadcast value.
    fn broadcast(&self, root: usize, message: Option<Message>) -> Result<Message, SieveError> {
        if root >= self.size() {
            return Err(SieveError::InvalidRank {
                rank: root,
                size: self.size(),
            });
        }
        if self.rank() == root {
            let message = message.ok_or_else(|| {
                SieveError::Transfer("broadcast root has no message to send".into())
            })?;
            for dest in (0..self.size()).filter(|&dest| dest != root) {
                self.send(dest, message.clone())?;
            }
            Ok(message)
        } else {
            self.recv(root)
        }
    }
}
