//! Two-phase result aggregation.
//!
//! Every non-coordinator sends exactly one `(PrimeCount, PrimePayload)` pair
//! to the coordinator. The coordinator starts from its own primes (its
//! sub-range is the lowest) and then receives from the other ranks in
//! ascending order. Because sub-ranges increase with rank and each payload
//! is ascending, plain concatenation yields a globally sorted list.

use tracing::debug;

use sievecalc_comm::{Communicator, Message};
use sievecalc_core::{SieveError, COORDINATOR_RANK};

/// Primes merged on the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// All primes, ascending.
    pub primes: Vec<u64>,
    /// Number of primes contributed by each rank, in rank order.
    pub counts: Vec<usize>,
}

/// Send this worker's primes to the coordinator as a count then a payload.
pub fn send_primes<C: Communicator + ?Sized>(
    comm: &C,
    primes: Vec<u64>,
) -> Result<(), SieveError> {
    debug!(rank = comm.rank(), count = primes.len(), "Sending primes to coordinator");
    comm.send(COORDINATOR_RANK, Message::PrimeCount(primes.len()))?;
    comm.send(COORDINATOR_RANK, Message::PrimePayload(primes))
}

/// Collect every worker's primes on the coordinator, starting from `own`.
///
/// A payload whose length differs from the announced count, a message of
/// the wrong kind, or a payload that does not continue the ascending order
/// aborts the collection.
pub fn collect_primes<C: Communicator + ?Sized>(
    comm: &C,
    own: Vec<u64>,
) -> Result<Collected, SieveError> {
    if comm.rank() != COORDINATOR_RANK {
        return Err(SieveError::Transfer(format!(
            "worker {} cannot collect results; only the coordinator does",
            comm.rank()
        )));
    }

    let mut counts = Vec::with_capacity(comm.size());
    counts.push(own.len());
    let mut primes = own;

    for source in (0..comm.size()).filter(|&rank| rank != COORDINATOR_RANK) {
        let count = match comm.recv(source)? {
            Message::PrimeCount(count) => count,
            other => {
                return Err(SieveError::Transfer(format!(
                    "expected prime-count from worker {source}, got {other}"
                )))
            }
        };

        let payload = match comm.recv(source)? {
            Message::PrimePayload(values) => values,
            other => {
                return Err(SieveError::Transfer(format!(
                    "expected prime-payload from worker {source}, got {other}"
                )))
            }
        };

        if payload.len() != count {
            return Err(SieveError::Transfer(format!(
                "worker {source} announced {count} primes but sent {}",
                payload.len()
            )));
        }
        check_order(source, primes.last().copied(), &payload)?;

        primes.reserve(count);
        primes.extend(payload);
        counts.push(count);
        debug!(source, count, total = primes.len(), "Collected primes from worker");
    }

    Ok(Collected { primes, counts })
}

/// Verify that `payload` is strictly ascending and continues after `last`.
fn check_order(source: usize, last: Option<u64>, payload: &[u64]) -> Result<(), SieveError> {
    let mut previous = last;
    for &value in payload {
        if previous.is_some_and(|p| value <= p) {
            return Err(SieveError::Transfer(format!(
                "worker {source} sent {value} out of order"
            )));
        }
        previous = Some(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedComm;

    #[test]
    fn send_primes_emits_count_then_payload() {
        let comm = ScriptedComm::new(2, 3, vec![]);
        send_primes(&comm, vec![17, 19, 23]).unwrap();
        assert_eq!(
            *comm.sent.borrow(),
            vec![
                (0, Message::PrimeCount(3)),
                (0, Message::PrimePayload(vec![17, 19, 23])),
            ]
        );
    }

    #[test]
    fn empty_list_still_sends_a_pair() {
        let comm = ScriptedComm::new(1, 2, vec![]);
        send_primes(&comm, vec![]).unwrap();
        assert_eq!(
            *comm.sent.borrow(),
            vec![(0, Message::PrimeCount(0)), (0, Message::PrimePayload(vec![]))]
        );
    }

    #[test]
    fn collect_in_rank_order() {
        let comm = ScriptedComm::new(
            0,
            3,
            vec![
                (1, Message::PrimeCount(2)),
                (1, Message::PrimePayload(vec![11, 13])),
                (2, Message::PrimeCount(4)),
                (2, Message::PrimePayload(vec![17, 19, 23, 29])),
            ],
        );
        let collected = collect_primes(&comm, vec![2, 3, 5, 7]).unwrap();
        assert_eq!(collected.primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(collected.counts, vec![4, 2, 4]);
    }

    #[test]
    fn single_worker_collects_own_primes() {
        let comm = ScriptedComm::new(0, 1, vec![]);
        let collected = collect_primes(&comm, vec![2, 3]).unwrap();
        assert_eq!(collected.primes, vec![2, 3]);
        assert_eq!(collected.counts, vec![2]);
    }

    #[test]
    fn short_payload_is_fatal() {
        let comm = ScriptedComm::new(
            0,
            2,
            vec![
                (1, Message::PrimeCount(3)),
                (1, Message::PrimePayload(vec![11, 13])),
            ],
        );
        let err = collect_primes(&comm, vec![2, 3, 5, 7]).unwrap_err();
        assert!(matches!(err, SieveError::Transfer(ref msg) if msg.contains("announced 3")));
    }

    #[test]
    fn payload_before_count_is_fatal() {
        let comm = ScriptedComm::new(0, 2, vec![(1, Message::PrimePayload(vec![11]))]);
        assert!(matches!(
            collect_primes(&comm, vec![2]),
            Err(SieveError::Transfer(_))
        ));
    }

    #[test]
    fn missing_payload_is_fatal() {
        let comm = ScriptedComm::new(0, 2, vec![(1, Message::PrimeCount(1))]);
        assert_eq!(
            collect_primes(&comm, vec![2]),
            Err(SieveError::Disconnected { peer: 1 })
        );
    }

    #[test]
    fn out_of_order_payload_is_fatal() {
        let comm = ScriptedComm::new(
            0,
            2,
            vec![
                (1, Message::PrimeCount(2)),
                (1, Message::PrimePayload(vec![5, 11])),
            ],
        );
        let err = collect_primes(&comm, vec![2, 3, 5, 7]).unwrap_err();
        assert!(matches!(err, SieveError::Transfer(ref msg) if msg.contains("out of order")));
    }

    #[test]
    fn only_coordinator_collects() {
        let comm = ScriptedComm::new(1, 2, vec![]);
        assert!(matches!(
            collect_primes(&comm, vec![]),
            Err(SieveError::Transfer(_))
        ));
    }
}
