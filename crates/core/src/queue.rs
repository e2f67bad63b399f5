//! Queue module - upcoming piece supply
//!
//! Pieces are sampled uniformly and independently from the seven kinds, with
//! one rule: a freshly sampled kind is rejected and redrawn while it equals
//! the kind that was just handed out. That rules out back-to-back repeats but
//! gives no bag-style fairness guarantee.
//!
//! The RNG is owned by the queue and seeded explicitly, so two queues with
//! the same seed dispense the same sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::PieceKind;

/// Anti-repeat random piece supply.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    next: PieceKind,
    rng: StdRng,
}

impl PieceQueue {
    /// Create a queue with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = Self::sample(&mut rng);
        Self { next, rng }
    }

    fn sample(rng: &mut StdRng) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
    }

    /// The kind the next `take_and_advance` will return.
    pub fn peek_next(&self) -> PieceKind {
        self.next
    }

    /// Hand out the pending piece and sample a different kind to follow it.
    pub fn take_and_advance(&mut self) -> Piece {
        let taken = self.next;

        loop {
            self.next = Self::sample(&mut self.rng);
            if self.next != taken {
                break;
            }
        }

        Piece::new(taken)
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceQueue::new(12345);
        let mut b = PieceQueue::new(12345);

        for _ in 0..100 {
            assert_eq!(a.take_and_advance(), b.take_and_advance());
        }
    }

    #[test]
    fn test_peek_matches_next_take() {
        let mut queue = PieceQueue::new(7);

        for _ in 0..50 {
            let peeked = queue.peek_next();
            assert_eq!(queue.take_and_advance().kind(), peeked);
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let queue = PieceQueue::new(99);
        let first = queue.peek_next();
        assert_eq!(queue.peek_next(), first);
    }

    #[test]
    fn test_taken_piece_is_at_spawn_pose() {
        let mut queue = PieceQueue::new(3);
        let piece = queue.take_and_advance();
        assert_eq!(piece, Piece::new(piece.kind()));
    }
}
