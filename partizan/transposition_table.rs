//! Thread safe transposition table for game outcomes

use crate::{
    game_form::Outcome,
    total::{TotalWrappable, TotalWrapper},
};
use dashmap::DashMap;
use std::{fmt::Debug, marker::PhantomData};

/// Interface of a transposition table
pub trait TranspositionTable<G> {
    /// Lookup a position outcome if exists
    fn lookup_position(&self, position: &G) -> Option<Outcome>;

    /// Save position and its outcome
    fn insert_position(&self, position: G, outcome: Outcome);
}

/// Transposition table (cache) of game positions and their normal play
/// outcomes, keyed by structural identity.
///
/// The table is read-through and never invalidated: positions are immutable
/// so a stored outcome stays valid forever. Concurrent population is safe.
pub struct ParallelTranspositionTable<G> {
    positions: DashMap<TotalWrapper<G>, Outcome, ahash::RandomState>,
}

impl<G> ParallelTranspositionTable<G>
where
    G: TotalWrappable,
{
    /// Create new empty transposition table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of saved positions
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if table stores any position
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<G> Debug for ParallelTranspositionTable<G>
where
    G: Debug + TotalWrappable,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ParallelTranspositionTable { positions } = self;

        f.debug_struct("ParallelTranspositionTable")
            .field("positions", positions)
            .finish()
    }
}

impl<G> Default for ParallelTranspositionTable<G>
where
    G: TotalWrappable,
{
    #[inline]
    fn default() -> Self {
        Self {
            positions: DashMap::default(),
        }
    }
}

impl<G> TranspositionTable<G> for ParallelTranspositionTable<G>
where
    G: TotalWrappable,
{
    #[inline]
    fn lookup_position(&self, position: &G) -> Option<Outcome> {
        self.positions
            .get(TotalWrapper::from_ref(position))
            .map(|outcome| *outcome)
    }

    #[inline]
    fn insert_position(&self, position: G, outcome: Outcome) {
        self.positions.insert(TotalWrapper::new(position), outcome);
    }
}

/// Dummy transposition table that does not store anything
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoTranspositionTable<G>(PhantomData<G>);

impl<G> NoTranspositionTable<G> {
    #[inline]
    /// Create new dummy transposition table
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<G> Default for NoTranspositionTable<G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<G> TranspositionTable<G> for NoTranspositionTable<G> {
    #[inline]
    fn lookup_position(&self, _position: &G) -> Option<Outcome> {
        None
    }

    #[inline]
    fn insert_position(&self, _position: G, _outcome: Outcome) {}
}
