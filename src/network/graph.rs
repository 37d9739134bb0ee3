//! Directed follow graph with per-edge engagement counts.
//!
//! Edges run from a member to everyone they follow. Recording an interaction
//! creates the edge on first use and overwrites the like/comment counts on
//! every use. Members are never removed and edges are never dropped.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

use rayon::prelude::*;

use crate::network::error::NetworkError;
use crate::network::member_state::MemberState;

/// Anything usable as a member identity.
pub trait MemberId: Ord + Clone + Debug + Send + Sync {}

impl<T> MemberId for T where T: Ord + Clone + Debug + Send + Sync {}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SocialNetwork<M> {
    members: BTreeMap<M, MemberState<M>>,
}

impl<M> Default for SocialNetwork<M> {
    fn default() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }
}

impl<M: MemberId> SocialNetwork<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `member` with empty state. Does nothing if it already exists.
    pub fn add_member(&mut self, member: M) {
        self.members.entry(member).or_default();
    }

    /// Records that `from` gave `to` the given likes and comments.
    ///
    /// Both members are created if needed. The first interaction between a
    /// pair makes `from` follow `to`; later ones only replace the counts.
    pub fn record_interaction(&mut self, from: M, to: M, likes: i64, comments: i64) {
        self.add_member(to.clone());
        let newly_followed = self
            .members
            .entry(from.clone())
            .or_default()
            .record(&to, likes, comments);

        if newly_followed {
            self.members.entry(to).or_default().followers.insert(from);
        }
    }

    /// Total likes and comments given by `member`, per follower.
    ///
    /// A member without followers has a rate of zero.
    pub fn engagement_rate(&self, member: &M) -> Result<f64, NetworkError> {
        self.state_of(member).map(rate_of)
    }

    /// Share of `from`'s engagement rate that went to `to`.
    ///
    /// Zero whenever `from` has a zero engagement rate.
    pub fn influence(&self, from: &M, to: &M) -> Result<f64, NetworkError> {
        let source = self.state_of(from)?;
        self.state_of(to)?;
        Ok(influence_of(source, to))
    }

    #[must_use]
    pub fn all_engagement_rates(&self) -> BTreeMap<M, f64> {
        self.members
            .par_iter()
            .map(|(member, state)| (member.clone(), rate_of(state)))
            .collect()
    }

    /// Fewest-hops route from `start` to `end` along following edges.
    ///
    /// Members are marked visited when dequeued, so a member may sit in the
    /// queue several times before it is expanded.
    #[must_use]
    pub fn shortest_path(&self, start: &M, end: &M) -> Option<Vec<M>> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([(start, vec![start.clone()])]);

        while let Some((current, path)) = queue.pop_front() {
            if current == end {
                return Some(path);
            }
            if !visited.insert(current) {
                continue;
            }
            for neighbour in self.following_of(current) {
                let mut next = path.clone();
                next.push(neighbour.clone());
                queue.push_back((neighbour, next));
            }
        }

        None
    }

    /// Route from `start` to `end` with the largest summed influence.
    ///
    /// The traversal is breadth first and never stops early. Each member is
    /// expanded once, on its first dequeue, so only routes that follow the
    /// first arrival at every intermediate member are considered. Every
    /// dequeue of `end` is compared against the best total so far, which
    /// starts at zero; ties keep the earlier route.
    #[must_use]
    pub fn path_with_highest_engagement(&self, start: &M, end: &M) -> Option<Vec<M>> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut visited = BTreeSet::new();
        let mut best_path = None;
        let mut best_engagement = 0.0_f64;
        let mut queue = VecDeque::from([(start, vec![start.clone()], 0.0_f64)]);

        while let Some((current, path, engagement)) = queue.pop_front() {
            if visited.insert(current) {
                if let Some(state) = self.members.get(current) {
                    for neighbour in &state.following {
                        let mut next = path.clone();
                        next.push(neighbour.clone());
                        let weight = influence_of(state, neighbour);
                        queue.push_back((neighbour, next, engagement + weight));
                    }
                }
            }

            if current == end && engagement > best_engagement {
                best_engagement = engagement;
                best_path = Some(path);
            }
        }

        best_path
    }

    /// Every member id, in ascending order.
    #[must_use]
    pub fn members(&self) -> Vec<M> {
        self.members.keys().cloned().collect()
    }

    #[must_use]
    #[inline]
    pub fn member(&self, member: &M) -> Option<&MemberState<M>> {
        self.members.get(member)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, member: &M) -> bool {
        self.members.contains_key(member)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn state_of(&self, member: &M) -> Result<&MemberState<M>, NetworkError> {
        self.members
            .get(member)
            .ok_or_else(|| NetworkError::MemberNotFound(format!("{member:?}")))
    }

    fn following_of<'a>(&'a self, member: &M) -> impl Iterator<Item = &'a M> + 'a {
        self.members
            .get(member)
            .into_iter()
            .flat_map(|state| state.following.iter())
    }
}

#[allow(clippy::cast_precision_loss)]
fn rate_of<M: Ord>(state: &MemberState<M>) -> f64 {
    let followers = state.follower_count();
    if followers == 0 {
        return 0.0;
    }
    state.total_engagement() as f64 / followers as f64
}

#[allow(clippy::cast_precision_loss)]
fn influence_of<M: Ord>(state: &MemberState<M>, to: &M) -> f64 {
    let rate = rate_of(state);
    if rate == 0.0 {
        return 0.0;
    }
    state.engagement_towards(to) as f64 / rate
}
