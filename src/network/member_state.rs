use std::collections::{BTreeMap, BTreeSet};

/// Relationship and interaction state of a single member.
///
/// `likes_given` and `comments_given` hold the counts from the most recent
/// interaction this member recorded towards each target.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MemberState<M> {
    pub followers: BTreeSet<M>,
    pub following: BTreeSet<M>,
    pub likes_given: BTreeMap<M, i64>,
    pub comments_given: BTreeMap<M, i64>,
}

impl<M> Default for MemberState<M> {
    fn default() -> Self {
        Self {
            followers: BTreeSet::new(),
            following: BTreeSet::new(),
            likes_given: BTreeMap::new(),
            comments_given: BTreeMap::new(),
        }
    }
}

impl<M: Ord> MemberState<M> {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn follows(&self, other: &M) -> bool {
        self.following.contains(other)
    }

    #[must_use]
    #[inline]
    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    /// Sum of every like and comment this member has given.
    ///
    /// Widened to `i128` so any mix of `i64` counts sums without overflow.
    #[must_use]
    pub fn total_engagement(&self) -> i128 {
        self.likes_given
            .values()
            .chain(self.comments_given.values())
            .map(|&count| i128::from(count))
            .sum()
    }

    /// Likes plus comments given to `other`, zero if nothing was recorded.
    #[must_use]
    pub fn engagement_towards(&self, other: &M) -> i128 {
        i128::from(self.likes_given.get(other).copied().unwrap_or(0))
            + i128::from(self.comments_given.get(other).copied().unwrap_or(0))
    }
}

impl<M: Ord + Clone> MemberState<M> {
    /// Overwrites the counts given to `to`; returns `true` if `to` was not followed before.
    pub(crate) fn record(&mut self, to: &M, likes: i64, comments: i64) -> bool {
        self.likes_given.insert(to.clone(), likes);
        self.comments_given.insert(to.clone(), comments);
        self.following.insert(to.clone())
    }
}
