//! Commit history traversal
//!
//! Breadth-first walk over the ancestry of a set of seed commits,
//! following the single-parent edge. Lazy: commits are loaded from the
//! database one `next()` at a time.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Lazy, finite, non-restartable walk over reachable commits
///
/// Each reachable commit is yielded exactly once; the visited set guards
/// against revisiting when multiple seeds share ancestry. Root commits
/// (absent parent) end their branch of the walk.
pub struct RevList<'a> {
    database: &'a Database,
    frontier: VecDeque<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'a> RevList<'a> {
    pub fn new(database: &'a Database, seeds: impl IntoIterator<Item = ObjectId>) -> Self {
        let mut frontier = VecDeque::new();
        let mut visited = HashSet::new();

        for seed in seeds {
            if visited.insert(seed.clone()) {
                frontier.push_back(seed);
            }
        }

        RevList {
            database,
            frontier,
            visited,
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.frontier.pop_front()?;

        let commit = match self.database.load_commit(&oid) {
            Ok(commit) => commit,
            Err(error) => return Some(Err(error)),
        };

        if let Some(parent) = commit.parent()
            && self.visited.insert(parent.clone())
        {
            self.frontier.push_back(parent.clone());
        }

        Some(Ok((oid, commit)))
    }
}
