use crate::error::{GridError, Result};
use chrono::{DateTime, Utc};
use gix::{ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

/// Author identity and time of a single commit, the only two facts the
/// aggregator needs.
#[derive(Debug, Clone)]
pub struct RepoCommit {
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Enumerate every commit reachable from HEAD.
    ///
    /// An unborn HEAD (repository with no commits yet) yields an empty list;
    /// a missing or unresolvable head reference is an error.
    pub fn commits(&self) -> Result<Vec<RepoCommit>> {
        let head = self.repo.head()?;
        let Some(head_id) = head.id() else {
            return Ok(Vec::new());
        };

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_id.detach()]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| GridError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
            let author = commit.author()?;

            commits.push(RepoCommit {
                author_email: author.email.to_string(),
                timestamp,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        Ok(commits)
    }
}
