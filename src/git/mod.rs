mod repo;

pub use repo::{GitRepo, RepoCommit};
