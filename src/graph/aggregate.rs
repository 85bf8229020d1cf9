use super::DAYS_IN_WINDOW;
use crate::error::Result;
use crate::git::{GitRepo, RepoCommit};
use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};
use console::style;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Dense day-offset table: every offset in `1..=183` is present even when the
/// author made no commits at all.
pub type CommitCounts = BTreeMap<i64, u32>;

pub fn seed_table() -> CommitCounts {
    (1..=DAYS_IN_WINDOW).map(|day| (day, 0)).collect()
}

/// Week-alignment offset for `weekday`, in `1..=7`.
///
/// Offsets shift raw day distances so that the week-0 column of the grid ends
/// on today's weekday: Sunday maps to 7, Saturday to 1.
pub fn calc_offset(weekday: Weekday) -> i64 {
    7 - weekday.num_days_from_sunday() as i64
}

/// Whole day boundaries between the start of `day` and the start of `today`.
///
/// Timestamps in the future clamp to 0; anything older than the window
/// returns `None` and is excluded from aggregation.
pub fn count_days_since(day: NaiveDate, today: NaiveDate) -> Option<i64> {
    let days = (today - day).num_days().max(0);
    (days <= DAYS_IN_WINDOW).then_some(days)
}

/// Fold a repository's commits into the table. Only commits whose author
/// email equals `email` exactly are counted; matching is case-sensitive and
/// resolves no aliases.
pub fn tally_commits(
    table: &mut CommitCounts,
    commits: &[RepoCommit],
    email: &str,
    today: NaiveDate,
    offset: i64,
) {
    for commit in commits {
        if commit.author_email != email {
            continue;
        }

        let day = commit.timestamp.with_timezone(&Local).date_naive();
        if let Some(days) = count_days_since(day, today) {
            *table.entry(days + offset).or_insert(0) += 1;
        }
    }
}

/// Aggregate commits by `email` across every repository, keyed by aligned
/// day offset. A path that fails to open as a repository is skipped with a
/// notice; everything else is fatal.
pub fn process_repositories(
    email: &str,
    repos: &[PathBuf],
    now: DateTime<Local>,
) -> Result<CommitCounts> {
    let mut table = seed_table();
    let today = now.date_naive();
    let offset = calc_offset(now.weekday());

    for path in repos {
        let repo = match GitRepo::open(path) {
            Ok(repo) => repo,
            Err(err) => {
                eprintln!(
                    "{} skipping {}: {err}",
                    style("warning:").yellow().bold(),
                    path.display()
                );
                continue;
            }
        };

        let commits = repo.commits()?;
        tally_commits(&mut table, &commits, email, today, offset);
    }

    Ok(table)
}
