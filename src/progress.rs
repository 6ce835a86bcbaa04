// src/progress.rs
use crate::teams::Team;

/// Lightweight progress reporting for the batch run.
/// The CLI prints lines; tests and library callers can pass `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of teams to visit.
    fn begin(&mut self, _total: usize) {}

    /// Called before a team is fetched. `index` is 0-based.
    fn team_started(&mut self, _index: usize, _team: &Team) {}

    /// Called when a team produced `count` records.
    fn team_done(&mut self, _team: &Team, _count: usize) {}

    /// Called when a team produced nothing because fetch or parse failed.
    fn team_failed(&mut self, _team: &Team, _reason: &str) {}

    /// Called at the end with the total record count.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints `[i/n] ABBR...` style lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.failed = 0;
    }
    fn team_started(&mut self, index: usize, team: &Team) {
        println!("[{}/{}] {} ({})...", index + 1, self.total, team.abbr, team.slug);
    }
    fn team_done(&mut self, _team: &Team, count: usize) {
        println!("   found {count}");
    }
    fn team_failed(&mut self, _team: &Team, reason: &str) {
        self.failed += 1;
        println!("   failed: {reason}");
    }
    fn finish(&mut self, total: usize) {
        println!("{}", "=".repeat(60));
        println!("Teams: {} ({} failed)", self.total, self.failed);
        println!("Total records: {total}");
        println!("{}", "=".repeat(60));
    }
}
