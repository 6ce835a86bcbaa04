// tests/pipeline_e2e.rs
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use nfl_scrape::config::options::{ScrapeOptions, Source, TeamSelector};
use nfl_scrape::core::Fetch;
use nfl_scrape::error::{Result, ScrapeError};
use nfl_scrape::progress::{NullProgress, Progress};
use nfl_scrape::scrape;
use nfl_scrape::specs::{MaddenRoster, PageSpec, SpotracContracts, SpotracRoster};
use nfl_scrape::teams::{self, Team};

/// Serves canned pages by URL; anything else is a 404.
struct Fixtures(HashMap<String, String>);

impl Fixtures {
    fn new() -> Self {
        Self(HashMap::new())
    }

    fn page<S: PageSpec>(mut self, spec: &S, abbr: &str, html: &str) -> Self {
        let team = teams::by_abbr(abbr).unwrap();
        self.0.insert(spec.url(team), html.to_string());
        self
    }
}

impl Fetch for Fixtures {
    fn get(&self, url: &str) -> Result<String> {
        self.0.get(url).cloned().ok_or_else(|| ScrapeError::Status {
            url: url.to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        })
    }
}

/// Notes when each request was made, then defers to the inner fixtures.
struct Clocked {
    inner: Fixtures,
    hits: RefCell<Vec<Instant>>,
}

impl Fetch for Clocked {
    fn get(&self, url: &str) -> Result<String> {
        self.hits.borrow_mut().push(Instant::now());
        self.inner.get(url)
    }
}

#[derive(Default)]
struct Recorder {
    begun: usize,
    done: Vec<(String, usize)>,
    failed: Vec<String>,
    finished: Option<usize>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.begun = total;
    }
    fn team_done(&mut self, team: &Team, count: usize) {
        self.done.push((team.abbr.to_string(), count));
    }
    fn team_failed(&mut self, team: &Team, _reason: &str) {
        self.failed.push(team.abbr.to_string());
    }
    fn finish(&mut self, total: usize) {
        self.finished = Some(total);
    }
}

fn options(source: Source, abbrs: &[&str]) -> ScrapeOptions {
    let mut opts = ScrapeOptions::for_source(source);
    opts.teams = TeamSelector::Teams(abbrs.iter().map(|a| teams::by_abbr(a).unwrap()).collect());
    opts.delay = Duration::ZERO;
    opts
}

const ROSTER_PAGE: &str = r#"<html><body>
<table class="datatable team-roster">
  <tr><th></th><th>Player</th><th>Pos</th><th>Ht</th><th>Age</th></tr>
  <tr><td></td><td><a href="/redirect/player/1">Patrick Mahomes</a></td><td>QB</td><td>6-2</td><td>29</td></tr>
</table></body></html>"#;

const CAP_PAGE: &str = r#"<html><body>
<table id="table_active">
  <tr><th>Player</th><th>Pos</th><th>Age</th><th>Cap Hit</th></tr>
  <tr><td><a href="/p">Josh Allen</a></td><td>QB</td><td>29</td><td>$30.4M</td><td>-</td><td>-</td><td>$1,500,000</td><td>$28,000,000</td><td>-</td><td>-</td></tr>
</table></body></html>"#;

const MADDEN_PAGE: &str = r#"<html><body><table>
  <tr><th>#</th><th>Player</th><th>OVR</th></tr>
  <tr><td>1</td><td><a href="/p"><img></a><a href="/p">Brock Purdy</a><a href="/qb">QB</a><a href="/a">Improviser</a></td><td>85</td></tr>
</table></body></html>"#;

#[test]
fn one_well_formed_roster_row_yields_one_record() {
    let fetch = Fixtures::new().page(&SpotracRoster, "KC", ROSTER_PAGE);
    let data = scrape::collect(&fetch, &SpotracRoster, &options(Source::SpotracRoster, &["KC"]), None);

    assert_eq!(data.teams.len(), 1);
    assert_eq!(data.teams[0].team.abbr, "KC");
    let p = &data.teams[0].records[0];
    assert_eq!((p.player_name.as_str(), p.position.as_str(), p.age), ("Patrick Mahomes", "QB", Some(29)));
    assert_eq!(data.total(), 1);
}

#[test]
fn contracts_pipeline_estimates_from_cap_row() {
    let spec = SpotracContracts::default();
    let fetch = Fixtures::new().page(&spec, "BUF", CAP_PAGE);
    let data = scrape::collect(&fetch, &spec, &options(Source::SpotracContracts, &["BUF"]), None);

    let c = &data.teams[0].records[0];
    assert_eq!(c.cap_hit, 30_400_000);
    assert_eq!(c.total_value, 91_200_000);
    assert_eq!(c.signing_bonus, 28_000_000);
    assert_eq!(c.guaranteed, 28_750_000);
}

#[test]
fn madden_records_carry_team_abbr() {
    let fetch = Fixtures::new().page(&MaddenRoster, "SF", MADDEN_PAGE);
    let data = scrape::collect(&fetch, &MaddenRoster, &options(Source::Madden, &["SF"]), None);

    let rated = &data.teams[0].records[0];
    assert_eq!(rated.team, "SF");
    assert_eq!(rated.player.last_name, "Purdy");
    assert_eq!(rated.attributes.overall, 85);
}

#[test]
fn failed_teams_are_empty_and_the_batch_continues() {
    let fetch = Fixtures::new()
        .page(&SpotracRoster, "ARI", "<html><body><p>No roster today</p></body></html>")
        .page(&SpotracRoster, "KC", ROSTER_PAGE);
    // ARI: page without a matching table; ATL: request fails; KC: fine
    let opts = options(Source::SpotracRoster, &["ARI", "ATL", "KC"]);
    let mut progress = Recorder::default();
    let data = scrape::collect(&fetch, &SpotracRoster, &opts, Some(&mut progress));

    let counts: Vec<_> = data.teams.iter().map(|t| (t.team.abbr, t.records.len())).collect();
    assert_eq!(counts, [("ARI", 0), ("ATL", 0), ("KC", 1)]);

    assert_eq!(progress.begun, 3);
    assert_eq!(progress.failed, ["ARI", "ATL"]);
    assert_eq!(progress.done, [("KC".to_string(), 1)]);
    assert_eq!(progress.finished, Some(1));
}

#[test]
fn scrape_team_swallows_errors() {
    let fetch = Fixtures::new();
    let kc = teams::by_abbr("KC").unwrap();
    assert!(scrape::scrape_team(&fetch, &SpotracRoster, kc).is_empty());
    assert!(matches!(
        scrape::fetch_team(&fetch, &SpotracRoster, kc),
        Err(ScrapeError::Status { .. })
    ));
}

#[test]
fn limit_walks_table_order() {
    let fetch = Fixtures::new();
    let mut opts = ScrapeOptions::for_source(Source::Madden);
    opts.teams = TeamSelector::First(2);
    opts.delay = Duration::ZERO;
    let data = scrape::collect(&fetch, &MaddenRoster, &opts, Some(&mut NullProgress));
    let abbrs: Vec<_> = data.teams.iter().map(|t| t.team.abbr).collect();
    assert_eq!(abbrs, ["ARI", "ATL"]);
}

#[test]
fn delay_between_requests_but_not_after_the_last() {
    let delay = Duration::from_millis(150);
    let fetch = Clocked {
        inner: Fixtures::new().page(&SpotracRoster, "KC", ROSTER_PAGE),
        hits: RefCell::new(Vec::new()),
    };
    // failing teams still pause before the next request
    let mut opts = options(Source::SpotracRoster, &["ARI", "KC", "BUF"]);
    opts.delay = delay;

    let data = scrape::collect(&fetch, &SpotracRoster, &opts, None);
    let done = Instant::now();
    assert_eq!(data.total(), 1);

    let hits = fetch.hits.borrow();
    assert_eq!(hits.len(), 3);
    for pair in hits.windows(2) {
        assert!(pair[1] - pair[0] >= delay, "gap {:?}", pair[1] - pair[0]);
    }
    let tail = done - hits[2];
    assert!(tail < delay, "slept after the last team: {tail:?}");
}
