// src/scrape/scrape.rs
use std::thread;

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    data::DataSet,
    error::{Result, ScrapeError},
    progress::Progress,
    specs::PageSpec,
    teams::Team,
};

/// Fetch and parse one team's page. Errors are returned, not logged.
pub fn fetch_team<S: PageSpec>(fetch: &dyn Fetch, spec: &S, team: &Team) -> Result<Vec<S::Record>> {
    let url = spec.url(team);
    log::info!("Scraping {} ({}) from {url}", team.abbr, team.slug);
    let doc = fetch.get(&url)?;
    spec.parse(&doc, team)
}

/// Like `fetch_team`, but a failure is logged and yields no records.
pub fn scrape_team<S: PageSpec>(fetch: &dyn Fetch, spec: &S, team: &Team) -> Vec<S::Record> {
    fetch_logged(fetch, spec, team).unwrap_or_default()
}

/// `fetch_team` with the outcome logged: record count, or the error at a
/// level matching its kind (`warn` for a missing table, `error` otherwise).
fn fetch_logged<S: PageSpec>(fetch: &dyn Fetch, spec: &S, team: &Team) -> Result<Vec<S::Record>> {
    let result = fetch_team(fetch, spec, team);
    match &result {
        Ok(records) => log::info!("{}: found {} records", team.abbr, records.len()),
        Err(e @ ScrapeError::TableNotFound(_)) => log::warn!("{} {}: {e}", spec.name(), team.abbr),
        Err(e) => log::error!("{} {}: {e}", spec.name(), team.abbr),
    }
    result
}

/// Visit every selected team in order, one request at a time, pausing
/// `scrape.delay` between requests. A failed team is recorded with no rows
/// and the batch carries on.
pub fn collect<S: PageSpec>(
    fetch: &dyn Fetch,
    spec: &S,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> DataSet<S::Record> {
    let teams = scrape.teams.resolve();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(teams.len());
    }

    let mut data = DataSet::default();

    for (i, team) in teams.iter().copied().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.team_started(i, team);
        }

        let records = match fetch_logged(fetch, spec, team) {
            Ok(records) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.team_done(team, records.len());
                }
                records
            }
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.team_failed(team, &e.to_string());
                }
                Vec::new()
            }
        };
        data.push(team, records);

        // no pause after the last team
        if i + 1 < teams.len() && !scrape.delay.is_zero() {
            thread::sleep(scrape.delay);
        }
    }

    log::info!("{} complete: {} teams, {} records", spec.name(), teams.len(), data.total());
    if let Some(p) = progress.as_deref_mut() {
        p.finish(data.total());
    }

    data
}
