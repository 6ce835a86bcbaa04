// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::teams::{self, Team, TEAMS};

/// Which site/page a run scrapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Ratings roster: identity + synthesized attributes.
    Madden,
    /// Roster page: identity + age.
    SpotracRoster,
    /// Cap table: identity + money fields.
    SpotracContracts,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::Madden => "Madden ratings",
            Source::SpotracRoster => "Spotrac roster",
            Source::SpotracContracts => "Spotrac contracts",
        }
    }

    pub fn default_delay(self) -> Duration {
        match self {
            Source::Madden => Duration::from_millis(MADDEN_DELAY_MS),
            Source::SpotracRoster | Source::SpotracContracts => {
                Duration::from_millis(SPOTRAC_DELAY_MS)
            }
        }
    }

    pub fn timeout(self) -> Duration {
        match self {
            Source::Madden => Duration::from_secs(MADDEN_TIMEOUT_SECS),
            Source::SpotracRoster | Source::SpotracContracts => {
                Duration::from_secs(SPOTRAC_TIMEOUT_SECS)
            }
        }
    }

    pub fn default_out_dir(self) -> PathBuf {
        match self {
            Source::Madden => PathBuf::from(MADDEN_OUT_DIR),
            Source::SpotracRoster => PathBuf::from(SPOTRAC_OUT_DIR).join(ROSTERS_SUBDIR),
            Source::SpotracContracts => PathBuf::from(SPOTRAC_OUT_DIR).join(CONTRACTS_SUBDIR),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamSelector {
    All,
    /// First `n` teams of the table.
    First(usize),
    Teams(Vec<&'static Team>),
}

impl TeamSelector {
    /// Teams to visit, in table order for `All`/`First`, as given for `Teams`.
    pub fn resolve(&self) -> Vec<&'static Team> {
        match self {
            TeamSelector::All => teams::all().collect(),
            TeamSelector::First(n) => teams::all().take(*n).collect(),
            TeamSelector::Teams(v) => v.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: Source,
    pub teams: TeamSelector,
    /// Single team scraped before asking to run the whole batch.
    pub preview_team: &'static Team,
    /// Pause between consecutive team requests.
    pub delay: Duration,
    pub timeout: Duration,
    pub season: u16,
}

impl ScrapeOptions {
    pub fn for_source(source: Source) -> Self {
        Self {
            source,
            teams: TeamSelector::All,
            preview_team: teams::by_slug(PREVIEW_TEAM).unwrap_or(&TEAMS[0]),
            delay: source.default_delay(),
            timeout: source.timeout(),
            season: SEASON,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    /// Skip the interactive confirmation after the preview.
    pub assume_yes: bool,
    pub list_teams: bool,
}

impl AppOptions {
    pub fn for_source(source: Source) -> Self {
        Self {
            scrape: ScrapeOptions::for_source(source),
            export: ExportOptions { out_dir: source.default_out_dir() },
            assume_yes: false,
            list_teams: false,
        }
    }
}
