// src/specs/roster.rs
//! Roster page, `/nfl/<slug>/roster/`.
//!
//! `<table class="team-roster">`, header row first. Cell 1 is the name
//! (usually a link), cell 2 the position. Age has no fixed column, so cells
//! 3..6 are scanned for the first plausible age.

use scraper::ElementRef;

use super::PageSpec;
use crate::config::consts::SPOTRAC_BASE;
use crate::core::html::{self, Locator};
use crate::core::sanitize::{is_placeholder, parse_age};
use crate::data::{AGE_RANGE, RosterPlayer};
use crate::error::Result;
use crate::teams::Team;

const NAME_CELL: usize = 1;
const POSITION_CELL: usize = 2;
const AGE_CELLS: std::ops::Range<usize> = 3..6;
const MIN_CELLS: usize = 3;

pub struct SpotracRoster;

impl PageSpec for SpotracRoster {
    type Record = RosterPlayer;

    fn name(&self) -> &'static str {
        "roster"
    }

    fn url(&self, team: &Team) -> String {
        format!("{SPOTRAC_BASE}/nfl/{}/roster/", team.slug)
    }

    fn locator(&self) -> Locator {
        Locator::Class("team-roster")
    }

    fn skip_header(&self) -> bool {
        true
    }

    fn parse_row(&self, cells: &[ElementRef<'_>], _team: &Team) -> Result<Option<RosterPlayer>> {
        if cells.len() < MIN_CELLS {
            return Ok(None);
        }

        let player_name = html::link_or_text(cells[NAME_CELL]);
        if is_placeholder(&player_name) {
            return Ok(None);
        }

        Ok(Some(RosterPlayer {
            player_name,
            position: html::text_of(cells[POSITION_CELL]),
            age: scan_age(cells),
        }))
    }
}

/// First cell in the age window whose number falls in `AGE_RANGE`.
fn scan_age(cells: &[ElementRef<'_>]) -> Option<u32> {
    cells
        .get(AGE_CELLS.start..AGE_CELLS.end.min(cells.len()))?
        .iter()
        .filter_map(|c| parse_age(&html::text_of(*c)))
        .find(|age| AGE_RANGE.contains(age))
}
