// src/specs/madden.rs
//! Ratings roster page, `/teams/<slug>`.
//!
//! Row shape: cell 1 holds four links (photo, name, position code, archetype),
//! cell 2 holds the overall rating. Only name, position and overall are read;
//! the attribute record is synthesized from the overall.

use scraper::ElementRef;

use super::PageSpec;
use crate::config::consts::MADDEN_BASE;
use crate::core::html::{self, Locator};
use crate::core::sanitize::{first_int, is_placeholder};
use crate::data::{DEFAULT_OVERALL, Player, PlayerAttributes, RatedPlayer};
use crate::error::{Result, ScrapeError};
use crate::teams::Team;

const PLAYER_CELL: usize = 1;
const OVERALL_CELL: usize = 2;
const MIN_CELLS: usize = 3;

const NAME_LINK: usize = 1;
const POSITION_LINK: usize = 2;
const MIN_LINKS: usize = 3;

pub struct MaddenRoster;

impl PageSpec for MaddenRoster {
    type Record = RatedPlayer;

    fn name(&self) -> &'static str {
        "madden"
    }

    fn url(&self, team: &Team) -> String {
        format!("{MADDEN_BASE}/teams/{}", team.slug)
    }

    fn locator(&self) -> Locator {
        Locator::FirstTable
    }

    // Header row uses <th>, so the cell count check filters it.
    fn skip_header(&self) -> bool {
        false
    }

    fn parse_row(&self, cells: &[ElementRef<'_>], team: &Team) -> Result<Option<RatedPlayer>> {
        if cells.len() < MIN_CELLS {
            return Ok(None);
        }

        let links = html::link_texts(cells[PLAYER_CELL]);
        if links.len() < MIN_LINKS {
            return Err(ScrapeError::MissingLinks {
                cell: PLAYER_CELL,
                found: links.len(),
                expected: MIN_LINKS,
            });
        }

        let full_name = &links[NAME_LINK];
        if is_placeholder(full_name) {
            return Ok(None);
        }
        let position = &links[POSITION_LINK];
        let overall = first_int(&html::text_of(cells[OVERALL_CELL])).unwrap_or(DEFAULT_OVERALL);

        log::debug!("{full_name} ({position}, {overall} OVR)");

        Ok(Some(RatedPlayer {
            player: Player::new(full_name, position),
            attributes: PlayerAttributes::from_overall(overall),
            team: team.abbr,
        }))
    }
}
