// src/specs/contracts.rs
//! Cap table page, `/nfl/<slug>/cap/<season>/`.
//!
//! Two tables, `#table_active` and `#table_injured`, same column layout,
//! each with a header row. Active rows come first.
//!
//! Columns read: 0 name, 1 position, 2 age, 3 cap hit, 6 base salary,
//! 7 signing bonus proration, 9 roster bonus. Trailing columns may be absent.

use scraper::ElementRef;

use super::PageSpec;
use crate::config::consts::{SEASON, SPOTRAC_BASE};
use crate::core::html::{self, Locator};
use crate::core::sanitize::{is_placeholder, parse_age, parse_money};
use crate::data::{CapRow, Contract};
use crate::error::Result;
use crate::teams::Team;

const TABLE_IDS: &[&str] = &["table_active", "table_injured"];

const NAME_CELL: usize = 0;
const POSITION_CELL: usize = 1;
const AGE_CELL: usize = 2;
const CAP_HIT_CELL: usize = 3;
const BASE_SALARY_CELL: usize = 6;
const SIGNING_BONUS_CELL: usize = 7;
const ROSTER_BONUS_CELL: usize = 9;
const MIN_CELLS: usize = 4;

pub struct SpotracContracts {
    pub season: u16,
}

impl Default for SpotracContracts {
    fn default() -> Self {
        Self { season: SEASON }
    }
}

impl PageSpec for SpotracContracts {
    type Record = Contract;

    fn name(&self) -> &'static str {
        "contracts"
    }

    fn url(&self, team: &Team) -> String {
        format!("{SPOTRAC_BASE}/nfl/{}/cap/{}/", team.slug, self.season)
    }

    fn locator(&self) -> Locator {
        Locator::Ids(TABLE_IDS)
    }

    fn skip_header(&self) -> bool {
        true
    }

    fn parse_row(&self, cells: &[ElementRef<'_>], _team: &Team) -> Result<Option<Contract>> {
        if cells.len() < MIN_CELLS {
            return Ok(None);
        }

        let player_name = html::link_or_text(cells[NAME_CELL]);
        if is_placeholder(&player_name) {
            return Ok(None);
        }

        let money = |i: usize| cells.get(i).map(|c| parse_money(&html::text_of(*c)));
        let cap_hit = money(CAP_HIT_CELL).unwrap_or(0);
        let row = CapRow {
            cap_hit,
            base_salary: money(BASE_SALARY_CELL).unwrap_or(cap_hit),
            signing_bonus: money(SIGNING_BONUS_CELL).unwrap_or(0),
            roster_bonus: money(ROSTER_BONUS_CELL).unwrap_or(0),
        };

        Ok(Some(Contract::estimate(
            player_name,
            html::text_of(cells[POSITION_CELL]),
            parse_age(&html::text_of(cells[AGE_CELL])),
            row,
        )))
    }
}
