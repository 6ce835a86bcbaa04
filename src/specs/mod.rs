// src/specs/mod.rs
//! # Page specs
//!
//! One spec per scraped page. A spec encodes *where the ground truth lives in
//! the HTML* and *how to turn one table row into one record*:
//!
//! - the URL template for a team,
//! - the [`Locator`] for the player table(s),
//! - whether each table's first row is a header,
//! - the row parser.
//!
//! The shared [`PageSpec::parse`] does the rest: locate tables, walk rows,
//! collect records, and log-and-skip rows that fail. Fetching, rate limiting
//! and export live in `scrape` and `file`; specs only read pages.
//!
//! ## Row outcomes
//! - `Ok(Some(record))` – keep.
//! - `Ok(None)` – not a player row (header, spacer, placeholder name). Silent.
//! - `Err(_)` – looked like a player row but didn't parse. Logged, skipped.
//!
//! ## Testing notes
//! Every spec is testable offline against inline HTML fixtures.

use scraper::{ElementRef, Html};

use crate::core::html::{self, Locator};
use crate::error::{Result, ScrapeError};
use crate::teams::Team;

pub mod contracts;
pub mod madden;
pub mod roster;

pub use contracts::SpotracContracts;
pub use madden::MaddenRoster;
pub use roster::SpotracRoster;

pub trait PageSpec {
    type Record;

    /// Short label for logs.
    fn name(&self) -> &'static str;

    fn url(&self, team: &Team) -> String;

    fn locator(&self) -> Locator;

    /// Drop the first row of every located table.
    fn skip_header(&self) -> bool;

    /// `cells` are the row's direct `<td>` children.
    fn parse_row(&self, cells: &[ElementRef<'_>], team: &Team) -> Result<Option<Self::Record>>;

    /// Parse a whole page. Fails only when no table matches the locator.
    fn parse(&self, doc: &str, team: &Team) -> Result<Vec<Self::Record>> {
        let doc = Html::parse_document(doc);
        let locator = self.locator();
        let tables = html::locate_tables(&doc, &locator);
        if tables.is_empty() {
            return Err(ScrapeError::TableNotFound(locator.describe()));
        }

        let mut out = Vec::new();
        for (i, row) in html::table_rows(&tables, self.skip_header()).into_iter().enumerate() {
            let cells = html::cells(row);
            match self.parse_row(&cells, team) {
                Ok(Some(record)) => out.push(record),
                Ok(None) => {}
                Err(e) => log::warn!("{} {}: skipping row {}: {e}", self.name(), team.abbr, i + 1),
            }
        }
        Ok(out)
    }
}
