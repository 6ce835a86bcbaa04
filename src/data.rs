// src/data.rs
//! Records produced by the page specs, plus the two derivation steps that
//! fill in what the pages don't say: synthesized ratings for the Madden
//! roster and estimated contract totals for the cap table.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::teams::Team;

/// Site position code → coarse position group. Unlisted codes pass through.
pub static POSITION_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("QB", "QB"),
        ("HB", "RB"), ("FB", "RB"),
        ("WR", "WR"),
        ("TE", "TE"),
        ("LT", "OL"), ("LG", "OL"), ("C", "OL"), ("RG", "OL"), ("RT", "OL"),
        ("LEDG", "DL"), ("REDG", "DL"), ("DT", "DL"),
        ("MIKE", "LB"), ("SAM", "LB"), ("WILL", "LB"),
        ("CB", "CB"),
        ("FS", "S"), ("SS", "S"),
        ("K", "K"),
        ("P", "P"), ("LS", "P"),
    ])
});

pub fn canonical_position(code: &str) -> String {
    POSITION_MAP.get(code).map_or_else(|| s!(code), |p| s!(*p))
}

/* ---------------- Madden roster ---------------- */

pub const DEFAULT_OVERALL: u32 = 70;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub age: u32,
    pub college: String,
    pub draft_year: Option<u32>,
    pub draft_round: Option<u32>,
    pub draft_pick: Option<u32>,
    pub years_pro: u32,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub photo_url: String,
    pub handedness: String,
}

impl Player {
    /// "Patrick Lavon Mahomes" → first "Patrick", last "Lavon Mahomes".
    pub fn new(full_name: &str, position: &str) -> Self {
        let mut parts = full_name.split_whitespace();
        let first_name = s!(parts.next().unwrap_or("Unknown"));
        let last_name = parts.collect::<Vec<_>>().join(" ");
        Self {
            first_name,
            last_name,
            position: canonical_position(position),
            age: 25,
            college: s!(),
            draft_year: None,
            draft_round: None,
            draft_pick: None,
            years_pro: 0,
            height: None,
            weight: None,
            photo_url: s!(),
            handedness: s!("right"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DevTrait {
    Superstar,
    Star,
    Normal,
    Slow,
}

impl DevTrait {
    pub fn from_overall(overall: u32) -> Self {
        match overall {
            90.. => DevTrait::Superstar,
            80..=89 => DevTrait::Star,
            70..=79 => DevTrait::Normal,
            _ => DevTrait::Slow,
        }
    }
}

/// Gameplay ratings. Only `overall` comes off the page; the rest is filler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerAttributes {
    pub overall: u32,
    pub potential: u32,
    pub injury_prone: u32,
    pub morale: u32,
    pub confidence: u32,
    pub development_trait: DevTrait,
    pub speed: u32,
    pub strength: u32,
    pub stamina: u32,
    pub awareness: u32,
    pub accuracy: Option<u32>,
    pub arm_strength: Option<u32>,
    pub throw_power: Option<u32>,
    pub pocket_presence: Option<u32>,
    pub hands: Option<u32>,
    pub route_running: Option<u32>,
    pub catching: Option<u32>,
    pub elusiveness: Option<u32>,
    pub pass_block: Option<u32>,
    pub run_block: Option<u32>,
    pub pass_rush: Option<u32>,
    pub run_stop: Option<u32>,
    pub tackling: Option<u32>,
    pub coverage: Option<u32>,
    pub jumping: Option<u32>,
    pub play_recognition: Option<u32>,
    pub kick_power: Option<u32>,
    pub kick_accuracy: Option<u32>,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            overall: DEFAULT_OVERALL,
            potential: 75,
            injury_prone: 50,
            morale: 75,
            confidence: 75,
            development_trait: DevTrait::Normal,
            speed: 70,
            strength: 70,
            stamina: 80,
            awareness: 70,
            accuracy: None,
            arm_strength: None,
            throw_power: None,
            pocket_presence: None,
            hands: None,
            route_running: None,
            catching: None,
            elusiveness: None,
            pass_block: None,
            run_block: None,
            pass_rush: None,
            run_stop: None,
            tackling: None,
            coverage: None,
            jumping: None,
            play_recognition: None,
            kick_power: None,
            kick_accuracy: None,
        }
    }
}

impl PlayerAttributes {
    pub fn from_overall(overall: u32) -> Self {
        Self {
            overall,
            potential: overall.saturating_add(5).min(99),
            development_trait: DevTrait::from_overall(overall),
            ..Self::default()
        }
    }
}

/// One Madden roster row after synthesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatedPlayer {
    pub player: Player,
    pub attributes: PlayerAttributes,
    pub team: &'static str,
}

impl fmt::Display for RatedPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {} {}", self.player.first_name, self.player.last_name)?;
        writeln!(f, "Position: {}", self.player.position)?;
        writeln!(f, "Overall: {}", self.attributes.overall)?;
        write!(f, "Team: {}", self.team)
    }
}

/* ---------------- Spotrac roster ---------------- */

/// Accepted range for a scraped age; anything else is a stray number.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 18..=50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterPlayer {
    pub player_name: String,
    pub position: String,
    pub age: Option<u32>,
}

impl fmt::Display for RosterPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.player_name)?;
        writeln!(f, "Position: {}", self.position)?;
        match self.age {
            Some(age) => write!(f, "Age: {age}"),
            None => write!(f, "Age: -"),
        }
    }
}

/* ---------------- Spotrac contracts ---------------- */

/// Assumed contract length; the cap table has no term column.
pub const ASSUMED_YEARS: u32 = 3;

/// Money columns of one cap-table row, whole dollars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapRow {
    pub cap_hit: i64,
    pub base_salary: i64,
    pub signing_bonus: i64,
    pub roster_bonus: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub player_name: String,
    pub position: String,
    pub age: Option<u32>,
    #[serde(rename = "base_salary_2025")]
    pub base_salary: i64,
    #[serde(rename = "cap_hit_2025")]
    pub cap_hit: i64,
    pub total_value: i64,
    pub years: u32,
    pub avg_salary: i64,
    pub guaranteed: i64,
    pub signing_bonus: i64,
}

impl Contract {
    /// Estimate the contract from a single season's cap row.
    /// total = cap hit × 3 years; guaranteed = bonuses + half the base salary.
    /// Sums saturate, so an absurd cell can't overflow.
    pub fn estimate(player_name: String, position: String, age: Option<u32>, row: CapRow) -> Self {
        let signing_bonus = row.signing_bonus.saturating_add(row.roster_bonus);
        let total_value = row.cap_hit.saturating_mul(i64::from(ASSUMED_YEARS));
        Self {
            player_name,
            position,
            age,
            base_salary: row.base_salary,
            cap_hit: row.cap_hit,
            total_value: if total_value > 0 { total_value } else { row.cap_hit },
            years: ASSUMED_YEARS,
            avg_salary: row.cap_hit,
            guaranteed: signing_bonus.saturating_add(row.base_salary / 2),
            signing_bonus,
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.player_name)?;
        writeln!(f, "Position: {}", self.position)?;
        writeln!(f, "Cap Hit: ${}", group_thousands(self.cap_hit))?;
        writeln!(f, "Total Value: ${}", group_thousands(self.total_value))?;
        write!(f, "Years: {}", self.years)
    }
}

/// 1234567 → "1,234,567".
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/* ---------------- Aggregation ---------------- */

/// One team's records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRows<T> {
    pub team: &'static Team,
    pub records: Vec<T>,
}

/// Everything a batch collected, in the order teams were visited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSet<T> {
    pub teams: Vec<TeamRows<T>>,
}

impl<T> Default for DataSet<T> {
    fn default() -> Self {
        Self { teams: Vec::new() }
    }
}

impl<T> DataSet<T> {
    pub fn push(&mut self, team: &'static Team, records: Vec<T>) {
        self.teams.push(TeamRows { team, records });
    }

    pub fn total(&self) -> usize {
        self.teams.iter().map(|t| t.records.len()).sum()
    }

    /// Records in batch order, with their team.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Team, &T)> + '_ {
        self.teams
            .iter()
            .flat_map(|t| t.records.iter().map(move |r| (t.team, r)))
    }
}
