// src/file.rs
use std::{
    fs,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeStruct},
};

use crate::config::consts::{ATTRIBUTES_FILE, PLAYERS_FILE, SUMMARY_FILE};
use crate::data::{Contract, DataSet, Player, PlayerAttributes, RatedPlayer, RosterPlayer};
use crate::error::ExportError;
use crate::teams::Team;

type Result<T> = std::result::Result<T, ExportError>;

/// Records exported as one file per team plus a summary.
/// The keys name the count/list/total fields in those files.
pub trait TeamRecord: Serialize {
    const COUNT_KEY: &'static str;
    const LIST_KEY: &'static str;
    const TOTAL_KEY: &'static str;
}

impl TeamRecord for RosterPlayer {
    const COUNT_KEY: &'static str = "player_count";
    const LIST_KEY: &'static str = "players";
    const TOTAL_KEY: &'static str = "total_players";
}

impl TeamRecord for Contract {
    const COUNT_KEY: &'static str = "contract_count";
    const LIST_KEY: &'static str = "contracts";
    const TOTAL_KEY: &'static str = "total_contracts";
}

/* ---------------- Per-team + summary ---------------- */

/// `{team_slug, team_abbr, <count>, <list>}`
struct TeamFile<'a, T> {
    team: &'a Team,
    records: &'a [T],
}

impl<T: TeamRecord> Serialize for TeamFile<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("TeamFile", 4)?;
        st.serialize_field("team_slug", self.team.slug)?;
        st.serialize_field("team_abbr", self.team.abbr)?;
        st.serialize_field(T::COUNT_KEY, &self.records.len())?;
        st.serialize_field(T::LIST_KEY, self.records)?;
        st.end()
    }
}

/// `{total_teams, <total>, teams: {slug: {abbr, <count>}}}`
struct Summary<'a, T>(&'a DataSet<T>);

impl<T: TeamRecord> Serialize for Summary<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("Summary", 3)?;
        st.serialize_field("total_teams", &self.0.teams.len())?;
        st.serialize_field(T::TOTAL_KEY, &self.0.total())?;
        st.serialize_field("teams", &SummaryTeams(self.0))?;
        st.end()
    }
}

struct SummaryTeams<'a, T>(&'a DataSet<T>);

impl<T: TeamRecord> Serialize for SummaryTeams<'_, T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = s.serialize_map(Some(self.0.teams.len()))?;
        for t in &self.0.teams {
            let entry = SummaryEntry::<T> { abbr: t.team.abbr, count: t.records.len(), _kind: PhantomData };
            map.serialize_entry(t.team.slug, &entry)?;
        }
        map.end()
    }
}

struct SummaryEntry<T> {
    abbr: &'static str,
    count: usize,
    _kind: PhantomData<T>,
}

impl<T: TeamRecord> Serialize for SummaryEntry<T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("SummaryEntry", 2)?;
        st.serialize_field("abbr", self.abbr)?;
        st.serialize_field(T::COUNT_KEY, &self.count)?;
        st.end()
    }
}

/// `kc.json` for Kansas City.
pub fn team_file_name(team: &Team) -> String {
    join!(&team.abbr.to_ascii_lowercase(), ".json")
}

/// One file per team into `dir`, then `_summary.json`.
/// Returns every path written, summary last.
pub fn export_per_team<T: TeamRecord>(dir: &Path, data: &DataSet<T>) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut written = Vec::with_capacity(data.teams.len() + 1);
    for t in &data.teams {
        let path = dir.join(team_file_name(t.team));
        write_json(&path, &TeamFile { team: t.team, records: &t.records })?;
        log::info!("wrote {} ({} {})", path.display(), t.records.len(), T::LIST_KEY);
        written.push(path);
    }

    let summary = dir.join(SUMMARY_FILE);
    write_json(&summary, &Summary(data))?;
    log::info!("wrote {}", summary.display());
    written.push(summary);

    Ok(written)
}

/* ---------------- Flat Madden export ---------------- */

#[derive(Serialize)]
struct PlayerRow<'a> {
    #[serde(flatten)]
    player: &'a Player,
    id: String,
    team: &'a str,
}

#[derive(Serialize)]
struct AttributesRow<'a> {
    #[serde(flatten)]
    attributes: &'a PlayerAttributes,
    player_id: String,
}

/// `player_0000`, `player_0001`, …
pub fn player_id(index: usize) -> String {
    format!("player_{index:04}")
}

/// `players.json` and `player_attributes.json` covering every team.
/// Ids are assigned in batch order and link the two files.
pub fn export_madden(dir: &Path, data: &DataSet<RatedPlayer>) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;

    let mut players = Vec::with_capacity(data.total());
    let mut attributes = Vec::with_capacity(data.total());
    for (idx, (_, rated)) in data.iter().enumerate() {
        players.push(PlayerRow { player: &rated.player, id: player_id(idx), team: rated.team });
        attributes.push(AttributesRow { attributes: &rated.attributes, player_id: player_id(idx) });
    }

    let players_path = dir.join(PLAYERS_FILE);
    let attributes_path = dir.join(ATTRIBUTES_FILE);
    write_json(&players_path, &players)?;
    write_json(&attributes_path, &attributes)?;
    log::info!("wrote {} ({} players)", players_path.display(), players.len());
    log::info!("wrote {} ({} attributes)", attributes_path.display(), attributes.len());

    Ok(vec![players_path, attributes_path])
}

/* ---------------- Helpers ---------------- */

/// Pretty JSON (2-space indent), overwriting whatever was there.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|source| ExportError::Json { path: path.to_path_buf(), source })?;
    fs::write(path, text).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
