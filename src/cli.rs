// src/cli.rs
use std::{
    env,
    fmt::Display,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::{self, WrapErr, bail, eyre};

use crate::config::options::{AppOptions, Source, TeamSelector};
use crate::core::{Fetch, HttpClient};
use crate::data::DataSet;
use crate::error::ExportError;
use crate::file;
use crate::logging;
use crate::progress::ConsoleProgress;
use crate::scrape;
use crate::specs::{MaddenRoster, PageSpec, SpotracContracts, SpotracRoster};
use crate::teams::{self, Team};

pub enum Command {
    Run(AppOptions),
    Help,
}

/// Entry point shared by the three binaries.
pub fn run(source: Source) -> eyre::Result<()> {
    logging::init();

    let opts = match parse_args(source, env::args().skip(1))? {
        Command::Run(opts) => opts,
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(());
        }
    };

    if opts.list_teams {
        for t in teams::all() {
            println!("{},{}", t.slug, t.abbr);
        }
        return Ok(());
    }

    let client = HttpClient::new(opts.scrape.timeout).wrap_err("building HTTP client")?;

    match source {
        Source::Madden => run_pipeline(&client, &MaddenRoster, &opts, file::export_madden),
        Source::SpotracRoster => run_pipeline(&client, &SpotracRoster, &opts, file::export_per_team),
        Source::SpotracContracts => {
            let spec = SpotracContracts { season: opts.scrape.season };
            run_pipeline(&client, &spec, &opts, file::export_per_team)
        }
    }
}

/// Preview one team, ask, then run the batch and export.
fn run_pipeline<S, E>(fetch: &dyn Fetch, spec: &S, opts: &AppOptions, export: E) -> eyre::Result<()>
where
    S: PageSpec,
    S::Record: Display,
    E: FnOnce(&Path, &DataSet<S::Record>) -> Result<Vec<PathBuf>, ExportError>,
{
    let preview = opts.scrape.preview_team;
    println!("{} scraper", opts.scrape.source.label());
    println!("Testing with {} ({})...", preview.abbr, preview.slug);

    let sample = scrape::scrape_team(fetch, spec, preview);
    let Some(first) = sample.first() else {
        println!("Test failed - check the scraper");
        return Ok(());
    };
    println!("Test passed: {} records", sample.len());
    println!("Sample:\n{first}");

    if !opts.assume_yes {
        let batch = opts.scrape.teams.resolve().len();
        let prompt = format!("Scrape {batch} teams? (y/n): ");
        if !confirm(&mut io::stdin().lock(), &mut io::stdout(), &prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let mut progress = ConsoleProgress::default();
    let data = scrape::collect(fetch, spec, &opts.scrape, Some(&mut progress));

    let out_dir = &opts.export.out_dir;
    let written = export(out_dir, &data).wrap_err_with(|| format!("exporting to {}", out_dir.display()))?;
    println!("Saved:");
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Prints `prompt`, reads one line. Only `y` (any case) counts as yes.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

pub fn parse_args<I>(source: Source, args: I) -> eyre::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::for_source(source);
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = || args.next().ok_or_else(|| eyre!("Missing value for {a}"));
        match a.as_str() {
            "-t" | "--team" => opts.scrape.preview_team = lookup_team(&value()?)?,
            "--teams" => opts.scrape.teams = TeamSelector::Teams(parse_team_list(&value()?)?),
            "--limit" => {
                let n: usize = value()?.parse().wrap_err("--limit expects a number")?;
                if n == 0 {
                    bail!("--limit must be at least 1");
                }
                opts.scrape.teams = TeamSelector::First(n);
            }
            "-o" | "--out" => opts.export.out_dir = PathBuf::from(value()?),
            "--delay" => {
                let secs: f64 = value()?.parse().wrap_err("--delay expects seconds")?;
                opts.scrape.delay = Duration::try_from_secs_f64(secs)
                    .map_err(|_| eyre!("--delay must be a non-negative number of seconds, got {secs}"))?;
            }
            "--season" => opts.scrape.season = value()?.parse().wrap_err("--season expects a year")?,
            "-y" | "--yes" => opts.assume_yes = true,
            "--list-teams" => opts.list_teams = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(Command::Run(opts))
}

fn lookup_team(key: &str) -> eyre::Result<&'static Team> {
    teams::find(key).ok_or_else(|| eyre!("Unknown team: {key} (try --list-teams)"))
}

/// `kc,buffalo-bills, SF` → teams in the order given, duplicates dropped.
fn parse_team_list(s: &str) -> eyre::Result<Vec<&'static Team>> {
    let mut out: Vec<&'static Team> = Vec::new();
    for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let team = lookup_team(part)?;
        if !out.contains(&team) {
            out.push(team);
        }
    }
    if out.is_empty() {
        bail!("--teams needs at least one team");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(source: Source, args: &[&str]) -> eyre::Result<AppOptions> {
        match parse_args(source, args.iter().map(|a| a.to_string()))? {
            Command::Run(opts) => Ok(opts),
            Command::Help => Err(eyre!("help")),
        }
    }

    #[test]
    fn no_flags_means_defaults() {
        let opts = parse(Source::SpotracRoster, &[]).unwrap();
        assert_eq!(opts, AppOptions::for_source(Source::SpotracRoster));
    }

    #[test]
    fn flags_override_defaults() {
        let opts = parse(
            Source::SpotracContracts,
            &["-t", "BUF", "--teams", "kc, buffalo-bills,KC", "-o", "/tmp/x", "--delay", "0.25", "--season", "2026", "-y"],
        )
        .unwrap();
        assert_eq!(opts.scrape.preview_team.slug, "buffalo-bills");
        assert_eq!(
            opts.scrape.teams.resolve().iter().map(|t| t.abbr).collect::<Vec<_>>(),
            ["KC", "BUF"]
        );
        assert_eq!(opts.export.out_dir, PathBuf::from("/tmp/x"));
        assert_eq!(opts.scrape.delay, Duration::from_millis(250));
        assert_eq!(opts.scrape.season, 2026);
        assert!(opts.assume_yes);
    }

    #[test]
    fn limit_and_list() {
        let opts = parse(Source::Madden, &["--limit", "2", "--list-teams"]).unwrap();
        assert_eq!(opts.scrape.teams, TeamSelector::First(2));
        assert!(opts.list_teams);
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse(Source::Madden, &["--team", "gotham-rogues"]).is_err());
        assert!(parse(Source::Madden, &["--teams", " , "]).is_err());
        assert!(parse(Source::Madden, &["--limit", "0"]).is_err());
        assert!(parse(Source::Madden, &["--delay", "-1"]).is_err());
        assert!(parse(Source::Madden, &["--delay", "1e30"]).is_err());
        assert!(parse(Source::Madden, &["--delay", "NaN"]).is_err());
        assert!(parse(Source::Madden, &["--out"]).is_err());
        assert!(parse(Source::Madden, &["--frobnicate"]).is_err());
    }

    #[test]
    fn help_short_circuits() {
        let cmd = parse_args(Source::Madden, ["--help", "--bogus"].map(String::from)).unwrap();
        assert!(matches!(cmd, Command::Help));
    }

    #[test]
    fn confirm_accepts_only_y() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("Y\n"), &mut out, "go? ").unwrap());
        assert!(!confirm(&mut Cursor::new("yes\n"), &mut out, "go? ").unwrap());
        assert!(!confirm(&mut Cursor::new(""), &mut out, "go? ").unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "go? go? go? ");
    }
}
