// benches/parsers.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nfl_scrape::specs::{MaddenRoster, PageSpec, SpotracContracts, SpotracRoster};
use nfl_scrape::teams;

const ROWS: usize = 60;

fn madden_page() -> String {
    let rows: String = (0..ROWS)
        .map(|i| {
            format!(
                r#"<tr><td>{i}</td><td><a href="/p/{i}"><img src="p.png"></a><a href="/p/{i}">Player {i}</a><a href="/pos">LEDG</a><a href="/a">Power Rusher</a></td><td>{}</td></tr>"#,
                60 + i % 40
            )
        })
        .collect();
    format!("<html><body><table><tr><th>#</th><th>Player</th><th>OVR</th></tr>{rows}</table></body></html>")
}

fn roster_page() -> String {
    let rows: String = (0..ROWS)
        .map(|i| {
            format!(
                r#"<tr><td><img></td><td><a href="/redirect/player/{i}">Player {i}</a></td><td>WR</td><td>6-1</td><td>{} yrs</td><td>3</td></tr>"#,
                21 + i % 15
            )
        })
        .collect();
    format!(r#"<html><body><table class="datatable team-roster"><tr><th></th><th>Player</th><th>Pos</th><th>Ht</th><th>Age</th><th>Exp</th></tr>{rows}</table></body></html>"#)
}

fn cap_page() -> String {
    let row = |i: usize| {
        format!(
            r#"<tr><td><a href="/p/{i}">Player {i}</a></td><td>CB</td><td>{}</td><td>${},250,000</td><td>1.2%</td><td>-</td><td>$1,100,000</td><td>${}00,000</td><td>-</td><td>$250K</td></tr>"#,
            22 + i % 12,
            1 + i % 20,
            i % 9
        )
    };
    let header = "<tr><th>Player</th><th>Pos</th><th>Age</th><th>Cap Hit</th><th>Cap %</th><th>Dead</th><th>Base</th><th>SB</th><th>Opt</th><th>Roster</th></tr>";
    let active: String = (0..ROWS - 10).map(row).collect();
    let injured: String = (ROWS - 10..ROWS).map(row).collect();
    format!(
        r#"<html><body><table id="table_active">{header}{active}</table><table id="table_injured">{header}{injured}</table></body></html>"#
    )
}

fn bench_parsers(c: &mut Criterion) {
    let kc = teams::by_abbr("KC").expect("KC in team table");
    let (madden, roster, cap) = (madden_page(), roster_page(), cap_page());

    c.bench_function("madden_60", |b| {
        b.iter(|| {
            let rows = MaddenRoster.parse(black_box(&madden), kc).unwrap_or_default();
            black_box(rows.len())
        })
    });

    c.bench_function("roster_60", |b| {
        b.iter(|| {
            let rows = SpotracRoster.parse(black_box(&roster), kc).unwrap_or_default();
            black_box(rows.len())
        })
    });

    let contracts = SpotracContracts::default();
    c.bench_function("contracts_60", |b| {
        b.iter(|| {
            let rows = contracts.parse(black_box(&cap), kc).unwrap_or_default();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
