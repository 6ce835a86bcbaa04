// src/teams.rs

/// One franchise as the source sites address it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Team {
    /// Lowercase-hyphenated URL identifier, e.g. `kansas-city-chiefs`.
    pub slug: &'static str,
    /// League abbreviation, e.g. `KC`.
    pub abbr: &'static str,
}

const fn team(slug: &'static str, abbr: &'static str) -> Team {
    Team { slug, abbr }
}

/// All 32 teams, alphabetical by slug. Batch runs walk this order.
pub static TEAMS: [Team; 32] = [
    team("arizona-cardinals", "ARI"),
    team("atlanta-falcons", "ATL"),
    team("baltimore-ravens", "BAL"),
    team("buffalo-bills", "BUF"),
    team("carolina-panthers", "CAR"),
    team("chicago-bears", "CHI"),
    team("cincinnati-bengals", "CIN"),
    team("cleveland-browns", "CLE"),
    team("dallas-cowboys", "DAL"),
    team("denver-broncos", "DEN"),
    team("detroit-lions", "DET"),
    team("green-bay-packers", "GB"),
    team("houston-texans", "HOU"),
    team("indianapolis-colts", "IND"),
    team("jacksonville-jaguars", "JAX"),
    team("kansas-city-chiefs", "KC"),
    team("las-vegas-raiders", "LV"),
    team("los-angeles-chargers", "LAC"),
    team("los-angeles-rams", "LAR"),
    team("miami-dolphins", "MIA"),
    team("minnesota-vikings", "MIN"),
    team("new-england-patriots", "NE"),
    team("new-orleans-saints", "NO"),
    team("new-york-giants", "NYG"),
    team("new-york-jets", "NYJ"),
    team("philadelphia-eagles", "PHI"),
    team("pittsburgh-steelers", "PIT"),
    team("san-francisco-49ers", "SF"),
    team("seattle-seahawks", "SEA"),
    team("tampa-bay-buccaneers", "TB"),
    team("tennessee-titans", "TEN"),
    team("washington-commanders", "WAS"),
];

pub fn all() -> impl Iterator<Item = &'static Team> {
    TEAMS.iter()
}

pub fn by_slug(slug: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.slug.eq_ignore_ascii_case(slug.trim()))
}

pub fn by_abbr(abbr: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.abbr.eq_ignore_ascii_case(abbr.trim()))
}

/// Accepts either a slug or an abbreviation.
pub fn find(key: &str) -> Option<&'static Team> {
    by_slug(key).or_else(|| by_abbr(key))
}
