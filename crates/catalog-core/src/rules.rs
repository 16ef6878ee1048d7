//! Ordered categorical rules.
//!
//! Rules are evaluated top to bottom and the first match wins. Unmatched
//! values map to the empty string, not null.

/// One prefix test: any of `prefixes` maps the value to `label`.
#[derive(Debug, Clone, Copy)]
pub struct PrefixRule {
    pub prefixes: &'static [&'static str],
    pub label: &'static str,
}

const fn rule(prefixes: &'static [&'static str], label: &'static str) -> PrefixRule {
    PrefixRule { prefixes, label }
}

/// Label of the first rule with a prefix of `value`, or `""`.
pub fn first_prefix_match(rules: &[PrefixRule], value: &str) -> &'static str {
    rules
        .iter()
        .find(|rule| rule.prefixes.iter().any(|prefix| value.starts_with(prefix)))
        .map_or("", |rule| rule.label)
}

/// Cole Haan gender from the first letter of the style.
pub const COLE_HAAN_GENDER: &[PrefixRule] = &[
    rule(&["F"], "MACC"),
    rule(&["W"], "WFW"),
    rule(&["C"], "MFW"),
    rule(&["U"], "WACC"),
];

/// Columbia gender from the `ItemCode` prefix.
///
/// The order is fixed: single-digit and three-digit prefixes interleave, so
/// `802...` only reaches `YOUTH UNISEX` because no earlier rule matches `8`.
pub const COLUMBIA_GENDER: &[PrefixRule] = &[
    rule(&["3"], "MENS"),
    rule(&["804", "805"], "UNISEX"),
    rule(&["4"], "WOMENS"),
    rule(&["5"], "YOUTH BOYS"),
    rule(&["6"], "YOUTH GIRLS"),
    rule(&["802"], "YOUTH UNISEX"),
];

/// Cole Haan segment for a derived gender.
pub fn cole_haan_segment(gender: &str) -> &'static str {
    match gender {
        "WFW" | "MFW" => "FOOTWEAR",
        "MACC" | "WACC" => "ACCESSORIES",
        _ => "",
    }
}

/// New Era licensed teams and their league.
const TEAM_LEAGUES: &[(&str, &str)] = &[
    ("LOS ANGELES DODGERS", "MLB"),
    ("NEW YORK YANKEES", "MLB"),
    ("PITTSBURGH PIRATES", "MLB"),
    ("SAN FRANCISCO GIANTS", "MLB"),
    ("SEATTLE MARINERS", "MLB"),
    ("TAMPA BAY RAYS", "MLB"),
    ("NEW ERA BRANDED", "NEW ERA BRANDED"),
    ("NO APLICA", "NO APLICA"),
    ("NEW ENGLAND PATRIOTS", "NFL"),
    ("HOUSTON TEXANS", "NFL"),
    ("BALTIMORE RAVENS", "NFL"),
    ("TORONTO BLUE JAYS", "MLB"),
    ("HOUSTON ASTROS", "MLB"),
    ("GREEN BAY PACKERS", "NFL"),
    ("BOSTON RED SOX", "MLB"),
    ("BALTIMORE ORIOLES", "MLB"),
    ("ST. LOUIS CARDINALS", "MLB"),
    ("SEATTLE SEAHAWKS", "NFL"),
    ("DALLAS COWBOYS", "NFL"),
    ("PITTSBURGH STEELERS", "NFL"),
    ("MIAMI DOLPHINS", "NFL"),
    ("STARWARS", "ENTERTAINMENT"),
    ("DALLAS MAVERICKS", "NBA"),
    ("LOS ANGELES LAKERS", "NBA"),
    ("NEW ORLEANS SAINTS", "NFL"),
    ("JACKSONVILLE JAGUARS", "NFL"),
    ("CLEVELAND BROWNS", "NFL"),
    ("NEW YORK KNICKS", "NBA"),
    ("SAN ANTONIO SPURS", "NBA"),
    ("WASHINGTON NATIONALS", "MLB"),
    ("OAKLAND ATHLETICS", "MLB"),
    ("DETROIT TIGERS", "MLB"),
    ("ANAHEIM ANGELS", "MLB"),
    ("NASCAR", "MOTORSPORT"),
    ("NEW YORK METS", "MLB"),
    ("PHILADELPHIA PHILLIES", "MLB"),
    ("CHICAGO WHITE SOX", "MLB"),
    ("SAN DIEGO PADRES", "MLB"),
    ("CLEVELAND INDIANS", "MLB"),
    ("DENVER BRONCOS", "NFL"),
    ("BUFFALO BILLS", "NFL"),
    ("ATLANTA FALCONS", "NFL"),
    ("CHICAGO BEARS", "NFL"),
    ("BROOKLYN NETS", "NBA"),
    ("CHICAGO BULLS", "NBA"),
    ("SAN FRANCISCO 49ERS", "NFL"),
    ("INDIANAPOLIS COLTS", "NFL"),
    ("ARIZONA CARDINALS", "NFL"),
    ("OAKLAND RAIDERS", "NFL"),
    ("LOS ANGELES RAMS", "NFL"),
    ("TAMPA BAY BUCCANEERS", "NFL"),
    ("GOLDEN STATE WARRIORS", "NBA"),
    ("BOSTON CELTICS", "NBA"),
    ("CHICAGO CUBS", "MLB"),
];

/// League for a team name (exact match).
pub fn league_for_team(team: &str) -> Option<&'static str> {
    TEAM_LEAGUES
        .iter()
        .find(|(name, _)| *name == team)
        .map(|(_, league)| *league)
}
