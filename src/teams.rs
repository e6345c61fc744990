//! Team Registry
//!
//! The fixed team order shared by the data service and the charts. Every
//! win-ratio row carries one value per team in exactly this order.

/// Label of the date column in the chart header
pub const DAYS_LABEL: &str = "Days";

/// Tracked teams, in column order
pub const TEAM_NAMES: [&str; 30] = [
    "Atlanta Hawks",
    "Boston Celtics",
    "Cleveland Cavaliers",
    "New Orleans Pelicans",
    "Chicago Bulls",
    "Dallas Mavericks",
    "Denver Nuggets",
    "Golden State Warriors",
    "Houston Rockets",
    "Los Angeles Clippers",
    "Los Angeles Lakers",
    "Miami Heat",
    "Milwaukee Bucks",
    "Minnesota Timberwolves",
    "Brooklyn Nets",
    "New York Knicks",
    "Orlando Magic",
    "Indiana Pacers",
    "Philadelphia 76ers",
    "Phoenix Suns",
    "Portland Trail Blazers",
    "Sacramento Kings",
    "San Antonio Spurs",
    "Oklahoma City Thunder",
    "Toronto Raptors",
    "Utah Jazz",
    "Memphis Grizzlies",
    "Washington Wizards",
    "Detroit Pistons",
    "Charlotte Hornets",
];

/// Former franchise names mapped to their current name
const ALIASES: [(&str, &str); 4] = [
    ("LA Clippers", "Los Angeles Clippers"),
    ("New Jersey Nets", "Brooklyn Nets"),
    ("New Orleans Hornets", "New Orleans Pelicans"),
    ("Charlotte Bobcats", "Charlotte Hornets"),
];

/// Chart header: "Days" followed by every team name
pub fn header_labels() -> Vec<String> {
    std::iter::once(DAYS_LABEL)
        .chain(TEAM_NAMES.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Column index (0-based, excluding the date column) for a team name.
///
/// Historical names are resolved through the alias table first.
pub fn team_index(name: &str) -> Option<usize> {
    let name = name.trim();
    let canonical = ALIASES
        .iter()
        .find(|(old, _)| *old == name)
        .map(|(_, new)| *new)
        .unwrap_or(name);

    TEAM_NAMES.iter().position(|team| *team == canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_starts_with_days() {
        let header = header_labels();
        assert_eq!(header.len(), TEAM_NAMES.len() + 1);
        assert_eq!(header[0], "Days");
        assert_eq!(header[1], "Atlanta Hawks");
        assert_eq!(header[30], "Charlotte Hornets");
    }

    #[test]
    fn test_team_index_with_aliases() {
        assert_eq!(team_index("Boston Celtics"), Some(1));
        assert_eq!(team_index("LA Clippers"), team_index("Los Angeles Clippers"));
        assert_eq!(team_index("New Jersey Nets"), Some(14));
        assert_eq!(team_index(" Utah Jazz "), Some(25));
        assert_eq!(team_index("Seattle SuperSonics"), None);
    }
}
