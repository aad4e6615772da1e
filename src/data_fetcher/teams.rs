//! Team identity resolution.
//!
//! The scoreboard feed knows teams by numeric code and nickname ("Lakers"),
//! the stats site by market ("LA Lakers"). Two fixed tables bridge them.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Nickname to the stats site's market name.
const NICKNAME_MARKETS: [(&str, &str); 30] = [
    ("Hawks", "Atlanta"),
    ("Celtics", "Boston"),
    ("Nets", "Brooklyn"),
    ("Hornets", "Charlotte"),
    ("Bulls", "Chicago"),
    ("Cavaliers", "Cleveland"),
    ("Mavericks", "Dallas"),
    ("Nuggets", "Denver"),
    ("Pistons", "Detroit"),
    ("Warriors", "Golden State"),
    ("Rockets", "Houston"),
    ("Pacers", "Indiana"),
    ("Clippers", "LA Clippers"),
    ("Lakers", "LA Lakers"),
    ("Grizzlies", "Memphis"),
    ("Heat", "Miami"),
    ("Bucks", "Milwaukee"),
    ("Timberwolves", "Minnesota"),
    ("Pelicans", "New Orleans"),
    ("Knicks", "New York"),
    ("Thunder", "Okla City"),
    ("Magic", "Orlando"),
    ("76ers", "Philadelphia"),
    ("Suns", "Phoenix"),
    ("Trail Blazers", "Portland"),
    ("Kings", "Sacramento"),
    ("Spurs", "San Antonio"),
    ("Raptors", "Toronto"),
    ("Jazz", "Utah"),
    ("Wizards", "Washington"),
];

/// Numeric team code to nickname. Codes are 1-30 in nickname order.
static CODE_NICKNAMES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    NICKNAME_MARKETS
        .iter()
        .enumerate()
        .map(|(i, (nickname, _))| ((i + 1).to_string(), *nickname))
        .collect()
});

static NICKNAME_TO_MARKET: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NICKNAME_MARKETS.iter().copied().collect());

/// Market name for a nickname, exact match.
pub fn market_for_nickname(nickname: &str) -> Option<&'static str> {
    NICKNAME_TO_MARKET.get(nickname).copied()
}

/// Nickname for a numeric team code ("1" through "30").
pub fn nickname_for_code(code: &str) -> Option<&'static str> {
    CODE_NICKNAMES.get(code.trim()).copied()
}

/// Resolves a team identifier to the stats site's market name.
///
/// Tries the numeric code table first, then a case-insensitive search for a
/// nickname contained in the identifier. When several nicknames match
/// ("Charlotte Hornets" contains both "Hornets" and "Nets") the longest wins.
/// Returns `None` when nothing matches.
pub fn resolve_team(identifier: &str) -> Option<&'static str> {
    if let Some(nickname) = nickname_for_code(identifier) {
        return market_for_nickname(nickname);
    }

    let needle = identifier.to_lowercase();
    let resolved = NICKNAME_MARKETS
        .iter()
        .filter(|(nickname, _)| needle.contains(&nickname.to_lowercase()))
        .max_by_key(|(nickname, _)| nickname.len())
        .map(|(_, market)| *market);

    if resolved.is_none() {
        debug!("Could not find mapping for team identifier: {identifier}");
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_resolves_through_nickname() {
        assert_eq!(nickname_for_code("14"), Some("Lakers"));
        assert_eq!(resolve_team("14"), Some("LA Lakers"));
        assert_eq!(resolve_team("1"), Some("Atlanta"));
        assert_eq!(resolve_team("30"), Some("Washington"));
    }

    #[test]
    fn test_substring_fallback() {
        assert_eq!(resolve_team("Lakers Team"), Some("LA Lakers"));
        assert_eq!(resolve_team("los angeles LAKERS"), Some("LA Lakers"));
        assert_eq!(resolve_team("Portland Trail Blazers"), Some("Portland"));
        assert_eq!(resolve_team("76ers"), Some("Philadelphia"));
    }

    #[test]
    fn test_longest_nickname_wins() {
        assert_eq!(resolve_team("Charlotte Hornets"), Some("Charlotte"));
        assert_eq!(resolve_team("Brooklyn Nets"), Some("Brooklyn"));
    }

    #[test]
    fn test_unknown_identifiers() {
        assert_eq!(resolve_team("0"), None);
        assert_eq!(resolve_team("31"), None);
        assert_eq!(resolve_team("Sonics"), None);
        assert_eq!(resolve_team(""), None);
    }

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(CODE_NICKNAMES.len(), 30);
        assert_eq!(NICKNAME_TO_MARKET.len(), 30);
        for code in 1..=30 {
            let nickname = nickname_for_code(&code.to_string()).unwrap();
            assert!(market_for_nickname(nickname).is_some());
        }
    }
}
