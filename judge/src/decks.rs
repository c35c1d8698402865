use std::path::Path;

use anyhow::Context;
use triad::Decks;

/// Parses and validates decks given as JSON.
pub fn parse_decks(json: &str) -> anyhow::Result<Decks> {
    let decks: Decks = serde_json::from_str(json).context("Could not parse decks")?;
    decks.validate()?;
    Ok(decks)
}

/// Loads decks from a JSON file of the form `{"human": [...], "ai": [...]}`.
pub fn load_decks(path: &Path) -> anyhow::Result<Decks> {
    if !path.is_file() {
        anyhow::bail!("Deck file '{}' does not exist", path.display());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read deck file '{}'", path.display()))?;
    parse_decks(&json).with_context(|| format!("Invalid deck file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_decks_roundtrip_through_json() {
        let json = serde_json::to_string_pretty(&Decks::starter()).unwrap();
        assert_eq!(parse_decks(&json).unwrap(), Decks::starter());
    }

    #[test]
    fn invalid_decks_are_reported() {
        let mut decks = Decks::starter();
        decks.human.truncate(3);
        let json = serde_json::to_string(&decks).unwrap();
        let err = parse_decks(&json).unwrap_err();
        assert_eq!(err.to_string(), "The deck of Human has 3 cards instead of 5");

        assert!(parse_decks("{\"human\": []}").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("triad-judge-no-such-deck-file.json");
        assert!(load_decks(&path).is_err());
    }
}
