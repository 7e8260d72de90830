use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use super::aliases::TEAM_ALIASES;

static ALIAS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TEAM_ALIASES.iter().copied().collect());

/// Maps a raw provider spelling to its canonical team name.
///
/// The lookup lowercases and trims the input, consults the alias table, then
/// retries with trailing periods and commas removed. Names without an alias
/// come back trimmed but otherwise unchanged, so the function is total.
///
/// # Arguments
/// * `raw` - Team name as it appears on a provider page
///
/// # Returns
/// * `String` - Canonical name, or the trimmed input when no alias applies
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::team_names::normalize;
///
/// assert_eq!(normalize("Iowa St."), "Iowa State");
/// assert_eq!(normalize("  UCONN "), "Connecticut");
/// assert_eq!(normalize("Duke"), "Duke");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let key = trimmed.to_lowercase();

    if let Some(canonical) = ALIAS_MAP.get(key.as_str()) {
        return (*canonical).to_string();
    }

    let stripped = key.trim_end_matches(['.', ',']);
    if stripped != key
        && let Some(canonical) = ALIAS_MAP.get(stripped)
    {
        return (*canonical).to_string();
    }

    trimmed.to_string()
}

/// Resolves a raw name to an entry of `roster`, or `None` when nothing
/// matches exactly (case-insensitive, after normalization).
///
/// No substring or fuzzy matching is attempted: "Iowa" never resolves to
/// "Iowa State".
///
/// # Example
/// ```
/// use cbb_rankings::data_fetcher::team_names::find_canonical;
///
/// let roster = vec!["Iowa State".to_string(), "Iowa".to_string()];
/// assert_eq!(find_canonical("Iowa", &roster), Some("Iowa".to_string()));
/// assert_eq!(find_canonical("Iowa St.", &roster), Some("Iowa State".to_string()));
/// assert_eq!(find_canonical("Drake", &roster), None);
/// ```
pub fn find_canonical(raw: &str, roster: &[String]) -> Option<String> {
    let normalized = normalize(raw).to_lowercase();
    roster
        .iter()
        .find(|name| name.to_lowercase() == normalized)
        .cloned()
}

/// Case-insensitive index over a roster for repeated lookups during a merge.
///
/// Resolves exactly like [`find_canonical`] but in constant time per name.
#[derive(Debug, Clone, Default)]
pub struct CanonicalRoster {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl CanonicalRoster {
    /// Builds the index. Later names that collide case-insensitively with an
    /// earlier one are ignored.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::default();
        for name in names {
            roster.insert(name.into());
        }
        roster
    }

    /// Adds a name; returns `false` if an equivalent name is already present
    pub fn insert(&mut self, name: String) -> bool {
        let key = name.to_lowercase();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.names.len());
        self.names.push(name);
        true
    }

    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.resolve_position(raw)
            .map(|position| self.names[position].as_str())
    }

    /// Position of the resolved name in insertion order
    pub fn resolve_position(&self, raw: &str) -> Option<usize> {
        let key = normalize(raw).to_lowercase();
        let position = self.index.get(&key).copied();
        if position.is_none() {
            debug!("No roster match for team name '{raw}'");
        }
        position
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An alias entry whose canonical target is missing from a live roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleAlias {
    pub alias: &'static str,
    pub canonical: &'static str,
}

/// Lists alias entries pointing at names the roster does not contain.
///
/// Run against the current canonical roster to spot table entries that no
/// longer reconcile anything, e.g. after a provider renames a school.
/// Results are sorted by canonical name, then alias.
pub fn audit_aliases(roster: &CanonicalRoster) -> Vec<StaleAlias> {
    let mut stale: Vec<StaleAlias> = TEAM_ALIASES
        .iter()
        .filter(|(_, canonical)| !roster.contains(canonical))
        .map(|&(alias, canonical)| StaleAlias { alias, canonical })
        .collect();
    stale.sort_by(|a, b| a.canonical.cmp(b.canonical).then(a.alias.cmp(b.alias)));
    stale
}
