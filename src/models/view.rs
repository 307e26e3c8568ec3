use crate::analysis::PairAlignment;
use crate::config::{ANALYSIS, company_name};
use crate::domain::{Observation, TimeFrame};

/// Everything the user can change about what is shown.
/// Treated as a value: the UI edits its own copy and the engine compares
/// copies to decide when a rebuild is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub selected_symbol: String,
    pub search: String,
    pub time_frame: TimeFrame,
    /// All-symbols chart and full heatmap, instead of the selected symbol only
    pub show_all: bool,
    pub alignment: PairAlignment,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            selected_symbol: ANALYSIS.default_symbol.to_string(),
            search: String::new(),
            time_frame: ANALYSIS.default_time_frame,
            show_all: ANALYSIS.default_show_all,
            alignment: ANALYSIS.default_alignment,
        }
    }
}

impl ViewConfig {
    pub fn window_minutes(&self) -> u32 {
        self.time_frame.minutes()
    }

    /// The selected symbol if the feed has it, otherwise the first available one.
    pub fn resolve_selected<'a>(&self, available: impl Iterator<Item = &'a str>) -> Option<String> {
        let mut first = None;
        for symbol in available {
            if symbol == self.selected_symbol {
                return Some(symbol.to_string());
            }
            if first.is_none() {
                first = Some(symbol);
            }
        }
        first.map(str::to_string)
    }
}

/// One watchlist line: latest quote plus display name.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub company: Option<&'static str>,
    pub price: f64,
    pub change: f64,
}

impl WatchlistEntry {
    pub fn from_latest(obs: &Observation) -> Self {
        Self {
            symbol: obs.symbol.clone(),
            company: company_name(&obs.symbol),
            price: obs.price,
            change: obs.change,
        }
    }

    pub fn display_name(&self) -> &str {
        self.company.unwrap_or(&self.symbol)
    }

    /// Case-insensitive substring match on ticker or company name.
    /// An empty (or all-whitespace) query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.symbol.to_lowercase().contains(&needle)
            || self
                .company
                .is_some_and(|company| company.to_lowercase().contains(&needle))
    }
}

/// Watchlist entries for the latest quotes that match `query`, in input order.
pub fn filter_watchlist(latest: &[Observation], query: &str) -> Vec<WatchlistEntry> {
    latest
        .iter()
        .map(WatchlistEntry::from_latest)
        .filter(|entry| entry.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn latest() -> Vec<Observation> {
        let now = Utc::now();
        vec![
            Observation::new("AAPL", 150.0, 0.5, now),
            Observation::new("MSFT", 285.0, -1.0, now),
            Observation::new("XYZ", 10.0, 0.0, now),
        ]
    }

    #[test]
    fn defaults_follow_analysis_config() {
        let view = ViewConfig::default();
        assert_eq!(view.selected_symbol, "AAPL");
        assert_eq!(view.window_minutes(), 5);
        assert!(view.show_all);
        assert_eq!(view.alignment, PairAlignment::Truncate);
    }

    #[test]
    fn search_matches_symbol_or_company_ignoring_case() {
        let symbols = |query: &str| -> Vec<String> {
            filter_watchlist(&latest(), query)
                .into_iter()
                .map(|e| e.symbol)
                .collect()
        };

        assert_eq!(symbols(""), vec!["AAPL", "MSFT", "XYZ"]);
        assert_eq!(symbols("  "), vec!["AAPL", "MSFT", "XYZ"]);
        assert_eq!(symbols("aap"), vec!["AAPL"]);
        assert_eq!(symbols("MICROSOFT"), vec!["MSFT"]);
        assert_eq!(symbols("xy"), vec!["XYZ"]);
        assert!(symbols("nothing-like-this").is_empty());
    }

    #[test]
    fn unknown_tickers_display_their_symbol() {
        let entries = filter_watchlist(&latest(), "");
        assert_eq!(entries[0].display_name(), "Apple Inc.");
        assert_eq!(entries[2].display_name(), "XYZ");
    }

    #[test]
    fn selection_falls_back_to_first_available() {
        let view = ViewConfig {
            selected_symbol: "MSFT".into(),
            ..Default::default()
        };
        assert_eq!(
            view.resolve_selected(["AAPL", "MSFT"].into_iter()),
            Some("MSFT".to_string())
        );
        assert_eq!(
            view.resolve_selected(["AMD", "TSLA"].into_iter()),
            Some("AMD".to_string())
        );
        assert_eq!(view.resolve_selected(std::iter::empty()), None);
    }
}
