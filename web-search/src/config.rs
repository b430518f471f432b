//! Search provider settings loaded from environment variables.

/// Settings for [`crate::SerpApiSearch`]. All fields have defaults via `from_env`.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// SerpApi JSON endpoint.
    pub endpoint: String,
    /// Keys used round-robin, one per call.
    pub api_keys: Vec<String>,
    /// Upper bound on returned results.
    pub max_results: usize,
    /// Google country (`gl`).
    pub region: String,
    /// Google interface language (`hl`).
    pub language: String,
    /// Optional request timeout in seconds. `None` means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://serpapi.com/search.json".to_string(),
            api_keys: Vec::new(),
            max_results: 5,
            region: "id".to_string(),
            language: "id".to_string(),
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    /// Reads keys from `SERPAPI_KEYS` (comma separated) or, when unset, from
    /// the numbered `SERPAPI_KEY_1`, `SERPAPI_KEY_2`, ... until the first gap.
    /// `SERPAPI_URL` overrides the endpoint.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(url) = std::env::var("SERPAPI_URL") {
            if !url.trim().is_empty() {
                cfg.endpoint = url.trim().to_string();
            }
        }
        cfg.max_results = parse("SERPAPI_MAX_RESULTS", cfg.max_results);
        cfg.timeout_secs = std::env::var("SERPAPI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok());

        cfg.api_keys = match std::env::var("SERPAPI_KEYS") {
            Ok(list) if !list.trim().is_empty() => split_keys(&list),
            _ => numbered_keys(),
        };
        cfg
    }
}

fn split_keys(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn numbered_keys() -> Vec<String> {
    (1..)
        .map_while(|i| std::env::var(format!("SERPAPI_KEY_{i}")).ok())
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(dflt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_is_trimmed() {
        assert_eq!(split_keys(" a, b ,,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn defaults_pin_indonesian_results() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.max_results, 5);
        assert_eq!(cfg.region, "id");
        assert_eq!(cfg.language, "id");
    }

    #[test]
    fn no_timeout_by_default() {
        assert_eq!(SearchConfig::default().timeout_secs, None);
    }
}
