//! Build-time configuration for the page controller.
//!
//! A wasm bundle has no process environment, so overrides are captured with
//! `option_env!` when the bundle is built (`PORTFOLIO_FORM_ACCESS_KEY=... trunk build`).

use url::Url;

use crate::logging::LogLevel;

const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
const DEFAULT_FORM_ACCESS_KEY: &str = "YOUR_ACCESS_KEY_HERE";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_SCROLL_DEBOUNCE_MS: u32 = 100;
const DEFAULT_FORM_RESTORE_MS: u32 = 3_000;

const SCROLL_DEBOUNCE_MS_BOUNDS: (u32, u32) = (1, 1_000);
const FORM_RESTORE_MS_BOUNDS: (u32, u32) = (0, 60_000);

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub form_endpoint: Url,
    pub form_access_key: String,
    pub log_level: LogLevel,
    pub scroll_debounce_ms: u32,
    pub form_restore_ms: u32,
    pub typing_effect: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::from_values(&BuildValues::default())
    }
}

#[derive(Clone, Copy, Default)]
pub struct BuildValues<'a> {
    pub form_endpoint: Option<&'a str>,
    pub form_access_key: Option<&'a str>,
    pub log_level: Option<&'a str>,
    pub scroll_debounce_ms: Option<&'a str>,
    pub form_restore_ms: Option<&'a str>,
    pub typing_effect: Option<&'a str>,
}

impl ControllerConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(&BuildValues {
            form_endpoint: option_env!("PORTFOLIO_FORM_ENDPOINT"),
            form_access_key: option_env!("PORTFOLIO_FORM_ACCESS_KEY"),
            log_level: option_env!("PORTFOLIO_LOG_LEVEL"),
            scroll_debounce_ms: option_env!("PORTFOLIO_SCROLL_DEBOUNCE_MS"),
            form_restore_ms: option_env!("PORTFOLIO_FORM_RESTORE_MS"),
            typing_effect: option_env!("PORTFOLIO_TYPING_EFFECT"),
        })
    }

    pub fn from_values(values: &BuildValues<'_>) -> Self {
        let form_endpoint = parse_http_url(values.form_endpoint).unwrap_or_else(default_form_endpoint);
        let form_access_key = parse_non_empty_string(values.form_access_key)
            .unwrap_or_else(|| DEFAULT_FORM_ACCESS_KEY.to_string());
        let log_level = parse_non_empty_string(values.log_level)
            .and_then(|value| LogLevel::from_str(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let scroll_debounce_ms = parse_u32_with_bounds(
            values.scroll_debounce_ms,
            DEFAULT_SCROLL_DEBOUNCE_MS,
            SCROLL_DEBOUNCE_MS_BOUNDS,
        );
        let form_restore_ms =
            parse_u32_with_bounds(values.form_restore_ms, DEFAULT_FORM_RESTORE_MS, FORM_RESTORE_MS_BOUNDS);
        let typing_effect = parse_bool(values.typing_effect).unwrap_or(false);

        Self {
            form_endpoint,
            form_access_key,
            log_level,
            scroll_debounce_ms,
            form_restore_ms,
            typing_effect,
        }
    }
}

fn default_form_endpoint() -> Url {
    Url::parse(DEFAULT_FORM_ENDPOINT).expect("default form endpoint is a valid URL")
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url(raw: Option<&str>) -> Option<Url> {
    let value = parse_non_empty_string(raw)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match parse_non_empty_string(raw)?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = ControllerConfig::default();

        assert_eq!(config.form_endpoint.as_str(), DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.form_access_key, DEFAULT_FORM_ACCESS_KEY);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.scroll_debounce_ms, 100);
        assert_eq!(config.form_restore_ms, 3_000);
        assert!(!config.typing_effect);
    }

    #[test]
    fn out_of_bounds_numbers_fall_back_to_defaults() {
        let config = ControllerConfig::from_values(&BuildValues {
            scroll_debounce_ms: Some("0"),
            form_restore_ms: Some("120000"),
            ..BuildValues::default()
        });

        assert_eq!(config.scroll_debounce_ms, DEFAULT_SCROLL_DEBOUNCE_MS);
        assert_eq!(config.form_restore_ms, DEFAULT_FORM_RESTORE_MS);
    }

    #[test]
    fn in_bounds_numbers_are_trimmed_and_accepted() {
        let config = ControllerConfig::from_values(&BuildValues {
            scroll_debounce_ms: Some(" 250 "),
            form_restore_ms: Some("0"),
            ..BuildValues::default()
        });

        assert_eq!(config.scroll_debounce_ms, 250);
        assert_eq!(config.form_restore_ms, 0);
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let config = ControllerConfig::from_values(&BuildValues {
            form_endpoint: Some("ftp://relay.example.com/submit"),
            ..BuildValues::default()
        });

        assert_eq!(config.form_endpoint.as_str(), DEFAULT_FORM_ENDPOINT);
    }

    #[test]
    fn custom_endpoint_and_key_are_used() {
        let config = ControllerConfig::from_values(&BuildValues {
            form_endpoint: Some("https://relay.example.com/submit"),
            form_access_key: Some("abc-123"),
            log_level: Some("debug"),
            typing_effect: Some("yes"),
            ..BuildValues::default()
        });

        assert_eq!(config.form_endpoint.as_str(), "https://relay.example.com/submit");
        assert_eq!(config.form_access_key, "abc-123");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.typing_effect);
    }

    #[test]
    fn blank_access_key_keeps_placeholder() {
        assert_eq!(parse_non_empty_string(Some("   ")), None);
        assert_eq!(parse_bool(Some("maybe")), None);
    }
}
