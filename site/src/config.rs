//! Site configuration.
//!
//! Everything the page depends on at runtime (base URL, runtime mode, content
//! location) is resolved once into a [`SiteConfig`] and passed down. Layers,
//! highest priority first: CLI flags, environment, `datamaster.toml`, defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

/// Environment variable holding an explicit base URL.
pub const BASE_URL_ENV: &str = "DATAMASTER_BASE_URL";
/// Environment variable selecting the runtime mode.
pub const MODE_ENV: &str = "DATAMASTER_ENV";
/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "datamaster.toml";

/// Fallback base URL in development mode.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";
/// Fallback base URL in production mode.
pub const PRODUCTION_BASE_URL: &str = "https://datamaster.vercel.app";

/// Development vs production. Only selects the fallback base URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Local development; links point at localhost.
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// Parse a mode flag. Anything that is not "development"/"dev" counts as
    /// production, so a malformed flag can never break startup.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Base URL used when no explicit value is configured.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Self::Development => DEVELOPMENT_BASE_URL,
            Self::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Lowercase name, as accepted by `--mode`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Where the active base URL came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseUrlSource {
    /// Taken from a flag, the environment or the config file
    Explicit,
    /// Fallback for the given mode
    ModeDefault(RuntimeMode),
}

/// A validated base URL, stored without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    value: String,
    source: BaseUrlSource,
}

impl BaseUrl {
    /// Absolute URL without trailing slash.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Where the value came from.
    pub fn source(&self) -> BaseUrlSource {
        self.source
    }
}

/// Resolve the base URL from an optional explicit value and the runtime mode.
///
/// Empty, unparsable, or non-http(s) explicit values are ignored.
pub fn resolve_base_url(explicit: Option<&str>, mode: RuntimeMode) -> BaseUrl {
    if let Some(raw) = explicit.map(str::trim).filter(|raw| !raw.is_empty()) {
        match parse_http_url(raw) {
            Some(url) => {
                return BaseUrl {
                    value: url.as_str().trim_end_matches('/').to_string(),
                    source: BaseUrlSource::Explicit,
                };
            }
            None => warn!(
                value = raw,
                "ignoring invalid base URL, using {} default",
                mode.as_str()
            ),
        }
    }

    BaseUrl {
        value: mode.default_base_url().to_string(),
        source: BaseUrlSource::ModeDefault(mode),
    }
}

fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Where deferred sections read their content from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContentSource {
    /// Compiled-in copy.
    #[default]
    Builtin,
    /// JSON files in a directory, falling back to built-in copy per file.
    Directory(PathBuf),
}

/// `[serve]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Contents of `datamaster.toml`. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SiteFile {
    /// Explicit base URL
    pub base_url: Option<String>,
    /// `development` or `production`
    pub mode: Option<String>,
    /// Content overrides directory, relative to this file
    pub content_dir: Option<PathBuf>,
    /// Preview server settings
    pub serve: ServeConfig,
}

impl SiteFile {
    /// Load `datamaster.toml` from the given directory.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(DEFAULT_CONFIG_FILE))
    }

    /// Load config from a specific path.
    /// Returns defaults if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let mut file: Self = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        // content_dir is relative to the config file, not the process cwd.
        if let (Some(dir), Some(parent)) = (file.content_dir.as_ref(), path.parent())
            && dir.is_relative()
        {
            file.content_dir = Some(parent.join(dir));
        }
        file
    }

    /// This file as a configuration layer.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            mode: self.mode.as_deref().map(RuntimeMode::from_flag),
            content_dir: self.content_dir.clone(),
        }
    }
}

/// One configuration layer. Unset fields defer to the next layer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// Explicit base URL
    pub base_url: Option<String>,
    /// Runtime mode
    pub mode: Option<RuntimeMode>,
    /// Content overrides directory
    pub content_dir: Option<PathBuf>,
}

impl Overrides {
    /// Read [`BASE_URL_ENV`] and [`MODE_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()),
            mode: lookup(MODE_ENV).map(|v| RuntimeMode::from_flag(&v)),
            content_dir: None,
        }
    }

    /// Fill unset fields from a lower-priority layer.
    pub fn or(self, lower: Overrides) -> Overrides {
        Overrides {
            base_url: self.base_url.or(lower.base_url),
            mode: self.mode.or(lower.mode),
            content_dir: self.content_dir.or(lower.content_dir),
        }
    }
}

/// Fully resolved configuration, computed once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Runtime mode
    pub mode: RuntimeMode,
    /// Resolved base URL
    pub base_url: BaseUrl,
    /// Where deferred sections load their content
    pub content: ContentSource,
}

impl SiteConfig {
    /// Collapse the merged layers into the final configuration.
    pub fn resolve(layers: Overrides) -> Self {
        let mode = layers.mode.unwrap_or_default();
        let base_url = resolve_base_url(layers.base_url.as_deref(), mode);
        let content = layers
            .content_dir
            .map(ContentSource::Directory)
            .unwrap_or_default();

        Self {
            mode,
            base_url,
            content,
        }
    }

    /// Built-in content, mode defaults.
    pub fn for_mode(mode: RuntimeMode) -> Self {
        Self::resolve(Overrides {
            mode: Some(mode),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn development_without_override_uses_localhost() {
        let base = resolve_base_url(None, RuntimeMode::Development);
        assert_eq!(base.as_str(), "http://localhost:3000");
        assert_eq!(
            base.source(),
            BaseUrlSource::ModeDefault(RuntimeMode::Development)
        );
    }

    #[test]
    fn production_without_override_uses_hosted_domain() {
        let base = resolve_base_url(None, RuntimeMode::Production);
        assert_eq!(base.as_str(), "https://datamaster.vercel.app");
    }

    #[test]
    fn explicit_value_wins_over_mode() {
        let base = resolve_base_url(
            Some("https://staging.datamaster.health/"),
            RuntimeMode::Development,
        );
        assert_eq!(base.as_str(), "https://staging.datamaster.health");
        assert_eq!(base.source(), BaseUrlSource::Explicit);
    }

    #[test]
    fn malformed_explicit_value_falls_back() {
        for raw in ["", "   ", "not a url", "ftp://files.example.com", "localhost:3000"] {
            let base = resolve_base_url(Some(raw), RuntimeMode::Development);
            assert_eq!(base.as_str(), DEVELOPMENT_BASE_URL, "input {raw:?}");
        }
    }

    #[test]
    fn mode_flag_parsing_is_lenient() {
        assert_eq!(RuntimeMode::from_flag("development"), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_flag(" DEV "), RuntimeMode::Development);
        assert_eq!(RuntimeMode::from_flag("production"), RuntimeMode::Production);
        assert_eq!(RuntimeMode::from_flag("staging"), RuntimeMode::Production);
        assert_eq!(RuntimeMode::from_flag(""), RuntimeMode::Production);
    }

    #[test]
    fn env_layer_reads_both_variables() {
        let env = Overrides::from_vars(|key| match key {
            BASE_URL_ENV => Some("https://preview.example.org".into()),
            MODE_ENV => Some("development".into()),
            _ => None,
        });
        assert_eq!(env.base_url.as_deref(), Some("https://preview.example.org"));
        assert_eq!(env.mode, Some(RuntimeMode::Development));
    }

    #[test]
    fn empty_env_base_url_counts_as_unset() {
        let env = Overrides::from_vars(|key| (key == BASE_URL_ENV).then(String::new));
        assert_eq!(env.base_url, None);
    }

    #[test]
    fn higher_layer_takes_precedence() {
        let cli = Overrides {
            mode: Some(RuntimeMode::Development),
            ..Default::default()
        };
        let env = Overrides {
            base_url: Some("https://env.example.org".into()),
            mode: Some(RuntimeMode::Production),
            ..Default::default()
        };
        let config = SiteConfig::resolve(cli.or(env));
        assert_eq!(config.mode, RuntimeMode::Development);
        assert_eq!(config.base_url.as_str(), "https://env.example.org");
        assert_eq!(config.content, ContentSource::Builtin);
    }

    #[test]
    fn default_mode_is_production() {
        let config = SiteConfig::resolve(Overrides::default());
        assert_eq!(config.mode, RuntimeMode::Production);
        assert_eq!(config.base_url.as_str(), PRODUCTION_BASE_URL);
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let file = SiteFile::load(temp.path());
        assert!(file.base_url.is_none());
        assert_eq!(file.serve, ServeConfig::default());
    }

    #[test]
    fn loads_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
base_url = "https://docs.example.org"
mode = "development"
content_dir = "content"

[serve]
port = 8080
"#
        )
        .unwrap();

        let file = SiteFile::load(temp.path());
        assert_eq!(file.serve.port, 8080);
        assert_eq!(file.serve.host, "127.0.0.1");

        let config = SiteConfig::resolve(file.overrides());
        assert_eq!(config.mode, RuntimeMode::Development);
        assert_eq!(config.base_url.as_str(), "https://docs.example.org");
        assert_eq!(
            config.content,
            ContentSource::Directory(temp.path().join("content"))
        );
    }

    #[test]
    fn invalid_config_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "base_url = [not toml").unwrap();

        let file = SiteFile::load_from_path(&path);
        assert!(file.base_url.is_none());
        assert!(file.mode.is_none());
    }
}
