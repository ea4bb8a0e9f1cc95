use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use energy_mix::{
    models::mix::{Apportioner, GlyphTable, Grouping, Method, MixTweet, RenderConfig, Renderer},
    support::entsoe::EntsoeQuery,
};

use crate::cli::TweetArgs;

/// Settings read from the `--config` file.
///
/// ```toml
/// line_width = 10
/// method = "largest-remainder"
/// group = true
/// sort = true
///
/// [grouping]
/// rules = [{ prefix = "uhli", bucket = "uhli" }]
///
/// [glyphs.uhli]
/// symbol = "\u26CF\uFE0F"
/// width = 2
///
/// [entsoe]
/// security_token = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub line_width: usize,
    pub method: Method,
    pub group: bool,
    pub grouping: Grouping,
    pub sort: bool,
    /// Overrides merged over the default glyph table.
    pub glyphs: GlyphTable,
    pub entsoe: EntsoeQuery,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: RenderConfig::DEFAULT_LINE_WIDTH,
            method: Method::default(),
            group: false,
            grouping: Grouping::default(),
            sort: false,
            glyphs: GlyphTable::empty(),
            entsoe: EntsoeQuery::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Applies command-line flags, which take precedence over the file.
    #[must_use]
    pub fn with_tweet_args(mut self, args: &TweetArgs) -> Self {
        if args.naive {
            self.method = Method::NaiveRounding;
        }
        if let Some(line_width) = args.line_width {
            self.line_width = line_width;
        }
        self.group |= args.group;
        self.sort |= args.sort;
        self
    }

    pub fn mix_tweet(&self) -> Result<MixTweet> {
        let config = RenderConfig::with_line_width(self.line_width)
            .with_context(|| format!("invalid line width {}", self.line_width))?;
        let glyphs = GlyphTable::default().merged(self.glyphs.clone());

        Ok(MixTweet::new(
            Apportioner::new(self.method),
            Renderer::new(glyphs, config),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn tweet_args() -> TweetArgs {
        TweetArgs {
            snapshot: PathBuf::from("-"),
            naive: false,
            line_width: None,
            group: false,
            sort: false,
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let tweet = config.mix_tweet().unwrap();
        assert_eq!(tweet.apportioner().method(), Method::LargestRemainder);
        assert_eq!(tweet.renderer().config().line_width(), 10);
        assert_eq!(tweet.renderer().glyphs(), &GlyphTable::default());
    }

    #[test]
    fn full_file() {
        let config: Config = toml::from_str(
            r#"
            line_width = 5
            method = "naive-rounding"
            group = true
            sort = true

            [grouping]
            rules = [{ prefix = "uhli", bucket = "fosilni" }]

            [glyphs.uhli]
            symbol = "\u26CF\uFE0F"
            width = 2

            [entsoe]
            security_token = "abc-123"
            "#,
        )
        .unwrap();

        assert!(config.group && config.sort);
        assert_eq!(config.grouping.bucket_for("uhli_hnede"), "fosilni");
        assert_eq!(config.entsoe.security_token.as_deref(), Some("abc-123"));

        let tweet = config.mix_tweet().unwrap();
        assert_eq!(tweet.apportioner().method(), Method::NaiveRounding);
        assert_eq!(tweet.renderer().config().line_width(), 5);

        let glyphs = tweet.renderer().glyphs();
        assert_eq!(glyphs.get("uhli").unwrap().symbol(), "\u{26cf}\u{fe0f}");
        assert_eq!(glyphs.len(), GlyphTable::default().len());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(toml::from_str::<Config>("method = \"banker\"").is_err());
        assert!(toml::from_str::<Config>("colour = true").is_err());
        assert!(toml::from_str::<Config>("[glyphs.uhli]\nsymbol = \"AB\"\nwidth = 1").is_err());

        let zero_width: Config = toml::from_str("line_width = 0").unwrap();
        assert!(zero_width.mix_tweet().is_err());
    }

    #[test]
    fn flags_override_file() {
        let config: Config = toml::from_str("line_width = 5").unwrap();
        let args = TweetArgs {
            naive: true,
            line_width: Some(20),
            sort: true,
            ..tweet_args()
        };

        let config = config.with_tweet_args(&args);
        assert_eq!(config.method, Method::NaiveRounding);
        assert_eq!(config.line_width, 20);
        assert!(config.sort);
        assert!(!config.group);

        let unchanged = Config::default().with_tweet_args(&tweet_args());
        assert_eq!(unchanged, Config::default());
    }
}
