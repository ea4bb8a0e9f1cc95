//! Energy mix models.
//!
//! Turns an hourly production snapshot into whole-percentage shares that total
//! exactly 100, then renders those shares as a fixed-width grid of glyphs.
//!
//! The computational core is in the internal `core` module. This module
//! re-exports its API and provides [`twine_core::Model`] adapters:
//!
//! - [`Apportioner`]: [`Production`] to [`Shares`].
//! - [`Renderer`]: [`Shares`] to a rendered grid.
//! - [`MixTweet`]: both stages in sequence.

pub(crate) mod core;

pub use self::core::{
    ApportionError, FILLER, Glyph, GlyphError, GlyphTable, GlyphWidth, Grouping, InvalidInput,
    Method, Production, RenderConfig, RenderError, Shares, TOTAL_PERCENT, UNITS_PER_GLYPH,
    apportion, apportion_with, render,
};

use thiserror::Error;
use twine_core::Model;

/// Apportions a production snapshot into whole percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Apportioner {
    method: Method,
}

impl Apportioner {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }
}

impl Model for Apportioner {
    type Input = Production;
    type Output = Shares;
    type Error = ApportionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        apportion_with(input, self.method)
    }
}

/// Renders shares with a glyph table and line width.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    glyphs: GlyphTable,
    config: RenderConfig,
}

impl Renderer {
    #[must_use]
    pub fn new(glyphs: GlyphTable, config: RenderConfig) -> Self {
        Self { glyphs, config }
    }

    #[must_use]
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }
}

impl Model for Renderer {
    type Input = Shares;
    type Output = String;
    type Error = RenderError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        render(input, &self.glyphs, self.config)
    }
}

/// Errors from the combined apportion-then-render pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixTweetError {
    /// The production snapshot could not be apportioned.
    #[error("apportioning failed")]
    Apportion(#[from] ApportionError),

    /// The shares could not be rendered with the configured glyphs.
    #[error("rendering failed")]
    Render(#[from] RenderError),
}

/// Apportions a production snapshot and renders it in one call.
///
/// # Example
///
/// ```
/// use energy_mix::models::mix::{MixTweet, Production};
/// use twine_core::Model;
///
/// let production = Production::from_megawatts([("uhli", 600.0), ("voda", 400.0)]).unwrap();
/// let tweet = MixTweet::default().call(&production).unwrap();
///
/// assert_eq!(tweet.lines().count(), 10);
/// assert_eq!(tweet.matches('\u{1f3ed}').count(), 60);
/// assert_eq!(tweet.matches('\u{1f4a7}').count(), 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MixTweet {
    apportioner: Apportioner,
    renderer: Renderer,
}

impl MixTweet {
    #[must_use]
    pub fn new(apportioner: Apportioner, renderer: Renderer) -> Self {
        Self {
            apportioner,
            renderer,
        }
    }

    #[must_use]
    pub fn apportioner(&self) -> &Apportioner {
        &self.apportioner
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

impl Model for MixTweet {
    type Input = Production;
    type Output = String;
    type Error = MixTweetError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let shares = self.apportioner.call(input)?;
        Ok(self.renderer.call(&shares)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Power, power::megawatt};

    use super::core::test_support::{hour_7, hour_8, hour_16, shares};

    #[test]
    fn apportioner_delegates_to_method() {
        assert_eq!(
            Apportioner::default().call(&hour_8()).unwrap(),
            shares([42, 15, 0, 31, 2, 2, 2, 3, 0, 3])
        );

        let naive = Apportioner::new(Method::NaiveRounding);
        assert_eq!(naive.method(), Method::NaiveRounding);
        assert_eq!(naive.call(&hour_8()).unwrap().total(), 101);
    }

    #[test]
    fn stages_compose_into_mix_tweet() {
        let apportioner = Apportioner::default();
        let renderer = Renderer::default();
        let tweet = MixTweet::default();

        for production in [hour_7(), hour_8(), hour_16()] {
            let shares = apportioner.call(&production).unwrap();
            assert_eq!(
                tweet.call(&production).unwrap(),
                renderer.call(&shares).unwrap()
            );
        }
    }

    #[test]
    fn narrow_renderer() {
        let renderer = Renderer::new(
            GlyphTable::default(),
            RenderConfig::with_line_width(5).unwrap(),
        );
        let tweet = MixTweet::new(Apportioner::default(), renderer);

        assert_eq!(tweet.renderer().config().line_width(), 5);
        assert_eq!(tweet.call(&hour_7()).unwrap().lines().count(), 20);
    }

    #[test]
    fn stage_errors_are_wrapped() {
        assert_eq!(
            MixTweet::default().call(&Production::new()),
            Err(MixTweetError::Apportion(ApportionError::InvalidInput(
                InvalidInput::NoSources
            )))
        );

        let mut production = Production::new();
        production
            .insert("geotermalni", Power::new::<megawatt>(10.0))
            .unwrap();
        assert_eq!(
            MixTweet::default().call(&production),
            Err(MixTweetError::Render(RenderError::UnknownSource(
                "geotermalni".to_owned()
            )))
        );
    }
}
