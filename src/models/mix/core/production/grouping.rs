use serde::Deserialize;

/// Rules merging related source subtypes into one bucket.
///
/// A source matches a rule when its id starts with the rule's prefix; the
/// first matching rule wins. The default rules merge coal subtypes
/// (`uhli_*`) into `uhli` and hydro subtypes (`voda_*`) into `voda`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Grouping {
    rules: Vec<GroupRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct GroupRule {
    prefix: String,
    bucket: String,
}

impl Grouping {
    /// Creates a grouping with no rules, leaving every source on its own.
    #[must_use]
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule sending every source starting with `prefix` to `bucket`.
    #[must_use]
    pub fn with_rule(mut self, prefix: impl Into<String>, bucket: impl Into<String>) -> Self {
        self.rules.push(GroupRule {
            prefix: prefix.into(),
            bucket: bucket.into(),
        });
        self
    }

    /// Returns the bucket `source` belongs to.
    #[must_use]
    pub fn bucket_for<'a>(&'a self, source: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|rule| source.starts_with(&rule.prefix))
            .map_or(source, |rule| rule.bucket.as_str())
    }
}

impl Default for Grouping {
    fn default() -> Self {
        Self::none().with_rule("uhli", "uhli").with_rule("voda", "voda")
    }
}
