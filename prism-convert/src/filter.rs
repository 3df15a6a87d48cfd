//! Naming-convention filter.

/// Decides whether a source node is skipped by name alone.
pub trait NameFilter {
    fn should_ignore(&self, name: &str) -> bool;
}

impl<F> NameFilter for F
where
    F: Fn(&str) -> bool,
{
    fn should_ignore(&self, name: &str) -> bool {
        self(name)
    }
}

/// Skips layers whose name starts with one of the configured prefixes,
/// ignoring ASCII case. Defaults to `_ignore` and `@ignore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IgnoreConvention {
    prefixes: Vec<String>,
}

impl Default for IgnoreConvention {
    fn default() -> Self {
        Self::new(["_ignore", "@ignore"])
    }
}

impl IgnoreConvention {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl NameFilter for IgnoreConvention {
    fn should_ignore(&self, name: &str) -> bool {
        let name = name.trim_start().as_bytes();
        self.prefixes.iter().any(|prefix| {
            let prefix = prefix.as_bytes();
            name.len() >= prefix.len() && name[..prefix.len()].eq_ignore_ascii_case(prefix)
        })
    }
}
