//! Decoration strategies carried as link payloads

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use wordlink_core::{Keyword, Keywords};

/// Renders a matched keyword into its replacement markup
pub trait Decorator: fmt::Debug {
    /// Markup for `keyword`
    fn decorate(&self, keyword: &str) -> String;
}

/// Payload attached to every keyword of a linker
///
/// Two payloads are the same link exactly when they share an allocation.
pub type LinkPayload = Arc<dyn Decorator + Send + Sync>;

/// Identity of a payload, used by the "already linked" set
pub(crate) fn payload_id(payload: &LinkPayload) -> usize {
    Arc::as_ptr(payload) as *const () as usize
}

/// Wraps keywords in an `<a>` element pointing at a URL
///
/// ```
/// use wordlink_engine::{Decorator, HyperlinkStrategy};
///
/// let strategy = HyperlinkStrategy::new("https://www.latimes.com")
///     .with_attribute("class", "inline");
/// assert_eq!(
///     strategy.decorate("Times"),
///     r#"<a href="https://www.latimes.com" class="inline">Times</a>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HyperlinkStrategy {
    url: Option<String>,
    attributes: Vec<(String, String)>,
    keywords: BTreeSet<String>,
}

impl HyperlinkStrategy {
    /// Create a strategy linking to `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Target URL, if any
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Set or replace the target URL
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Add an HTML attribute, replacing any earlier value for the same name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder-style [`set_attribute`](Self::set_attribute)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Attributes in render order, `href` first when a URL is set
    ///
    /// An explicit `href` attribute overrides the URL in place.
    pub fn attributes(&self) -> Vec<(&str, &str)> {
        let mut merged: Vec<(&str, &str)> = Vec::with_capacity(self.attributes.len() + 1);
        if let Some(url) = &self.url {
            merged.push(("href", url.as_str()));
        }
        for (name, value) in &self.attributes {
            match merged.iter_mut().find(|(n, _)| *n == name.as_str()) {
                Some(slot) => slot.1 = value.as_str(),
                None => merged.push((name.as_str(), value.as_str())),
            }
        }
        merged
    }

    /// Replace the keyword set
    pub fn set_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
    }

    /// Add one keyword
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// Builder-style keyword addition
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// The keyword set
    pub fn keyword_set(&self) -> &BTreeSet<String> {
        &self.keywords
    }
}

impl Keywords for HyperlinkStrategy {
    fn keywords(&self) -> Vec<Keyword> {
        self.keywords
            .iter()
            .map(|k| Keyword::from(k.as_bytes()))
            .collect()
    }
}

impl Decorator for HyperlinkStrategy {
    fn decorate(&self, keyword: &str) -> String {
        let attributes: Vec<String> = self
            .attributes()
            .into_iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect();
        format!("<a {}>{keyword}</a>", attributes.join(" "))
    }
}

/// Leaves keywords untouched
///
/// Blacklisted keywords still take part in overlap resolution, so they
/// shadow any shorter keyword they contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blacklist;

impl Decorator for Blacklist {
    fn decorate(&self, keyword: &str) -> String {
        keyword.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_with_url_only() {
        let strategy = HyperlinkStrategy::new("http://travel.latimes.com");
        assert_eq!(
            strategy.decorate("Foo"),
            "<a href=\"http://travel.latimes.com\">Foo</a>"
        );
    }

    #[test]
    fn test_attributes_follow_href() {
        let strategy = HyperlinkStrategy::new("foourl")
            .with_attribute("title", "foo title")
            .with_attribute("style", "hidden;");

        assert_eq!(
            strategy.decorate("Foo"),
            r#"<a href="foourl" title="foo title" style="hidden;">Foo</a>"#
        );
    }

    #[test]
    fn test_explicit_href_overrides_url() {
        let strategy = HyperlinkStrategy::new("a").with_attribute("href", "b");
        assert_eq!(strategy.attributes(), vec![("href", "b")]);
    }

    #[test]
    fn test_set_url_after_attributes() {
        let mut strategy = HyperlinkStrategy::default().with_attribute("rel", "nofollow");
        assert_eq!(strategy.url(), None);

        strategy.set_url("late");
        assert_eq!(strategy.attributes(), vec![("href", "late"), ("rel", "nofollow")]);
    }

    #[test]
    fn test_keyword_set_operations() {
        let mut strategy = HyperlinkStrategy::default();
        assert!(strategy.keyword_set().is_empty());

        strategy.set_keywords(["a", "b", "c"]);
        strategy.add_keyword("xyzzy").add_keyword("a");
        let expected: BTreeSet<String> = ["a", "b", "c", "xyzzy"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(strategy.keyword_set(), &expected);

        strategy.set_keywords(["only"]);
        assert_eq!(strategy.keyword_set().len(), 1);
    }

    #[test]
    fn test_keywords_feed_automaton() {
        let strategy = HyperlinkStrategy::new("url").with_keywords(["foo", "bar"]);
        let keywords = Keywords::keywords(&strategy);
        assert_eq!(keywords.len(), 2);
        assert_eq!(&*keywords[0], b"bar");
    }

    #[test]
    fn test_blacklist_is_identity() {
        assert_eq!(Blacklist.decorate("Los Angeles Times"), "Los Angeles Times");
    }

    #[test]
    fn test_payload_identity_is_by_allocation() {
        let a: LinkPayload = Arc::new(Blacklist);
        let b: LinkPayload = Arc::new(Blacklist);
        assert_eq!(payload_id(&a), payload_id(&Arc::clone(&a)));
        assert_ne!(payload_id(&a), payload_id(&b));
    }
}
