//! Keyword linking
//!
//! A [`KeywordLinker`] turns keywords in text runs into hyperlinks. Each
//! linker owns a dictionary of [`HyperlinkStrategy`] payloads and may inherit
//! any number of other match sources; its own dictionary is consulted last,
//! so it overrides inherited sources for identical spans.
//!
//! Within one [`LinkSession`] (one document) every payload is rendered at
//! most once: only the first occurrence, in document order, of any keyword
//! sharing that payload is decorated.

mod strategy;

use std::collections::HashSet;
use std::sync::Arc;

use wordlink_core::{filter_overlaps, Automaton, Match, MatchChain, MatchSource};

pub use strategy::{Blacklist, Decorator, HyperlinkStrategy, LinkPayload};

/// Builder for [`KeywordLinker`]
pub struct KeywordLinkerBuilder {
    chain: MatchChain<LinkPayload>,
    own: Option<Automaton<LinkPayload>>,
    blacklist: LinkPayload,
}

impl Default for KeywordLinkerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordLinkerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            chain: MatchChain::new(),
            own: None,
            blacklist: Arc::new(Blacklist),
        }
    }

    /// Inherit matches from another source
    ///
    /// Sources inherited later take priority over earlier ones; the linker's
    /// own keywords take priority over all of them.
    pub fn inherit<S>(mut self, source: S) -> Self
    where
        S: MatchSource<LinkPayload> + Send + Sync + 'static,
    {
        self.chain.append(source);
        self
    }

    /// Link every keyword in `keywords` to `url`
    ///
    /// The keywords share one payload, so at most one of them is linked per
    /// document.
    pub fn add_url<I, S>(self, url: &str, keywords: I, attributes: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut strategy = HyperlinkStrategy::new(url).with_keywords(keywords);
        for (name, value) in attributes {
            strategy.set_attribute(*name, *value);
        }
        self.add_strategy(strategy)
    }

    /// Add a fully configured strategy
    pub fn add_strategy(mut self, strategy: HyperlinkStrategy) -> Self {
        let payload: LinkPayload = Arc::new(strategy.clone());
        // The builder's own automaton is sealed only in `build`
        let _ = self.own_dictionary().add_all(&strategy, payload);
        self
    }

    /// Keep `keyword` from being linked
    ///
    /// A blacklisted keyword also suppresses any shorter keyword it contains.
    pub fn blacklist_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        let payload = Arc::clone(&self.blacklist);
        let _ = self.own_dictionary().add(keyword.as_ref(), payload);
        self
    }

    fn own_dictionary(&mut self) -> &mut Automaton<LinkPayload> {
        self.own.get_or_insert_with(Automaton::new)
    }

    /// Seal the linker
    pub fn build(self) -> KeywordLinker {
        let mut chain = self.chain;
        let mut keywords = 0;
        if let Some(own) = self.own {
            own.build();
            keywords = own.len();
            chain.append(own);
        }

        tracing::debug!(sources = chain.len(), keywords, "keyword linker built");
        KeywordLinker { chain, keywords }
    }
}

/// Links keywords in text runs
pub struct KeywordLinker {
    chain: MatchChain<LinkPayload>,
    keywords: usize,
}

impl KeywordLinker {
    /// Start building a linker
    pub fn builder() -> KeywordLinkerBuilder {
        KeywordLinkerBuilder::new()
    }

    /// Raw chain matches, neither filtered nor deduplicated
    pub fn process(&self, text: &[u8]) -> Vec<Match<LinkPayload>> {
        self.chain.process(text)
    }

    /// Number of sources consulted, own dictionary included
    pub fn source_count(&self) -> usize {
        self.chain.len()
    }

    /// Number of keywords in the linker's own dictionary
    pub fn keyword_count(&self) -> usize {
        self.keywords
    }

    /// Start a document
    pub fn session(&self) -> LinkSession<'_> {
        LinkSession {
            linker: self,
            linked: HashSet::new(),
        }
    }

    /// Link a single text run as a whole document
    pub fn link_text(&self, text: &str) -> String {
        self.session().link_run(text)
    }

    /// Link the runs of one document in order
    pub fn link_runs<'t, I>(&self, runs: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut session = self.session();
        runs.into_iter().map(|run| session.link_run(run)).collect()
    }
}

impl MatchSource<LinkPayload> for KeywordLinker {
    fn process(&self, text: &[u8]) -> Vec<Match<LinkPayload>> {
        KeywordLinker::process(self, text)
    }
}

impl std::fmt::Debug for KeywordLinker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordLinker")
            .field("sources", &self.chain.len())
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// Per-document linking state
///
/// A markup walker calls [`link_run`](Self::link_run) once for every plain
/// text run outside existing links, in document order.
pub struct LinkSession<'a> {
    linker: &'a KeywordLinker,
    linked: HashSet<usize>,
}

impl LinkSession<'_> {
    /// Decorate first occurrences in `run`
    pub fn link_run(&mut self, run: &str) -> String {
        let text = run.as_bytes();
        let mut matches = self.linker.process(text);
        matches.sort();
        filter_overlaps(&mut matches);

        let mut out: Vec<u8> = Vec::with_capacity(text.len());
        let mut cursor = 0;
        let mut decorated = 0;
        for m in &matches {
            if m.start() < cursor || m.end() > text.len() {
                continue;
            }
            if !self.linked.insert(strategy::payload_id(&m.payload)) {
                continue;
            }
            out.extend_from_slice(&text[cursor..m.start()]);
            out.extend_from_slice(m.payload.decorate(&m.keyword_str()).as_bytes());
            cursor = m.end();
            decorated += 1;
        }
        out.extend_from_slice(&text[cursor..]);

        tracing::trace!(matches = matches.len(), decorated, "linked text run");
        match String::from_utf8(out) {
            Ok(linked) => linked,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Number of distinct payloads rendered so far
    pub fn linked_count(&self) -> usize {
        self.linked.len()
    }
}
