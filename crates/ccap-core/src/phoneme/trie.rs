use std::collections::HashMap;
use std::sync::OnceLock;

use super::table::{rules, Rule, RuleTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieMatch {
    /// Matched length in bytes of the input.
    pub len: usize,
    pub tier: RuleTier,
    pub phonemes: &'static str,
}

struct Node {
    children: HashMap<char, Node>,
    rule: Option<(RuleTier, &'static str)>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rule: None,
        }
    }
}

/// Char-keyed trie over the kana rewrite rules.
pub struct KanaTrie {
    root: Node,
}

impl KanaTrie {
    /// Get or initialize the global singleton built from the rule table.
    pub fn global() -> &'static KanaTrie {
        static INSTANCE: OnceLock<KanaTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| KanaTrie::from_rules(rules()))
    }

    /// Build from rules in priority order. A pattern seen again later keeps
    /// its first replacement.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut trie = KanaTrie { root: Node::new() };
        for rule in rules {
            trie.insert(rule);
        }
        trie
    }

    /// Longest rule whose pattern is a prefix of `text`.
    pub fn longest_match(&self, text: &str) -> Option<TrieMatch> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some((tier, phonemes)) = node.rule {
                best = Some(TrieMatch {
                    len: i + c.len_utf8(),
                    tier,
                    phonemes,
                });
            }
        }
        best
    }

    /// Exact lookup of a whole pattern.
    pub fn get(&self, pattern: &str) -> Option<&'static str> {
        let mut node = &self.root;
        for c in pattern.chars() {
            node = node.children.get(&c)?;
        }
        node.rule.map(|(_, phonemes)| phonemes)
    }

    fn insert(&mut self, rule: Rule) {
        let mut node = &mut self.root;
        for c in rule.pattern.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        if node.rule.is_none() {
            node.rule = Some((rule.tier, rule.phonemes));
        }
    }
}
