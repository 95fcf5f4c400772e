//! Grammar rewriting: the substitution rule table and the generation history.
//!
//! A [`RuleSet`] maps single symbols to replacement strings. One call to
//! [`RuleSet::rewrite`] produces exactly one generation: every symbol of the
//! input is replaced by its rule's output, or copied unchanged when no rule
//! is bound for it. A [`Derivation`] strings generations together, axiom
//! first, and carries the caller-facing grow/reset/edit actions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single grammar symbol.
///
/// Reserved control symbols are `[` (push branch state) and `]` (pop branch
/// state); all other symbols are either draw symbols (conventionally `L`) or
/// inert non-terminals that exist purely for grammar expansion.
pub type Symbol = char;

/// A substitution rule table mapping each [`Symbol`] to its replacement.
///
/// Symbols without an entry are fixed points: they rewrite to themselves.
/// The table is never consulted mutably during a rewrite pass; edits happen
/// between growth steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: BTreeMap<Symbol, String>,
}

impl RuleSet {
    /// Creates an empty table, under which every string is a fixed point.
    pub fn new() -> Self {
        Self::default()
    }

    /// A small sample grammar that grows a bushy plant from the conventional
    /// `L` axiom: every limb sprouts a left and a right branch, and the turn
    /// symbols swap direction each generation.
    pub fn sample_plant() -> Self {
        Self::from_iter([
            ('L', "L[-L][+L]"),
            ('X', "L[+XL]"),
            ('Y', "[+L]"),
            ('+', "-"),
            ('-', "+"),
        ])
    }

    /// Binds `symbol` to `replacement`, returning the previous replacement
    /// if one was bound.
    ///
    /// An empty replacement is legal: the symbol is erased on rewrite rather
    /// than treated as unbound.
    pub fn insert(&mut self, symbol: Symbol, replacement: impl Into<String>) -> Option<String> {
        self.rules.insert(symbol, replacement.into())
    }

    /// Unbinds `symbol`, restoring its fixed-point behavior.
    pub fn remove(&mut self, symbol: Symbol) -> Option<String> {
        self.rules.remove(&symbol)
    }

    /// The replacement bound for `symbol`, if any.
    pub fn replacement(&self, symbol: Symbol) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Number of bound rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` when no rules are bound.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the bound rules in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.rules
            .iter()
            .map(|(symbol, replacement)| (*symbol, replacement.as_str()))
    }

    /// Applies the table to `input` once, producing the next generation.
    ///
    /// Each symbol is looked up independently: bound symbols append their
    /// replacement, unbound symbols append themselves. Exactly one
    /// generation is produced per call, so a replacement may mention the
    /// symbol it replaces without recursing. An empty replacement shrinks
    /// the string; an empty input yields an empty output.
    pub fn rewrite(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        for symbol in input.chars() {
            match self.rules.get(&symbol) {
                Some(replacement) => output.push_str(replacement),
                None => output.push(symbol),
            }
        }
        output
    }
}

impl<S: Into<String>> FromIterator<(Symbol, S)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (Symbol, S)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(symbol, replacement)| (symbol, replacement.into()))
                .collect(),
        }
    }
}

/// An ordered generation history: index 0 is the axiom, index `i` is the
/// result of applying a rule table to index `i - 1` exactly once.
///
/// The history only ever grows, one generation per [`grow`](Self::grow)
/// call, until the caller explicitly [`reset`](Self::reset)s it or replaces
/// the axiom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    generations: Vec<String>,
}

impl Derivation {
    /// Starts a fresh history holding only `axiom` at generation 0.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            generations: vec![axiom.into()],
        }
    }

    /// The generation-0 string.
    pub fn axiom(&self) -> &str {
        self.generations.first().map_or("", String::as_str)
    }

    /// The newest generation.
    pub fn latest(&self) -> &str {
        self.generations.last().map_or("", String::as_str)
    }

    /// Number of growth steps applied since the axiom.
    pub fn age(&self) -> usize {
        self.generations.len().saturating_sub(1)
    }

    /// The generation at `index`, if the history has grown that far.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.generations.get(index).map(String::as_str)
    }

    /// All generations, oldest first.
    pub fn generations(&self) -> &[String] {
        &self.generations
    }

    /// Iterates over the generations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.generations.iter().map(String::as_str)
    }

    /// Rewrites the newest generation once, appends the result, and returns
    /// the new latest string.
    ///
    /// No growth bound is imposed here: grammars with non-shrinking rules
    /// grow exponentially with age, so callers cap [`age`](Self::age) or
    /// the latest length themselves.
    pub fn grow(&mut self, rules: &RuleSet) -> &str {
        let next = rules.rewrite(self.latest());
        self.generations.push(next);
        self.latest()
    }

    /// Discards every generation after the axiom.
    pub fn reset(&mut self) {
        self.generations.truncate(1);
    }

    /// Replaces the axiom and discards the grown history.
    pub fn set_axiom(&mut self, axiom: impl Into<String>) {
        self.generations.clear();
        self.generations.push(axiom.into());
    }
}

impl Default for Derivation {
    /// A history seeded with the conventional draw symbol `L`.
    fn default() -> Self {
        Self::new("L")
    }
}
