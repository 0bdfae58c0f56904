use crate::grammar::RuleSet;
use std::collections::HashMap;

/// Expands `axiom` through `iterations` parallel rewrite passes.
///
/// Each pass scans the current generation left to right and substitutes
/// every symbol's replacement in one step; replacement output is never
/// re-scanned within the same pass. Symbols without a rule pass through
/// unchanged, so `iterations == 0` returns the axiom verbatim.
///
/// Output length can grow exponentially with `iterations`. No cap is
/// imposed here; callers that cannot afford a materialized string should
/// use [`SymbolStream`] instead, or check [`expanded_len`] first.
pub fn expand(axiom: &str, rules: &RuleSet, iterations: u32) -> String {
    let mut current = axiom.to_string();
    for _ in 0..iterations {
        if rules.is_empty() {
            break;
        }
        let mut next = String::with_capacity(current.len() * rules.max_replacement_len());
        for symbol in current.chars() {
            match rules.get(symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        current = next;
    }
    current
}

/// Predicts `expand(axiom, rules, iterations).chars().count()` without
/// building any generation.
///
/// Tracks per-symbol occurrence counts across generations, so the cost is
/// proportional to the alphabet size times `iterations` rather than to the
/// expanded length. Saturates at `u128::MAX` for configurations that are
/// out of reach anyway.
pub fn expanded_len(axiom: &str, rules: &RuleSet, iterations: u32) -> u128 {
    let mut counts: HashMap<char, u128> = HashMap::new();
    for symbol in axiom.chars() {
        *counts.entry(symbol).or_default() += 1;
    }
    for _ in 0..iterations {
        let mut next: HashMap<char, u128> = HashMap::new();
        for (symbol, count) in counts {
            match rules.get(symbol) {
                Some(replacement) => {
                    for produced in replacement.chars() {
                        let slot = next.entry(produced).or_default();
                        *slot = slot.saturating_add(count);
                    }
                }
                None => {
                    let slot = next.entry(symbol).or_default();
                    *slot = slot.saturating_add(count);
                }
            }
        }
        counts = next;
    }
    counts
        .into_values()
        .fold(0u128, |total, count| total.saturating_add(count))
}

/// Demand-driven expansion: yields the symbols of generation `iterations`
/// one at a time without materializing any intermediate generation.
///
/// Works a stack of `(symbol, remaining depth)` entries. A symbol at depth
/// zero, or one with no production, is emitted as-is; otherwise its
/// replacement is pushed at depth minus one. Memory use is bounded by the
/// nesting depth of the derivation instead of the expanded length, at the
/// price of redoing rule lookups per emitted symbol.
#[derive(Debug, Clone)]
pub struct SymbolStream<'a> {
    rules: &'a RuleSet,
    pending: Vec<(char, u32)>,
}

impl<'a> SymbolStream<'a> {
    pub fn new(axiom: &str, rules: &'a RuleSet, iterations: u32) -> Self {
        let pending = axiom
            .chars()
            .rev()
            .map(|symbol| (symbol, iterations))
            .collect();
        Self { rules, pending }
    }
}

impl Iterator for SymbolStream<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            let (symbol, depth) = self.pending.pop()?;
            if depth == 0 {
                return Some(symbol);
            }
            match self.rules.get(symbol) {
                Some(replacement) => {
                    self.pending.extend(
                        replacement
                            .chars()
                            .rev()
                            .map(|produced| (produced, depth - 1)),
                    );
                }
                // Terminals stay terminal at every remaining depth.
                None => return Some(symbol),
            }
        }
    }
}
