// tests/rewriting.rs
use ramify::{Derivation, RuleSet};

#[test]
fn empty_table_is_identity() {
    let rules = RuleSet::new();
    assert_eq!(rules.rewrite("L[+L]-X"), "L[+L]-X");
    assert_eq!(rules.rewrite(""), "");
}

#[test]
fn unbound_symbols_pass_through() {
    let rules = RuleSet::from_iter([('X', "L[+LX]")]);
    // Only X is bound; L and ] have no rules and survive unchanged.
    assert_eq!(rules.rewrite("LX]"), "LL[+LX]]");
}

#[test]
fn empty_replacement_shrinks_the_string() {
    let rules = RuleSet::from_iter([('L', "")]);
    let next = rules.rewrite("LLX");
    // Both L's are erased; X has no rule and survives.
    assert_eq!(next, "X");
    assert_eq!(next.len(), 1);
}

#[test]
fn rewrite_is_deterministic() {
    let rules = RuleSet::sample_plant();
    let input = "L[-L][+L]";
    assert_eq!(rules.rewrite(input), rules.rewrite(input));
}

#[test]
fn replacement_may_contain_its_own_symbol() {
    // One generation per call: the replacement is not re-expanded.
    let rules = RuleSet::from_iter([('L', "LL")]);
    assert_eq!(rules.rewrite("L"), "LL");
    assert_eq!(rules.rewrite("LL"), "LLLL");
}

#[test]
fn branching_axiom_grows_two_generations() {
    let rules = RuleSet::from_iter([('X', "L[+LX]")]);
    let mut derivation = Derivation::new("X");

    // Generation 1: the single X expands.
    assert_eq!(derivation.grow(&rules), "L[+LX]");
    // Generation 2: only the nested X expands; L, +, [ and ] are fixed points.
    assert_eq!(derivation.grow(&rules), "L[+LL[+LX]]");
    assert_eq!(derivation.age(), 2);
}

#[test]
fn derivation_tracks_history_oldest_first() {
    let rules = RuleSet::from_iter([('L', "LL")]);
    let mut derivation = Derivation::new("L");
    derivation.grow(&rules);
    derivation.grow(&rules);

    assert_eq!(derivation.axiom(), "L");
    assert_eq!(derivation.latest(), "LLLL");
    assert_eq!(derivation.get(1), Some("LL"));
    assert_eq!(derivation.get(3), None);
    assert_eq!(derivation.generations().len(), 3);

    let all: Vec<&str> = derivation.iter().collect();
    assert_eq!(all, ["L", "LL", "LLLL"]);
}

#[test]
fn reset_discards_growth_but_keeps_the_axiom() {
    let rules = RuleSet::from_iter([('L', "LL")]);
    let mut derivation = Derivation::new("L");
    derivation.grow(&rules);
    derivation.grow(&rules);
    assert_eq!(derivation.age(), 2);

    derivation.reset();
    assert_eq!(derivation.age(), 0);
    assert_eq!(derivation.latest(), "L");
}

#[test]
fn editing_the_axiom_clears_the_history() {
    let rules = RuleSet::from_iter([('X', "XX")]);
    let mut derivation = Derivation::new("X");
    derivation.grow(&rules);

    derivation.set_axiom("LXL");
    assert_eq!(derivation.age(), 0);
    assert_eq!(derivation.axiom(), "LXL");
    assert_eq!(derivation.latest(), "LXL");
}

#[test]
fn rules_are_editable_between_growth_steps() {
    let mut rules = RuleSet::from_iter([('X', "XX")]);
    let mut derivation = Derivation::new("X");
    assert_eq!(derivation.grow(&rules), "XX");

    // Rebinding X changes the next generation only.
    let previous = rules.insert('X', "LX");
    assert_eq!(previous.as_deref(), Some("XX"));
    assert_eq!(derivation.grow(&rules), "LXLX");

    // Unbinding X makes it a fixed point again.
    rules.remove('X');
    assert_eq!(derivation.grow(&rules), "LXLX");
    assert!(rules.is_empty());
    assert_eq!(rules.len(), 0);
}

#[test]
fn sample_plant_first_generation() {
    let rules = RuleSet::sample_plant();
    let mut derivation = Derivation::default();
    // The default axiom is the single draw symbol.
    assert_eq!(derivation.axiom(), "L");
    assert_eq!(derivation.grow(&rules), "L[-L][+L]");
}

#[test]
fn sample_plant_swaps_turn_directions() {
    let rules = RuleSet::sample_plant();
    assert_eq!(rules.replacement('+'), Some("-"));
    assert_eq!(rules.replacement('-'), Some("+"));
    assert_eq!(rules.rewrite("+-"), "-+");
}

#[test]
fn rules_iterate_in_symbol_order() {
    let rules = RuleSet::sample_plant();
    let symbols: Vec<char> = rules.iter().map(|(symbol, _)| symbol).collect();
    assert_eq!(symbols, ['+', '-', 'L', 'X', 'Y']);
}
