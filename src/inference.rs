//! Elementary inferences and the procedure deciding their validity
//!
//! An inference is the smallest building block of a deduction: one step from one or two
//! premises to a conclusion, with no redundant premises and with the premises in a fixed order.
//! `p & q` follows from `p` and `q` in that order but not from `q` and `p`, and `p` follows
//! from `p & q` but not from `(p & q) & r`. Keeping the order means a valid inference can later
//! be cited as e.g. `&I 3, 5`.
//!
//! Validity is decided from the truth makers of the operators involved rather than from
//! a list of rules per operator. Places of the propositions involved are treated as opaque truth
//! values and premises are known to be true.
//!
//! Rules that need assumption blocks (conditional, biconditional and negation introduction,
//! disjunction elimination) are not elementary inferences and are never licensed here.

use crate::{
    formatter::Formatter,
    log::targets::{
        ELIMINATION as LOG_ELIMINATION, INFERENCE as LOG_INFERENCE,
        INTRODUCTION as LOG_INTRODUCTION,
    },
    operator::{valuations, Operator},
    proposition::Proposition,
};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The rule by which a valid [`Inference`] goes through
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum Rule {
    /// The conclusion is built from the premises with the operator, e.g. `&I`
    Introduction(Operator),
    /// The conclusion is a place of the first premise, e.g. `&E` or `→E`
    Elimination(Operator),
    /// The conclusion is found below two layers of the same unary operator, e.g. `~~E`
    DoubleElimination(Operator),
}

impl Rule {
    pub fn operator(self) -> Operator {
        match self {
            Rule::Introduction(op) | Rule::Elimination(op) | Rule::DoubleElimination(op) => op,
        }
    }

    pub fn is_introduction(self) -> bool {
        matches!(self, Rule::Introduction(_))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        Formatter::new().format_rule(&mut s, *self);
        f.write_str(&s)
    }
}

/// An attempted inference of `conclusion` from one or two ordered premises
///
/// Validity is decided once, when the inference is created. An invalid inference is a normal
/// outcome and not an error.
///
/// # Example
/// ```
/// use tfl::{Inference, Operator, Proposition, Rule};
///
/// let p = Proposition::atomic("p").unwrap();
/// let q = Proposition::atomic("q").unwrap();
/// let pq = Proposition::binary(p.clone(), Operator::Conjunction, q.clone()).unwrap();
///
/// let inference = Inference::new(pq.clone(), p.clone(), Some(q.clone()));
/// assert!(inference.valid());
/// assert_eq!(inference.rule(), Some(Rule::Introduction(Operator::Conjunction)));
///
/// let swapped = Inference::new(pq.clone(), q, Some(p.clone()));
/// assert!(!swapped.valid());
///
/// let inference = Inference::new(p, pq, None);
/// assert_eq!(inference.rule(), Some(Rule::Elimination(Operator::Conjunction)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inference {
    conclusion: Proposition,
    premise_1: Proposition,
    premise_2: Option<Proposition>,
    rule: Option<Rule>,
}

impl Inference {
    /// Creates the inference of `conclusion` from `premise_1` (and `premise_2`) and decides
    /// whether it is valid
    pub fn new(
        conclusion: Proposition,
        premise_1: Proposition,
        premise_2: Option<Proposition>,
    ) -> Self {
        let rule = evaluate(&conclusion, &premise_1, premise_2.as_ref());
        let inference = Inference {
            conclusion,
            premise_1,
            premise_2,
            rule,
        };
        log::debug!(target: LOG_INFERENCE, "{}", inference.summary());
        inference
    }

    fn summary(&self) -> String {
        let premises = self
            .premises()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ");
        match self.rule {
            Some(rule) => format!("{} ⊢ {} by {}", premises, self.conclusion, rule),
            None => format!("{} ⊬ {}", premises, self.conclusion),
        }
    }

    pub fn conclusion(&self) -> &Proposition {
        &self.conclusion
    }

    pub fn premise_1(&self) -> &Proposition {
        &self.premise_1
    }

    pub fn premise_2(&self) -> Option<&Proposition> {
        self.premise_2.as_ref()
    }

    /// Returns the premises in order
    pub fn premises(&self) -> impl Iterator<Item = &Proposition> + '_ {
        std::iter::once(&self.premise_1).chain(self.premise_2.as_ref())
    }

    pub fn valid(&self) -> bool {
        self.rule.is_some()
    }

    /// Returns the rule licensing this inference, or `None` if it is invalid
    pub fn rule(&self) -> Option<Rule> {
        self.rule
    }
}

impl Display for Inference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        Formatter::new().format_inference(&mut s, self);
        f.write_str(&s)
    }
}

fn evaluate(
    conclusion: &Proposition,
    premise_1: &Proposition,
    premise_2: Option<&Proposition>,
) -> Option<Rule> {
    let premise_2 = match premise_2 {
        // With a single premise we must be eliminating
        None => return eliminate(conclusion, premise_1, None),
        Some(premise_2) => premise_2,
    };
    // Introduction always yields a compound
    if conclusion.is_atomic() {
        return eliminate(conclusion, premise_1, Some(premise_2));
    }

    let premises = [premise_1, premise_2];
    let extracts_place = premises
        .iter()
        .flat_map(|premise| premise.places())
        .any(|place| conclusion.same_as(place));
    if extracts_place {
        if let Some(rule) = eliminate(conclusion, premise_1, Some(premise_2)) {
            return Some(rule);
        }
    }

    let components = premises
        .iter()
        .copied()
        .filter(|premise| {
            conclusion
                .places()
                .iter()
                .any(|place| place.same_as(premise))
        })
        .collect::<Vec<_>>();
    if components.is_empty() {
        None
    } else {
        introduce(conclusion, &premises, &components)
    }
}

/// Tries to reach `conclusion` by taking apart `major`, with `minor` fixing the truth of one of
/// its places.
fn eliminate(
    conclusion: &Proposition,
    major: &Proposition,
    minor: Option<&Proposition>,
) -> Option<Rule> {
    let operator = major.operator()?;
    let places = major.places();

    let targets = indices_of(places, conclusion);
    if targets.is_empty() {
        return match minor {
            None => eliminate_double(conclusion, major),
            Some(_) => None,
        };
    }

    let known = match minor {
        // Nothing is gained from a minor premise which is the conclusion itself
        Some(minor) if minor.same_as(conclusion) => return None,
        Some(minor) => {
            let known = indices_of(places, minor);
            if known.is_empty() {
                log::trace!(target: LOG_ELIMINATION, "{} is not a place of {}", minor, major);
                return None;
            }
            known
        }
        None => Vec::new(),
    };

    if !extracts(operator, &known, &targets) {
        return None;
    }
    if minor.is_some() && extracts(operator, &[], &targets) {
        log::trace!(target: LOG_ELIMINATION, "Redundant premise for {}", major);
        return None;
    }
    Some(Rule::Elimination(operator))
}

/// Tests whether some place in `targets` is true in every truth maker of `operator` in which
/// all places in `known` are true.
fn extracts(operator: Operator, known: &[usize], targets: &[usize]) -> bool {
    let rows = operator
        .truth_makers()
        .into_iter()
        .filter(|row| known.iter().all(|&k| row[k]))
        .collect::<Vec<_>>();
    log::trace!(
        target: LOG_ELIMINATION,
        "{} rows with {:?} true: {:?}",
        operator.name(),
        known,
        rows
    );
    !rows.is_empty()
        && targets
            .iter()
            .any(|&target| rows.iter().all(|row| row[target]))
}

/// Eliminates two layers of the same unary operator at once, as in `~~p` to `p`.
fn eliminate_double(conclusion: &Proposition, major: &Proposition) -> Option<Rule> {
    let operator = major.operator()?;
    if operator.arity() != 1 {
        return None;
    }
    let inner = &major.places()[0];
    if inner.operator() != Some(operator) || !inner.places()[0].same_as(conclusion) {
        return None;
    }

    // Values of the inner proposition making the major premise true, then values of the
    // conclusion giving the inner proposition one of those values
    let inner_values = operator
        .truth_makers()
        .iter()
        .map(|row| row[0])
        .collect::<Vec<_>>();
    let values = operator
        .truth_table()
        .rows()
        .iter()
        .filter(|(_, value)| inner_values.contains(value))
        .map(|(row, _)| row[0])
        .collect::<Vec<_>>();

    if !values.is_empty() && values.iter().all(|v| *v) {
        Some(Rule::DoubleElimination(operator))
    } else {
        None
    }
}

/// Tries to reach `conclusion` by combining `components`, the premises which are whole places of
/// the conclusion and so can be taken to be true.
fn introduce(
    conclusion: &Proposition,
    premises: &[&Proposition],
    components: &[&Proposition],
) -> Option<Rule> {
    log::trace!(
        target: LOG_INTRODUCTION,
        "Components: {:?}",
        components.iter().map(|c| c.name()).collect::<Vec<_>>()
    );
    // A premise which is not a component is redundant
    if components.len() != premises.len() {
        return None;
    }
    let places = conclusion.places();
    if places.len() != premises.len()
        || !premises
            .iter()
            .zip(places.iter())
            .all(|(premise, place)| premise.same_as(place))
    {
        return None;
    }

    let known = (0..places.len()).collect::<Vec<_>>();
    Operator::ALL
        .iter()
        .copied()
        .find(|&op| {
            log::trace!(target: LOG_INTRODUCTION, "Trying {}", op.name());
            conclusion.operator() == Some(op) && introduces(op, &known)
        })
        .map(Rule::Introduction)
}

/// Tests whether knowing the places in `known` to be true licenses introducing `operator`.
///
/// All known places together have to force the operator to be true while no smaller selection
/// does, and the operator must not be true when all of its places are false.
fn introduces(operator: Operator, known: &[usize]) -> bool {
    let minimal = (0..known.len()).all(|skip| {
        let fewer = known
            .iter()
            .enumerate()
            .filter_map(|(i, k)| if i == skip { None } else { Some(*k) })
            .collect::<Vec<_>>();
        !forces(operator, &fewer)
    });
    forces(operator, known) && minimal && operator.preserves_falsity()
}

/// Tests whether `operator` is true under every valuation in which the places in `known` are true.
fn forces(operator: Operator, known: &[usize]) -> bool {
    let makers = operator.truth_makers();
    valuations(operator.arity())
        .filter(|row| known.iter().all(|&k| row[k]))
        .all(|row| makers.contains(&row))
}

fn indices_of(places: &[Proposition], prop: &Proposition) -> Vec<usize> {
    places
        .iter()
        .enumerate()
        .filter_map(|(i, place)| if place.same_as(prop) { Some(i) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn atom(name: &str) -> Proposition {
        Proposition::atomic(name).unwrap()
    }

    fn bin(a: &Proposition, op: Operator, b: &Proposition) -> Proposition {
        Proposition::binary(a.clone(), op, b.clone()).unwrap()
    }

    fn not(a: &Proposition) -> Proposition {
        Proposition::negation(a.clone())
    }

    fn rule_of(conclusion: &Proposition, p1: &Proposition, p2: Option<&Proposition>) -> Option<Rule> {
        init();
        Inference::new(conclusion.clone(), p1.clone(), p2.cloned()).rule()
    }

    #[test]
    fn conjunction_introduction_is_ordered() {
        let (p, q) = (atom("p"), atom("q"));
        let pq = bin(&p, Conjunction, &q);
        assert_eq!(
            rule_of(&pq, &p, Some(&q)),
            Some(Rule::Introduction(Conjunction))
        );
        assert_eq!(rule_of(&pq, &q, Some(&p)), None);
        assert_eq!(
            rule_of(&bin(&p, Conjunction, &p), &p, Some(&p)),
            Some(Rule::Introduction(Conjunction))
        );
        let r = atom("r");
        assert_eq!(rule_of(&pq, &p, Some(&r)), None);
    }

    #[test]
    fn introduction_needing_assumptions_is_rejected() {
        let (p, q) = (atom("p"), atom("q"));
        for op in [Disjunction, Conditional, Biconditional] {
            assert_eq!(rule_of(&bin(&p, op, &q), &p, Some(&q)), None, "{:?}", op);
        }
        assert_eq!(rule_of(&not(&not(&p)), &p, None), None);
    }

    #[test]
    fn conjunction_elimination() {
        let (p, q, r) = (atom("p"), atom("q"), atom("r"));
        let pq = bin(&p, Conjunction, &q);
        assert_eq!(rule_of(&p, &pq, None), Some(Rule::Elimination(Conjunction)));
        assert_eq!(rule_of(&q, &pq, None), Some(Rule::Elimination(Conjunction)));
        // Only one layer at a time
        assert_eq!(rule_of(&p, &bin(&pq, Conjunction, &r), None), None);
        // A second premise would be redundant
        assert_eq!(rule_of(&p, &pq, Some(&q)), None);
        assert_eq!(rule_of(&p, &pq, Some(&r)), None);
    }

    #[test]
    fn modus_ponens() {
        let (p, q) = (atom("p"), atom("q"));
        let p_q = bin(&p, Conditional, &q);
        assert_eq!(
            rule_of(&q, &p_q, Some(&p)),
            Some(Rule::Elimination(Conditional))
        );
        // The conditional comes first
        assert_eq!(rule_of(&q, &p, Some(&p_q)), None);
        // Affirming the consequent
        assert_eq!(rule_of(&p, &p_q, Some(&q)), None);
        assert_eq!(rule_of(&q, &p_q, None), None);
        assert_eq!(rule_of(&p, &p_q, Some(&p)), None);
    }

    #[test]
    fn modus_ponens_with_compound_consequent() {
        let (p, q, r) = (atom("p"), atom("q"), atom("r"));
        let qr = bin(&q, Conjunction, &r);
        let p_qr = bin(&p, Conditional, &qr);
        assert_eq!(
            rule_of(&qr, &p_qr, Some(&p)),
            Some(Rule::Elimination(Conditional))
        );
    }

    #[test]
    fn biconditional_elimination() {
        let (p, q) = (atom("p"), atom("q"));
        let pq = bin(&p, Biconditional, &q);
        assert_eq!(
            rule_of(&q, &pq, Some(&p)),
            Some(Rule::Elimination(Biconditional))
        );
        assert_eq!(
            rule_of(&p, &pq, Some(&q)),
            Some(Rule::Elimination(Biconditional))
        );
        assert_eq!(rule_of(&p, &pq, None), None);
    }

    #[test]
    fn disjunction_needs_cases() {
        let (p, q) = (atom("p"), atom("q"));
        let pq = bin(&p, Disjunction, &q);
        assert_eq!(rule_of(&p, &pq, None), None);
        assert_eq!(rule_of(&q, &pq, Some(&p)), None);
        assert_eq!(rule_of(&q, &pq, Some(&not(&p))), None);
    }

    #[test]
    fn negations() {
        let (p, q) = (atom("p"), atom("q"));
        assert_eq!(
            rule_of(&p, &not(&not(&p)), None),
            Some(Rule::DoubleElimination(Negation))
        );
        let pq = bin(&p, Conjunction, &q);
        assert_eq!(
            rule_of(&pq, &not(&not(&pq)), None),
            Some(Rule::DoubleElimination(Negation))
        );
        assert_eq!(rule_of(&p, &not(&p), None), None);
        assert_eq!(rule_of(&p, &not(&not(&not(&p))), None), None);
        assert_eq!(rule_of(&p, &not(&not(&p)), Some(&q)), None);
    }

    #[test]
    fn swapped_premises_are_different_inferences() {
        let (p, q) = (atom("p"), atom("q"));
        let pq = bin(&p, Conjunction, &q);
        let a = Inference::new(pq.clone(), p.clone(), Some(q.clone()));
        let b = Inference::new(pq, q, Some(p));
        assert_ne!(a, b);
        assert!(a.valid());
        assert!(!b.valid());
        assert_eq!(a.premises().count(), 2);
    }

    #[test]
    fn display() {
        let (p, q) = (atom("p"), atom("q"));
        let pq = bin(&p, Conjunction, &q);
        let inference = Inference::new(pq.clone(), p.clone(), Some(q));
        assert_eq!(
            inference.to_string(),
            "P1. p\nP2. q\nC.  p & q\nInference valid.\n"
        );
        let inference = Inference::new(pq, p, None);
        assert_eq!(inference.to_string(), "P1. p\nC.  p & q\nInference invalid.\n");

        assert_eq!(Rule::Introduction(Conjunction).to_string(), "&I");
        assert_eq!(Rule::Elimination(Conditional).to_string(), "→E");
        assert_eq!(Rule::DoubleElimination(Negation).to_string(), "~~E");
    }

    quickcheck! {
        fn valid_iff_rule(c: Proposition, a: Proposition, b: Option<Proposition>) -> bool {
            let inference = Inference::new(c, a, b);
            inference.valid() == inference.rule().is_some()
        }

        fn conjunction_introduction_always_applies(a: Proposition, b: Proposition) -> bool {
            let ab = bin(&a, Conjunction, &b);
            rule_of(&ab, &a, Some(&b)) == Some(Rule::Introduction(Conjunction))
        }

        fn conjunction_elimination_always_applies(a: Proposition, b: Proposition) -> bool {
            let ab = bin(&a, Conjunction, &b);
            rule_of(&a, &ab, None) == Some(Rule::Elimination(Conjunction))
                && rule_of(&b, &ab, None) == Some(Rule::Elimination(Conjunction))
        }

        fn modus_ponens_applies_unless_trivial(a: Proposition, b: Proposition) -> bool {
            let ab = bin(&a, Conditional, &b);
            rule_of(&b, &ab, Some(&a)).is_some() == !a.same_as(&b)
        }

        fn only_conjunction_is_introduced(c: Proposition, a: Proposition, b: Proposition) -> bool {
            match rule_of(&c, &a, Some(&b)) {
                Some(Rule::Introduction(op)) => op == Conjunction,
                _ => true,
            }
        }
    }
}
