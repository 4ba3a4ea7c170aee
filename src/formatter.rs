use crate::{
    inference::{Inference, Rule},
    operator::Operator,
    proposition::Proposition,
};

/// Renders propositions, truth tables and inferences with a configurable symbol for each
/// operator
///
/// ```
/// use tfl::formatter::Formatter;
/// use tfl::{Inference, Operator, Proposition};
///
/// let p = Proposition::atomic("p").unwrap();
/// let q = Proposition::atomic("q").unwrap();
/// let p_q = Proposition::binary(p.clone(), Operator::Conditional, q.clone()).unwrap();
/// let inference = Inference::new(q, p_q, Some(p));
///
/// let fmt = Formatter::ascii();
/// let mut s = String::new();
/// fmt.format_inference(&mut s, &inference);
/// assert_eq!(s, "P1. p -> q\nP2. p\nC.  q\nInference valid.\n");
///
/// let mut s = String::new();
/// fmt.format_justification(&mut s, inference.rule().unwrap(), &[1, 2]);
/// assert_eq!(s, "->E 1, 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    symbols: Vec<(Operator, String)>,
}

impl Formatter {
    /// Creates a formatter using the canonical symbols `~ & ∨ → ↔`
    pub fn new() -> Self {
        Formatter {
            symbols: Operator::ALL
                .iter()
                .map(|op| (*op, op.symbol().to_owned()))
                .collect(),
        }
    }

    /// Creates a formatter using only ASCII symbols `~ & v -> <->`
    pub fn ascii() -> Self {
        let mut fmt = Self::new();
        fmt.set_symbol(Operator::Disjunction, "v".to_owned());
        fmt.set_symbol(Operator::Conditional, "->".to_owned());
        fmt.set_symbol(Operator::Biconditional, "<->".to_owned());
        fmt
    }

    pub fn set_symbol(&mut self, operator: Operator, symbol: String) {
        match self.symbols.iter_mut().find(|(op, _)| *op == operator) {
            Some((_, old)) => *old = symbol,
            None => self.symbols.push((operator, symbol)),
        }
    }

    pub fn format_operator(&self, operator: Operator) -> &str {
        self.symbols
            .iter()
            .find(|(op, _)| *op == operator)
            .map(|(_, symbol)| symbol.as_str())
            .unwrap_or_else(|| operator.symbol())
    }

    /// Appends the name of `prop`, parenthesising places which have two places themselves. With
    /// the canonical symbols this is the same as [`Proposition::name`].
    pub fn format_proposition(&self, s: &mut String, prop: &Proposition) {
        if let Some(symbol) = prop.symbol() {
            s.push(symbol);
            return;
        }
        let operator = match prop.operator() {
            Some(operator) => self.format_operator(operator),
            None => return,
        };
        match prop.places() {
            [place] => {
                s.push_str(operator);
                self.format_place(s, place);
            }
            [left, right] => {
                self.format_place(s, left);
                s.push(' ');
                s.push_str(operator);
                s.push(' ');
                self.format_place(s, right);
            }
            _ => (),
        }
    }

    fn format_place(&self, s: &mut String, place: &Proposition) {
        if place.needs_brackets() {
            s.push('(');
            self.format_proposition(s, place);
            s.push(')');
        } else {
            self.format_proposition(s, place);
        }
    }

    fn format_valuation(&self, s: &mut String, row: &[bool], separator: &str) {
        for (i, value) in row.iter().enumerate() {
            if i != 0 {
                s.push_str(separator);
            }
            s.push(if *value { 'T' } else { 'F' });
        }
    }

    /// Appends the truth table of `operator`, one row per line
    ///
    /// ```
    /// use tfl::formatter::Formatter;
    /// use tfl::Operator;
    ///
    /// let mut s = String::new();
    /// Formatter::new().format_truth_table(&mut s, Operator::Negation);
    /// assert_eq!(s, "Truth table for ~:\nT\tF\nF\tT\n");
    /// ```
    pub fn format_truth_table(&self, s: &mut String, operator: Operator) {
        s.push_str("Truth table for ");
        s.push_str(self.format_operator(operator));
        s.push_str(":\n");
        for (row, value) in operator.truth_table().rows() {
            self.format_valuation(s, row, "\t");
            s.push('\t');
            self.format_valuation(s, &[*value], "");
            s.push('\n');
        }
    }

    /// Appends the truth makers of `operator` on a single line, e.g. `&:\tTT`
    pub fn format_truth_makers(&self, s: &mut String, operator: Operator) {
        s.push_str(self.format_operator(operator));
        s.push_str(":\t");
        for (i, row) in operator.truth_makers().iter().enumerate() {
            if i != 0 {
                s.push(' ');
            }
            self.format_valuation(s, row, "");
        }
    }

    pub fn format_inference(&self, s: &mut String, inference: &Inference) {
        for (i, premise) in inference.premises().enumerate() {
            s.push_str(if i == 0 { "P1. " } else { "P2. " });
            self.format_proposition(s, premise);
            s.push('\n');
        }
        s.push_str("C.  ");
        self.format_proposition(s, inference.conclusion());
        s.push('\n');
        if inference.valid() {
            s.push_str("Inference valid.\n");
        } else {
            s.push_str("Inference invalid.\n");
        }
    }

    /// Appends the label of `rule`, e.g. `&I`, `→E` or `~~E`
    pub fn format_rule(&self, s: &mut String, rule: Rule) {
        let symbol = self.format_operator(rule.operator());
        match rule {
            Rule::Introduction(_) => {
                s.push_str(symbol);
                s.push('I');
            }
            Rule::Elimination(_) => {
                s.push_str(symbol);
                s.push('E');
            }
            Rule::DoubleElimination(_) => {
                s.push_str(symbol);
                s.push_str(symbol);
                s.push('E');
            }
        }
    }

    /// Appends a proof-style justification citing the given line numbers, e.g. `&I 3, 5`
    pub fn format_justification(&self, s: &mut String, rule: Rule, lines: &[usize]) {
        self.format_rule(s, rule);
        for (i, line) in lines.iter().enumerate() {
            s.push_str(if i == 0 { " " } else { ", " });
            s.push_str(&line.to_string());
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Proposition {
        Proposition::atomic(name).unwrap()
    }

    fn format(fmt: &Formatter, prop: &Proposition) -> String {
        let mut s = String::new();
        fmt.format_proposition(&mut s, prop);
        s
    }

    #[test]
    fn ascii_propositions() {
        let (p, q, r) = (atom("p"), atom("q"), atom("r"));
        let pq = Proposition::binary(p, Operator::Disjunction, q).unwrap();
        let fmt = Formatter::ascii();
        assert_eq!(format(&fmt, &Proposition::negation(pq.clone())), "~(p v q)");
        let pqr = Proposition::binary(pq, Operator::Biconditional, r).unwrap();
        assert_eq!(format(&fmt, &pqr), "(p v q) <-> r");
        assert_eq!(format(&Formatter::new(), &pqr), "(p ∨ q) ↔ r");
    }

    #[test]
    fn custom_symbol() {
        let mut fmt = Formatter::new();
        fmt.set_symbol(Operator::Negation, "¬".to_owned());
        let p = atom("p");
        assert_eq!(
            format(&fmt, &Proposition::negation(Proposition::negation(p))),
            "¬¬p"
        );
        let mut s = String::new();
        fmt.format_rule(&mut s, Rule::DoubleElimination(Operator::Negation));
        assert_eq!(s, "¬¬E");
    }

    #[test]
    fn truth_table() {
        let mut s = String::new();
        Formatter::new().format_truth_table(&mut s, Operator::Conjunction);
        assert_eq!(
            s,
            "Truth table for &:\nT\tT\tT\nF\tT\tF\nT\tF\tF\nF\tF\tF\n"
        );
    }

    #[test]
    fn truth_makers() {
        let fmt = Formatter::new();
        let mut s = String::new();
        fmt.format_truth_makers(&mut s, Operator::Disjunction);
        assert_eq!(s, "∨:\tTT FT TF");
        let mut s = String::new();
        fmt.format_truth_makers(&mut s, Operator::Negation);
        assert_eq!(s, "~:\tF");
    }

    #[test]
    fn justification() {
        let mut s = String::new();
        Formatter::new().format_justification(
            &mut s,
            Rule::Introduction(Operator::Conjunction),
            &[3, 5],
        );
        assert_eq!(s, "&I 3, 5");
    }

    quickcheck! {
        fn canonical_symbols_reproduce_names(prop: Proposition) -> bool {
            format(&Formatter::new(), &prop) == prop.name()
        }
    }
}
