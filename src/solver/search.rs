//! Backtracking search for a complete board assignment
//!
//! Depth-first over the four boards, most-constrained board first. Each
//! hypothesis is applied as simulated all-green feedback for that board, then
//! node and arc consistency run on a private copy of the domains before
//! recursing. The caller's domains are never touched.

use super::consistency::propagate;
use super::domain::Domain;
use crate::core::{BOARDS, Feedback, Word};
use tracing::{debug, trace};

/// One word per board
pub type Assignment = [Word; BOARDS];

/// Result of [`backtracking_search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// An assignment reproducing every recorded feedback
    Found(Assignment),
    /// The search space was exhausted without a complete assignment
    NotFound,
    /// The node limit was reached first
    Aborted { nodes: usize },
}

impl SearchOutcome {
    #[must_use]
    pub const fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Found(assignment) => Some(assignment),
            Self::NotFound | Self::Aborted { .. } => None,
        }
    }
}

struct Aborted;

struct Search<'h> {
    history: &'h [Vec<Feedback>; BOARDS],
    distinct: bool,
    node_limit: Option<usize>,
    nodes: usize,
}

/// Search for words, one per board, consistent with all accumulated feedback
///
/// Returns the first assignment found. `NotFound` is an ordinary outcome
/// meaning the feedback is contradictory relative to the domains.
///
/// # Examples
/// ```
/// use quordle_csp::core::{BOARDS, Feedback, Word};
/// use quordle_csp::solver::{Domain, SearchOutcome, backtracking_search};
///
/// let words = ["crane", "ghost", "speed", "plant"].map(|w| Word::new(w).unwrap());
/// let domains: [Domain; BOARDS] = std::array::from_fn(|_| Domain::new(words));
/// let history: [Vec<Feedback>; BOARDS] = Default::default();
///
/// let outcome = backtracking_search(&domains, &history, true, None);
/// let assignment = outcome.assignment().unwrap();
/// let mut sorted = assignment.to_vec();
/// sorted.sort();
/// sorted.dedup();
/// assert_eq!(sorted.len(), BOARDS);
/// ```
#[must_use]
pub fn backtracking_search(
    domains: &[Domain; BOARDS],
    history: &[Vec<Feedback>; BOARDS],
    distinct: bool,
    node_limit: Option<usize>,
) -> SearchOutcome {
    let mut search = Search {
        history,
        distinct,
        node_limit,
        nodes: 0,
    };

    let mut domains = domains.clone();
    let mut hypotheses = history.clone();
    propagate(&mut domains, &hypotheses, distinct);

    let outcome = match search.extend(&domains, &mut hypotheses, [None; BOARDS]) {
        Ok(Some(assignment)) => SearchOutcome::Found(assignment),
        Ok(None) => SearchOutcome::NotFound,
        Err(Aborted) => SearchOutcome::Aborted {
            nodes: search.nodes,
        },
    };
    debug!(nodes = search.nodes, ?outcome, "backtracking search finished");
    outcome
}

impl Search<'_> {
    fn extend(
        &mut self,
        domains: &[Domain; BOARDS],
        hypotheses: &mut [Vec<Feedback>; BOARDS],
        partial: [Option<Word>; BOARDS],
    ) -> Result<Option<Assignment>, Aborted> {
        let Some(board) = (0..BOARDS)
            .filter(|&b| partial[b].is_none())
            .min_by_key(|&b| domains[b].len())
        else {
            return Ok(self.verify(partial));
        };

        for value in domains[board].sorted() {
            self.nodes += 1;
            if self.node_limit.is_some_and(|limit| self.nodes > limit) {
                return Err(Aborted);
            }
            trace!(board, %value, depth = partial.iter().flatten().count(), "try");

            hypotheses[board].push(Feedback::evaluate(&value, &value));
            let mut next = domains.clone();
            propagate(&mut next, hypotheses, self.distinct);

            let mut assigned = partial;
            assigned[board] = Some(value);

            let result = if next.iter().any(Domain::is_empty) {
                Ok(None)
            } else {
                self.extend(&next, hypotheses, assigned)
            };
            hypotheses[board].pop();

            if let Some(found) = result? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Confirm a complete assignment by re-simulating every recorded guess
    fn verify(&self, partial: [Option<Word>; BOARDS]) -> Option<Assignment> {
        let mut assignment = [partial[0]?; BOARDS];
        for (slot, word) in assignment.iter_mut().zip(partial) {
            *slot = word?;
        }

        let reproduces = assignment.iter().zip(self.history).all(|(target, own)| {
            own.iter()
                .all(|entry| Feedback::evaluate(&entry.guess(), target) == *entry)
        });
        let distinct_ok = !self.distinct
            || (0..BOARDS).all(|i| (i + 1..BOARDS).all(|j| assignment[i] != assignment[j]));

        (reproduces && distinct_ok).then_some(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn full_domains(list: &[&str]) -> [Domain; BOARDS] {
        std::array::from_fn(|_| list.iter().map(|t| w(t)).collect())
    }

    fn history_for(guesses: &[&str], targets: [&str; BOARDS]) -> [Vec<Feedback>; BOARDS] {
        targets.map(|t| {
            guesses
                .iter()
                .map(|g| Feedback::evaluate(&w(g), &w(t)))
                .collect()
        })
    }

    const WORDS: &[&str] = &[
        "crane", "crate", "grate", "irate", "ghost", "plant", "speed", "erase", "slate",
    ];

    #[test]
    fn finds_true_targets_once_determined() {
        let targets = ["grate", "ghost", "speed", "plant"];
        let history = history_for(&["crane", "slate", "ghost", "erase"], targets);
        let mut domains = full_domains(WORDS);
        propagate(&mut domains, &history, true);

        let outcome = backtracking_search(&domains, &history, true, None);
        assert_eq!(outcome, SearchOutcome::Found(targets.map(w)));
    }

    #[test]
    fn finds_consistent_assignment_when_underconstrained() {
        let targets = ["grate", "crate", "speed", "plant"];
        let history = history_for(&["slate"], targets);
        let domains = full_domains(WORDS);

        let outcome = backtracking_search(&domains, &history, true, None);
        let assignment = outcome.assignment().copied().unwrap();
        for (board, word) in assignment.iter().enumerate() {
            for entry in &history[board] {
                assert_eq!(Feedback::evaluate(&entry.guess(), word), *entry);
            }
        }
    }

    #[test]
    fn contradictory_history_is_not_found() {
        // Every board claims CRANE was all green, but targets must differ
        let solved = Feedback::evaluate(&w("crane"), &w("crane"));
        let history: [Vec<Feedback>; BOARDS] = std::array::from_fn(|_| vec![solved]);
        let domains = full_domains(WORDS);

        assert_eq!(
            backtracking_search(&domains, &history, true, None),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn identical_targets_allowed_without_distinct() {
        let solved = Feedback::evaluate(&w("crane"), &w("crane"));
        let history: [Vec<Feedback>; BOARDS] = std::array::from_fn(|_| vec![solved]);
        let domains = full_domains(WORDS);

        assert_eq!(
            backtracking_search(&domains, &history, false, None),
            SearchOutcome::Found([w("crane"); BOARDS])
        );
    }

    #[test]
    fn empty_domain_is_not_found() {
        let mut domains = full_domains(WORDS);
        domains[3] = Domain::default();
        let history: [Vec<Feedback>; BOARDS] = Default::default();

        assert_eq!(
            backtracking_search(&domains, &history, true, None),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn node_limit_aborts() {
        let history: [Vec<Feedback>; BOARDS] = Default::default();
        // A complete assignment is four levels deep, so two nodes cannot reach one
        let domains = full_domains(&["crane", "slate", "ghost"]);

        assert_eq!(
            backtracking_search(&domains, &history, false, Some(2)),
            SearchOutcome::Aborted { nodes: 3 }
        );
    }

    #[test]
    fn search_leaves_input_domains_untouched() {
        let domains = full_domains(WORDS);
        let snapshot = domains.clone();
        let history = history_for(&["crane"], ["grate", "ghost", "speed", "plant"]);

        let _ = backtracking_search(&domains, &history, true, None);
        assert_eq!(domains, snapshot);
    }
}
