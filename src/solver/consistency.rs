//! Constraint checks and domain pruning
//!
//! Node consistency filters a board's domain against that board's own
//! feedback. Arc consistency runs an AC-3 style worklist over every ordered
//! pair of boards; the only cross-board constraint is that the four targets
//! are pairwise distinct.

use super::domain::Domain;
use crate::core::{BOARDS, Feedback, Mark, Word};
use std::collections::VecDeque;
use tracing::trace;

/// Check whether `candidate` could have produced `feedback`
///
/// Rules per position with letter `c`:
/// - green: `candidate[i] == c`
/// - yellow: `candidate[i] != c`
/// - grey: `candidate[i] != c`
///
/// Per letter, the number of green+yellow marks is a lower bound on its count
/// in the candidate. If any copy of the letter was grey, that bound is exact.
///
/// # Examples
/// ```
/// use quordle_csp::core::{Feedback, Word};
/// use quordle_csp::solver::is_consistent;
///
/// let guess = Word::new("speed").unwrap();
/// let target = Word::new("erase").unwrap();
/// let feedback = Feedback::evaluate(&guess, &target);
///
/// assert!(is_consistent(&target, &feedback));
/// assert!(!is_consistent(&Word::new("crane").unwrap(), &feedback));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, feedback: &Feedback) -> bool {
    let mut confirmed = [0u8; 26];
    let mut exact = [false; 26];

    for (i, (letter, mark)) in feedback.iter().enumerate() {
        let idx = usize::from(letter - b'a');
        let here = candidate.char_at(i) == letter;
        match mark {
            Mark::Green => {
                if !here {
                    return false;
                }
                confirmed[idx] += 1;
            }
            Mark::Yellow => {
                if here {
                    return false;
                }
                confirmed[idx] += 1;
            }
            Mark::Grey => {
                if here {
                    return false;
                }
                exact[idx] = true;
            }
        }
    }

    let counts = candidate.letter_counts();
    counts
        .iter()
        .zip(confirmed.iter().zip(exact))
        .all(|(&have, (&need, is_exact))| {
            if is_exact { have == need } else { have >= need }
        })
}

/// True if `candidate` is consistent with every entry of `history`
#[must_use]
pub fn consistent_with_all(candidate: &Word, history: &[Feedback]) -> bool {
    history.iter().all(|f| is_consistent(candidate, f))
}

/// Filter `domain` against its board's `history`; returns words removed
pub fn node_consistency(domain: &mut Domain, history: &[Feedback]) -> usize {
    if history.is_empty() {
        return 0;
    }
    domain.retain(|w| consistent_with_all(w, history))
}

/// Revise arc `(x, y)`
///
/// A word `w` stays in `Domain(x)` only if it still satisfies board `x`'s own
/// feedback and, when targets are distinct, `Domain(y)` holds some word other
/// than `w`. An empty `Domain(y)` is a local contradiction and supports
/// nothing, so it is skipped rather than spreading to `x`.
fn revise(
    domains: &mut [Domain; BOARDS],
    history: &[Vec<Feedback>; BOARDS],
    x: usize,
    y: usize,
    distinct: bool,
) -> usize {
    if domains[y].is_empty() {
        return 0;
    }
    let taken = if distinct { domains[y].singleton() } else { None };
    let own = &history[x];
    domains[x].retain(|w| Some(*w) != taken && consistent_with_all(w, own))
}

/// Run arc consistency to a fixed point; returns total words removed
///
/// The worklist starts with every ordered pair of distinct boards. Whenever
/// `Domain(x)` shrinks, every arc `(z, x)` is queued again. Terminates because
/// domains are finite and only shrink.
pub fn arc_consistency(
    domains: &mut [Domain; BOARDS],
    history: &[Vec<Feedback>; BOARDS],
    distinct: bool,
) -> usize {
    let mut queued = [[false; BOARDS]; BOARDS];
    let mut worklist = VecDeque::with_capacity(BOARDS * (BOARDS - 1));
    for x in 0..BOARDS {
        for y in (0..BOARDS).filter(|&y| y != x) {
            queued[x][y] = true;
            worklist.push_back((x, y));
        }
    }

    let mut removed = 0;
    while let Some((x, y)) = worklist.pop_front() {
        queued[x][y] = false;
        let revised = revise(domains, history, x, y, distinct);
        if revised == 0 {
            continue;
        }
        trace!(x, y, revised, remaining = domains[x].len(), "arc revised");
        removed += revised;
        for z in (0..BOARDS).filter(|&z| z != x) {
            if !queued[z][x] {
                queued[z][x] = true;
                worklist.push_back((z, x));
            }
        }
    }
    removed
}

/// Node consistency on every board followed by arc consistency
pub fn propagate(
    domains: &mut [Domain; BOARDS],
    history: &[Vec<Feedback>; BOARDS],
    distinct: bool,
) -> usize {
    let node: usize = domains
        .iter_mut()
        .zip(history)
        .map(|(domain, own)| node_consistency(domain, own))
        .sum();
    node + arc_consistency(domains, history, distinct)
}
