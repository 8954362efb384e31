use proptest::prelude::*;
use quordle_csp::core::{BOARDS, Feedback, Mark, Vocabulary, Word};
use quordle_csp::solver::{SearchOutcome, Solver, SolverConfig, is_consistent};

const WORDS: &[&str] = &[
    "crane", "crate", "grate", "irate", "slate", "plate", "plant", "slant", "ghost", "speed",
    "erase", "geese", "elder", "abide", "eerie", "robot", "floor", "llama", "lolly", "those",
    "audio", "stare", "tears", "rates", "aside", "stale", "steal", "least", "beast", "feast",
];

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn vocabulary() -> Vocabulary {
    Vocabulary::from_words(WORDS.iter().map(|w| word(w)))
}

/// Words over a four-letter alphabet, so repeated letters are common
fn dense_word() -> impl Strategy<Value = Word> {
    "[a-d]{5}".prop_map(|s| word(&s))
}

fn targets() -> impl Strategy<Value = [Word; BOARDS]> {
    prop::sample::subsequence(WORDS, BOARDS)
        .prop_shuffle()
        .prop_map(|picked| [0, 1, 2, 3].map(|i| word(picked[i])))
}

fn guesses(max: usize) -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(prop::sample::select(WORDS), 1..max)
        .prop_map(|list| list.iter().map(|w| word(w)).collect())
}

proptest! {
    #[test]
    fn marked_letters_match_shared_counts(guess in dense_word(), target in dense_word()) {
        let feedback = Feedback::evaluate(&guess, &target);
        for letter in b'a'..=b'd' {
            let marked = feedback
                .iter()
                .filter(|&(l, m)| l == letter && m != Mark::Grey)
                .count();
            prop_assert_eq!(marked, guess.count_of(letter).min(target.count_of(letter)));
        }
    }

    #[test]
    fn consistency_matches_re_evaluation(
        guess in dense_word(),
        target in dense_word(),
        candidate in dense_word(),
    ) {
        let feedback = Feedback::evaluate(&guess, &target);
        prop_assert!(is_consistent(&target, &feedback));
        prop_assert_eq!(
            is_consistent(&candidate, &feedback),
            Feedback::evaluate(&guess, &candidate) == feedback
        );
    }

    #[test]
    fn pruning_is_sound_monotone_and_idempotent(targets in targets(), guesses in guesses(6)) {
        let vocabulary = vocabulary();
        let mut solver = Solver::seeded(&vocabulary, SolverConfig::default(), 0);
        let mut sizes = solver.domain_sizes();

        for guess in guesses {
            let feedback = targets.map(|t| Feedback::evaluate(&guess, &t));
            solver.update_constraints(&feedback).unwrap();

            let after = solver.domain_sizes();
            for board in 0..BOARDS {
                prop_assert!(after[board] <= sizes[board]);
                prop_assert!(solver.domain(board).contains(&targets[board]));
            }
            sizes = after;

            for board in 0..BOARDS {
                prop_assert_eq!(solver.enforce_node_consistency(board), 0);
            }
            prop_assert_eq!(solver.enforce_arc_consistency(), 0);
        }

        match solver.solve() {
            SearchOutcome::Found(assignment) => {
                for board in 0..BOARDS {
                    for entry in solver.history(board) {
                        prop_assert_eq!(Feedback::evaluate(&entry.guess(), &assignment[board]), *entry);
                    }
                }
            }
            other => prop_assert!(false, "search failed: {:?}", other),
        }
    }

    #[test]
    fn generated_guesses_never_repeat(targets in targets(), seed in any::<u64>()) {
        let vocabulary = vocabulary();
        let mut solver = Solver::seeded(&vocabulary, SolverConfig::default(), seed);
        let mut seen = Vec::new();

        for _ in 0..12 {
            let guess = solver.generate_next_guess().unwrap();
            prop_assert!(!seen.contains(&guess), "{} guessed twice", guess);
            seen.push(guess);
            let feedback = targets.map(|t| Feedback::evaluate(&guess, &t));
            solver.update_constraints(&feedback).unwrap();
        }
    }
}
