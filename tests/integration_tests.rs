//! Integration tests for the letterbox solver.
//!
//! These tests verify the complete pipeline from dictionary loading through
//! background search to the final ranked solution set, using a small puzzle
//! whose full search space is known.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use letterbox::catalog::WordCatalog;
use letterbox::chain::PartialSolution;
use letterbox::finder::{SearchStrategy, SolutionFinder};
use letterbox::letter_box::LetterBox;
use letterbox::word::Word;

/// A 12-letter box and the nine words playable on it. The search space is
/// small enough to enumerate by hand: exactly six solutions exist, spanning
/// chain lengths three through six.
const SCENARIO_GROUPS: [&str; 4] = ["abo", "cde", "iru", "lny"];
const SCENARIO_WORDS: &str = "car\ncare\ncold\ncould\ndare\ndrain\nend\nnoun\nnearby\n";

fn scenario_catalog() -> WordCatalog {
    let letter_box = LetterBox::new(&SCENARIO_GROUPS).unwrap();
    WordCatalog::parse_from_str(SCENARIO_WORDS, letter_box)
}

/// Run a finder to natural completion and return it for inspection.
fn run_to_completion(mut finder: SolutionFinder) -> SolutionFinder {
    finder.start();
    let deadline = Instant::now() + Duration::from_secs(60);
    while finder.running() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(!finder.running(), "search did not converge in time");
    finder
}

mod scenario {
    use super::*;

    #[test]
    fn test_catalog_keeps_all_nine_words() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.invalid_words(), 0);
        assert_eq!(catalog.box_letter_count(), 12);
    }

    #[test]
    fn test_search_finds_every_solution() {
        let finder = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::BreadthFirst,
        ));

        let solutions = finder.get_solutions();
        assert_eq!(solutions.len(), 6);

        // ranked by fewest words: one 3-chain, two 4-chains, one 5-chain,
        // two 6-chains
        assert_eq!(solutions.get(3).map(<[_]>::len), Some(1));
        assert_eq!(solutions.get(4).map(<[_]>::len), Some(2));
        assert_eq!(solutions.get(5).map(<[_]>::len), Some(1));
        assert_eq!(solutions.get(6).map(<[_]>::len), Some(2));

        assert_eq!(
            solutions.shortest().unwrap().to_string(),
            "could-drain-nearby"
        );

        let texts: Vec<String> = solutions.iter().map(|s| s.to_string()).collect();
        assert!(texts.contains(&"cold-dare-end-drain-noun-nearby".to_string()));
        assert!(texts.contains(&"could-dare-end-drain-noun-nearby".to_string()));
    }

    #[test]
    fn test_flatten_orders_by_ascending_length() {
        let finder = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::BreadthFirst,
        ));

        let solutions = finder.get_solutions();
        let lengths: Vec<usize> = solutions.flatten().iter().map(|s| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable();
        assert_eq!(lengths, sorted);
        assert_eq!(lengths.first(), Some(&3));
        assert_eq!(lengths.last(), Some(&6));
    }

    #[test]
    fn test_every_solution_is_a_legal_chain() {
        let letter_box = LetterBox::new(&SCENARIO_GROUPS).unwrap();
        let finder = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::BreadthFirst,
        ));

        for solution in finder.get_solutions().iter() {
            let words = solution.words();
            for word in words {
                assert!(letter_box.word_is_valid(word.text()));
            }
            for pair in words.windows(2) {
                assert_eq!(pair[0].last_letter(), pair[1].first_letter());
            }
            for (i, word) in words.iter().enumerate() {
                assert!(
                    !words[i + 1..].contains(word),
                    "{solution} repeats {word}"
                );
            }
            assert_eq!(solution.unique_letters().len(), 12);
        }
    }

    #[test]
    fn test_depth_first_strategy_reaches_the_same_set() {
        let breadth = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::BreadthFirst,
        ));
        let depth = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::DepthFirst,
        ));

        let breadth_solutions = breadth.get_solutions();
        let depth_solutions = depth.get_solutions();
        assert_eq!(depth_solutions.len(), breadth_solutions.len());
        for solution in breadth_solutions.iter() {
            assert!(depth_solutions.contains(solution));
        }
    }

    #[test]
    fn test_max_depth_cuts_the_search_short() {
        let finder = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            Some(2),
            SearchStrategy::BreadthFirst,
        ));
        // two generations reach three-word chains: only the single
        // three-word solution can exist yet
        assert_eq!(finder.solutions_count(), 1);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn test_snapshot_is_independent_of_the_engine() {
        let finder = run_to_completion(SolutionFinder::new(
            scenario_catalog(),
            None,
            SearchStrategy::BreadthFirst,
        ));

        let count = finder.solutions_count();
        let mut snapshot = finder.get_solutions();
        snapshot.insert(PartialSolution::seed(Arc::new(
            Word::new("noun").unwrap(),
        )));

        assert_eq!(snapshot.len(), count + 1);
        assert_eq!(finder.solutions_count(), count);
        assert_eq!(finder.get_solutions().len(), count);
    }

    #[test]
    fn test_stop_halts_a_running_search() {
        let mut finder =
            SolutionFinder::new(scenario_catalog(), None, SearchStrategy::BreadthFirst);
        finder.start();
        finder.stop(true);
        assert!(!finder.running());
    }

    #[test]
    fn test_no_solution_puzzle_terminates_with_empty_index() {
        // drop "nearby": nothing can ever cover 'b' or 'y'
        let letter_box = LetterBox::new(&SCENARIO_GROUPS).unwrap();
        let catalog = WordCatalog::parse_from_str(
            "car\ncare\ncold\ncould\ndare\ndrain\nend\nnoun\n",
            letter_box,
        );
        let finder = run_to_completion(SolutionFinder::new(
            catalog,
            None,
            SearchStrategy::BreadthFirst,
        ));

        assert_eq!(finder.solutions_count(), 0);
        assert!(finder.get_solutions().is_empty());

        // the engine still reports its best incomplete attempt
        let closest = finder.closest_attempt().expect("closest attempt tracked");
        assert!(closest.unique_letters().len() < 12);
    }
}

mod dictionary {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{SCENARIO_WORDS}").unwrap();

        let letter_box = LetterBox::new(&SCENARIO_GROUPS).unwrap();
        let catalog = WordCatalog::load_from_path(&path, letter_box).unwrap();
        assert_eq!(catalog.len(), 9);

        let finder = run_to_completion(SolutionFinder::new(
            catalog,
            None,
            SearchStrategy::BreadthFirst,
        ));
        assert_eq!(finder.solutions_count(), 6);
    }

    #[test]
    fn test_unplayable_words_are_filtered_not_fatal() {
        let letter_box = LetterBox::new(&SCENARIO_GROUPS).unwrap();
        let catalog = WordCatalog::parse_from_str(
            "car\nxylophone\nebb\nno\ncould\ndrain\nnearby\n",
            letter_box,
        );
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.invalid_words(), 3);

        let finder = run_to_completion(SolutionFinder::new(
            catalog,
            None,
            SearchStrategy::BreadthFirst,
        ));
        // could-drain-nearby survives the filtering
        assert_eq!(finder.solutions_count(), 1);
    }
}
