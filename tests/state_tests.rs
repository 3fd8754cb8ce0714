use termle::games::wordle::{Feedback, GameState, Status, MAX_ATTEMPTS, WORD_LENGTH};

fn type_word(state: &mut GameState, word: &str) {
    for c in word.chars() {
        state.add_letter(c);
    }
}

#[test]
fn test_add_letter_stops_at_row_end() {
    let mut state = GameState::new("crane").unwrap();
    type_word(&mut state, "abcdefgh");
    assert_eq!(state.current_col(), WORD_LENGTH);
    assert_eq!(state.current_guess().as_deref(), Some("abcde"));
    assert!(!state.add_letter('z'));
}

#[test]
fn test_remove_letter_stops_at_row_start() {
    let mut state = GameState::new("crane").unwrap();
    assert!(!state.remove_letter());
    type_word(&mut state, "ab");
    assert!(state.remove_letter());
    assert!(state.remove_letter());
    assert!(!state.remove_letter());
    assert_eq!(state.current_col(), 0);
}

#[test]
fn test_submit_requires_full_row() {
    let mut state = GameState::new("crane").unwrap();
    type_word(&mut state, "cran");
    assert!(state.submit_guess().is_none());
    assert_eq!(state.current_row(), 0);
    assert_eq!(state.current_col(), 4);
}

#[test]
fn test_miss_moves_to_next_row() {
    let mut state = GameState::new("crane").unwrap();
    type_word(&mut state, "crate");
    let submission = state.submit_guess().unwrap();

    assert_eq!(submission.row, 0);
    assert_eq!(submission.guess, "crate");
    assert_eq!(submission.status, Status::AwaitingInput);
    assert_eq!(submission.feedback[3], Feedback::Absent);
    assert_eq!(state.current_row(), 1);
    assert_eq!(state.current_col(), 0);
    assert_eq!(state.feedback(0), Some(&submission.feedback));
    assert!(state.feedback(1).is_none());
}

#[test]
fn test_six_misses_lose() {
    let mut state = GameState::new("crane").unwrap();
    for attempt in 0..MAX_ATTEMPTS {
        assert!(state.is_active());
        type_word(&mut state, "slate");
        let submission = state.submit_guess().unwrap();
        assert_eq!(submission.row, attempt);
    }

    assert_eq!(state.status(), Status::Lost);
    assert_eq!(state.current_row(), MAX_ATTEMPTS);
    assert_eq!(state.attempts(), MAX_ATTEMPTS);
    assert!(!state.add_letter('a'));
    assert!(state.submit_guess().is_none());
}

#[test]
fn test_exact_guess_wins_on_any_row() {
    for row in 0..MAX_ATTEMPTS {
        let mut state = GameState::new("crane").unwrap();
        for _ in 0..row {
            type_word(&mut state, "slate");
            state.submit_guess();
        }
        type_word(&mut state, "CRANE");
        let submission = state.submit_guess().unwrap();

        assert_eq!(submission.status, Status::Won);
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.current_row(), row);
        assert_eq!(state.attempts(), row + 1);
        // No further rows are processed
        assert!(!state.add_letter('x'));
        assert!(state.cell(row + 1, 0).is_none());
    }
}

#[test]
fn test_past_rows_stay_filled() {
    let mut state = GameState::new("crane").unwrap();
    type_word(&mut state, "slate");
    state.submit_guess();
    type_word(&mut state, "ad");

    for row in 0..MAX_ATTEMPTS {
        for col in 0..WORD_LENGTH {
            let filled = state.cell(row, col).is_some();
            let expected = row < state.current_row()
                || (row == state.current_row() && col < state.current_col());
            assert_eq!(filled, expected, "cell ({row}, {col})");
        }
    }
}

#[test]
fn test_history_in_order() {
    let mut state = GameState::new("crane").unwrap();
    for word in ["slate", "adieu", "crane"] {
        type_word(&mut state, word);
        state.submit_guess();
    }
    let words: Vec<String> = state.history().into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, ["slate", "adieu", "crane"]);
}
