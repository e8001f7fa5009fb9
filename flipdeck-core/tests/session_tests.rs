use flipdeck_core::{Advance, Card, CoreError, ReviewSession, View};

fn deck(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("q{i}"), format!("a{i}")))
        .collect()
}

#[test]
fn empty_deck_is_rejected() {
    let err = ReviewSession::new(Vec::new()).err().expect("must fail");
    assert!(matches!(err, CoreError::EmptyDeck));
}

#[test]
fn starts_at_first_card_front_showing() {
    let s = ReviewSession::new(deck(3)).unwrap();
    match s.current_view() {
        View::Card {
            position,
            total,
            front,
            face_up,
            ..
        } => {
            assert_eq!(position, 1);
            assert_eq!(total, 3);
            assert_eq!(front, "q0");
            assert!(!face_up);
        }
        View::Finished => panic!("fresh session must show a card"),
    }
}

#[test]
fn exactly_len_advances_reach_finished() {
    let n = 5;
    let mut s = ReviewSession::new(deck(n)).unwrap();
    for _ in 0..n {
        assert!(!s.is_finished());
        assert_eq!(s.advance(), Advance::Next);
    }
    assert!(s.is_finished());
    assert_eq!(s.current_view(), View::Finished);

    // further advances signal exit and change nothing
    for _ in 0..3 {
        assert_eq!(s.advance(), Advance::Exit);
        assert_eq!(s.current_view(), View::Finished);
    }
}

#[test]
fn flip_is_an_involution() {
    let mut s = ReviewSession::new(deck(2)).unwrap();
    let face = |s: &ReviewSession| match s.current_view() {
        View::Card { face_up, .. } => face_up,
        View::Finished => panic!("not finished here"),
    };

    assert!(!face(&s));
    s.flip();
    assert!(face(&s));
    s.flip();
    assert!(!face(&s));
}

#[test]
fn flip_while_finished_is_a_noop() {
    let mut s = ReviewSession::new(deck(1)).unwrap();
    s.advance();
    assert!(s.is_finished());
    s.flip();
    assert_eq!(s.current_view(), View::Finished);
    assert_eq!(s.advance(), Advance::Exit);
}

#[test]
fn advance_resets_face_to_front() {
    let mut s = ReviewSession::new(deck(3)).unwrap();
    s.flip();
    s.advance();
    match s.current_view() {
        View::Card {
            position, face_up, ..
        } => {
            assert_eq!(position, 2);
            assert!(!face_up);
        }
        View::Finished => panic!("two cards left"),
    }
}

#[test]
fn view_is_a_pure_query() {
    let s = ReviewSession::new(deck(2)).unwrap();
    let a = s.current_view();
    let b = s.current_view();
    assert_eq!(a, b);
}

#[test]
fn flip_then_view_shows_the_back() {
    let mut s = ReviewSession::new(deck(1)).unwrap();
    s.flip();
    match s.current_view() {
        View::Card { back, face_up, .. } => {
            assert_eq!(back, "a0");
            assert!(face_up);
        }
        View::Finished => panic!("one card left"),
    }
}
