//! 21 sessions driven by scripted and console collaborators.

mod common;

use common::ScriptedInput;
use parlor_games::{
    Answer, ConsoleInput, ConsolePresenter, OutcomeTag, Question, ScoreSnapshot, SessionConfig,
    TwentyOneEvent, TwentyOneSession,
};
use parlor_twentyone::{Command, Verdict};
use std::io::Cursor;

fn seeded(seed: u64) -> SessionConfig {
    SessionConfig::default().with_seed(Some(seed))
}

fn dealer_played(events: &[TwentyOneEvent]) -> bool {
    events.iter().any(|event| {
        matches!(
            event,
            TwentyOneEvent::DealerHit { .. } | TwentyOneEvent::DealerStood { .. }
        )
    })
}

#[test]
fn test_standing_hands_the_turn_to_the_dealer() {
    for seed in 0..25 {
        let mut session = TwentyOneSession::new(seeded(seed));
        let mut input = ScriptedInput::new().commands([Command::Stand]);
        let mut events: Vec<TwentyOneEvent> = Vec::new();

        let verdict = session.play_round(&mut input, &mut events).unwrap();
        assert_ne!(verdict, Verdict::HumanBust, "seed {}", seed);
        assert!(matches!(events[0], TwentyOneEvent::Dealt { .. }));
        assert!(matches!(events[1], TwentyOneEvent::PlayerStood { .. }));

        let Some(TwentyOneEvent::RoundOver { dealer, tag, .. }) = events.last() else {
            panic!("round did not finish");
        };
        assert!(dealer.total() >= 17, "seed {}", seed);
        assert_eq!(*tag, match verdict {
            Verdict::HumanWin => OutcomeTag::HumanWin,
            Verdict::DealerWin => OutcomeTag::AgentWin,
            Verdict::Tie => OutcomeTag::Tie,
            Verdict::HumanBust => OutcomeTag::Bust,
        });
    }
}

#[test]
fn test_hitting_to_bust_skips_the_dealer() {
    for seed in 0..25 {
        let mut session = TwentyOneSession::new(seeded(seed));
        let mut input = ScriptedInput::new();
        let mut events: Vec<TwentyOneEvent> = Vec::new();

        let verdict = session.play_round(&mut input, &mut events).unwrap();
        assert_eq!(verdict, Verdict::HumanBust);
        assert!(!dealer_played(&events));
        assert_eq!(session.scoreboard().snapshot(), ScoreSnapshot::new(0, 1));

        let Some(TwentyOneEvent::RoundOver { player, dealer, .. }) = events.last() else {
            panic!("round did not finish");
        };
        assert!(player.is_bust());
        assert_eq!(dealer.len(), 2);
    }
}

#[test]
fn test_run_loops_until_declined() {
    let mut session = TwentyOneSession::new(seeded(9));
    let mut input = ScriptedInput::new()
        .commands([Command::Stand, Command::Stand])
        .answers([Answer::Yes, Answer::No]);
    let mut events: Vec<TwentyOneEvent> = Vec::new();

    session.run(&mut input, &mut events).unwrap();

    assert_eq!(
        input.questions,
        vec![Question::PlayAgain, Question::PlayAgain]
    );
    assert!(matches!(
        events.first(),
        Some(TwentyOneEvent::Welcome { .. })
    ));
    assert_eq!(events.last(), Some(&TwentyOneEvent::Farewell));

    let rounds = events
        .iter()
        .filter(|event| matches!(event, TwentyOneEvent::RoundOver { .. }))
        .count();
    assert_eq!(rounds, 2);

    let snapshot = session.scoreboard().snapshot();
    assert!(snapshot.human + snapshot.computer <= 2);
}

#[test]
fn test_bust_streak_wins_the_match_for_the_dealer() {
    let mut session = TwentyOneSession::new(seeded(4).with_score_threshold(2));
    let mut input = ScriptedInput::new();
    let mut events: Vec<TwentyOneEvent> = Vec::new();

    session.play_round(&mut input, &mut events).unwrap();
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, TwentyOneEvent::MatchOver(_)))
    );

    session.play_round(&mut input, &mut events).unwrap();
    let Some(TwentyOneEvent::MatchOver(result)) = events.last() else {
        panic!("match should be over");
    };
    assert_eq!(result.final_score, ScoreSnapshot::new(0, 2));
    assert_eq!(session.scoreboard().snapshot(), ScoreSnapshot::new(0, 0));
}

#[test]
fn test_custom_stand_threshold_reaches_the_dealer() {
    let mut session = TwentyOneSession::new(seeded(6).with_dealer_stand_on(19));
    assert_eq!(session.policy().stand_on(), 19);

    let mut input = ScriptedInput::new().commands([Command::Stand]);
    let mut events: Vec<TwentyOneEvent> = Vec::new();
    session.play_round(&mut input, &mut events).unwrap();

    let Some(TwentyOneEvent::RoundOver { dealer, .. }) = events.last() else {
        panic!("round did not finish");
    };
    assert!(dealer.total() >= 19);
}

#[test]
fn test_console_session_end_to_end() {
    let config = seeded(2).with_player_name(Some("Ada".to_string()));
    let mut session = TwentyOneSession::new(config);

    let script = "fold\nstay\nn\n";
    let mut input = ConsoleInput::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut presenter = ConsolePresenter::new(Vec::new());

    session.run(&mut input, &mut presenter).unwrap();

    let shown = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(shown.starts_with("Welcome to 21. Let's play some cards!"));
    assert!(shown.contains("Your cards: "));
    assert!(shown.contains("The dealer's card: "));
    assert!(shown.contains("You stay at "));
    assert!(shown.contains("Ada has "));
    assert!(shown.trim_end().ends_with("Thanks for playing 21!"));

    let prompts = String::from_utf8(input.into_writer()).unwrap();
    assert!(prompts.contains("Would you like to hit or stay?"));
    assert!(prompts.contains("Invalid command"));
}

#[test]
fn test_in_round_events_carry_the_current_score() {
    let mut session = TwentyOneSession::new(seeded(21));
    let mut input = ScriptedInput::new();
    let mut events: Vec<TwentyOneEvent> = Vec::new();

    session.play_round(&mut input, &mut events).unwrap();
    let before = session.scoreboard().snapshot();
    assert_eq!(before, ScoreSnapshot::new(0, 1));
    events.clear();

    let mut input = ScriptedInput::new().commands([Command::Stand]);
    session.play_round(&mut input, &mut events).unwrap();
    let scores: Vec<ScoreSnapshot> = events
        .iter()
        .filter_map(|event| match event {
            TwentyOneEvent::Dealt { score, .. }
            | TwentyOneEvent::PlayerHit { score, .. }
            | TwentyOneEvent::PlayerStood { score, .. }
            | TwentyOneEvent::DealerHit { score, .. }
            | TwentyOneEvent::DealerStood { score, .. } => Some(*score),
            _ => None,
        })
        .collect();

    assert!(scores.len() >= 3);
    assert!(scores.iter().all(|score| *score == before));
}

#[test]
fn test_name_is_asked_when_unconfigured() {
    let mut session = TwentyOneSession::new(seeded(5));
    let mut input = ScriptedInput::new();
    let mut events: Vec<TwentyOneEvent> = Vec::new();

    session.run(&mut input, &mut events).unwrap();

    assert_eq!(input.names_asked, 1);
    assert!(matches!(
        events.first(),
        Some(TwentyOneEvent::Welcome { player, .. }) if player == "Tester"
    ));
}
