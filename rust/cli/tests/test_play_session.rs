use blackjack_cli::run_with_input;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["blackjack", "play"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(argv, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn standing_each_round_plays_them_all() {
    let (code, out, err) = play(&["--rounds", "3", "--seed", "99"], "s\ns\ns\n");
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("play: rounds=3 seed=99"));
    assert_eq!(out.matches("Result: ").count(), 3);
    assert!(out.contains("Rounds played: 3"));
}

#[test]
fn hitting_until_settled_never_leaves_a_round_open() {
    // more hits than any hand can take; surplus lines answer later rounds
    let input = "h\n".repeat(40);
    let (code, out, _) = play(&["--rounds", "2", "--seed", "5"], &input);
    assert_eq!(code, 0);
    assert_eq!(out.matches("Result: ").count(), 2);
}

#[test]
fn settled_rounds_reveal_the_hole_card() {
    let (_, out, _) = play(&["--rounds", "1", "--seed", "17"], "s\n");
    let last_dealer = out
        .lines()
        .rfind(|l| l.starts_with("Dealer: "))
        .expect("dealer line");
    assert!(!last_dealer.contains("??"), "{}", last_dealer);
}

#[test]
fn closing_input_mid_round_exits_with_interrupt_code() {
    // enough rounds that one is guaranteed to wait for a decision
    let (code, out, err) = play(&["--rounds", "30", "--seed", "8"], "");
    assert_eq!(code, 130);
    assert!(err.contains("Interrupted: input closed"), "{}", err);
    assert!(!err.contains("Error:"));
    assert!(out.contains("Rounds played:"));
}

#[test]
fn quitting_exits_cleanly() {
    let (code, out, _) = play(&["--rounds", "30", "--seed", "8"], "q
");
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played:"));
}

#[test]
fn unknown_action_is_reported_and_reprompted() {
    let (code, out, err) = play(&["--rounds", "1", "--seed", "21"], "split\nstand\n");
    assert_eq!(code, 0);
    if out.contains("Action: stand") {
        assert!(err.contains("Unrecognized action 'split'"));
    }
    assert!(out.contains("Rounds played: 1"));
}

#[test]
fn glyph_mode_uses_playing_card_block() {
    let (code, out, _) = play(&["--rounds", "1", "--seed", "3", "--glyphs"], "s\n");
    assert_eq!(code, 0);
    let player = out
        .lines()
        .find(|l| l.starts_with("Player: "))
        .expect("player line");
    assert!(
        player
            .chars()
            .any(|c| ('\u{1F0A1}'..='\u{1F0DE}').contains(&c)),
        "{}",
        player
    );
}
