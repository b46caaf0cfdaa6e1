//! Tests for the interactive host and its config.

use std::io::Write;
use tictac::{AppConfig, Host};
use tictac_core::{Mark, Outcome};
use tictac_view::RenderOptions;

fn run_session(host: &mut Host, input: &str) -> String {
    let mut output = Vec::new();
    host.run(input.as_bytes(), &mut output).expect("session runs");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_session_to_win() {
    let mut host = Host::new(RenderOptions::default());
    let output = run_session(&mut host, "0\n1\ncenter\n2\nbottom-right\n");

    assert_eq!(host.game().outcome(), Outcome::Wins(Mark::X));
    assert!(output.starts_with(" | | \n-+-+-\n | | \n-+-+-\n | | \nNext player: X\n"));
    assert!(output.ends_with("X|O|O\n-+-+-\n |X| \n-+-+-\n | |X\nPlayer X won the game!\n"));
}

#[test]
fn test_session_reports_rejections_and_continues() {
    let mut host = Host::new(RenderOptions::default());
    let output = run_session(&mut host, "4\n4\n9\nnonsense\n\n0\n");

    assert!(output.contains("Center is already taken"));
    assert!(output.contains("Cell index 9 is out of range (must be 0-8)"));
    assert!(output.contains("Unrecognized input: nonsense"));
    assert_eq!(host.game().history().len(), 2);
    assert_eq!(host.game().current_player(), Mark::X);
}

#[test]
fn test_session_rejects_moves_after_win_until_new_game() {
    let mut host = Host::new(RenderOptions::default());
    let output = run_session(&mut host, "0\n1\n4\n2\n8\n5\nnew\n5\nquit\n3\n");

    assert!(output.contains("Game is already over (Player X wins)"));
    // After "new" the X lands on 5; the "3" after "quit" is never read.
    assert_eq!(host.game().history().len(), 1);
    assert_eq!(host.game().current_player(), Mark::O);
    assert_eq!(host.game().outcome(), Outcome::InProgress);
}

#[test]
fn test_session_skips_input_that_is_not_utf8() {
    let mut host = Host::new(RenderOptions::default());
    let mut output = Vec::new();
    host.run(&b"4\n\xff\xfe\n0\n"[..], &mut output)
        .expect("bad bytes do not end the session");
    let output = String::from_utf8(output).expect("utf-8 output");

    assert!(output.contains("Input is not valid UTF-8"));
    assert_eq!(host.game().history().len(), 2);
    assert_eq!(host.game().current_player(), Mark::X);
}

#[test]
fn test_config_from_file_drives_rendering() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "empty_label = \".\"\nshow_indices = false").expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    let mut host = Host::new(config.render_options());
    let output = run_session(&mut host, "quit\n");
    assert_eq!(output, ".|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.\nNext player: X\n");
}

#[test]
fn test_config_errors() {
    let missing = AppConfig::from_file("/nonexistent/tictac.toml").unwrap_err();
    assert!(missing.message.contains("Failed to read config file"));

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_indices = \"yes\"").expect("write config");
    let malformed = AppConfig::from_file(file.path()).unwrap_err();
    assert!(malformed.message.contains("Failed to parse config"));
    assert!(malformed.to_string().starts_with("Config error:"));
}
