//! Runs the `braille-translate` binary end to end.

use std::process::{Command, Output};

use braille_clients::cli::USAGE;

fn translate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_braille-translate"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn no_text_prints_usage_and_exits_2() {
    let output = translate(&[]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.contains("Error: Please provide a string to translate."), "{stdout}");
    assert!(stdout.contains(USAGE), "{stdout}");
}

#[test]
fn words_are_joined_and_encoded() {
    let output = translate(&["a", "b"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "O...........O.O...\n");
}

#[test]
fn braille_is_decoded() {
    let output = translate(&[".....OO....."]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "A\n");
}

#[test]
fn unsupported_character_fails_without_stdout() {
    let output = translate(&["50%"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unsupported character '%'"), "{stderr}");
}
