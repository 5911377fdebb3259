//! End-to-end translation through the public API.

use braille::{
    decode, encode, translate, translate_with, InputKind, TranslateError, TranslateOptions,
    CAPITAL_INDICATOR, NUMBER_INDICATOR, SPACE,
};

#[test]
fn hi_5_encodes_cell_by_cell() {
    let expected = [
        CAPITAL_INDICATOR.to_string(),
        "O.OO..".to_string(),
        ".OO...".to_string(),
        SPACE.to_string(),
        NUMBER_INDICATOR.to_string(),
        "O..O..".to_string(),
        "..OOO.".to_string(),
    ]
    .concat();
    assert_eq!(encode("Hi 5!").unwrap(), expected);
    assert_eq!(decode(&expected).unwrap(), "Hi 5!");
}

#[test]
fn translate_detects_direction_both_ways() {
    let english = translate("Abc 123").unwrap();
    assert_eq!(english.source, InputKind::English);

    let braille = translate(&english.output).unwrap();
    assert_eq!(braille.source, InputKind::Braille);
    assert_eq!(braille.output, "Abc 123");
}

#[test]
fn known_sample_decodes() {
    // "Hello world"
    let sample = ".....OO.OO..O..O..O.O.O.O.O.O.O..OO........OOO.OO..OO.O.OOO.O.O.O.OO.O..";
    assert_eq!(translate(sample).unwrap().output, "Hello world");
}

#[test]
fn known_sample_with_number_decodes() {
    // "42"
    let sample = ".O.OOOOO.O..O.O...";
    assert_eq!(translate(sample).unwrap().output, "42");
}

#[test]
fn pending_capital_crosses_a_space() {
    let text = [CAPITAL_INDICATOR, SPACE]
        .iter()
        .map(ToString::to_string)
        .collect::<String>()
        + "O.....";
    assert_eq!(decode(&text).unwrap(), " A");
}

#[test]
fn forced_source_overrides_classifier() {
    let forced = translate_with("..", &TranslateOptions::from_source(InputKind::English)).unwrap();
    assert_eq!(forced.output, "..OO.O..OO.O");

    let err = translate_with("abc", &TranslateOptions::from_source(InputKind::Braille)).unwrap_err();
    assert!(matches!(err, TranslateError::Decode(_)));
}

#[test]
fn translation_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<braille::Translation>();
    assert_send_sync::<TranslateError>();

    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || encode(&format!("Thread {i}")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let encoded = handle.join().unwrap();
        assert_eq!(decode(&encoded).unwrap(), format!("Thread {i}"));
    }
}
