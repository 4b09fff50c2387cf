//! Acceptance tests for the input field, submit button and entry list.
//!
//! Each test drives the app the way a page script would: set the field
//! value, dispatch `input`, then click the button.

use crate::model::EntryRejection;
use crate::state::SubmitOutcome;
use crate::test_harness::AcceptanceTestHarness;

fn submit(harness: &mut AcceptanceTestHarness, text: &str) -> SubmitOutcome {
    harness.enter_value(text);
    harness.click_button()
}

// ===== Initial state =====

#[test]
fn field_and_hidden_button_exist_on_start() {
    let harness = AcceptanceTestHarness::new();

    assert_eq!(harness.state().input.value(), "");
    assert!(!harness.state().button_visible);
    assert!(harness.entry_texts().is_empty());
}

// ===== Appending =====

#[test]
fn submitted_text_becomes_a_paragraph() {
    let mut harness = AcceptanceTestHarness::new();

    submit(&mut harness, "Тестовый текст");

    assert_eq!(harness.entry_texts(), vec!["Тестовый текст"]);
}

#[test]
fn paragraphs_keep_creation_order() {
    let mut harness = AcceptanceTestHarness::new();

    for text in ["Первый", "Второй", "Третий"] {
        submit(&mut harness, text);
    }

    assert_eq!(harness.entry_texts(), vec!["Первый", "Второй", "Третий"]);
}

#[test]
fn fifth_paragraph_evicts_the_first() {
    let mut harness = AcceptanceTestHarness::new();

    for text in ["a", "b", "c", "d", "e"] {
        submit(&mut harness, text);
    }

    assert_eq!(harness.entry_texts(), vec!["b", "c", "d", "e"]);
}

#[test]
fn four_paragraphs_fit_without_eviction() {
    let mut harness = AcceptanceTestHarness::new();

    for text in ["Первый", "Второй", "Третий", "Четвертый"] {
        submit(&mut harness, text);
    }

    assert_eq!(
        harness.entry_texts(),
        vec!["Первый", "Второй", "Третий", "Четвертый"]
    );
}

#[test]
fn many_submissions_keep_last_four() {
    let mut harness = AcceptanceTestHarness::new();

    for i in 1..=10 {
        submit(&mut harness, &format!("entry {}", i));
    }

    assert_eq!(
        harness.entry_texts(),
        vec!["entry 7", "entry 8", "entry 9", "entry 10"]
    );
}

// ===== Button visibility =====

#[test]
fn button_hidden_without_text() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("");
    assert!(!harness.state().button_visible);
}

#[test]
fn button_shown_when_text_entered() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("Текст");
    assert!(harness.state().button_visible);
}

#[test]
fn button_hidden_after_accepted_submit() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "Текст");
    assert!(!harness.state().button_visible);
}

// ===== Empty and whitespace input =====

#[test]
fn click_with_empty_field_adds_nothing() {
    let mut harness = AcceptanceTestHarness::new();

    let outcome = harness.click_button();

    assert_eq!(outcome, SubmitOutcome::Rejected(EntryRejection::Empty));
    assert!(harness.entry_texts().is_empty());
}

#[test]
fn spaces_only_is_treated_as_empty() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("     ");

    assert!(!harness.state().button_visible);

    harness.click_button();
    assert!(harness.entry_texts().is_empty());
}

#[test]
fn newlines_only_is_treated_as_empty() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("\n\n\n");

    assert!(!harness.state().button_visible);

    harness.click_button();
    assert!(harness.entry_texts().is_empty());
}

#[test]
fn zero_width_no_break_space_only_is_treated_as_empty() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("\u{FEFF}");

    assert!(!harness.state().button_visible);

    let outcome = harness.click_button();
    assert_eq!(outcome, SubmitOutcome::Rejected(EntryRejection::Empty));
    assert!(harness.entry_texts().is_empty());
}

// ===== Trimming =====

#[test]
fn surrounding_spaces_are_trimmed() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "   Текст с пробелами   ");
    assert_eq!(harness.entry_texts(), vec!["Текст с пробелами"]);
}

#[test]
fn surrounding_newlines_are_trimmed() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "\n\nТекст с Enter\n\n");
    assert_eq!(harness.entry_texts(), vec!["Текст с Enter"]);
}

#[test]
fn surrounding_zero_width_no_break_spaces_are_trimmed() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "\u{FEFF}hello\u{FEFF}");
    assert_eq!(harness.entry_texts(), vec!["hello"]);
}

#[test]
fn hello_with_padding_is_stored_exactly() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "   hello   ");
    assert_eq!(harness.entry_texts(), vec!["hello"]);
}

// ===== Length limits =====

#[test]
fn exactly_255_characters_is_accepted() {
    let mut harness = AcceptanceTestHarness::new();

    submit(&mut harness, &"a".repeat(255));

    let entries = harness.entry_texts();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].chars().count(), 255);
}

#[test]
fn more_than_255_characters_is_rejected() {
    let mut harness = AcceptanceTestHarness::new();

    let outcome = submit(&mut harness, &"a".repeat(256));

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(EntryRejection::TooLong { len: 256, max: 255 })
    );
    assert!(harness.entry_texts().is_empty());
}

#[test]
fn rejected_long_text_stays_in_field_with_button_shown() {
    let mut harness = AcceptanceTestHarness::new();
    let long = "a".repeat(300);

    submit(&mut harness, &long);

    assert_eq!(harness.state().input.value(), long);
    assert!(harness.state().button_visible);
}

#[test]
fn repeated_invalid_clicks_change_nothing() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "kept");
    harness.enter_value(&"b".repeat(256));
    let before = harness.state().clone();

    for _ in 0..5 {
        harness.click_button();
        assert_eq!(harness.state(), &before);
    }
}

// ===== Character sets =====

#[test]
fn digits_are_accepted() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "1234567890");
    assert_eq!(harness.entry_texts(), vec!["1234567890"]);
}

#[test]
fn cyrillic_is_accepted() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "Текст на кириллице");
    assert_eq!(harness.entry_texts(), vec!["Текст на кириллице"]);
}

#[test]
fn latin_is_accepted() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "Latin text");
    assert_eq!(harness.entry_texts(), vec!["Latin text"]);
}

#[test]
fn punctuation_is_accepted() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "@#$%^&*().,:;!?");
    assert_eq!(harness.entry_texts(), vec!["@#$%^&*().,:;!?"]);
}

#[test]
fn text_without_spaces_is_accepted() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "Словобезпробелов");
    assert_eq!(harness.entry_texts(), vec!["Словобезпробелов"]);
}

// ===== Field lifecycle =====

#[test]
fn field_is_cleared_after_accepted_submit() {
    let mut harness = AcceptanceTestHarness::new();
    submit(&mut harness, "Текст для очистки");
    assert_eq!(harness.state().input.value(), "");
}

#[test]
fn duplicate_paragraphs_are_allowed() {
    let mut harness = AcceptanceTestHarness::new();

    submit(&mut harness, "Одинаковый текст");
    submit(&mut harness, "Одинаковый текст");

    assert_eq!(
        harness.entry_texts(),
        vec!["Одинаковый текст", "Одинаковый текст"]
    );
}

#[test]
fn repeated_clicks_after_submit_add_only_once() {
    let mut harness = AcceptanceTestHarness::new();
    harness.enter_value("Текст");

    harness.click_button();
    harness.click_button();
    harness.click_button();

    assert_eq!(harness.entry_texts().len(), 1);
    assert!(!harness.state().button_visible);
}

#[test]
fn alternating_typing_and_clicking_appends_in_order() {
    let mut harness = AcceptanceTestHarness::new();

    submit(&mut harness, "Быстрый");
    submit(&mut harness, "Текст");

    assert_eq!(harness.entry_texts(), vec!["Быстрый", "Текст"]);
}

// ===== Keyboard and mouse =====

#[test]
fn typing_and_enter_submit_through_the_keyboard() {
    use crossterm::event::KeyCode;

    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("  typed  ");
    assert!(harness.state().button_visible);

    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.entry_texts(), vec!["typed"]);
    assert_eq!(harness.state().input.value(), "");
}

#[test]
fn pasted_text_with_newlines_is_trimmed_on_submit() {
    use crossterm::event::KeyCode;

    let mut harness = AcceptanceTestHarness::new();
    harness.paste("\n\npasted\n\n");
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.entry_texts(), vec!["pasted"]);
}

#[test]
fn mouse_click_on_button_submits() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("mouse");

    harness.click_button_with_mouse();

    assert_eq!(harness.entry_texts(), vec!["mouse"]);
}

#[test]
fn escape_quits() {
    use crossterm::event::KeyCode;

    let mut harness = AcceptanceTestHarness::new();
    assert!(harness.send_key(KeyCode::Esc));
    assert!(!harness.is_running());
}
