// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/keymap.rs");
}

use configurator_core::View;
use keymap::*;

#[test]
fn digits_switch_tools_in_strip_order() {
    assert_eq!(view_for_digit("1"), Some(View::Normal));
    assert_eq!(view_for_digit("2"), Some(View::Chassis));
    assert_eq!(view_for_digit("3"), Some(View::Buttons));
    assert_eq!(view_for_digit("4"), Some(View::Knobs));
    assert_eq!(view_for_digit("5"), None);
    assert_eq!(view_for_digit("0"), None);
}

#[test]
fn digits_match_view_all_order() {
    for (i, view) in View::ALL.iter().enumerate() {
        let key = (i + 1).to_string();
        assert_eq!(action_for_key(&key), Some(KeyAction::SwitchView(*view)));
    }
}

#[test]
fn enter_and_escape() {
    assert_eq!(action_for_key("Enter"), Some(KeyAction::Finish));
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Dismiss));
    assert_eq!(action_for_key("Esc"), Some(KeyAction::Dismiss));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", " ", "Tab", "ArrowLeft", "enter", ""] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}
