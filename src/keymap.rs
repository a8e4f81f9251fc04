use configurator_core::View;

/// What a global key press asks the configurator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SwitchView(View),
    /// Open the purchase confirmation, or approve one that is showing.
    Finish,
    /// Cancel a pending confirmation, dismiss a notice or close the configurator.
    Dismiss,
}

#[inline]
pub fn view_for_digit(key: &str) -> Option<View> {
    match key {
        "1" => Some(View::Normal),
        "2" => Some(View::Chassis),
        "3" => Some(View::Buttons),
        "4" => Some(View::Knobs),
        _ => None,
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    if let Some(view) = view_for_digit(key) {
        return Some(KeyAction::SwitchView(view));
    }
    match key {
        "Enter" => Some(KeyAction::Finish),
        "Escape" | "Esc" => Some(KeyAction::Dismiss),
        _ => None,
    }
}
