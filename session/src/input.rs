//! Keyboard bindings

/// What a key means to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Start,
    Help,
    CloseHelp,
}

impl KeyBinding {
    /// Whether the binding is a held direction (latched until key-up)
    /// rather than a one-shot control key.
    pub fn is_direction(self) -> bool {
        matches!(
            self,
            Self::LeftUp | Self::LeftDown | Self::RightUp | Self::RightDown
        )
    }
}

/// Resolve a key name, as delivered by the host's key events, to a binding.
/// "х" covers the help key on a Cyrillic layout.
pub fn binding_for(key: &str) -> Option<KeyBinding> {
    match key {
        "w" | "W" => Some(KeyBinding::LeftUp),
        "s" | "S" => Some(KeyBinding::LeftDown),
        "ArrowUp" => Some(KeyBinding::RightUp),
        "ArrowDown" => Some(KeyBinding::RightDown),
        " " | "Enter" => Some(KeyBinding::Start),
        "h" | "H" | "х" | "Х" => Some(KeyBinding::Help),
        "Escape" => Some(KeyBinding::CloseHelp),
        _ => None,
    }
}
