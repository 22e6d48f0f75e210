#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,

    // Form
    FocusNext,
    FocusPrevious,
    Input(char),
    Paste(String),
    Backspace,
    ClearField,
    Submit,

    // Results
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}
