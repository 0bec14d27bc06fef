//! Form page messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Move to the next input (leaves the current one)
    NextField,

    /// Move to the previous input
    PrevField,

    /// Enter on the focused element
    Confirm,

    /// Submit regardless of focus
    Submit,

    /// Type a character into the focused field
    Input(char),

    /// Delete the last character of the focused field
    Backspace,

    /// Leave the form for the list
    Cancel,
}
