//! List page messages

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    /// Open the selected user in the form
    Open,
    /// Open an empty form
    Create,
    /// Delete the selected user
    Delete,
}
