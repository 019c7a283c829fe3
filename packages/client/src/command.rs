//! Input line parsing.

/// What the user asked for with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the (trimmed) text as a message; may be empty
    Say(String),
    /// Print the roster
    Users,
    /// Leave and exit
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Self::Quit,
            "/users" => Self::Users,
            text => Self::Say(text.to_string()),
        }
    }
}
