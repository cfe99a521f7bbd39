use thiserror::Error;

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Inquire(String),
    List,
    Add(String),
    Modify(String),
    Deliver(String),
    Order,
    Return,
    Sell(String),
    Customers,
    DeleteTitle(String),
    DeleteCustomer,
    DeleteAll,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(char),

    #[error("command `{0}` needs a title")]
    MissingTitle(char),
}

impl Command {
    /// Parse an input line.
    ///
    /// The verb is the first character of the first word, case-insensitive;
    /// for title commands the title is the rest of the line after that word.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let verb = word.chars().next().ok_or(ParseError::Empty)?;
        let title = || {
            let title = rest.trim();
            if title.is_empty() {
                Err(ParseError::MissingTitle(verb))
            } else {
                Ok(title.to_owned())
            }
        };

        Ok(match verb.to_ascii_uppercase() {
            'H' => Self::Help,
            'I' => Self::Inquire(title()?),
            'L' => Self::List,
            'A' => Self::Add(title()?),
            'M' => Self::Modify(title()?),
            'D' => Self::Deliver(title()?),
            'O' => Self::Order,
            'R' => Self::Return,
            'S' => Self::Sell(title()?),
            'C' => Self::Customers,
            'X' => Self::DeleteTitle(title()?),
            'Y' => Self::DeleteCustomer,
            'Z' => Self::DeleteAll,
            'Q' => Self::Quit,
            _ => return Err(ParseError::Unknown(verb)),
        })
    }
}
