//! `/poll Question|Option 1|Option 2` argument parsing and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum and maximum number of poll options accepted by Telegram.
pub const MIN_POLL_OPTIONS: usize = 2;
pub const MAX_POLL_OPTIONS: usize = 10;
pub const MAX_QUESTION_LEN: usize = 300;
pub const MAX_OPTION_LEN: usize = 100;

const SEPARATOR: char = '|';

/// A validated poll: question plus 2..=10 options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollDraft {
    pub question: String,
    pub options: Vec<String>,
}

/// Why a `/poll` message was rejected. Display text is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("The poll question is empty.")]
    EmptyQuestion,
    #[error("Please provide at least two options for the poll, separated by |.")]
    TooFewOptions,
    #[error("Polls can have at most {} options.", MAX_POLL_OPTIONS)]
    TooManyOptions,
    #[error("The poll question must be at most {} characters.", MAX_QUESTION_LEN)]
    QuestionTooLong,
    #[error("Each poll option must be at most {} characters.", MAX_OPTION_LEN)]
    OptionTooLong,
}

/// Parses the arguments of a `/poll` command: `Question|Option 1|Option 2`.
///
/// The command name itself is matched by the caller. Items are trimmed and empty options are dropped.
pub fn parse_poll_args(args: &str) -> Result<PollDraft, PollError> {
    let mut items = args.split(SEPARATOR).map(str::trim);

    let question = items.next().unwrap_or_default().to_string();
    if question.is_empty() {
        return Err(PollError::EmptyQuestion);
    }
    if question.chars().count() > MAX_QUESTION_LEN {
        return Err(PollError::QuestionTooLong);
    }

    let options: Vec<String> = items
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if options.len() < MIN_POLL_OPTIONS {
        return Err(PollError::TooFewOptions);
    }
    if options.len() > MAX_POLL_OPTIONS {
        return Err(PollError::TooManyOptions);
    }
    if options.iter().any(|o| o.chars().count() > MAX_OPTION_LEN) {
        return Err(PollError::OptionTooLong);
    }

    Ok(PollDraft { question, options })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_guide_example() {
        let poll = parse_poll_args("Which color do you prefer?|Red|Blue|Green").unwrap();
        assert_eq!(poll.question, "Which color do you prefer?");
        assert_eq!(poll.options, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_items_are_trimmed_and_empty_options_dropped() {
        let poll = parse_poll_args(" Lunch? | Pizza |  | Sushi |").unwrap();
        assert_eq!(poll.question, "Lunch?");
        assert_eq!(poll.options, vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn test_option_count_limits() {
        assert_eq!(parse_poll_args("Q|A"), Err(PollError::TooFewOptions));
        assert_eq!(parse_poll_args("Q"), Err(PollError::TooFewOptions));
        let eleven = (1..=11).map(|i| i.to_string()).collect::<Vec<_>>().join("|");
        assert_eq!(
            parse_poll_args(&format!("Q|{}", eleven)),
            Err(PollError::TooManyOptions)
        );
        let ten = (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("|");
        assert_eq!(parse_poll_args(&format!("Q|{}", ten)).unwrap().options.len(), 10);
    }

    #[test]
    fn test_empty_question() {
        assert_eq!(parse_poll_args(""), Err(PollError::EmptyQuestion));
        assert_eq!(parse_poll_args("|A|B"), Err(PollError::EmptyQuestion));
    }

    #[test]
    fn test_length_limits() {
        let long_q = "q".repeat(MAX_QUESTION_LEN + 1);
        assert_eq!(
            parse_poll_args(&format!("{}|A|B", long_q)),
            Err(PollError::QuestionTooLong)
        );
        let long_o = "o".repeat(MAX_OPTION_LEN + 1);
        assert_eq!(
            parse_poll_args(&format!("Q|A|{}", long_o)),
            Err(PollError::OptionTooLong)
        );
    }
}
