use crate::domain::action::Action;
use crate::error::{KidVestError, Result};
use std::io::Read;

/// Reads a script of user actions from CSV.
///
/// Expects an `action,value` header. Fields are trimmed and short rows are
/// accepted, so a bare `answer` row submits an empty answer.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields each row; a bad row is an `Err` without ending the stream.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(KidVestError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::ActionKind;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, value\ncontribute, 60\nset_goal, 80\nanswer, Save a portion";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.kind, ActionKind::Contribute);
        assert_eq!(first.value, "60");
        assert_eq!(results[2].as_ref().unwrap().value, "Save a portion");
    }

    #[test]
    fn test_reader_keeps_non_numeric_values() {
        let data = "action, value\ncontribute, lots\ncontribute, -3";
        let actions: Vec<Action> = ActionReader::new(data.as_bytes())
            .actions()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(actions[0].value, "lots");
        assert_eq!(actions[1].value, "-3");
    }

    #[test]
    fn test_reader_quoted_value_with_comma() {
        let data = "action,value\nanswer,\"Spend first, save later\"";
        let actions: Vec<Action> = ActionReader::new(data.as_bytes())
            .actions()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(actions[0].value, "Spend first, save later");
    }

    #[test]
    fn test_reader_unknown_action_is_row_error() {
        let data = "action, value\ndance, 1\ncontribute, 5";
        let results: Vec<Result<Action>> = ActionReader::new(data.as_bytes()).actions().collect();

        assert!(matches!(results[0], Err(KidVestError::CsvError(_))));
        assert!(results[1].is_ok());
    }
}
