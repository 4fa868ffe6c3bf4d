use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::command::COMMANDS;

/// What TAB completes to at the current prompt
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) enum CompletionMode {
    /// Shell commands, at the main prompt
    #[default]
    Commands,
    /// Names of configuration files
    Files(Vec<String>),
    /// Free-form answers
    Nothing,
}

/// rustyline helper providing TAB completion for the shell
#[derive(Debug, Default)]
pub struct ShellHelper {
    mode: CompletionMode,
}

impl ShellHelper {
    pub(crate) fn set_mode(&mut self, mode: CompletionMode) {
        self.mode = mode;
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let typed = &line[..pos];
        match &self.mode {
            CompletionMode::Commands => {
                let start = typed.len() - typed.trim_start().len();
                let prefix = typed.trim_start().to_ascii_lowercase();
                let pairs = COMMANDS
                    .iter()
                    .filter(|command| command.starts_with(&prefix))
                    .map(|command| pair(command))
                    .collect();
                (start, pairs)
            }
            CompletionMode::Files(files) => {
                let pairs = files
                    .iter()
                    .filter(|file| file.starts_with(typed))
                    .map(|file| pair(file))
                    .collect();
                (0, pairs)
            }
            CompletionMode::Nothing => (pos, vec![]),
        }
    }
}

fn pair(candidate: &str) -> Pair {
    Pair {
        display: candidate.to_owned(),
        replacement: candidate.to_owned(),
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn replacements(helper: &ShellHelper, line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = helper.candidates(line, line.len());
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn completes_commands_by_prefix() {
        let helper = ShellHelper::default();
        assert_eq!(
            replacements(&helper, "list c"),
            (0, vec!["list clusters".to_owned(), "list configurations".to_owned()])
        );
        assert_eq!(
            replacements(&helper, "  DESCRIBE t"),
            (2, vec!["describe trigger".to_owned()])
        );
        assert_eq!(replacements(&helper, "xyz"), (0, vec![]));
        assert_eq!(replacements(&helper, "").1.len(), COMMANDS.len());
    }

    #[test]
    fn completes_file_names() {
        let mut helper = ShellHelper::default();
        helper.set_mode(CompletionMode::Files(vec![
            "config1.json".to_owned(),
            "config2.json".to_owned(),
            "other.json".to_owned(),
        ]));
        assert_eq!(
            replacements(&helper, "conf"),
            (0, vec!["config1.json".to_owned(), "config2.json".to_owned()])
        );
        assert_eq!(replacements(&helper, "").1.len(), 3);
    }

    #[test]
    fn free_form_answers_have_no_completion() {
        let mut helper = ShellHelper::default();
        helper.set_mode(CompletionMode::Nothing);
        assert_eq!(replacements(&helper, "list"), (4, vec![]));
    }
}
