//! Interactive prompt: reading commands and answers from the operator

mod command;
mod completer;

pub use command::{COMMANDS, Resource, ShellCommand};
pub use completer::ShellHelper;

use std::path::PathBuf;

use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tracing::debug;

use completer::CompletionMode;

/// Source of operator input
///
/// [`Shell`] reads from the terminal; tests substitute scripted answers.
pub trait Prompter {
    /// Read the next command line. `None` means the operator wants to leave.
    fn read_command(&mut self) -> Result<Option<String>, ReadlineError>;

    /// Ask a question. `None` means the operator cancelled the prompt.
    fn read_input(&mut self, message: &str) -> Result<Option<String>, ReadlineError>;

    /// Ask for a file name, offering `files` for TAB completion
    fn read_file_name(
        &mut self,
        message: &str,
        files: &[String],
    ) -> Result<Option<String>, ReadlineError>;
}

/// Terminal prompt with history and TAB completion
pub struct Shell {
    /// Rustyline editor for interacting with user on command line
    editor: Editor<ShellHelper, DefaultHistory>,

    /// Prompt shown when waiting for a command
    prompt: String,
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl Shell {
    /// Create a new shell, loading the history of previous sessions
    pub fn try_new() -> Result<Self, ReadlineError> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ShellHelper::default()));

        if let Err(e) = editor.load_history(&history_file()) {
            debug!(%e, "error loading history file");
        }

        Ok(Self {
            editor,
            prompt: "> ".to_owned(),
        })
    }

    fn set_mode(&mut self, mode: CompletionMode) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_mode(mode);
        }
    }

    fn read_answer(
        &mut self,
        message: &str,
        mode: CompletionMode,
    ) -> Result<Option<String>, ReadlineError> {
        self.set_mode(mode);
        let answer = match self.editor.readline(message) {
            Ok(line) => Ok(Some(line)),
            Err(e @ (ReadlineError::Eof | ReadlineError::Interrupted)) => {
                debug!(%e, "prompt cancelled");
                Ok(None)
            }
            Err(e) => Err(e),
        };
        self.set_mode(CompletionMode::Commands);
        answer
    }
}

impl Prompter for Shell {
    fn read_command(&mut self) -> Result<Option<String>, ReadlineError> {
        self.set_mode(CompletionMode::Commands);
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.editor.add_history_entry(line.as_str())
                {
                    debug!(%e, "error adding history entry");
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => {
                debug!("Received Ctrl-D");
                Ok(None)
            }
            Err(ReadlineError::Interrupted) => {
                debug!("Received Ctrl-C");
                Ok(None)
            }
            // Some sort of real underlying error
            Err(e) => Err(e),
        }
    }

    fn read_input(&mut self, message: &str) -> Result<Option<String>, ReadlineError> {
        self.read_answer(message, CompletionMode::Nothing)
    }

    fn read_file_name(
        &mut self,
        message: &str,
        files: &[String],
    ) -> Result<Option<String>, ReadlineError> {
        self.read_answer(message, CompletionMode::Files(files.to_vec()))
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        if let Err(e) = self.editor.save_history(&history_file()) {
            debug!(%e, "error saving history file");
        }
    }
}

/// Return the location of the history file (defaults to $HOME/".insights_operator_cli_history")
fn history_file() -> PathBuf {
    let mut buf = match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home),
        Err(_) => PathBuf::new(),
    };
    buf.push(".insights_operator_cli_history");
    buf
}
