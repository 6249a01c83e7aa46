mod example;
mod message;
mod role;

pub use example::Example;

use crate::jsonl;
use crate::nice_display::NiceDisplay;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct Dataset {
    examples: Vec<Example>,
}

pub struct WriteReport {
    pub count: usize,
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum WriteError {
    CreatingDirectory { path: PathBuf, err: io::Error },
    CreatingFile { path: PathBuf, err: io::Error },
    Serializing(serde_json::Error),
    WritingFile(io::Error),
    ResolvingPath(io::Error),
}

impl NiceDisplay for WriteError {
    fn message(&self) -> String {
        match self {
            WriteError::CreatingDirectory { path, err } => {
                format!("Error creating directory {}: {}", path.display(), err)
            }
            WriteError::CreatingFile { path, err } => {
                format!("Error creating file {}: {}", path.display(), err)
            }
            WriteError::Serializing(err) => format!("Error serializing example: {}", err),
            WriteError::WritingFile(err) => format!("Error writing dataset: {}", err),
            WriteError::ResolvingPath(err) => {
                format!("Error resolving the dataset's absolute path: {}", err)
            }
        }
    }
}

impl Dataset {
    pub fn from_examples(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    /// The code archaeologist set: explain commits and legacy code in plain
    /// terms, and point out what makes old code unsafe.
    pub fn code_archaeologist() -> Self {
        Self::from_examples(vec![
            Example::new(
                "Explain this git commit message in simple business terms: Initial commit",
                concat!(
                    "This commit creates the starting point of the project. ",
                    "From a business perspective, it means work has officially begun on a new system ",
                    "or feature to address a specific need. It does not deliver value yet but establishes ",
                    "the foundation for future work."
                ),
            ),
            Example::new(
                concat!(
                    "Explain what this old function does and rewrite it safely: ",
                    "import os; def get_secret(): return os.getenv('API_KEY')"
                ),
                concat!(
                    "The function returns the value of the API_KEY environment variable with no validation ",
                    "or error handling. Any caller can read sensitive credentials. ",
                    "A safer version checks for existence and fails loudly if the key is missing."
                ),
            ),
            Example::new(
                concat!(
                    "Review this function for hidden issues: ",
                    "def send_email(address, msg): print(f'Email sent to {address}: {msg}')"
                ),
                concat!(
                    "This function only prints to stdout; it does not send an email. ",
                    "It also leaks potentially sensitive contents into logs. In production you must call ",
                    "a real email service and avoid logging message bodies."
                ),
            ),
            Example::new(
                concat!(
                    "What is wrong with this login function and how would you rewrite it? ",
                    "function login(user, pass) { if (user == 'admin') return true; return false; }"
                ),
                concat!(
                    "It ignores the password entirely, hardcodes a single username, and has no hashing or ",
                    "security. A proper login must verify a password hash from a data store and handle failures ",
                    "securely."
                ),
            ),
            Example::new(
                concat!(
                    "Why is this delete_user function unsafe and how should it be fixed? ",
                    "def delete_user(id): query = f'DELETE FROM users WHERE id = {id}'; db.execute(query)"
                ),
                concat!(
                    "It builds SQL with string interpolation, which is vulnerable to SQL injection if id ",
                    "comes from user input. Use parameterized queries instead, for example: ",
                    "\"DELETE FROM users WHERE id = ?\" with a bound parameter."
                ),
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Writes one example per line, replacing whatever is at `path`.
    ///
    /// Missing parent directories are created. The write is not atomic: if it
    /// fails partway the file may be empty or truncated.
    pub fn write(&self, path: &Path) -> Result<WriteReport, WriteError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| WriteError::CreatingDirectory {
                path: parent.to_path_buf(),
                err,
            })?;
        }

        let file = File::create(path).map_err(|err| WriteError::CreatingFile {
            path: path.to_path_buf(),
            err,
        })?;
        let mut writer = BufWriter::new(file);

        for (index, example) in self.examples.iter().enumerate() {
            debug!(line = index + 1, prompt = example.prompt(), "writing example");
            let line = jsonl::to_line(example).map_err(WriteError::Serializing)?;
            write_line(&mut writer, &line).map_err(WriteError::WritingFile)?;
        }

        writer.flush().map_err(WriteError::WritingFile)?;

        let resolved = fs::canonicalize(path).map_err(WriteError::ResolvingPath)?;
        info!(count = self.len(), path = %resolved.display(), "dataset written");

        Ok(WriteReport {
            count: self.len(),
            path: resolved,
        })
    }
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")
}
