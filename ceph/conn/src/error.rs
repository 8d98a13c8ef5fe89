// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Reasons a command line could not be tokenized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unbalanced quoting in command line: {0}")]
    Unbalanced(String),

    #[error("Empty command line")]
    Empty,
}

#[derive(Debug)]
pub struct CommandFailureInfo {
    pub command: String,
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl std::fmt::Display for CommandFailureInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Command [{}] executed and failed with status: {}",
            self.command, self.status
        )?;
        write!(f, "  stdout: {}", self.stdout)?;
        write!(f, "  stderr: {}", self.stderr)
    }
}

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("{0}")]
    CommandFailure(Box<CommandFailureInfo>),
}

impl ExecutionError {
    /// Exit status of the failed command.
    pub fn status(&self) -> i32 {
        match self {
            ExecutionError::CommandFailure(info) => info.status,
        }
    }
}
