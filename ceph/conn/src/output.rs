// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{CommandFailureInfo, ExecutionError};

/// Exit status reported for every failed command.
pub const EXIT_FAILURE: i32 = 1;

/// The result of running an administrative command: what a process
/// invocation would have exited with and printed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure() -> Self {
        Self { status: EXIT_FAILURE, ..Default::default() }
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn set_stdout<S: AsRef<str>>(mut self, stdout: S) -> Self {
        self.stdout = stdout.as_ref().to_string();
        self
    }

    pub fn set_stderr<S: AsRef<str>>(mut self, stderr: S) -> Self {
        self.stderr = stderr.as_ref().to_string();
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Returns the `(status, stdout, stderr)` triple.
    pub fn into_parts(self) -> (i32, String, String) {
        (self.status, self.stdout, self.stderr)
    }

    /// Converts a nonzero exit status into an [ExecutionError].
    pub fn into_result<S: Into<String>>(
        self,
        command: S,
    ) -> Result<Self, ExecutionError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ExecutionError::CommandFailure(Box::new(CommandFailureInfo {
            command: command.into(),
            status: self.status,
            stdout: self.stdout,
            stderr: self.stderr,
        })))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builders() {
        let out = CommandOutput::success().set_stdout("size: 1");
        assert!(out.is_success());
        assert_eq!(out.into_parts(), (0, "size: 1".to_string(), String::new()));

        let out = CommandOutput::failure().set_stderr("nope").with_status(2);
        assert!(!out.is_success());
        assert_eq!(out.status, 2);
    }

    #[test]
    fn into_result_keeps_failure_details() {
        let err = CommandOutput::failure()
            .set_stderr("rule 'r' does not exist")
            .into_result("ceph osd crush rule rm r")
            .unwrap_err();
        assert_eq!(err.status(), EXIT_FAILURE);
        let msg = err.to_string();
        assert!(msg.contains("ceph osd crush rule rm r"), "{msg}");
        assert!(msg.contains("rule 'r' does not exist"), "{msg}");

        let ok = CommandOutput::success().into_result("ceph osd pool ls");
        assert!(ok.is_ok());
    }
}
