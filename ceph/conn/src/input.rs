// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::InputError;

use std::collections::VecDeque;

/// A command line, split into a program and its arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Input {
    pub program: String,
    pub args: VecDeque<String>,
}

impl Input {
    pub fn new<S: Into<String>>(program: S, args: Vec<S>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Parses a whitespace-separated string, which can be provided
    /// "like a shell command".
    pub fn shell<S: AsRef<str>>(input: S) -> Result<Self, InputError> {
        let input = input.as_ref();
        let mut args = shlex::split(input)
            .ok_or_else(|| InputError::Unbalanced(input.to_string()))?;
        if args.is_empty() {
            return Err(InputError::Empty);
        }
        let program = args.remove(0);
        Ok(Self { program, args: args.into() })
    }

    /// Shifts out the program, putting the subsequent argument in its place.
    ///
    /// Returns the prior program value.
    pub fn shift_program(&mut self) -> Result<String, InputError> {
        let new = self.args.pop_front().ok_or(InputError::Empty)?;
        Ok(std::mem::replace(&mut self.program, new))
    }

    /// Arguments as a contiguous slice, for pattern matching.
    pub fn args(&mut self) -> &[String] {
        self.args.make_contiguous()
    }
}

fn write_quoted(f: &mut std::fmt::Formatter<'_>, s: &str) -> std::fmt::Result {
    match shlex::try_quote(s) {
        Ok(quoted) => write!(f, "{quoted}"),
        // Only interior NUL bytes are unquotable.
        Err(_) => write!(f, "{s:?}"),
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_quoted(f, &self.program)?;
        for arg in &self.args {
            write!(f, " ")?;
            write_quoted(f, arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shell_splits_program_and_args() {
        let input = Input::shell("ceph osd pool create mypool 32").unwrap();
        assert_eq!(input.program, "ceph");
        assert_eq!(input.args, ["osd", "pool", "create", "mypool", "32"]);
    }

    #[test]
    fn shell_honours_quotes() {
        let input =
            Input::shell("ceph config set mon key 'two words'").unwrap();
        assert_eq!(input.args.back().unwrap(), "two words");
        assert_eq!(Input::shell(input.to_string()).unwrap(), input);
    }

    #[test]
    fn shell_rejects_bad_lines() {
        assert_eq!(Input::shell("   ").unwrap_err(), InputError::Empty);
        assert!(matches!(
            Input::shell("ceph osd 'pool").unwrap_err(),
            InputError::Unbalanced(_)
        ));
    }

    #[test]
    fn shift_program() {
        let mut input = Input::shell("sudo ceph osd pool ls").unwrap();
        assert_eq!(input.shift_program().unwrap(), "sudo");
        assert_eq!(input.program, "ceph");
        assert_eq!(input.args(), ["osd", "pool", "ls"]);

        let mut input = Input::new("sudo", vec![]);
        assert_eq!(input.shift_program().unwrap_err(), InputError::Empty);
    }
}
