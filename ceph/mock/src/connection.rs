// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A "fake" [CephConnection] implementation, which responds to commands
//! from an in-memory [ClusterState].

use crate::cli::Interpreter;
use crate::config::MockConfig;
use crate::state::{ClusterState, CommandHistory};

use ceph_conn::{
    log_input, log_output, mask_secrets, CephConnection, CommandOutput,
    SharedConnection,
};
use indexmap::{IndexMap, IndexSet};
use slog::{debug, Logger};
use std::collections::VecDeque;

/// A connection which applies commands to a simulated cluster rather than
/// running them anywhere.
///
/// Every command line is appended to the history before it is interpreted,
/// whether or not it is recognized.
pub struct CephMockConnection {
    log: Logger,
    counter: u64,
    interpreter: Interpreter,
    state: ClusterState,
}

impl CephMockConnection {
    pub fn new(log: Logger) -> Self {
        Self::with_config(log, MockConfig::default())
    }

    pub fn with_config(log: Logger, config: MockConfig) -> Self {
        let history = match config.max_history_size {
            Some(capacity) => CommandHistory::bounded(capacity),
            None => CommandHistory::new(),
        };
        Self {
            log,
            counter: 0,
            interpreter: Interpreter::from_config(&config),
            state: ClusterState::with_history(history),
        }
    }

    pub fn state(&self) -> &ClusterState {
        &self.state
    }

    /// Mutable access for seeding pools, rules or settings directly.
    pub fn state_mut(&mut self) -> &mut ClusterState {
        &mut self.state
    }

    pub fn into_shared(self) -> SharedConnection<Self> {
        SharedConnection::new(self)
    }
}

impl CephConnection for CephMockConnection {
    fn execute_with_secrets(
        &mut self,
        command: &str,
        secrets: &[&str],
    ) -> CommandOutput {
        let id = self.counter;
        self.counter += 1;

        let masked = mask_secrets(command, secrets);
        log_input(&self.log, id, &masked);
        self.state.history.record(masked);

        let (kind, output) =
            self.interpreter.interpret(&mut self.state, command);
        debug!(
            self.log,
            "interpreted ceph command";
            "id" => id,
            "rule" => kind.map(<&'static str>::from).unwrap_or("unknown"),
        );

        // Unknown commands echo the line back on stderr.
        if secrets.is_empty() {
            log_output(&self.log, id, &output);
        } else {
            let redacted = CommandOutput {
                status: output.status,
                stdout: mask_secrets(&output.stdout, secrets),
                stderr: mask_secrets(&output.stderr, secrets),
            };
            log_output(&self.log, id, &redacted);
        }
        output
    }

    fn pools(&self) -> &IndexSet<String> {
        self.state.pools()
    }

    fn crush_rules(&self) -> &IndexSet<String> {
        self.state.crush_rules()
    }

    fn config_settings(&self) -> &IndexMap<String, String> {
        self.state.config_settings()
    }

    fn command_history(&self) -> &VecDeque<String> {
        self.state.history().entries()
    }

    fn reset(&mut self) {
        debug!(self.log, "resetting mock cluster state");
        self.state.reset();
    }
}
