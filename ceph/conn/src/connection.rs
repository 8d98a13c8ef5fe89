// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{CommandOutput, ExecutionError};

use indexmap::{IndexMap, IndexSet};
use slog::{debug, info, Logger};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replacement text for secrets in recorded command lines.
pub const SECRET_MASK: &str = "***";

/// Replaces every occurrence of each (non-empty) secret with [SECRET_MASK].
pub fn mask_secrets(command: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|s| !s.is_empty())
        .fold(command.to_string(), |masked, secret| {
            masked.replace(secret, SECRET_MASK)
        })
}

pub fn log_input(log: &Logger, id: u64, command: &str) {
    info!(log, "running ceph command"; "id" => id, "command" => command);
}

pub fn log_output(log: &Logger, id: u64, output: &CommandOutput) {
    info!(
        log,
        "finished running ceph command";
        "id" => id,
        "result" => if output.is_success() { "OK" } else { "ERROR" },
        "status" => output.status,
    );
    if !output.stdout.is_empty() {
        debug!(
            log,
            "finished command stdout";
            "id" => id,
            "stdout" => &output.stdout,
        );
    }
    if !output.stderr.is_empty() {
        debug!(
            log,
            "finished command stderr";
            "id" => id,
            "stderr" => &output.stderr,
        );
    }
}

/// A connection which can run Ceph administrative commands, and exposes
/// the cluster state those commands act upon.
///
/// Failures are reported through [CommandOutput::status] and
/// [CommandOutput::stderr], the way a spawned process reports them; use
/// [CephConnection::execute_checked] to turn them into errors.
pub trait CephConnection: Send {
    /// Runs a command line, recording it with each of `secrets` masked.
    fn execute_with_secrets(
        &mut self,
        command: &str,
        secrets: &[&str],
    ) -> CommandOutput;

    /// Runs a command line.
    fn execute(&mut self, command: &str) -> CommandOutput {
        self.execute_with_secrets(command, &[])
    }

    /// Runs a command line, treating a nonzero exit status as an error.
    fn execute_checked(
        &mut self,
        command: &str,
    ) -> Result<CommandOutput, ExecutionError> {
        self.execute(command).into_result(command)
    }

    fn pools(&self) -> &IndexSet<String>;

    fn crush_rules(&self) -> &IndexSet<String>;

    fn config_settings(&self) -> &IndexMap<String, String>;

    /// Every command line submitted so far, oldest first.
    fn command_history(&self) -> &VecDeque<String>;

    /// Clears all pools, rules, settings and history.
    fn reset(&mut self);
}

/// Describes the commonly-used connection trait object.
pub type BoxedConnection = Box<dyn CephConnection>;

/// A cloneable handle to a connection, for callers which issue commands
/// from more than one thread.
///
/// Each call holds a single lock for its whole duration, so commands are
/// applied one at a time, in the order the lock is acquired.
pub struct SharedConnection<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for SharedConnection<C> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<C: CephConnection> SharedConnection<C> {
    pub fn new(connection: C) -> Self {
        Self { inner: Arc::new(Mutex::new(connection)) }
    }

    pub fn execute(&self, command: &str) -> CommandOutput {
        self.inner.lock().unwrap().execute(command)
    }

    pub fn execute_with_secrets(
        &self,
        command: &str,
        secrets: &[&str],
    ) -> CommandOutput {
        self.inner.lock().unwrap().execute_with_secrets(command, secrets)
    }

    pub fn execute_checked(
        &self,
        command: &str,
    ) -> Result<CommandOutput, ExecutionError> {
        self.inner.lock().unwrap().execute_checked(command)
    }

    pub fn reset(&self) {
        self.inner.lock().unwrap().reset()
    }

    /// Inspects the connection while holding the lock.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&C) -> R,
    {
        let guard = self.inner.lock().unwrap();
        f(&*guard)
    }
}
