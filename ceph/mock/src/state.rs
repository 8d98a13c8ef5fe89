// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Emulates the facts an administrative CLI can observe about a cluster.

use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Replica count reported for every pool.
pub const SINGLE_REPLICA_SIZE: u32 = 1;

/// Ordered log of submitted command lines.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: Option<NonZeroUsize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history which forgets its oldest entries beyond `capacity`.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self { entries: VecDeque::new(), capacity: Some(capacity) }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    pub fn record<S: Into<String>>(&mut self, command: S) {
        self.entries.push_back(command.into());
        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity.get() {
                self.entries.pop_front();
            }
        }
    }

    pub fn entries(&self) -> &VecDeque<String> {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Pools, placement rules, monitor settings and command history of the
/// simulated cluster.
///
/// Pools and rules keep the order in which they were created, which is
/// also the order `ls` commands report them in.
#[derive(Clone, Debug, Default)]
pub struct ClusterState {
    pub(crate) pools: IndexSet<String>,
    pub(crate) crush_rules: IndexSet<String>,
    pub(crate) config_settings: IndexMap<String, String>,
    pub(crate) history: CommandHistory,
}

impl ClusterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: CommandHistory) -> Self {
        Self { history, ..Default::default() }
    }

    pub fn pools(&self) -> &IndexSet<String> {
        &self.pools
    }

    pub fn crush_rules(&self) -> &IndexSet<String> {
        &self.crush_rules
    }

    pub fn config_settings(&self) -> &IndexMap<String, String> {
        &self.config_settings
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Adds a pool without going through a command.
    ///
    /// Returns false if the pool already existed.
    pub fn add_pool<S: Into<String>>(&mut self, name: S) -> bool {
        self.pools.insert(name.into())
    }

    /// Adds a crush rule without going through a command.
    ///
    /// Returns false if the rule already existed.
    pub fn add_crush_rule<S: Into<String>>(&mut self, name: S) -> bool {
        self.crush_rules.insert(name.into())
    }

    /// Stores a monitor setting, returning the value it replaced.
    pub fn set_config<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<String> {
        self.config_settings.insert(key.into(), value.into())
    }

    pub(crate) fn remove_pool(&mut self, name: &str) -> bool {
        self.pools.shift_remove(name)
    }

    pub(crate) fn remove_crush_rule(&mut self, name: &str) -> bool {
        self.crush_rules.shift_remove(name)
    }

    /// Empties every collection. A bounded history stays bounded.
    pub fn reset(&mut self) {
        self.pools.clear();
        self.crush_rules.clear();
        self.config_settings.clear();
        self.history.clear();
    }
}
