// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of `ceph` command lines against a [ClusterState].
//!
//! Recognized commands are listed in [RULES], an ordered table of token
//! patterns and the handlers which apply them. The first pattern to match
//! an input wins; anything else is reported as an unknown command.

use crate::config::MockConfig;
use crate::state::ClusterState;

use ceph_conn::{CommandOutput, Input, CEPH};

mod crush;
mod mon;
mod pool;

/// The shapes of command line which the mock understands.
#[derive(
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CommandKind {
    ConfigSet,
    CrushRuleLs,
    CrushRuleCreateSimple,
    CrushRuleRm,
    PoolLs,
    PoolCreate,
    PoolSet,
    PoolGetSize,
    PoolDelete,
    PoolApplicationEnable,
}

/// One element of a command pattern.
#[derive(Clone, Copy, Debug)]
enum Token {
    /// Must equal this argument exactly.
    Lit(&'static str),
    /// Any single argument, passed to the handler.
    Arg,
    /// Any number of trailing arguments, ignored.
    Rest,
}

/// Applies a matched command. Captured arguments arrive in the order their
/// [Token::Arg]s appear in the pattern.
type Handler = fn(&mut ClusterState, &[&str]) -> CommandOutput;

struct Rule {
    kind: CommandKind,
    pattern: &'static [Token],
    handler: Handler,
}

impl Rule {
    /// Matches `args` (everything after the program name) against this
    /// rule's pattern, returning the captured arguments.
    fn captures<'a>(&self, args: &'a [String]) -> Option<Vec<&'a str>> {
        let mut captured = Vec::new();
        let mut args = args.iter();
        for token in self.pattern {
            match token {
                Token::Lit(lit) => {
                    if args.next()?.as_str() != *lit {
                        return None;
                    }
                }
                Token::Arg => captured.push(args.next()?.as_str()),
                Token::Rest => return Some(captured),
            }
        }
        args.next().is_none().then_some(captured)
    }
}

use Token::{Arg, Lit, Rest};

static RULES: &[Rule] = &[
    Rule {
        kind: CommandKind::ConfigSet,
        pattern: &[Lit("config"), Lit("set"), Lit("mon"), Arg, Arg, Rest],
        handler: mon::config_set,
    },
    Rule {
        kind: CommandKind::CrushRuleLs,
        pattern: &[Lit("osd"), Lit("crush"), Lit("rule"), Lit("ls")],
        handler: crush::ls,
    },
    Rule {
        kind: CommandKind::CrushRuleCreateSimple,
        pattern: &[
            Lit("osd"),
            Lit("crush"),
            Lit("rule"),
            Lit("create-simple"),
            Arg,
            Rest,
        ],
        handler: crush::create_simple,
    },
    Rule {
        kind: CommandKind::CrushRuleRm,
        pattern: &[Lit("osd"), Lit("crush"), Lit("rule"), Lit("rm"), Arg],
        handler: crush::rm,
    },
    Rule {
        kind: CommandKind::PoolLs,
        pattern: &[Lit("osd"), Lit("pool"), Lit("ls")],
        handler: pool::ls,
    },
    Rule {
        kind: CommandKind::PoolCreate,
        pattern: &[Lit("osd"), Lit("pool"), Lit("create"), Arg, Rest],
        handler: pool::create,
    },
    Rule {
        kind: CommandKind::PoolSet,
        pattern: &[Lit("osd"), Lit("pool"), Lit("set"), Arg, Rest],
        handler: pool::set,
    },
    Rule {
        kind: CommandKind::PoolGetSize,
        pattern: &[
            Lit("osd"),
            Lit("pool"),
            Lit("get"),
            Arg,
            Lit("size"),
            Rest,
        ],
        handler: pool::get_size,
    },
    Rule {
        kind: CommandKind::PoolDelete,
        pattern: &[Lit("osd"), Lit("pool"), Lit("delete"), Arg, Rest],
        handler: pool::delete,
    },
    Rule {
        kind: CommandKind::PoolApplicationEnable,
        pattern: &[
            Lit("osd"),
            Lit("pool"),
            Lit("application"),
            Lit("enable"),
            Rest,
        ],
        handler: pool::application_enable,
    },
];

/// Matches command lines against [RULES] and applies them.
#[derive(Clone, Debug)]
pub struct Interpreter {
    program: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(CEPH)
    }
}

impl Interpreter {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    pub fn from_config(config: &MockConfig) -> Self {
        Self::new(config.program.clone())
    }

    /// Reports which command `line` would run, without running it.
    pub fn classify(&self, line: &str) -> Option<CommandKind> {
        let mut input = self.tokenize(line)?;
        let (rule, _) = lookup(input.args())?;
        Some(rule.kind)
    }

    /// Runs `line` against `state`.
    ///
    /// Never fails: lines which cannot be tokenized, invoke some other
    /// program, or match no rule produce an "Unknown command" output.
    pub fn interpret(
        &self,
        state: &mut ClusterState,
        line: &str,
    ) -> (Option<CommandKind>, CommandOutput) {
        let Some(mut input) = self.tokenize(line) else {
            return (None, unknown(line));
        };
        match lookup(input.args()) {
            Some((rule, captured)) => {
                (Some(rule.kind), (rule.handler)(state, &captured))
            }
            None => (None, unknown(line)),
        }
    }

    /// Splits `line` and drops everything before the first token naming our
    /// program, so wrappers such as `sudo` or `timeout 60` are ignored.
    fn tokenize(&self, line: &str) -> Option<Input> {
        let mut input = Input::shell(line).ok()?;
        while input.program != self.program {
            input.shift_program().ok()?;
        }
        Some(input)
    }
}

fn lookup(args: &[String]) -> Option<(&'static Rule, Vec<&str>)> {
    RULES
        .iter()
        .find_map(|rule| rule.captures(args).map(|captured| (rule, captured)))
}

fn unknown(line: &str) -> CommandOutput {
    CommandOutput::failure().set_stderr(format!("Unknown command: {line}"))
}
