//! Interpreter core.
//!
//! The [`Interp`] owns the command table and the call-frame stack and runs
//! the evaluation loop: it drives the [`Lexer`](crate::lexer::Lexer),
//! substitutes variables and nested `[…]` commands, joins adjacent token
//! values into argument words, and dispatches each completed statement
//! through the command table.
//!
//! Command outcomes are a [`Flow`] signal threaded through every level of
//! evaluation: errors unwind to the top-level caller, `while` consumes
//! Break/Continue, and procedure invocation converts Return to Normal.

use std::collections::HashMap;

use crate::lexer::{Lexer, Token};

// ── Control flow ──────────────────────────────────────────────────────────────

/// Non-error control-flow signal produced by commands and by
/// [`Interp::evaluate`].  Errors travel in the `Err` arm of [`CmdResult`]
/// together with their message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Normal completion; the frame's result register holds the value.
    Normal,
    /// Produced by `return`; consumed by procedure invocation.
    Return,
    /// Produced by `break`; consumed by `while`.
    Break,
    /// Produced by `continue`; consumed by `while`.
    Continue,
}

/// Outcome of a command callback or a script evaluation.
pub type CmdResult = Result<Flow, String>;

/// A native command implementation.  `args[0]` is the command name itself.
pub type NativeFn = fn(&mut Interp, &[String]) -> CmdResult;

// ── Commands ──────────────────────────────────────────────────────────────────

/// A registered command: a native built-in, or a user-defined procedure
/// owning its formal parameter list and body.
#[derive(Clone)]
pub enum Command {
    Native(NativeFn),
    Proc { params: Vec<String>, body: String },
}

// ── Call frames ───────────────────────────────────────────────────────────────

/// One scope: a variable map plus the result register holding the value of
/// the most recently completed statement.
#[derive(Debug, Default)]
struct Frame {
    vars: HashMap<String, String>,
    result: String,
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// Interpreter state: command table, scope stack, collected output.
///
/// Constructed once per session; the built-in commands are registered by
/// [`Interp::new`].  Single-threaded — evaluation is plain recursion, and
/// nesting depth is bounded only by the host call stack.
pub struct Interp {
    commands: HashMap<String, Command>,
    /// Scope stack; the root frame lives for the whole session, so the
    /// stack is never empty.
    frames: Vec<Frame>,
    /// Lines produced by `puts`, drained by the front end.
    pub output: Vec<String>,
    /// When set, trace every token and dispatched statement to stderr.
    pub debug: bool,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    pub fn new() -> Self {
        let mut interp = Interp {
            commands: HashMap::new(),
            frames: vec![Frame::default()],
            output: Vec::new(),
            debug: false,
        };
        crate::builtins::register_all(&mut interp);
        interp
    }

    fn frame(&self) -> &Frame {
        self.frames.last().expect("frame stack is never empty")
    }

    fn frame_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("frame stack is never empty")
    }

    /// The current frame's result register.
    pub fn result(&self) -> &str {
        &self.frame().result
    }

    pub fn set_result(&mut self, value: impl Into<String>) {
        self.frame_mut().result = value.into();
    }

    /// Look up a variable in the current frame.  Frames shadow completely:
    /// there is no lookup chain into the caller's scope.
    pub fn get_var(&self, name: &str) -> Option<&str> {
        self.frame().vars.get(name).map(String::as_str)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.frame_mut().vars.insert(name.into(), value.into());
    }

    /// Register a command.  A taken name is an error; the existing
    /// registration stays.
    pub fn register(&mut self, name: &str, command: Command) -> Result<(), String> {
        if self.commands.contains_key(name) {
            return Err(format!("Procedure '{name}' already exists!"));
        }
        self.commands.insert(name.to_owned(), command);
        Ok(())
    }

    /// Drain the lines `puts` has produced since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    // ── Evaluation loop ───────────────────────────────────────────────────────

    /// Evaluate a script.  Returns the first non-Normal flow encountered
    /// (which aborts the rest of the script), or Normal once end of input
    /// has been processed.
    pub fn evaluate(&mut self, code: &str) -> CmdResult {
        self.frame_mut().result.clear();

        let mut lexer = Lexer::new(code);
        let mut args: Vec<String> = Vec::new();
        // The word being assembled.  `None` until a token contributes, so
        // statements with trailing separators make no phantom argument.
        let mut word: Option<String> = None;

        loop {
            let token = lexer.next_token();
            if self.debug {
                eprintln!("minitcl: token {token:?}");
            }
            let end = token == Token::EndOfInput;

            match token {
                Token::Separator => {
                    if let Some(w) = word.take() {
                        args.push(w);
                    }
                }

                Token::EndOfStatement | Token::EndOfInput => {
                    if let Some(w) = word.take() {
                        args.push(w);
                    }
                    if !args.is_empty() {
                        let flow = self.dispatch(&args)?;
                        if flow != Flow::Normal {
                            return Ok(flow);
                        }
                        args.clear();
                    }
                    if end {
                        break;
                    }
                }

                Token::Variable(name) => {
                    let value = match self.get_var(&name) {
                        Some(v) => v.to_owned(),
                        None => return Err(format!("Could not locate variable '{name}'")),
                    };
                    if !value.is_empty() {
                        word.get_or_insert_with(String::new).push_str(&value);
                    }
                }

                Token::Substitution(body) => {
                    let flow = self.evaluate(&body)?;
                    if flow != Flow::Normal {
                        return Ok(flow);
                    }
                    let value = self.frame().result.clone();
                    if !value.is_empty() {
                        word.get_or_insert_with(String::new).push_str(&value);
                    }
                }

                // Explicit text contributes even when empty, so `""` and
                // `{}` become real (empty) arguments.
                Token::Literal(text) | Token::Error(text) => {
                    word.get_or_insert_with(String::new).push_str(&text);
                }
            }
        }

        Ok(Flow::Normal)
    }

    /// Look up `args[0]` and invoke it.
    fn dispatch(&mut self, args: &[String]) -> CmdResult {
        if self.debug {
            eprintln!("minitcl: exec {args:?}");
        }
        let name = &args[0];
        // Cloned out of the table: the callback needs the interpreter mutably.
        let command = match self.commands.get(name) {
            Some(c) => c.clone(),
            None => return Err(format!("Could not find procedure '{name}'")),
        };
        match command {
            Command::Native(f) => f(self, args),
            Command::Proc { params, body } => self.call_proc(name, &params, &body, args),
        }
    }

    /// Invoke a user-defined procedure: push a fresh frame, bind the formal
    /// parameters, run the body, copy the callee's result into the caller's
    /// register, pop.  The frame is popped on every exit path.
    fn call_proc(
        &mut self,
        name: &str,
        params: &[String],
        body: &str,
        args: &[String],
    ) -> CmdResult {
        if args.len() - 1 != params.len() {
            return Err(format!("Wrong number of arguments for '{name}'"));
        }

        let mut frame = Frame::default();
        for (param, value) in params.iter().zip(&args[1..]) {
            frame.vars.insert(param.clone(), value.clone());
        }
        self.frames.push(frame);

        let flow = self.evaluate(body);

        let result = self.frames.pop().map(|f| f.result).unwrap_or_default();
        self.frame_mut().result = result;

        match flow {
            // A completed body and an explicit `return` look the same to
            // the caller.
            Ok(Flow::Return) | Ok(Flow::Normal) => Ok(Flow::Normal),
            other => other,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
