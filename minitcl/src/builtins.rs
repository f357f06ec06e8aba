//! Built-in commands, registered at interpreter construction.
//!
//! Each built-in is an ordinary [`NativeFn`]; the control-flow constructs
//! (`if`, `while`, `proc`, `return`, `break`, `continue`) are commands like
//! any other — they just evaluate their body arguments recursively and
//! interpret the resulting [`Flow`] signal.

use crate::expr::{eval_expr, format_double};
use crate::interp::{CmdResult, Command, Flow, Interp, NativeFn};

/// Register every built-in command.  Called from [`Interp::new`].
pub fn register_all(interp: &mut Interp) {
    for (name, f) in [
        ("set", cmd_set as NativeFn),
        ("puts", cmd_puts),
        ("expr", cmd_expr),
        ("if", cmd_if),
        ("while", cmd_while),
        ("proc", cmd_proc),
        ("return", cmd_return),
        ("break", cmd_break),
        ("continue", cmd_continue),
        ("error", cmd_error),
    ] {
        interp
            .register(name, Command::Native(f))
            .expect("built-in names are distinct");
    }
}

fn arity(name: &str) -> String {
    format!("Wrong number of arguments for '{name}'")
}

// ── Variables ─────────────────────────────────────────────────────────────────

/// `set name value` assigns; `set name` reads the value back.
fn cmd_set(interp: &mut Interp, args: &[String]) -> CmdResult {
    match args.len() {
        3 => {
            interp.set_var(args[1].clone(), args[2].clone());
            interp.set_result(args[2].clone());
            Ok(Flow::Normal)
        }
        2 => {
            let value = interp
                .get_var(&args[1])
                .ok_or_else(|| format!("Could not locate variable '{}'", args[1]))?
                .to_owned();
            interp.set_result(value);
            Ok(Flow::Normal)
        }
        _ => Err(arity("set")),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// `puts word…` — collect one output line for the front end.
fn cmd_puts(interp: &mut Interp, args: &[String]) -> CmdResult {
    interp.output.push(args[1..].join(" "));
    interp.set_result("");
    Ok(Flow::Normal)
}

// ── Expressions ───────────────────────────────────────────────────────────────

/// `expr word…` — the words are re-joined with spaces and evaluated as one
/// expression.
fn cmd_expr(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() < 2 {
        return Err(arity("expr"));
    }
    let text = args[1..].join(" ");
    let value = eval_expr(interp, &text)?;
    interp.set_result(format_double(value));
    Ok(Flow::Normal)
}

// ── Control flow ──────────────────────────────────────────────────────────────

/// `if cond then-body ?else-body?` — a condition evaluating above zero
/// selects the then branch; exactly one branch runs.
fn cmd_if(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 3 && args.len() != 4 {
        return Err(arity("if"));
    }
    let cond = eval_expr(interp, &args[1])?;
    if cond > 0.0 {
        interp.evaluate(&args[2])
    } else if let Some(else_body) = args.get(3) {
        interp.evaluate(else_body)
    } else {
        interp.set_result("");
        Ok(Flow::Normal)
    }
}

/// `while cond body` — the condition text is re-evaluated before every
/// iteration.  Break ends the loop without another condition check;
/// Continue goes straight back to it; Return and errors unwind further.
fn cmd_while(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 3 {
        return Err(arity("while"));
    }
    loop {
        let cond = eval_expr(interp, &args[1])?;
        if cond <= 0.0 {
            break;
        }
        match interp.evaluate(&args[2])? {
            Flow::Normal | Flow::Continue => {}
            Flow::Break => break,
            Flow::Return => return Ok(Flow::Return),
        }
    }
    interp.set_result("");
    Ok(Flow::Normal)
}

/// `proc name params body` — register a user-defined procedure.  The params
/// word is split on whitespace into the formal parameter names.
fn cmd_proc(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 4 {
        return Err(arity("proc"));
    }
    let params = args[2].split_whitespace().map(str::to_owned).collect();
    interp.register(&args[1], Command::Proc { params, body: args[3].clone() })?;
    interp.set_result("");
    Ok(Flow::Normal)
}

/// `return ?value?` — store the value in the result register and unwind to
/// the enclosing procedure invocation (or the top level).
fn cmd_return(interp: &mut Interp, args: &[String]) -> CmdResult {
    match args.len() {
        1 => interp.set_result(""),
        2 => interp.set_result(args[1].clone()),
        _ => return Err(arity("return")),
    }
    Ok(Flow::Return)
}

fn cmd_break(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 1 {
        return Err(arity("break"));
    }
    interp.set_result("");
    Ok(Flow::Break)
}

fn cmd_continue(interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 1 {
        return Err(arity("continue"));
    }
    interp.set_result("");
    Ok(Flow::Continue)
}

/// `error message` — raise a user error.
fn cmd_error(_interp: &mut Interp, args: &[String]) -> CmdResult {
    if args.len() != 2 {
        return Err(arity("error"));
    }
    Err(args[1].clone())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
