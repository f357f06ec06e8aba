//! Line-oriented read-eval loop.
//!
//! Lines are accumulated until their `{`/`[` nesting balances, then the
//! whole buffer goes to the interpreter as one statement group.  On a TTY
//! the loop prompts with `> ` (or `| ` while a statement is still open);
//! piped input runs the same loop silently, which is how script-over-stdin
//! batch mode works.

use std::io::{self, BufRead, Write};

use crate::interp::{CmdResult, Interp};

/// True when every `{`/`[` in `src` has been closed, i.e. the buffered
/// input forms a complete statement group.  Counting is whole-buffer and
/// quote-blind; surplus closers are left for the evaluator to complain
/// about.
pub fn is_complete(src: &str) -> bool {
    let mut depth = 0i32;
    for ch in src.chars() {
        match ch {
            '{' | '[' => depth += 1,
            '}' | ']' => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}

/// Print the output an evaluation collected, then its error if it failed.
pub fn report(interp: &mut Interp, outcome: CmdResult) {
    for line in interp.take_output() {
        println!("{line}");
    }
    if let Err(message) = outcome {
        println!("Error: {message}");
    }
}

/// Run the read-eval loop over stdin until end of input.
pub fn run(interp: &mut Interp) -> io::Result<()> {
    let interactive = is_tty();
    let stdin = io::stdin();
    let mut pending = String::new();

    loop {
        if interactive {
            prompt(!pending.is_empty())?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        pending.push_str(line.trim_end_matches(['\n', '\r']));

        if is_complete(&pending) {
            let code = std::mem::take(&mut pending);
            if !code.trim().is_empty() {
                let outcome = interp.evaluate(&code);
                report(interp, outcome);
            }
        } else {
            // Statement still open: keep the line break and read on.
            pending.push('\n');
        }
    }
    Ok(())
}

fn prompt(continuation: bool) -> io::Result<()> {
    let mut out = io::stdout();
    out.write_all(if continuation { b"| " } else { b"> " })?;
    out.flush()
}

/// Whether stdin and stdout are both terminals.
fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 && libc::isatty(libc::STDOUT_FILENO) != 0 }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
