use minitcl::cli;
use minitcl::repl;
use minitcl::Interp;

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("minitcl: {e}");
            eprintln!("Usage: minitcl [-d] [-q] [-n] [-c <cmd>] [script]");
            std::process::exit(1);
        }
    };

    let mut interp = Interp::new();
    interp.debug = args.debug;

    // ── User rc file (skipped with -n) ────────────────────────────────────────
    if !args.no_rc {
        if let Some(path) = cli::find_rc_file() {
            match std::fs::read_to_string(&path) {
                Ok(src) => {
                    let outcome = interp.evaluate(&src);
                    repl::report(&mut interp, outcome);
                }
                Err(e) => eprintln!("minitcl: warning: {}: {e}", path.display()),
            }
        }
    }

    // ── -c <cmd> ──────────────────────────────────────────────────────────────
    if let Some(cmd) = &args.command {
        let outcome = interp.evaluate(cmd);
        let failed = outcome.is_err();
        repl::report(&mut interp, outcome);
        if failed {
            std::process::exit(1);
        }
    }

    // ── Script file batch mode ────────────────────────────────────────────────
    if let Some(script) = &args.script {
        let src = match std::fs::read_to_string(script) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("minitcl: {}: {e}", script.display());
                std::process::exit(1);
            }
        };
        let outcome = interp.evaluate(&src);
        let failed = outcome.is_err();
        repl::report(&mut interp, outcome);
        std::process::exit(if failed { 1 } else { 0 });
    }

    // -c alone means "run the command and exit".
    if args.command.is_some() {
        return;
    }

    // ── Interactive / stdin batch loop ────────────────────────────────────────
    if !args.quiet {
        println!("minitcl {}", env!("CARGO_PKG_VERSION"));
    }
    if let Err(e) = repl::run(&mut interp) {
        eprintln!("minitcl: {e}");
        std::process::exit(1);
    }
}
