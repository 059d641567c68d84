use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use thompson_nfa::{Compiler, Matcher, TransitionTable};

const DEFAULT_PATTERN: &str = "(a|b)*(abcdef)";

fn main() -> ExitCode {
    let pattern = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATTERN.to_string());

    println!("Thompson NFA - Acceptance Demo");
    println!("==============================");
    println!("Expression: {}", pattern);

    let postfix = match thompson_nfa::postfix(&pattern) {
        Ok(postfix) => postfix,
        Err(e) => {
            eprintln!("Failed to parse expression: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Postfix:    {}", postfix);

    let nfa = match Compiler::new().compile(&postfix) {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("Failed to compile: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let table = TransitionTable::new(&nfa);
    println!("Start state: {}", nfa.start());
    println!("Accepting state: {}", nfa.accept());
    println!();
    print!("{}", table);
    println!();

    match test_candidates(&Matcher::with_table(&nfa, &table)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read candidates line by line until end of input, reporting each verdict.
fn test_candidates(matcher: &Matcher<'_>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "Candidate string: ")?;
        stdout.flush()?;

        let candidate = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let verdict = if matcher.is_match(&candidate) { "Accept!" } else { "Reject!" };
        writeln!(stdout, "{}\t{}", candidate, verdict)?;
    }

    writeln!(stdout)?;
    Ok(())
}
