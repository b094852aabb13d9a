use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "Evaluate arithmetic expressions",
    long_about = "tally evaluates arithmetic expressions with the grammar\n\
        '+ - * / ( )' and decimal literals.\n\n\
        EXAMPLES:\n\
        \n  tally eval '2 + 3 * 4'            Evaluate an expression\n\
        \n  echo '(2 + 3) * 4' | tally eval   Evaluate from stdin\n\
        \n  tally repl                        Start an interactive session"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print the result
    Eval(EvalArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate (reads from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
}

fn read_expression(args: &EvalArgs) -> Result<String, String> {
    if let Some(expr) = &args.expression {
        Ok(expr.clone())
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_eval(args: &EvalArgs) -> i32 {
    let expression = match read_expression(args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match tally::evaluate(&expression) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// Handle one REPL line. Returns the lines to print and whether to exit.
fn repl_line(line: &str) -> (Vec<String>, bool) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (Vec::new(), false);
    }
    match trimmed {
        ":help" => (
            vec!["commands: :help, :quit".to_string()],
            false,
        ),
        ":q" | ":quit" | ":exit" => (Vec::new(), true),
        _ => match tally::evaluate(trimmed) {
            Ok(value) => (vec![value.to_string()], false),
            Err(err) => (vec![format!("error: {err}")], false),
        },
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    loop {
        match rl.readline("tally> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = repl_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Eval(EvalArgs { expression: None })) {
        Command::Eval(args) => run_eval(&args),
        Command::Repl => run_repl(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
