use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rpncalc::{EvalErr, Evaluator, MatchMode, OperandStack};
use std::process::ExitCode;

const OPERATORS_HELP: &str = "\
Supported operators are:
 - \"+\" (Addition)
 - \"-\" (Subtraction)
 - \"*\" (Multiplication)
 - \"/\" (Division)";

#[derive(Parser, Debug)]
#[command(name = "rpncalc")]
#[command(about = "Reverse Polish Notation (RPN) calculator")]
#[command(long_about = "Reverse Polish Notation (RPN) calculator\n\n\
    Provide a space-separated list of operands and operators on the command\n\
    line to perform a calculation.")]
#[command(after_help = OPERATORS_HELP)]
struct Cli {
    /// Enter terms one at a time at a prompt
    #[arg(short, long)]
    interactive: bool,

    /// Match any token containing an operator symbol, eg: "x+y" adds.
    /// Like all flags it goes before the tokens
    #[arg(long)]
    loose: bool,

    /// Operands and operators, eg: 5 1 2 + 4 * + 3 -
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

// Tokens are taken verbatim once they start, flags have to come first
const FLAGS: &[&str] = &["-i", "--interactive", "--loose", "-h", "--help"];

impl Cli {
    fn mode(&self) -> MatchMode {
        if self.loose { MatchMode::Contains } else { MatchMode::Exact }
    }

    fn stray_flag(&self) -> Option<&str> {
        self.tokens.iter().map(String::as_str).find(|t| FLAGS.contains(t))
    }
}

mod repl {
    use super::*;
    use rustyline::error::ReadlineError;

    const PROMPT: &str = "Enter an operand or operator: ";

    pub fn evalexpr(cx: &mut Evaluator, input: &str) -> u8 {
        match cx.process_string(input) {
            Err(e) => report(e),
            Ok(result) => {
                println!("{}", result);
                0
            }
        }
    }

    pub fn interactive(cx: &mut Evaluator) -> anyhow::Result<u8> {
        let mut rl = rustyline::DefaultEditor::new()?;
        let lines = std::iter::from_fn(|| {
            let line = rl.readline(PROMPT);
            if let Ok(ref input) = line {
                if let Err(e) = rl.add_history_entry(input.as_str()) {
                    tracing::debug!(error = ?e, "history not updated");
                }
            }
            Some(line)
        });
        session(cx, lines)
    }

    // Feed lines until an empty one or end of input, then take the result.
    // The first bad token ends the whole session.
    pub fn session<L>(cx: &mut Evaluator, lines: L) -> anyhow::Result<u8>
    where
        L: IntoIterator<Item = Result<String, ReadlineError>>,
    {
        for line in lines {
            let line = match line {
                Ok(line) => line,
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => return Ok(1),
                Err(e) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                break;
            }
            for token in line.split_whitespace() {
                if let Err(e) = cx.process_input(token) {
                    return Ok(report(e));
                }
            }
            println!("{}", cx.stack());
        }
        match cx.process_result() {
            Err(e) => Ok(report(e)),
            Ok(result) => {
                println!("\n{}", result);
                Ok(0)
            }
        }
    }

    fn report(e: EvalErr) -> u8 {
        tracing::debug!(error = ?e, "evaluation failed");
        println!("{}", e);
        1
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("RPNCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let mut cx = Evaluator::with_mode(OperandStack::new(), cli.mode());
    if cli.interactive {
        repl::interactive(&mut cx)
    } else if !cli.tokens.is_empty() {
        Ok(repl::evalexpr(&mut cx, &cli.tokens.join(" ")))
    } else {
        Cli::command().print_help()?;
        Ok(0)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    if let Some(flag) = cli.stray_flag() {
        Cli::command()
            .error(ErrorKind::UnknownArgument, format!("'{}' must come before the tokens", flag))
            .exit();
    }
    run(&cli).map(ExitCode::from)
}
