use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, LevelFilter};
use shunting_yard::converter::convert_with;
use shunting_yard::converter::operator::OperatorDescriptor;
use shunting_yard::converter::symbols::{Configuration, FunctionDescriptor};
use std::io;
use std::io::{BufRead, Write};

const PROMPT: &str = "input> ";
const OUTPUT_LABEL: &str = "output: ";
const HELP: &str = "possible commands: help, quit";
const MISTAKE_IN_EXPRESSION: &str = "Mistake in expression";

/// Converts infix expressions into postfix notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert. Starts an interactive session when left out
    #[clap(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Characters numbers are made of
    #[clap(long)]
    number_chars: Option<String>,

    /// A function as name:arity, e.g. sin:1. Replaces the default functions
    #[clap(long = "function", value_name = "DESCRIPTION")]
    functions: Vec<FunctionDescriptor>,

    /// An operator as name:arity:l|r:precedence, e.g. +:2:l:1. Replaces the default operators
    #[clap(long = "operator", value_name = "DESCRIPTION")]
    operators: Vec<OperatorDescriptor>,

    /// A literal separating function arguments. Replaces the default dividers
    #[clap(long = "divider", value_name = "LITERAL")]
    argument_dividers: Vec<String>,

    /// An opening bracket literal. Replaces the default opening brackets
    #[clap(long = "opening-bracket", value_name = "LITERAL")]
    opening_brackets: Vec<String>,

    /// A closing bracket literal. Replaces the default closing brackets
    #[clap(long = "closing-bracket", value_name = "LITERAL")]
    closing_brackets: Vec<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(
            arguments
                .verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    let configuration = build_configuration(&arguments)?;
    debug!("Using {:?}", configuration);

    match &arguments.expression {
        Some(expression) => {
            let postfix =
                convert_with(expression, &configuration).context(MISTAKE_IN_EXPRESSION)?;
            println!("{}", postfix);
            Ok(())
        }
        None => run_interactive(&configuration, io::stdin().lock(), &mut io::stdout()),
    }
}

/// Starts from the default symbol table and replaces every part given on the command line.
fn build_configuration(arguments: &Arguments) -> Result<Configuration> {
    let defaults = Configuration::default();
    let number_chars = arguments
        .number_chars
        .clone()
        .unwrap_or_else(|| defaults.number_chars().to_string());

    Configuration::new(
        number_chars,
        given_or_default(&arguments.functions, defaults.functions()),
        given_or_default(&arguments.argument_dividers, defaults.argument_dividers()),
        given_or_default(&arguments.operators, defaults.operators()),
        given_or_default(&arguments.opening_brackets, defaults.opening_brackets()),
        given_or_default(&arguments.closing_brackets, defaults.closing_brackets()),
    )
    .context("Invalid symbol table")
}

fn given_or_default<T: Clone>(given: &[T], default: &[T]) -> Vec<T> {
    if given.is_empty() {
        default.to_vec()
    } else {
        given.to_vec()
    }
}

/// Reads expressions line by line until `quit` or the end of input.
fn run_interactive(
    configuration: &Configuration,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("Failed to read from standard input")?,
            None => break,
        };
        match line.trim() {
            "help" => writeln!(output, "{}", HELP)?,
            "quit" => break,
            _ => writeln!(output, "{}{}", OUTPUT_LABEL, render(&line, configuration))?,
        }
    }
    Ok(())
}

/// The postfix expression, or the reason it could not be converted.
fn render(expression: &str, configuration: &Configuration) -> String {
    match convert_with(expression, configuration).context(MISTAKE_IN_EXPRESSION) {
        Ok(postfix) => postfix,
        Err(error) => format!("{:#}", error),
    }
}
