use clap::{Parser as ClapParser, Subcommand};
use docpath::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "docpath")]
#[command(about = "DocPath - a path template language for selecting data out of JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a path template and print its parse tree
    Check {
        /// The path template to parse (reads from stdin if not provided)
        template: Option<String>,

        /// Print the tree as JSON instead of an outline
        #[arg(short, long)]
        json: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,
    },

    /// Dump a path template's token stream
    Tokens {
        /// The path template to tokenize (reads from stdin if not provided)
        template: Option<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            template,
            json,
            syntax_only,
        } => run_check(template, json, syntax_only),
        Commands::Tokens { template } => run_tokens(template),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_template(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            // text outside braces is significant, but the shell's final
            // newline is not part of the template
            if buffer.ends_with('\n') {
                buffer.pop();
            }
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(template: Option<String>, json: bool, syntax_only: bool) -> Result<(), CliError> {
    let options = CheckOptions {
        template: read_template(template)?,
        json,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Outline(text) => println!("{}", text),
        CheckResult::Json(value) => {
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
    }
    Ok(())
}

fn run_tokens(template: Option<String>) -> Result<(), CliError> {
    let template = read_template(template)?;

    for line in cli::execute_tokens(&template)? {
        println!("{}", line);
    }
    Ok(())
}
