//! Schema-directed JSON parser CLI.
//!
//! Parses JSON input against a schema file and prints the decoded value,
//! or checks a schema for structural validity.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use schema_json::{ParseOptions, SchemaParser};

#[derive(Parser)]
#[command(name = "schema-json")]
#[command(about = "Schema-directed JSON parser", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON input against a schema and print the decoded value
    Parse {
        /// Path to the schema file (a JSON object)
        #[arg(long)]
        schema: PathBuf,

        /// Path to the JSON input; stdin when omitted
        input: Option<PathBuf>,

        /// Decode without applying schema constraints
        #[arg(long)]
        skip_validation: bool,
    },

    /// Check that a schema file is structurally valid
    CheckSchema {
        /// Path to the schema file (a JSON object)
        schema: PathBuf,
    },

    /// Run the built-in conformance corpus
    Corpus,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            schema,
            input,
            skip_validation,
        } => run_parse(&schema, input.as_deref(), skip_validation),
        Commands::CheckSchema { schema } => run_check_schema(&schema),
        Commands::Corpus => run_corpus(),
    }
}

fn run_parse(
    schema_path: &std::path::Path,
    input_path: Option<&std::path::Path>,
    skip_validation: bool,
) -> ExitCode {
    let parser = match load_parser(schema_path) {
        Ok(parser) => parser,
        Err(code) => return code,
    };

    let input = match input_path {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("error: cannot read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buf = Vec::new();
            if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let options = ParseOptions {
        skip_validation,
        ..ParseOptions::default()
    };

    match parser.parse_with_options(&input, &options) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", e.name(), e);
            ExitCode::FAILURE
        }
    }
}

fn run_check_schema(schema_path: &std::path::Path) -> ExitCode {
    match load_parser(schema_path) {
        Ok(_) => {
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

fn run_corpus() -> ExitCode {
    let results = schema_json::conformance::CorpusRunner::built_in().run_all();
    println!("{}", results.summary());
    for (id, result) in results.failures() {
        println!("FAIL {id}: {result:?}");
    }
    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_parser(schema_path: &std::path::Path) -> Result<SchemaParser, ExitCode> {
    let content = std::fs::read_to_string(schema_path).map_err(|e| {
        eprintln!("error: cannot read {}: {}", schema_path.display(), e);
        ExitCode::FAILURE
    })?;

    let schema_object: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
        eprintln!("error: schema file is not valid JSON: {}", e);
        ExitCode::FAILURE
    })?;

    SchemaParser::new(&schema_object).map_err(|e| {
        eprintln!("{}: {}", e.name(), e);
        ExitCode::FAILURE
    })
}
