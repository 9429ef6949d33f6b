//! CLI over the plan pipeline: load a YAML plan description, validate it,
//! optionally render it as SQL.
//!
//! Exit codes: 0 on success, 1 on validation errors, 2 on file or YAML
//! problems.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use relint::parser::{parse_file, plan_from_description};
use relint::renderer::render_sql;
use relint::validator::{validate, ValidationResult};
use relint::QueryPlan;

#[derive(Parser)]
#[command(name = "relint")]
#[command(about = "Validate and render relational query plans")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a plan description for structural issues
    Validate {
        /// Path to the YAML plan description
        file: String,

        /// Emit the issue list as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Validate a plan description and print its SQL
    Render {
        /// Path to the YAML plan description
        file: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    match args.command {
        Commands::Validate { file, json } => run_validate(&file, json),
        Commands::Render { file } => run_render(&file),
    }
}

fn load_plan(file: &str) -> Result<QueryPlan, ExitCode> {
    let desc = match parse_file(file) {
        Ok(desc) => desc,
        Err(err) => {
            eprintln!("{}", err);
            return Err(ExitCode::from(2));
        }
    };
    plan_from_description(&desc).map_err(|err| {
        eprintln!("{}", err);
        ExitCode::from(2)
    })
}

fn report_issues(result: &ValidationResult) {
    for issue in &result.issues {
        eprintln!("{}", issue);
    }
}

fn run_validate(file: &str, json: bool) -> ExitCode {
    let plan = match load_plan(file) {
        Ok(plan) => plan,
        Err(code) => return code,
    };
    let result = validate(&plan);

    if json {
        match serde_json::to_string_pretty(&result.issues) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::from(2);
            }
        }
    } else {
        report_issues(&result);
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_render(file: &str) -> ExitCode {
    let plan = match load_plan(file) {
        Ok(plan) => plan,
        Err(code) => return code,
    };
    let result = validate(&plan);
    report_issues(&result);
    if !result.is_ok() {
        return ExitCode::FAILURE;
    }

    match render_sql(&plan) {
        Ok(sql) => {
            println!("{}", sql);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
