//! cimc-drv - Compiler driver.
//!
//! Orchestrates the four-pass pipeline over a single source file:
//!
//! ```text
//! source text
//!      |
//!      v
//! [Lexer] --> tokens
//!      |
//!      v
//! [Parser] --> AST
//!      |
//!      v
//! [Scope analyzer] --> scope tree
//!      |
//!      v
//! [Type checker] --> annotated AST
//! ```
//!
//! Passes run in strict order and the pipeline stops at the first failure.
//! On success the annotated AST is dumped to stdout; every diagnostic goes
//! to stderr. Exit code 0 on success, 1 on any error.

pub mod dump;

pub use dump::dump_program;

use anyhow::Context;
use cimc_lex::{LexError, Lexer};
use cimc_par::{ParseError, Parser, Program};
use cimc_sem::{ScopeAnalyzer, ScopeError, ScopeTree, TypeChecker, TypeError};
use cimc_util::{Diagnostic, Span};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Any of the four pass failures, kept distinct so the driver can name the
/// category in its diagnostic.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

impl CompileError {
    /// The user-facing category name.
    pub fn category(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "lex error",
            CompileError::Parse(_) => "parse error",
            CompileError::Scope(_) => "scope error",
            CompileError::Type(_) => "type error",
        }
    }

    /// Where the fault was detected. Only lexical errors know a column.
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(err) => Span::new(err.line(), err.column()),
            CompileError::Parse(err) => Span::line(err.line),
            CompileError::Scope(err) => Span::line(err.line),
            CompileError::Type(err) => Span::line(err.line),
        }
    }
}

/// The result of a successful compilation.
pub struct Compilation {
    /// Fully annotated AST.
    pub program: Program,
    /// Scope tree built by the analyzer and resolved by the checker.
    pub scopes: ScopeTree,
    /// Non-fatal findings from the lexer.
    pub warnings: Vec<Diagnostic>,
}

/// Runs all four passes over `source`.
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;
    let warnings = lexer.take_warnings();

    let mut program = Parser::new(tokens).parse_program()?;

    let mut scopes = ScopeAnalyzer::new().analyze(&program)?;

    TypeChecker::new(&mut scopes).check(&mut program)?;

    Ok(Compilation {
        program,
        scopes,
        warnings,
    })
}

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the source file.
    pub input: PathBuf,
}

impl Config {
    /// Parses command-line arguments: exactly one positional argument, the
    /// source file path.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let input = args.next().context("usage: cimc <source-file>")?;
        if args.next().is_some() {
            anyhow::bail!("usage: cimc <source-file>");
        }
        Ok(Self {
            input: PathBuf::from(input),
        })
    }
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("could not read file: {}", path.display()))
}

/// Runs the driver and returns the process exit code.
pub fn run(config: &Config) -> i32 {
    let source = match read_source(&config.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {:#}", err);
            return 1;
        },
    };

    match compile(&source) {
        Ok(compilation) => {
            for warning in &compilation.warnings {
                eprintln!("{}", warning);
            }
            print!("{}", dump_program(&compilation.program));
            0
        },
        Err(err) => {
            eprintln!("{}: {} ({})", err.category(), err, err.span());
            1
        },
    }
}
