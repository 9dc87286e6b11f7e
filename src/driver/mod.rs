use crate::codegen;
use crate::error::CompileError;
use crate::ir::{IRBuilder, TempScope};
use crate::lexer;
use crate::parser::Parser;
use crate::semantic;

use tracing::{debug, info_span};

use std::fmt::Display;


/// Which grammar the front end accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Any number of `;`-terminated statements.
    #[default]
    Program,
    /// Exactly one statement and nothing after it.
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: Mode,
    pub temp_scope: TempScope,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub trace: String,
    pub error: Option<CompileError>,
}

impl Compilation {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl Mode {
    fn syntax_header(self) -> &'static str {
        match self {
            Mode::Program => "[Syntax Analysis Output (ASTs)]",
            Mode::Single => "[Syntax Analysis Output (AST)]",
        }
    }

    fn semantic_header(self) -> &'static str {
        match self {
            Mode::Program => "[Semantic Analysis Output (ASTs with Semantic Info)]",
            Mode::Single => "[Semantic Analysis Output (AST with Semantic Info)]",
        }
    }
}

struct Trace {
    lines: Vec<String>,
}

impl Trace {
    fn new(source: &str) -> Self {
        Trace {
            lines: vec!["Source Code:".to_string(), source.to_string()],
        }
    }

    fn section<T: Display>(&mut self, header: &str, items: impl IntoIterator<Item = T>) {
        self.lines.push(String::new());
        self.lines.push(header.to_string());
        self.lines.extend(items.into_iter().map(|item| item.to_string()));
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Runs the whole pipeline with default options and returns the trace.
pub fn compile(source: &str) -> String {
    compile_with(source, &Options::default()).trace
}

pub fn compile_with(source: &str, options: &Options) -> Compilation {
    let _span = info_span!("compile", mode = ?options.mode, scope = ?options.temp_scope).entered();

    let mut trace = Trace::new(source);
    let error = run(source, options, &mut trace).err();
    if let Some(error) = &error {
        debug!(code = error.code(), %error, "compilation stopped");
        trace.section("Error:", [error]);
    }

    Compilation {
        trace: trace.finish(),
        error,
    }
}

fn run(source: &str, options: &Options, trace: &mut Trace) -> Result<(), CompileError> {
    let tokens = lexer::tokenize(source)?;
    debug!(tokens = tokens.len(), "lexical analysis finished");
    trace.section("[Lexical Analysis Output]", &tokens);

    let mut parser = Parser::new(&tokens);
    let statements = match options.mode {
        Mode::Program => parser.parse_program()?,
        Mode::Single => vec![parser.parse_single()?],
    };
    debug!(statements = statements.len(), "syntax analysis finished");
    trace.section(options.mode.syntax_header(), &statements);

    let folded = semantic::analyze(&statements)?;
    debug!("semantic analysis finished");
    trace.section(options.mode.semantic_header(), &folded);

    let program = IRBuilder::new(options.temp_scope).generate_program(&folded);
    trace.section("[Intermediate Code]", [&program]);

    let target = codegen::generate(&program);
    debug!(instructions = target.instructions.len(), "target code emitted");
    trace.section("[Target Code Generation]", [&target]);

    Ok(())
}
