//! Single-pass document scanner.
//!
//! Walks preprocessed text with a byte cursor, dispatching labels,
//! directives and instruction lines. Instruction lines go through the
//! matcher; symbol references are resolved after the whole document has
//! been read.

use std::sync::OnceLock;

use log::{debug, error, trace};
use tricore_tables::{lookup_directive, validate_tables, DirectiveKind, TableError};

use crate::config::LintConfig;
use crate::errors::{DiagnosticKind, DiagnosticReport};
use crate::matcher::check_instruction;
use crate::preprocess::preprocess;
use crate::symbols::SymbolTable;

const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

const fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || matches!(byte, b'.' | b'_' | b'$')
}

const fn is_name_part(byte: u8) -> bool {
    is_name_start(byte) || byte.is_ascii_digit()
}

/// Validates the static tables once per process.
fn tables_consistent() -> bool {
    static VALIDATION: OnceLock<Result<(), TableError>> = OnceLock::new();
    let validation = VALIDATION.get_or_init(|| {
        let result = validate_tables();
        if let Err(table_error) = &result {
            error!("opcode tables are inconsistent: {table_error}");
        }
        result
    });
    validation.is_ok()
}

/// Scan position and per-document state.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    config: LintConfig,
    symbols: SymbolTable,
    report: DiagnosticReport,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, config: LintConfig) -> Self {
        Self {
            text,
            pos: 0,
            line: 0,
            config,
            symbols: SymbolTable::new(),
            report: DiagnosticReport::new(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_blanks(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let text = self.text;
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.pos += 1;
        }
        &text[start..self.pos]
    }

    /// Consumes through the next line feed (or to the end) and counts the line.
    fn skip_rest_of_line(&mut self) {
        match self.text[self.pos..].find('\n') {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.text.len(),
        }
        self.line += 1;
    }

    fn run(mut self) -> DiagnosticReport {
        while self.pos < self.text.len() {
            self.skip_blanks();
            let Some(byte) = self.peek() else {
                break;
            };

            if is_name_start(byte) {
                self.name_statement();
            } else if byte == b'\n' {
                self.pos += 1;
                self.line += 1;
            } else if !self.local_label() {
                self.junk();
            }
        }
        self.resolve_symbols()
    }

    fn name_statement(&mut self) {
        let start = self.pos;
        let name = self.take_while(is_name_part);

        if self.peek() == Some(b':') {
            trace!("line {}: label {name}", self.line);
            self.symbols.define(name);
            self.pos += 1;
            self.skip_blanks();
        } else if let Some(keyword) = name.strip_prefix('.') {
            if self.peek() == Some(b' ') {
                self.pos += 1;
            }
            self.directive(keyword);
        } else {
            self.instruction_line(start);
        }
    }

    fn directive(&mut self, keyword: &str) {
        let kind = lookup_directive(keyword, self.config.dialect);
        trace!("line {}: .{keyword} -> {kind:?}", self.line);
        match kind {
            Some(DirectiveKind::Ignore) => {}
            Some(DirectiveKind::SingleSymbol) => {
                let name = self.symbol_name();
                self.symbols.define(name);
            }
            Some(DirectiveKind::MultiSymbol) => loop {
                let name = self.symbol_name();
                self.symbols.define(name);
                if self.peek() != Some(b',') {
                    break;
                }
                self.pos += 1;
            },
            Some(DirectiveKind::ExternSymbol) => {
                let name = self.symbol_name();
                self.symbols.declare_external(name);
            }
            None => self.report.report(self.line, DiagnosticKind::UnknownPseudoOp),
        }
        self.skip_rest_of_line();
    }

    fn symbol_name(&mut self) -> &'a str {
        let name = self.take_while(is_name_part);
        if name.is_empty() {
            self.report.report(self.line, DiagnosticKind::ExpectedSymbolName);
        }
        name
    }

    fn instruction_line(&mut self, start: usize) {
        let end = self.text[start..]
            .find('\n')
            .map_or(self.text.len(), |offset| start + offset);
        let line = self.text[start..end].trim_end();

        match check_instruction(line) {
            Ok(checked) => {
                for label in &checked.instruction.labels {
                    self.symbols.reference(self.line, label);
                }
            }
            Err(line_error) => {
                trace!("line {}: {line_error}", self.line);
                self.report.report(self.line, line_error);
            }
        }

        self.pos = (end + 1).min(self.text.len());
        self.line += 1;
    }

    /// Defines `123:` or `123$:`. Returns false if the digits are not a label.
    fn local_label(&mut self) -> bool {
        let digits = self.text[self.pos..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return false;
        }
        let consumed = match (self.peek_at(digits), self.peek_at(digits + 1)) {
            (Some(b':'), _) => digits + 1,
            (Some(b'$'), Some(b':')) => digits + 2,
            _ => return false,
        };
        let text = self.text;
        let number = text[self.pos..self.pos + digits].trim_start_matches('0');
        let name = if number.is_empty() { "0" } else { number };
        trace!("line {}: local label {name}", self.line);
        self.symbols.define(name);
        self.pos += consumed;
        true
    }

    fn junk(&mut self) {
        if let Some(junk) = self.text[self.pos..].chars().next() {
            self.report.report(self.line, DiagnosticKind::Junk(junk));
        }
        self.skip_rest_of_line();
    }

    fn resolve_symbols(mut self) -> DiagnosticReport {
        for reference in self.symbols.unresolved() {
            self.report.report(
                reference.line,
                DiagnosticKind::UnknownSymbol {
                    name: reference.name.clone(),
                },
            );
        }
        debug!(
            "scanned {} bytes, {} lines: {} symbols defined, {} diagnostics",
            self.text.len(),
            self.line,
            self.symbols.defined_count(),
            self.report.len()
        );
        self.report
    }
}

/// Scans already-preprocessed text and returns its diagnostics.
#[must_use]
pub fn scan_document(text: &str, config: &LintConfig) -> DiagnosticReport {
    let consistent = tables_consistent();
    debug_assert!(consistent, "opcode tables failed validation");
    Scanner::new(text, *config).run()
}

/// Preprocesses and scans raw assembly source.
///
/// Line numbers in the returned diagnostics are zero-based and match the
/// raw source.
#[must_use]
pub fn check_document(source: &str, config: &LintConfig) -> DiagnosticReport {
    scan_document(&preprocess(source), config)
}
