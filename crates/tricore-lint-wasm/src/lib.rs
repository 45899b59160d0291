use serde::{Deserialize, Serialize};
use tricore_lint::{check_document, check_instruction, parse_dialect, preprocess, LintConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format!($($t)*)))
}

/// JS-compatible diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasmDiagnostic {
    pub line: usize,
    pub message: String,
}

/// JS-compatible result of matching a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WasmMatch {
    Matched {
        name: String,
        args: String,
        format: String,
        #[serde(rename = "formatId")]
        format_id: u8,
        #[serde(rename = "is32bit")]
        is_32bit: bool,
    },
    Failed {
        error: String,
    },
}

#[wasm_bindgen]
pub struct WasmLinter {
    config: LintConfig,
}

impl WasmLinter {
    const fn with_config(config: LintConfig) -> Self {
        Self { config }
    }

    fn diagnostics(&self, text: &str) -> Vec<WasmDiagnostic> {
        check_document(text, &self.config)
            .into_iter()
            .map(|diagnostic| WasmDiagnostic {
                line: diagnostic.line,
                message: diagnostic.message(),
            })
            .collect()
    }

    fn match_text(text: &str) -> WasmMatch {
        let normalized = preprocess(text);
        match check_instruction(normalized.trim()) {
            Ok(checked) => WasmMatch::Matched {
                name: checked.variant.name.to_string(),
                args: checked.variant.args.to_string(),
                format: checked.variant.format.name().to_string(),
                format_id: checked.variant.format_id(),
                is_32bit: checked.variant.is_32bit(),
            },
            Err(e) => WasmMatch::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[wasm_bindgen]
impl WasmLinter {
    /// Creates a linter for the given dialect (`gnu` when omitted).
    ///
    /// # Errors
    ///
    /// Throws if the dialect name is not `gnu` or `tasking`.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(dialect: Option<String>) -> Result<Self, JsError> {
        console_error_panic_hook::set_once();
        let config = match dialect {
            Some(name) => LintConfig::with_dialect(
                parse_dialect(&name).map_err(|e| JsError::new(&e.to_string()))?,
            ),
            None => LintConfig::default(),
        };
        Ok(Self::with_config(config))
    }

    /// Checks a whole document.
    /// Returns an array of `{ line, message }` objects.
    ///
    /// # Errors
    ///
    /// Throws if the diagnostics cannot be converted to JS values.
    pub fn check(&self, text: &str) -> Result<JsValue, JsValue> {
        let diagnostics = self.diagnostics(text);
        console_log!(
            "Checked {} bytes ({} dialect): {} diagnostic(s)",
            text.len(),
            self.config.dialect.name(),
            diagnostics.len()
        );
        Ok(serde_wasm_bindgen::to_value(&diagnostics)?)
    }

    /// Matches one instruction line against the opcode table.
    /// Returns `{ name, args, format, formatId, is32bit }` or `{ error }`.
    ///
    /// # Errors
    ///
    /// Throws if the result cannot be converted to a JS value.
    #[wasm_bindgen(js_name = matchLine)]
    #[allow(clippy::unused_self)]
    pub fn match_line(&self, text: &str) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&Self::match_text(text))?)
    }
}
