// WASM bindings for the spell checker.
//
// Provides a `WasmSpeller` class exported via wasm-bindgen that wraps
// `SpellHandle`. Array results are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Text arriving from JavaScript is UTF-8, so reported columns count UTF-8
// bytes, not UTF-16 code units.
//
// Usage from JavaScript:
//
//   const speller = new WasmSpeller(wordListBytes);
//   speller.spell("Paris");               // => true
//   speller.spellResult("paris");         // => "CapitalizationError"
//   speller.misspellings("I saw Aplpe"); // => [{ line: 1, col: 7, word: "Aplpe" }, ...]
//   speller.tokens("(Hello) world");      // => [{ text: "(Hello)", line: 1, col: 1 }, ...]
//   speller.dictionarySize();             // => 2

use serde::Serialize;
use wasm_bindgen::prelude::*;

use spell_core::enums::SpellResult;
use spell_engine::handle::SpellHandle;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a misspelled word.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMisspelling {
    line: usize,
    col: usize,
    word: String,
}

/// Serializable representation of a raw token.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    text: String,
    line: usize,
    col: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn spell_result_to_string(result: SpellResult) -> String {
    match result {
        SpellResult::Ok => "Ok".to_string(),
        SpellResult::CapitalizationError => "CapitalizationError".to_string(),
        SpellResult::Failed => "Failed".to_string(),
    }
}

fn misspellings_of(handle: &SpellHandle, text: &str) -> Vec<JsMisspelling> {
    handle
        .misspellings(text.as_bytes())
        .map(|m| JsMisspelling {
            line: m.line,
            col: m.col,
            word: m.word_lossy().into_owned(),
        })
        .collect()
}

fn tokens_of(handle: &SpellHandle, text: &str) -> Vec<JsToken> {
    handle
        .tokens(text.as_bytes())
        .map(|t| JsToken {
            text: String::from_utf8_lossy(t.text).into_owned(),
            line: t.line,
            col: t.col,
        })
        .collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmSpeller
// ============================================================================

/// Dictionary spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpeller {
    handle: SpellHandle,
}

#[wasm_bindgen]
impl WasmSpeller {
    /// Create a speller from the raw contents of a word list, one word per
    /// line.
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary: &[u8]) -> WasmSpeller {
        WasmSpeller {
            handle: SpellHandle::from_bytes(dictionary),
        }
    }

    /// Check whether a word is correctly spelled. No punctuation is trimmed.
    pub fn spell(&self, word: &str) -> bool {
        self.handle.spell(word)
    }

    /// Check a word and name the outcome: "Ok", "CapitalizationError" or
    /// "Failed".
    #[wasm_bindgen(js_name = "spellResult")]
    pub fn spell_result(&self, word: &str) -> String {
        spell_result_to_string(self.handle.spell_result(word.as_bytes()))
    }

    /// Find misspelled words in text.
    ///
    /// Returns a JavaScript array of objects with fields `line`, `col` and
    /// `word`, in text order.
    pub fn misspellings(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&misspellings_of(&self.handle, text))
    }

    /// Split text into raw whitespace-separated tokens.
    ///
    /// Returns a JavaScript array of objects with fields `text`, `line` and
    /// `col`. Punctuation is not trimmed.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&tokens_of(&self.handle, text))
    }

    /// Number of words in the dictionary.
    #[wasm_bindgen(js_name = "dictionarySize")]
    pub fn dictionary_size(&self) -> usize {
        self.handle.dictionary().len()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        SpellHandle::version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}
}
