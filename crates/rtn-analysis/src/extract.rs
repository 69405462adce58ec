//! # Text Extraction
//!
//! Uploaded documents arrive as bytes. Each [`TextExtractor`] is one
//! best-effort strategy reporting an explicit [`Extraction`] variant, and
//! [`ExtractorChain`] tries them in a fixed order:
//!
//! 1. [`PlainTextExtractor`]: the bytes are UTF-8 text.
//! 2. [`PdfTextExtractor`]: string operands of `Tj`/`TJ` operators in
//!    uncompressed PDF content streams.
//! 3. [`PrintableRunExtractor`]: runs of printable ASCII in any binary.
//!
//! The first `Extracted` or `Partial` result wins. Partial content counts as
//! success; only when every strategy reports `Unsupported` or `Failed` does
//! the chain return [`AnalysisError::UnsupportedInput`].

use crate::error::AnalysisError;

/// Result of one extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The whole document was read.
    Extracted(String),
    /// Some text was read; parts of the document may be missing.
    Partial(String),
    /// The strategy does not apply to this input.
    Unsupported,
    /// The strategy applies but produced nothing usable.
    Failed(String),
}

/// One strategy for turning document bytes into text.
pub trait TextExtractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, bytes: &[u8]) -> Extraction;
}

/// Text produced by an [`ExtractorChain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Name of the strategy that produced the text.
    pub strategy: &'static str,
    pub partial: bool,
}

// -- Strategies ---------------------------------------------------------------

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Accepts UTF-8 input that does not look binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, bytes: &[u8]) -> Extraction {
        if bytes.starts_with(PDF_MAGIC) {
            return Extraction::Unsupported;
        }
        let Ok(text) = std::str::from_utf8(bytes) else {
            return Extraction::Unsupported;
        };
        if text.contains('\0') {
            return Extraction::Unsupported;
        }
        if text.trim().is_empty() {
            return Extraction::Failed("document is empty".to_string());
        }
        Extraction::Extracted(text.to_string())
    }
}

/// Reads literal strings shown by `Tj` and `TJ` in uncompressed content
/// streams. Compressed streams are skipped, which makes the result partial.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn name(&self) -> &'static str {
        "pdf-text-operators"
    }

    fn extract(&self, bytes: &[u8]) -> Extraction {
        if !bytes.starts_with(PDF_MAGIC) {
            return Extraction::Unsupported;
        }
        let text = scan_text_operators(bytes);
        if text.trim().is_empty() {
            return Extraction::Failed("no uncompressed text operators found".to_string());
        }
        if contains(bytes, b"/FlateDecode") {
            Extraction::Partial(text)
        } else {
            Extraction::Extracted(text)
        }
    }
}

/// Collects runs of printable ASCII of at least `min_run` bytes that
/// contain a letter.
#[derive(Debug, Clone, Copy)]
pub struct PrintableRunExtractor {
    pub min_run: usize,
}

impl Default for PrintableRunExtractor {
    fn default() -> Self {
        Self { min_run: 4 }
    }
}

/// Below this many characters the scraped text is treated as noise.
const MIN_SCRAPED_CHARS: usize = 16;

impl TextExtractor for PrintableRunExtractor {
    fn name(&self) -> &'static str {
        "printable-runs"
    }

    fn extract(&self, bytes: &[u8]) -> Extraction {
        let runs: Vec<&str> = bytes
            .split(|b| !(b.is_ascii_graphic() || *b == b' '))
            .filter(|run| run.len() >= self.min_run && run.iter().any(u8::is_ascii_alphabetic))
            .filter_map(|run| std::str::from_utf8(run).ok())
            .map(str::trim)
            .filter(|run| !run.is_empty())
            .collect();
        let text = runs.join("\n");
        if text.len() < MIN_SCRAPED_CHARS {
            return Extraction::Failed("no readable text".to_string());
        }
        Extraction::Partial(text)
    }
}

// -- Chain --------------------------------------------------------------------

/// Ordered fallback over extraction strategies.
pub struct ExtractorChain {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorChain {
    pub fn new(extractors: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { extractors }
    }

    /// Names of the strategies in the order they are tried.
    pub fn strategies(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, AnalysisError> {
        let mut reasons = Vec::new();
        for extractor in &self.extractors {
            match extractor.extract(bytes) {
                Extraction::Extracted(text) => {
                    return Ok(ExtractedText {
                        text,
                        strategy: extractor.name(),
                        partial: false,
                    })
                }
                Extraction::Partial(text) => {
                    tracing::debug!(strategy = extractor.name(), "partial text extraction");
                    return Ok(ExtractedText {
                        text,
                        strategy: extractor.name(),
                        partial: true,
                    });
                }
                Extraction::Unsupported => {
                    reasons.push(format!("{}: not applicable", extractor.name()));
                }
                Extraction::Failed(reason) => {
                    reasons.push(format!("{}: {reason}", extractor.name()));
                }
            }
        }
        Err(AnalysisError::UnsupportedInput(if reasons.is_empty() {
            "no extraction strategies configured".to_string()
        } else {
            reasons.join("; ")
        }))
    }
}

impl Default for ExtractorChain {
    fn default() -> Self {
        Self::new(vec![
            Box::new(PlainTextExtractor),
            Box::new(PdfTextExtractor),
            Box::new(PrintableRunExtractor::default()),
        ])
    }
}

impl std::fmt::Debug for ExtractorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorChain")
            .field("strategies", &self.strategies())
            .finish()
    }
}

// -- PDF scanning -------------------------------------------------------------

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Walk the raw PDF bytes as a token stream, emitting the literal string
/// operands of text-showing operators.
fn scan_text_operators(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut pending: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'(' => {
                let (literal, next) = read_literal(bytes, i + 1);
                pending.push(literal);
                i = next;
            }
            b'%' => {
                // Comment to end of line.
                while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
                    i += 1;
                }
            }
            b'/' => {
                // Name operand.
                i += 1;
                while i < bytes.len() && is_regular(bytes[i]) {
                    i += 1;
                }
            }
            _ if b.is_ascii_alphabetic() || b == b'\'' || b == b'"' => {
                let start = i;
                i += 1;
                while i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'*') {
                    i += 1;
                }
                match &bytes[start..i] {
                    b"Tj" | b"TJ" | b"'" | b"\"" => {
                        for part in pending.drain(..) {
                            out.push_str(&part);
                        }
                    }
                    b"Td" | b"TD" | b"T*" | b"ET" => {
                        if !out.is_empty() && !out.ends_with('\n') {
                            out.push('\n');
                        }
                    }
                    _ => {}
                }
                pending.clear();
            }
            _ => i += 1,
        }
    }

    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_regular(b: u8) -> bool {
    !(b.is_ascii_whitespace() || b"()<>[]{}/%".contains(&b))
}

/// Read a literal string starting just after its opening parenthesis.
/// Returns the decoded text and the index after the closing parenthesis.
fn read_literal(bytes: &[u8], mut i: usize) -> (String, usize) {
    let mut depth = 1usize;
    let mut raw = Vec::new();

    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        match b {
            b'\\' => {
                let Some(&esc) = bytes.get(i) else { break };
                i += 1;
                match esc {
                    b'n' => raw.push(b'\n'),
                    b'r' => raw.push(b'\r'),
                    b't' => raw.push(b'\t'),
                    b'b' => raw.push(0x08),
                    b'f' => raw.push(0x0c),
                    b'0'..=b'7' => {
                        let mut value = u32::from(esc - b'0');
                        for _ in 0..2 {
                            match bytes.get(i) {
                                Some(&d @ b'0'..=b'7') => {
                                    value = value * 8 + u32::from(d - b'0');
                                    i += 1;
                                }
                                _ => break,
                            }
                        }
                        raw.push((value & 0xff) as u8);
                    }
                    // Line continuation.
                    b'\n' => {}
                    b'\r' => {
                        if bytes.get(i) == Some(&b'\n') {
                            i += 1;
                        }
                    }
                    other => raw.push(other),
                }
            }
            b'(' => {
                depth += 1;
                raw.push(b);
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                raw.push(b);
            }
            _ => raw.push(b),
        }
    }

    // PDFDocEncoding is close enough to Latin-1 for display text.
    (raw.iter().map(|&b| char::from(b)).collect(), i)
}
