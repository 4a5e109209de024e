use serde::{Deserialize, Serialize};

/// Target casing for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
}

impl CaseStyle {
    /// Human-readable name of the style ("camelCase", "kebab-case", "dot.case")
    pub fn label(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camelCase",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::Dot => "dot.case",
        }
    }
}

/// Error type for case conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The input was empty, or contained nothing but whitespace.
    #[error("input must be a non-empty string")]
    InvalidInput,
}

/// Result of converting a single input string, as exposed to callers that
/// want structured output (e.g. the CLI's `--json` mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOutput {
    pub input: String,
    pub style: CaseStyle,
    pub output: String,
}

/// Split an input string into its lowercased word tokens.
///
/// A boundary is any run of whitespace, underscores, or hyphens, plus the
/// implicit transition from a lowercase-or-digit character to an uppercase
/// one ("fooBar" splits into "foo", "bar"). Consecutive separators collapse,
/// and leading/trailing separators produce no tokens.
///
/// Uppercase runs stay in one token: "SCREEN_NAME" yields "screen", "name"
/// and "XMLParser" yields "xmlparser" (acronyms lose their casing).
pub fn tokenize(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower_or_digit = false;

    for ch in input.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower_or_digit = false;
        } else {
            if ch.is_uppercase() && prev_lower_or_digit && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            // to_lowercase can expand to more than one char for some scripts
            current.extend(ch.to_lowercase());
            prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Convert an input string into the requested casing.
///
/// The input is segmented with [`tokenize`] and reassembled per style:
/// camelCase keeps the first token lowercase and capitalizes the first
/// character of every following token; kebab-case and dot.case join the
/// lowercased tokens with `-` and `.` respectively.
///
/// Fails with [`CaseError::InvalidInput`] if the input is empty or
/// whitespace-only after trimming. No partial result is produced.
pub fn convert(input: &str, style: CaseStyle) -> Result<String, CaseError> {
    if input.trim().is_empty() {
        return Err(CaseError::InvalidInput);
    }

    let words = tokenize(input);

    let converted = match style {
        CaseStyle::Camel => {
            let mut result = String::with_capacity(input.len());
            for (idx, word) in words.iter().enumerate() {
                if idx == 0 {
                    result.push_str(word);
                } else {
                    result.push_str(&capitalize(word));
                }
            }
            result
        }
        CaseStyle::Kebab => words.join("-"),
        CaseStyle::Dot => words.join("."),
    };

    Ok(converted)
}

/// Convert a string to camelCase ("first name" -> "firstName")
pub fn to_camel_case(input: &str) -> Result<String, CaseError> {
    convert(input, CaseStyle::Camel)
}

/// Convert a string to kebab-case ("Hello World" -> "hello-world")
pub fn to_kebab_case(input: &str) -> Result<String, CaseError> {
    convert(input, CaseStyle::Kebab)
}

/// Convert a string to dot.case ("First-Name" -> "first.name")
pub fn to_dot_case(input: &str) -> Result<String, CaseError> {
    convert(input, CaseStyle::Dot)
}

/// Convert a batch of inputs to structured outputs
///
/// Fails on the first invalid input; callers never receive a partially
/// converted batch.
pub fn convert_all(inputs: &[String], style: CaseStyle) -> Result<Vec<ConvertOutput>, CaseError> {
    inputs
        .iter()
        .map(|input| {
            convert(input, style).map(|output| ConvertOutput {
                input: input.clone(),
                style,
                output,
            })
        })
        .collect()
}

/// Uppercase the first character of an already-lowercased token.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
