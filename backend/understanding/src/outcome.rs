//! Response parser: pulls the score / warning / recommendation triple out of
//! the service's plain-text analysis.
//!
//! Each field is matched independently; a missing label leaves only that
//! field empty.

use once_cell::sync::Lazy;
use regex::Regex;
use safepost_core::AnalysisOutcome;

// --- Compiled regexes ---

// ASCII digits only; `\d` would also accept other Unicode numerals.
static SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"싫어하지 않을 확률:\s*([0-9]+)").unwrap()
});

static WARNING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"경고:\s*([^\r\n]*)").unwrap()
});

static RECOMMENDATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"추천:\s*([^\r\n]*)").unwrap()
});

/// Parse analysis text. Pure: the same input always yields the same outcome.
pub fn parse_analysis(text: &str) -> AnalysisOutcome {
    AnalysisOutcome {
        raw_text: text.to_string(),
        score: extract_score(text),
        warning: extract_line(text, &WARNING_RE),
        recommendation: extract_line(text, &RECOMMENDATION_RE),
    }
}

/// Score as a percentage. Values above 100 are treated as unparsed.
pub fn extract_score(text: &str) -> Option<u8> {
    let caps = SCORE_RE.captures(text)?;
    let value: u32 = caps[1].parse().ok()?;
    u8::try_from(value).ok().filter(|v| *v <= 100)
}

fn extract_line(text: &str, re: &Regex) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim().to_string())
}
