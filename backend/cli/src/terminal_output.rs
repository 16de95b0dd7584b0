//! Terminal output utilities: ANSI formatting, status notes, report rendering.
//!
//! Notes go to stderr; stdout carries only the report so it can be piped.

use safepost_core::{AnalysisMode, AnalysisReport, FALLBACK_MESSAGE};

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

pub fn note_info(msg: &str) {
    if supports_color() {
        eprintln!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        eprintln!("INFO: {msg}");
    }
}

pub fn note_warn(msg: &str) {
    if supports_color() {
        eprintln!("{YELLOW}{BOLD}⚠{RESET} {msg}");
    } else {
        eprintln!("WARN: {msg}");
    }
}

pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

pub fn note_success(msg: &str) {
    if supports_color() {
        eprintln!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        eprintln!("OK: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render a report as a heading followed by its display text.
pub fn render_report(report: &AnalysisReport) -> String {
    render_report_styled(report, supports_color())
}

fn render_report_styled(report: &AnalysisReport, color: bool) -> String {
    let heading = report.mode.result_heading();
    let body = report.display_text();

    let mut out = String::new();
    if color {
        out.push_str(&format!("\n{BOLD}{heading}{RESET}\n\n"));
    } else {
        out.push_str(&format!("\n{heading}\n\n"));
    }

    let dim_body = color && report.mode == AnalysisMode::Analyze && body == FALLBACK_MESSAGE;
    for line in body.lines() {
        if dim_body {
            out.push_str(&format!("  {DIM}{line}{RESET}\n"));
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use safepost_core::AnalysisOutcome;

    fn strip_ansi(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' { break; }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn report(mode: AnalysisMode, raw: &str, complete: bool) -> AnalysisReport {
        AnalysisReport {
            mode,
            outcome: AnalysisOutcome {
                raw_text: raw.to_string(),
                score: complete.then_some(82),
                warning: complete.then(|| "얼굴이 노출됨".to_string()),
                recommendation: complete.then(|| "블러 처리".to_string()),
            },
        }
    }

    #[test]
    fn renders_summary_under_heading() {
        let out = render_report_styled(&report(AnalysisMode::Analyze, "", true), false);
        assert!(out.starts_with("\n📊 분석 결과\n\n"));
        assert!(out.contains("  📊 이 게시물은 82% 확률로 안전합니다.\n"));
        assert!(out.contains("  ✨ 추천: 블러 처리\n"));
    }

    #[test]
    fn renders_fallback_dimmed_with_color() {
        let report = report(AnalysisMode::Analyze, "경고: 위험", false);
        let out = render_report_styled(&report, true);
        assert!(out.contains(DIM));
        assert_eq!(
            strip_ansi(&out),
            format!("\n📊 분석 결과\n\n  {FALLBACK_MESSAGE}\n")
        );
    }

    #[test]
    fn risk_report_shows_raw_lines() {
        let report = report(AnalysisMode::Risk, "위험도: 낮음\n이유: 없음", false);
        let out = render_report_styled(&report, false);
        assert!(out.contains("🔍 지인 리스크 평가 결과"));
        assert!(out.contains("  위험도: 낮음\n  이유: 없음\n"));
    }
}
