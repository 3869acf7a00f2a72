//! Output formatting and display logic for linkfacts
//!
//! Pure projection of the terminal view states into text: the branded
//! header, the result cards, and the error banner. Rendering returns
//! strings so tests can assert on exact output.

use crate::core::constants::output_formats;
use crate::markdown;
use crate::types::{AnalysisReport, Profile};
use crate::ui::color::{Colors, colorize_if};

/// Render the branded header banner shown above the form.
pub fn render_header(use_color: bool) -> String {
    format!(
        "{}\n{}\n",
        colorize_if(
            "✨ LinkedIn Profile Analyzer",
            &format!("{}{}", Colors::BOLD, Colors::BRIGHT_CYAN),
            use_color
        ),
        colorize_if(
            "Enter three LinkedIn URLs and let our AI generate entertaining observations.",
            Colors::DIM,
            use_color
        )
    )
}

/// Render a full report in the requested output format.
pub fn render_report(report: &AnalysisReport, format: &str, use_color: bool) -> String {
    match format {
        output_formats::JSON => render_report_json(report),
        output_formats::MINIMAL => render_report_minimal(report),
        _ => render_report_text(report, use_color),
    }
}

/// Render an error banner in the requested output format.
pub fn render_error_banner(message: &str, format: &str, use_color: bool) -> String {
    match format {
        output_formats::JSON => {
            serde_json::json!({ "error": message }).to_string()
        }
        output_formats::MINIMAL => format!("Error: {message}"),
        _ => {
            let label = colorize_if(
                "Error:",
                &format!("{}{}", Colors::BOLD, Colors::BRIGHT_RED),
                use_color,
            );
            let msg = colorize_if(message, Colors::BRIGHT_RED, use_color);
            format!("{label} {msg}")
        }
    }
}

fn render_report_json(report: &AnalysisReport) -> String {
    // AnalysisReport serializes cleanly; failure here would mean a bug in
    // the type definitions, so fall back to an empty object
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

fn render_report_minimal(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} profiles analyzed)\n",
        report.status, report.profiles_analyzed
    ));

    for (i, profile) in report.results.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} - {}\n   {}\n",
            i + 1,
            profile.name,
            profile.headline,
            profile.profile_url
        ));
        for (j, fact) in profile.funny_facts.iter().enumerate() {
            out.push_str(&format!("   {}. {}\n", j + 1, markdown::render_plain(fact)));
        }
    }

    out
}

fn render_report_text(report: &AnalysisReport, use_color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n{}\n",
        colorize_if(
            "🎉 Analysis Results",
            &format!("{}{}", Colors::BOLD, Colors::BRIGHT_CYAN),
            use_color
        ),
        colorize_if(
            &format!(
                "Status: {} ({} profiles analyzed)",
                report.status, report.profiles_analyzed
            ),
            Colors::DIM,
            use_color
        )
    ));

    for (i, profile) in report.results.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_card(i + 1, profile, use_color));
    }

    out
}

/// Render one profile card: name, headline, profile link, numbered facts.
fn render_card(position: usize, profile: &Profile, use_color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        colorize_if(&format!("{position}."), Colors::DIM, use_color),
        colorize_if(
            &profile.name,
            &format!("{}{}", Colors::BOLD, Colors::BRIGHT_WHITE),
            use_color
        )
    ));
    out.push_str(&format!(
        "   {}\n",
        colorize_if(&profile.headline, Colors::CYAN, use_color)
    ));
    out.push_str(&format!(
        "   {} {}\n",
        colorize_if("→", Colors::DIM, use_color),
        colorize_if(&profile.profile_url, Colors::BRIGHT_BLUE, use_color)
    ));

    out.push_str(&format!(
        "   {}\n",
        colorize_if("✨ Funny Facts", Colors::YELLOW, use_color)
    ));
    for (j, fact) in profile.funny_facts.iter().enumerate() {
        let rendered = if use_color {
            markdown::render_ansi(
                fact,
                &format!("{}{}", Colors::BOLD, Colors::BRIGHT_YELLOW),
                Colors::RESET,
            )
        } else {
            markdown::render_plain(fact)
        };
        out.push_str(&format!("     {}. {}\n", j + 1, rendered));
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn report(profile_count: usize) -> AnalysisReport {
        let results = (0..profile_count)
            .map(|i| Profile {
                profile_url: format!("https://www.linkedin.com/in/person-{i}"),
                name: format!("Person {i}"),
                headline: format!("Headline {i}"),
                funny_facts: vec![
                    format!("Plain fact {i}"),
                    format!("A **bold** fact {i}"),
                ],
            })
            .collect();
        AnalysisReport {
            status: "success".to_string(),
            profiles_analyzed: profile_count,
            results,
        }
    }

    #[test]
    fn test_render_report_text__one_card_per_profile_in_order() {
        let rendered = render_report(&report(3), "text", false);

        for i in 0..3 {
            assert!(rendered.contains(&format!("Person {i}")));
            assert!(rendered.contains(&format!("Headline {i}")));
            assert!(rendered.contains(&format!("https://www.linkedin.com/in/person-{i}")));
        }

        let first = rendered.find("Person 0").unwrap();
        let second = rendered.find("Person 1").unwrap();
        let third = rendered.find("Person 2").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_render_report_text__facts_are_numbered() {
        let rendered = render_report(&report(1), "text", false);

        assert!(rendered.contains("1. Plain fact 0"));
        assert!(rendered.contains("2. A bold fact 0"));
    }

    #[test]
    fn test_render_report_text__bold_markup_stripped_without_color() {
        let rendered = render_report(&report(1), "text", false);
        assert!(!rendered.contains("**"));
    }

    #[test]
    fn test_render_report_text__bold_markup_highlighted_with_color() {
        let rendered = render_report(&report(1), "text", true);
        assert!(rendered.contains(&format!(
            "{}{}bold{}",
            Colors::BOLD,
            Colors::BRIGHT_YELLOW,
            Colors::RESET
        )));
    }

    #[test]
    fn test_render_report_text__status_line() {
        let rendered = render_report(&report(2), "text", false);
        assert!(rendered.contains("Status: success (2 profiles analyzed)"));
    }

    #[test]
    fn test_render_report_json_is_parseable() {
        let rendered = render_report(&report(2), "json", false);
        let parsed: AnalysisReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.results.len(), 2);
    }

    #[test]
    fn test_render_report_minimal_has_no_ansi_or_emoji() {
        let rendered = render_report(&report(2), "minimal", true);
        assert!(!rendered.contains('\x1b'));
        assert!(!rendered.contains('✨'));
        assert!(rendered.contains("Person 0 - Headline 0"));
    }

    #[test]
    fn test_render_report_empty_results() {
        let empty = AnalysisReport {
            status: "success".to_string(),
            profiles_analyzed: 0,
            results: vec![],
        };
        let rendered = render_report(&empty, "text", false);
        assert!(rendered.contains("(0 profiles analyzed)"));
    }

    #[test]
    fn test_render_error_banner_text() {
        let rendered = render_error_banner("rate limited", "text", false);
        assert_eq!(rendered, "Error: rate limited");
    }

    #[test]
    fn test_render_error_banner_minimal() {
        let rendered = render_error_banner("rate limited", "minimal", false);
        assert_eq!(rendered, "Error: rate limited");
    }

    #[test]
    fn test_render_error_banner_json() {
        let rendered = render_error_banner("rate limited", "json", false);
        assert_eq!(rendered, r#"{"error":"rate limited"}"#);
    }

    #[test]
    fn test_render_header_mentions_brand() {
        let rendered = render_header(false);
        assert!(rendered.contains("LinkedIn Profile Analyzer"));
    }
}
