//! Markdown rendering of a [`DocumentAnalysis`].

use std::fmt::Write as _;

use crate::types::DocumentAnalysis;

const NONE_IDENTIFIED: &str = "_None identified._";

pub fn to_markdown(analysis: &DocumentAnalysis) -> String {
    let mut md = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(md, "# Document Analysis\n");
    let _ = writeln!(md, "**Document type:** {}  ", analysis.document_type);
    let _ = writeln!(md, "**Risk level:** {}\n", capitalize(analysis.risk_level.as_str()));

    let _ = writeln!(md, "## Summary\n");
    let _ = writeln!(md, "{}\n", analysis.summary.trim());

    let _ = writeln!(md, "## Requirements\n");
    if analysis.requirements.is_empty() {
        let _ = writeln!(md, "{NONE_IDENTIFIED}\n");
    } else {
        for (i, requirement) in analysis.requirements.iter().enumerate() {
            let _ = writeln!(md, "{}. {}", i + 1, requirement.trim());
        }
        md.push('\n');
    }

    let _ = writeln!(md, "## Action Items\n");
    if analysis.action_items.is_empty() {
        let _ = writeln!(md, "{NONE_IDENTIFIED}");
    } else {
        for item in &analysis.action_items {
            let _ = writeln!(md, "- [ ] {}", item.trim());
        }
    }
    md
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    fn analysis() -> DocumentAnalysis {
        DocumentAnalysis {
            summary: "Outdoor dining permit conditions.".to_string(),
            requirements: vec!["Keep a 1.5m clear path".to_string(), "Pack up by 10pm".to_string()],
            document_type: "Permit".to_string(),
            risk_level: RiskLevel::High,
            action_items: Vec::new(),
        }
    }

    #[test]
    fn renders_all_sections() {
        let md = to_markdown(&analysis());
        assert!(md.starts_with("# Document Analysis\n"));
        assert!(md.contains("**Document type:** Permit"));
        assert!(md.contains("**Risk level:** High"));
        assert!(md.contains("## Summary\n\nOutdoor dining permit conditions.\n"));
        assert!(md.contains("1. Keep a 1.5m clear path\n2. Pack up by 10pm\n"));
    }

    #[test]
    fn empty_lists_say_so() {
        let md = to_markdown(&analysis());
        let actions = md.split("## Action Items").nth(1).unwrap();
        assert!(actions.contains(NONE_IDENTIFIED));
    }
}
