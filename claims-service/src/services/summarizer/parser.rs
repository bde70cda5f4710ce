//! Best-effort parsing of the model's free-text completion.
//!
//! The model's output format is not contractually guaranteed, so this parser
//! is total: it never fails, degrading to fixed fallback strings for any
//! section missing from the response.

/// Fallback when the response has no first section.
pub const NO_ORIGINAL_NOTES: &str = "No customer summary provided.";
/// Fallback when the response has no second section.
pub const NO_SUMMARY: &str = "No summary provided.";
/// Fallback when the response has no third section.
pub const NO_RECOMMENDATION: &str = "No recommendation provided.";

/// The three logical sections of a parsed completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSections {
    pub original_notes: String,
    pub summary: String,
    pub recommendation: String,
}

/// Split a raw completion into its three sections.
///
/// Segments are paragraph breaks (`\n\n`), trimmed, with empties dropped.
/// Assignment is positional regardless of any labels the model emitted:
/// first segment is the original notes, second the summary, third the
/// recommendation. Segments beyond the third are discarded.
pub fn parse_sections(raw: &str) -> ParsedSections {
    let segments: Vec<&str> = raw
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    ParsedSections {
        original_notes: segments
            .first()
            .map_or_else(|| NO_ORIGINAL_NOTES.to_string(), |s| s.to_string()),
        summary: segments
            .get(1)
            .map_or_else(|| NO_SUMMARY.to_string(), |s| s.to_string()),
        recommendation: segments
            .get(2)
            .map_or_else(|| NO_RECOMMENDATION.to_string(), |s| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_paragraphs_map_positionally() {
        let raw = "Note A and B.\n\nThey indicate water damage.\n\nEscalate to adjuster.";
        let parsed = parse_sections(raw);

        assert_eq!(parsed.original_notes, "Note A and B.");
        assert_eq!(parsed.summary, "They indicate water damage.");
        assert_eq!(parsed.recommendation, "Escalate to adjuster.");
    }

    #[test]
    fn single_paragraph_falls_back_for_rest() {
        let parsed = parse_sections("Only one paragraph.");

        assert_eq!(parsed.original_notes, "Only one paragraph.");
        assert_eq!(parsed.summary, NO_SUMMARY);
        assert_eq!(parsed.recommendation, NO_RECOMMENDATION);
    }

    #[test]
    fn empty_input_yields_all_fallbacks() {
        let parsed = parse_sections("");

        assert_eq!(parsed.original_notes, NO_ORIGINAL_NOTES);
        assert_eq!(parsed.summary, NO_SUMMARY);
        assert_eq!(parsed.recommendation, NO_RECOMMENDATION);
    }

    #[test]
    fn whitespace_only_input_yields_all_fallbacks() {
        let parsed = parse_sections("   \n\n  \n\n\t");

        assert_eq!(parsed.original_notes, NO_ORIGINAL_NOTES);
        assert_eq!(parsed.summary, NO_SUMMARY);
        assert_eq!(parsed.recommendation, NO_RECOMMENDATION);
    }

    #[test]
    fn segments_are_trimmed_and_empties_dropped() {
        let raw = "  first  \n\n\n\n  second  \n\n third ";
        let parsed = parse_sections(raw);

        assert_eq!(parsed.original_notes, "first");
        assert_eq!(parsed.summary, "second");
        assert_eq!(parsed.recommendation, "third");
    }

    #[test]
    fn extra_segments_are_discarded() {
        let raw = "one\n\ntwo\n\nthree\n\nfour\n\nfive";
        let parsed = parse_sections(raw);

        assert_eq!(parsed.original_notes, "one");
        assert_eq!(parsed.summary, "two");
        assert_eq!(parsed.recommendation, "three");
    }

    #[test]
    fn parsing_is_idempotent() {
        let raw = "alpha\n\nbeta";
        assert_eq!(parse_sections(raw), parse_sections(raw));
    }
}
