//! Reply Composer
//!
//! Assembles the draft reply letter from extracted notice text, supporting
//! workings, the taxpayer's own points and the static reference table.
//! Composition is deterministic for a given date and never fails.

pub mod references;

pub use references::{format_references, ReferenceItem, GST_LAW_REFERENCES};

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::models::ReplyInputs;

/// Date format used in the subject line and in API responses.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

const FACTS_PLACEHOLDER: &str = "Facts of the notice were reviewed and are summarized below.";
const FACTS_HEADER: &str = "Facts stated in the notice (summary):";

const RESPONSE_HEADER: &str = "Our response and justification:";
const RESPONSE_ANALYSIS: &str =
    "- The notice has been analyzed with reference to the records, filings, and supporting workings.";
const SUPPORTING_HEADER: &str = "- Supporting workings submitted:";
const NO_TEXT_PLACEHOLDER: &str = "(No text extracted)";
const OPINION_HEADER: &str = "- Specific points/clarifications provided by the taxpayer:";
const RESPONSE_CONCLUSION: &str =
    "- Based on the above, the proposed demand/observation should be dropped or suitably modified.";

const ADDRESS_BLOCK: &str = "To,\nThe Proper Officer,\n[Jurisdiction]\n";
const SALUTATION: &str = "Respected Sir/Madam,\n";
const INTRO: &str =
    "We submit this reply in response to the above notice. Our submission is as follows:\n";
const REFERENCES_HEADER: &str = "Relevant GST law references (indicative):";
const HEARING_REQUEST: &str =
    "We request a personal hearing if required and seek a reasoned order after considering our submission.";
const SIGNATURE_BLOCK: &str =
    "Thanking you,\nAuthorized Signatory\n[Name]\n[GSTIN]\n[Contact Details]";

const SAMPLE_HEADER: &str = "Sample reply format provided (for reference):";
const SAMPLE_SEPARATOR: &str = "---";
const GENERATED_HEADER: &str = "Generated reply following the same structure:";

pub struct ReplyComposer;

impl ReplyComposer {
    /// Facts of the notice, or a placeholder sentence when nothing was extracted.
    pub fn facts_section(notice_text: &str) -> String {
        if notice_text.is_empty() {
            return FACTS_PLACEHOLDER.to_string();
        }
        [FACTS_HEADER, notice_text.trim()].join("\n")
    }

    pub fn response_section(opinion: &str, supporting_texts: &[String]) -> String {
        let mut lines: Vec<String> = vec![RESPONSE_HEADER.to_string(), RESPONSE_ANALYSIS.to_string()];

        if !supporting_texts.is_empty() {
            lines.push(SUPPORTING_HEADER.to_string());
            for (idx, text) in supporting_texts.iter().enumerate() {
                let n = idx + 1;
                lines.push(format!("  {}. Working Paper {}:", n, n));
                let text = text.trim();
                lines.push(if text.is_empty() { NO_TEXT_PLACEHOLDER } else { text }.to_string());
            }
        }

        if !opinion.is_empty() {
            lines.push(OPINION_HEADER.to_string());
            lines.push(opinion.trim().to_string());
        }

        lines.push(RESPONSE_CONCLUSION.to_string());
        lines.join("\n")
    }

    /// Compose the full draft as of `date`.
    pub fn compose(inputs: &ReplyInputs, date: NaiveDate) -> String {
        let submitted_on = date.format(DATE_FORMAT).to_string();
        let subject = format!(
            "Subject: Reply to GST Notice dated [DD-MM-YYYY] - submitted on {}\n",
            submitted_on
        );

        let sections = [
            ADDRESS_BLOCK.to_string(),
            subject,
            SALUTATION.to_string(),
            INTRO.to_string(),
            Self::facts_section(&inputs.notice_text),
            "\n".to_string(),
            Self::response_section(&inputs.opinion, &inputs.supporting_texts),
            "\n".to_string(),
            REFERENCES_HEADER.to_string(),
            format_references(),
            "\n".to_string(),
            HEARING_REQUEST.to_string(),
            "\n".to_string(),
            SIGNATURE_BLOCK.to_string(),
        ];
        let draft = sections.join("\n");

        info!(
            notice_chars = inputs.notice_text.len(),
            supporting = inputs.supporting_texts.len(),
            has_opinion = !inputs.opinion.is_empty(),
            has_sample = !inputs.sample_reply.is_empty(),
            "Composed draft reply"
        );

        if inputs.sample_reply.is_empty() {
            return draft;
        }

        format!(
            "{}\n{}\n\n{}\n\n{}\n{}",
            SAMPLE_HEADER, inputs.sample_reply, SAMPLE_SEPARATOR, GENERATED_HEADER, draft
        )
    }

    /// Compose the draft dated with today's local calendar date.
    pub fn compose_today(inputs: &ReplyInputs) -> String {
        Self::compose(inputs, today())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Convenience wrapper over [`ReplyComposer::compose`] taking the four inputs
/// separately.
pub fn compose(
    notice_text: &str,
    sample_reply: &str,
    opinion: &str,
    supporting_texts: &[String],
    date: NaiveDate,
) -> String {
    let inputs = ReplyInputs {
        notice_text: notice_text.to_string(),
        sample_reply: sample_reply.to_string(),
        opinion: opinion.to_string(),
        supporting_texts: supporting_texts.to_vec(),
    };
    ReplyComposer::compose(&inputs, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_facts_placeholder_for_empty_notice() {
        assert_eq!(ReplyComposer::facts_section(""), FACTS_PLACEHOLDER);
    }

    #[test]
    fn test_facts_contains_trimmed_notice() {
        let facts = ReplyComposer::facts_section("  Demand of Rs.10000 raised \n");
        assert_eq!(
            facts,
            "Facts stated in the notice (summary):\nDemand of Rs.10000 raised"
        );
    }

    #[test]
    fn test_response_without_supporting_texts() {
        let response = ReplyComposer::response_section("", &[]);
        assert!(!response.contains("Supporting workings submitted"));
        assert!(!response.contains("Specific points/clarifications"));
        assert_eq!(
            response,
            format!("{}\n{}\n{}", RESPONSE_HEADER, RESPONSE_ANALYSIS, RESPONSE_CONCLUSION)
        );
    }

    #[test]
    fn test_response_numbers_supporting_texts() {
        let response = ReplyComposer::response_section("", &texts(&["   ", "X"]));
        let lines: Vec<&str> = response.lines().collect();

        assert_eq!(lines[2], "- Supporting workings submitted:");
        assert_eq!(lines[3], "  1. Working Paper 1:");
        assert_eq!(lines[4], "(No text extracted)");
        assert_eq!(lines[5], "  2. Working Paper 2:");
        assert_eq!(lines[6], "X");
        assert_eq!(lines[7], RESPONSE_CONCLUSION);
    }

    #[test]
    fn test_response_includes_opinion_before_conclusion() {
        let response = ReplyComposer::response_section(" We have paid via DRC-03 ", &[]);
        let lines: Vec<&str> = response.lines().collect();
        assert_eq!(lines[2], OPINION_HEADER);
        assert_eq!(lines[3], "We have paid via DRC-03");
        assert_eq!(lines[4], RESPONSE_CONCLUSION);
    }

    #[test]
    fn test_subject_carries_date() {
        let draft = compose("", "", "", &[], date());
        assert!(draft.contains(
            "Subject: Reply to GST Notice dated [DD-MM-YYYY] - submitted on 07-03-2024\n"
        ));
    }

    #[test]
    fn test_draft_layout_without_inputs() {
        let draft = compose("", "", "", &[], date());
        let expected = [
            "To,\nThe Proper Officer,\n[Jurisdiction]\n",
            "Subject: Reply to GST Notice dated [DD-MM-YYYY] - submitted on 07-03-2024\n",
            "Respected Sir/Madam,\n",
            "We submit this reply in response to the above notice. Our submission is as follows:\n",
            FACTS_PLACEHOLDER,
            "\n",
            ReplyComposer::response_section("", &[]).as_str(),
            "\n",
            REFERENCES_HEADER,
            format_references().as_str(),
            "\n",
            HEARING_REQUEST,
            "\n",
            SIGNATURE_BLOCK,
        ]
        .join("\n");
        assert_eq!(draft, expected);
    }

    #[test]
    fn test_reference_block_is_unconditional() {
        for draft in [
            compose("", "", "", &[], date()),
            compose("notice", "sample", "opinion", &texts(&["a", "b"]), date()),
        ] {
            let count = draft
                .lines()
                .filter(|line| GST_LAW_REFERENCES.iter().any(|r| *line == r.to_string()))
                .count();
            assert_eq!(count, 5);
        }
    }

    #[test]
    fn test_sample_reply_is_prepended_verbatim() {
        let sample = "  Dear Officer,\nOur reply...  ";
        let draft = compose("notice", sample, "", &[], date());
        let plain = compose("notice", "", "", &[], date());

        let expected = format!(
            "Sample reply format provided (for reference):\n{}\n\n---\n\nGenerated reply following the same structure:\n{}",
            sample, plain
        );
        assert_eq!(draft, expected);
    }

    #[test]
    fn test_end_to_end_ordering() {
        let draft = compose(
            "Demand of Rs.10000 raised",
            "",
            "We have paid via DRC-03",
            &texts(&["Reconciliation statement"]),
            date(),
        );

        let mut cursor = 0;
        let mut expect_after = |needle: &str| {
            let pos = draft[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("{:?} missing or out of order", needle));
            cursor += pos + needle.len();
        };

        expect_after("Demand of Rs.10000 raised");
        expect_after("1. Working Paper 1:");
        expect_after("Reconciliation statement");
        expect_after("We have paid via DRC-03");
        for item in GST_LAW_REFERENCES.iter() {
            expect_after(&item.to_string());
        }
    }
}
