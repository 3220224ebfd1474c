// Indicative GST law references rendered into every draft

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceItem {
    pub topic: &'static str,
    pub summary: &'static str,
    pub citation: &'static str,
}

pub const GST_LAW_REFERENCES: [ReferenceItem; 5] = [
    ReferenceItem {
        topic: "Notice reply timelines",
        summary: "Reply within the time specified in the notice. Seek extension with reasons if required.",
        citation: "CGST Act, Section 73/74 (demand and adjudication).",
    },
    ReferenceItem {
        topic: "Principles of natural justice",
        summary: "Opportunity of being heard, reasoned order, and disclosure of relied-upon documents.",
        citation: "General legal principles; reflected in CGST rules/procedures.",
    },
    ReferenceItem {
        topic: "Input tax credit conditions",
        summary: "ITC allowed subject to possession of tax invoice, receipt of goods/services, tax paid, and filing of returns.",
        citation: "CGST Act, Section 16.",
    },
    ReferenceItem {
        topic: "ITC blocked credits",
        summary: "Certain credits are blocked, e.g., personal use or specific goods/services.",
        citation: "CGST Act, Section 17(5).",
    },
    ReferenceItem {
        topic: "Mismatch and reconciliation",
        summary: "Explain reconciliations between returns/books and provide working papers.",
        citation: "Return matching and reconciliation practices under CGST rules.",
    },
];

impl std::fmt::Display for ReferenceItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "- {}: {} ({})", self.topic, self.summary, self.citation)
    }
}

/// One line per reference, in declaration order.
pub fn format_references() -> String {
    GST_LAW_REFERENCES
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
