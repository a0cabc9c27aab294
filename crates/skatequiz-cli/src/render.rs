//! Terminal rendering of routes and recall reviews.

use comfy_table::{Cell, Table};

use skatequiz_core::feedback::{Review, Segment, SegmentKind, Verdict};
use skatequiz_core::model::Tier;
use skatequiz_core::routes::ROUTES;

/// Words missing from the matched description are shown in brackets.
pub fn highlighted(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s.kind {
            SegmentKind::Absent => format!("[{}]", s.text),
            SegmentKind::Present | SegmentKind::Neutral => s.text.clone(),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn review_table(review: &Review) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Your answer", "Result", "Similarity"]);

    for slot in &review.slots {
        let similarity = match slot.verdict {
            Verdict::Blank => String::new(),
            _ => format!("{:.0}%", slot.similarity * 100.0),
        };
        table.add_row(vec![
            Cell::new(slot.slot + 1),
            Cell::new(highlighted(&slot.highlight)),
            Cell::new(slot.status()),
            Cell::new(similarity),
        ]);
    }
    table
}

/// The full text feedback for one attempt: table, summary, correct order.
pub fn review_text(review: &Review) -> String {
    let mut out = format!("{}\n", review_table(review));
    let matched = review.slots.iter().filter(|s| s.verdict.is_match()).count();
    out.push_str(&format!(
        "Recognised {matched} of {} ({} in the correct spot). [word] = not in the matched description.\n",
        review.slots.len(),
        review.count(Verdict::CorrectSpot)
    ));

    out.push_str("\nCorrect order:\n");
    for tier in [Tier::MostImportant, Tier::Additional] {
        out.push_str(&format!("  {}\n", tier.heading()));
        for slot in tier.slots() {
            out.push_str(&format!("    {}) {}\n", slot + 1, review.reference[slot]));
        }
    }
    out
}

pub fn routes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Quiz", "Discipline", "Mode", "Data file"]);
    for route in ROUTES {
        table.add_row(vec![
            Cell::new(route.label),
            Cell::new(route.discipline),
            Cell::new(route.mode),
            Cell::new(route.data_file.unwrap_or("not implemented yet")),
        ]);
    }
    table
}
