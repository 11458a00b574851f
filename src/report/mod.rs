//! Console report rendering for brand statistics.
//!
//! Reports form a closed set: every kind is a [`ReportKind`] variant with a
//! stable string id used on the command line. Rendering produces a bordered
//! grid table:
//!
//! ```text
//! +---+---------+--------+
//! |   |  brand  | rating |
//! +===+=========+========+
//! | 1 |  apple  |  4.85  |
//! +---+---------+--------+
//! | 2 | samsung |  4.6   |
//! +---+---------+--------+
//! ```
//!
//! Columns size themselves to their widest cell and all cells are centered.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;
use crate::models::BrandStats;

// =============================================================================
// Report Kinds
// =============================================================================

/// The reports this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Average product rating per brand, best first.
    AverageRating,
}

impl ReportKind {
    /// All known report kinds, in presentation order.
    pub fn all() -> &'static [ReportKind] {
        &[ReportKind::AverageRating]
    }

    /// Stable identifier used to select this report on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ReportKind::AverageRating => "average-rating",
        }
    }

    /// Render this report for the given statistics.
    pub fn render(&self, stats: &[BrandStats]) -> String {
        match self {
            ReportKind::AverageRating => render_average_rating(stats),
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::all()
            .iter()
            .find(|kind| kind.id() == s)
            .copied()
            .ok_or_else(|| ReportError::Unknown(s.to_string()))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// =============================================================================
// Grid Rendering
// =============================================================================

const AVERAGE_RATING_HEADERS: [&str; 3] = ["", "brand", "rating"];

fn render_average_rating(stats: &[BrandStats]) -> String {
    let rows: Vec<[String; 3]> = stats
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            [
                (index + 1).to_string(),
                entry.brand.clone(),
                entry.average_rating.to_string(),
            ]
        })
        .collect();

    render_grid(&AVERAGE_RATING_HEADERS, &rows)
}

/// Render a grid table with centered cells, sized to the widest cell per
/// column. A double rule separates the header from the body; with no rows
/// the table is just the bordered header.
fn render_grid(headers: &[&str; 3], rows: &[[String; 3]]) -> String {
    let mut widths = [0usize; 3];
    for (width, header) in widths.iter_mut().zip(headers) {
        *width = header.chars().count();
    }
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(separator(&widths, '-'));
    lines.push(table_row(&widths, *headers));
    lines.push(separator(&widths, '='));
    for row in rows {
        lines.push(table_row(&widths, row.each_ref().map(String::as_str)));
        lines.push(separator(&widths, '-'));
    }

    lines.join("\n")
}

fn separator(widths: &[usize; 3], fill: char) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

fn table_row(widths: &[usize; 3], cells: [&str; 3]) -> String {
    let mut line = String::from("|");
    for (&width, cell) in widths.iter().zip(cells) {
        line.push_str(&format!(" {:^width$} |", cell));
    }
    line
}
