//! Plain-text rendering for terminal output.

use trapline_dashboard::{DashboardView, HarvestRow, InvestmentRow};

/// Render an aligned table; numeric-looking cells are right-aligned.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map(String::as_str).unwrap_or("");
                if looks_numeric(value) {
                    format!("{value:>width$}")
                } else {
                    format!("{value:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim_start_matches('$');
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// The four tiles, one per line.
pub fn render_tiles(view: &DashboardView) -> String {
    let label_width = view
        .tiles
        .iter()
        .map(|t| t.label.len())
        .max()
        .unwrap_or(0);
    view.tiles
        .iter()
        .map(|tile| format!("{:<label_width$}  {}", tile.label, tile.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full summary: error banner, tiles, and both tables.
pub fn render_summary(view: &DashboardView) -> String {
    let mut out = String::new();
    if let Some(error) = &view.error {
        out.push_str(&format!("! {error} (showing last loaded data)\n\n"));
    }
    out.push_str(&render_tiles(view));

    let harvests: Vec<Vec<String>> = view
        .harvests
        .iter()
        .map(|row| row.cells().map(str::to_string).to_vec())
        .collect();
    out.push_str(&format!("\n\nHarvests ({})\n", harvests.len()));
    out.push_str(&render_table(&HarvestRow::HEADERS, &harvests));

    let investments: Vec<Vec<String>> = view
        .investments
        .iter()
        .map(|row| row.cells().map(str::to_string).to_vec())
        .collect();
    out.push_str(&format!("\n\nInvestments ({})\n", investments.len()));
    out.push_str(&render_table(&InvestmentRow::HEADERS, &investments));
    out.push('\n');
    out
}
