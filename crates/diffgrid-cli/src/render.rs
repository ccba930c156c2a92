//! Terminal rendering of diff results.

use colored::{ColoredString, Colorize};
use diffgrid_types::{DiffConfig, DiffLine, DiffLineKind, DiffStats, DiffTable, WordChange};

const ARROW: &str = " → ";

pub fn render_lines(lines: &[DiffLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let before = line.before_line_number.map(|n| n.to_string()).unwrap_or_default();
        let after = line.after_line_number.map(|n| n.to_string()).unwrap_or_default();
        let (sign, body) = match line.kind {
            DiffLineKind::Unchanged => (" ".normal(), line.content.normal().to_string()),
            DiffLineKind::Removed => ("-".red().bold(), render_side(line, DiffLineKind::Removed)),
            DiffLineKind::Added => ("+".green().bold(), render_side(line, DiffLineKind::Added)),
        };
        out.push_str(&format!(
            "{} {} {} {}\n",
            format!("{before:>5}").dimmed(),
            format!("{after:>5}").dimmed(),
            sign,
            body
        ));
    }
    out
}

/// One side of a changed line, with changed words highlighted.
fn render_side(line: &DiffLine, side: DiffLineKind) -> String {
    let Some(changes) = &line.word_changes else {
        return paint(&line.content, side, false).to_string();
    };
    changes
        .iter()
        .filter(|c| match side {
            DiffLineKind::Removed => !c.added,
            _ => !c.removed,
        })
        .map(|c: &WordChange| paint(&c.value, side, !c.is_unchanged()).to_string())
        .collect()
}

fn paint(text: &str, side: DiffLineKind, highlight: bool) -> ColoredString {
    match (side, highlight) {
        (DiffLineKind::Removed, false) => text.red(),
        (DiffLineKind::Removed, true) => text.bold().white().on_red(),
        (DiffLineKind::Added, false) => text.green(),
        (DiffLineKind::Added, true) => text.bold().black().on_green(),
        (DiffLineKind::Unchanged, _) => text.normal(),
    }
}

#[derive(Clone, Copy)]
enum CellStyle {
    Plain,
    Before,
    After,
    Changed,
}

pub fn render_table(table: &DiffTable, config: &DiffConfig) -> String {
    let mut grid: Vec<Vec<(String, CellStyle)>> = Vec::with_capacity(table.rows.len() + 1);

    let mut header = vec![("#".to_string(), CellStyle::Plain)];
    header.extend(table.headers.iter().map(|h| (h.clone(), CellStyle::Plain)));
    grid.push(header);

    for row in &table.rows {
        let mut cells = vec![(row.row_number.to_string(), CellStyle::Plain)];
        for (j, cell) in row.cells.iter().enumerate() {
            if config.before_after_column && table.is_split_column(j) {
                let (b, a) = if cell.has_change {
                    (CellStyle::Before, CellStyle::After)
                } else {
                    (CellStyle::Plain, CellStyle::Plain)
                };
                cells.push((cell.before.clone(), b));
                cells.push((cell.after.clone(), a));
            } else if cell.has_change {
                cells.push((format!("{}{ARROW}{}", cell.before, cell.after), CellStyle::Changed));
            } else {
                cells.push((cell.after.clone(), CellStyle::Plain));
            }
        }
        grid.push(cells);
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &grid {
        for (j, (text, _)) in row.iter().enumerate() {
            widths[j] = widths[j].max(display_width(text));
        }
    }

    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        let rendered: Vec<String> = (0..columns)
            .map(|j| {
                let (text, style) = row
                    .get(j)
                    .map(|(t, s)| (t.as_str(), *s))
                    .unwrap_or(("", CellStyle::Plain));
                let padded = format!("{}{}", text, " ".repeat(widths[j] - display_width(text)));
                let painted = match style {
                    CellStyle::Plain if i == 0 => padded.bold(),
                    CellStyle::Plain => padded.normal(),
                    CellStyle::Before => padded.red(),
                    CellStyle::After => padded.green(),
                    CellStyle::Changed => padded.yellow(),
                };
                painted.to_string()
            })
            .collect();
        out.push_str(rendered.join(" │ ").trim_end());
        out.push('\n');
    }
    out
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

pub fn render_stats(stats: &DiffStats) -> String {
    if stats.is_clean() {
        return format!("{}", "No differences.".green());
    }
    let mut parts = Vec::new();
    if stats.added > 0 {
        parts.push(format!("{} added", stats.added).green().to_string());
    }
    if stats.removed > 0 {
        parts.push(format!("{} removed", stats.removed).red().to_string());
    }
    if stats.changed_rows > 0 {
        parts.push(
            format!("{} rows changed ({} cells)", stats.changed_rows, stats.changed_cells)
                .yellow()
                .to_string(),
        );
    }
    parts.join(", ")
}
