use crate::filter::FilterSet;
use crate::highlight::{ColoredRange, HighlightMap, HighlightStyle};
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

fn paint(text: &str, style: Option<HighlightStyle>) -> ColoredString {
    let Some(style) = style else {
        return text.normal();
    };
    let spec = style.spec();
    let painted = text
        .truecolor(spec.foreground.0, spec.foreground.1, spec.foreground.2)
        .on_truecolor(spec.background.0, spec.background.1, spec.background.2);
    if spec.bold { painted.bold() } else { painted }
}

/// Paint one line. Ranges later in `ranges` are drawn over earlier ones, and
/// ranges with an unknown color key are not drawn.
pub fn paint_line(line: &str, ranges: &[&ColoredRange]) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut styles: Vec<Option<HighlightStyle>> = vec![None; chars.len()];

    for range in ranges {
        let Some(style) = HighlightStyle::from_key(&range.color_key) else {
            tracing::trace!(key = %range.color_key, "no style for color key");
            continue;
        };
        let end = range.end.min(chars.len());
        for slot in styles.iter_mut().take(end).skip(range.start) {
            *slot = Some(style);
        }
    }

    let mut out = String::new();
    let mut start = 0;
    while start < chars.len() {
        let style = styles[start];
        let mut end = start + 1;
        while end < chars.len() && styles[end] == style {
            end += 1;
        }
        let segment: String = chars[start..end].iter().collect();
        out.push_str(&paint(&segment, style).to_string());
        start = end;
    }
    out
}

/// Paint the whole derived view, one output line per view line
pub fn render_view(lines: &[String], highlights: &HighlightMap) -> String {
    let by_line = highlights.by_line(lines.len());
    lines
        .iter()
        .zip(&by_line)
        .map(|(line, ranges)| paint_line(line, ranges))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Table of the filters with their flag code and colors
pub fn filter_table(set: &FilterSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Filter", "Flags", "Color", "Match style", "Line style"]);

    for rule in set {
        let color = rule
            .color()
            .map(|color| color.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(vec![
            Cell::new(rule.name()),
            Cell::new(rule.flag_signature()),
            Cell::new(color),
            Cell::new(&rule.color_bold_key),
            Cell::new(&rule.color_key),
        ]);
    }

    table
}
