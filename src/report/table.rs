//! The year / GDP / inflation table: search and pagination.

use crate::domain::{DerivedMetrics, GdpUnit};
use crate::report::format::{fmt_gdp, fmt_num};

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub year: i64,
    /// Already scaled to the display unit.
    pub gdp: f64,
    pub inflation: f64,
}

/// One page of a (possibly filtered) table.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    /// 1-based, clamped to `pages`.
    pub page: usize,
    pub pages: usize,
    /// 0-based index of the first row within the filtered rows.
    pub offset: usize,
}

/// All rows, GDP scaled to `unit`.
pub fn table_rows(metrics: &DerivedMetrics, unit: GdpUnit) -> Vec<TableRow> {
    let s = &metrics.series;
    s.years
        .iter()
        .zip(&s.gdp)
        .zip(&s.inflation)
        .map(|((&year, &gdp), &inflation)| TableRow {
            year,
            gdp: unit.scale(gdp),
            inflation,
        })
        .collect()
}

/// Case-insensitive substring match on the year, GDP and inflation cells as
/// they are rendered in the table.
pub fn filter_rows(rows: &[TableRow], query: &str, unit: GdpUnit) -> Vec<TableRow> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| {
            r.year.to_string().contains(&q)
                || fmt_gdp(r.gdp, unit).to_lowercase().contains(&q)
                || fmt_num(r.inflation, 2).contains(&q)
        })
        .copied()
        .collect()
}

/// Keep only rows whose year lies in `[min, max]`.
pub fn rows_in_range(rows: &[TableRow], min: i64, max: i64) -> Vec<TableRow> {
    rows.iter().filter(|r| r.year >= min && r.year <= max).copied().collect()
}

/// Slice out page `page` (1-based). Always at least one page, even when empty.
pub fn paginate(rows: &[TableRow], page: usize, page_size: usize) -> TablePage {
    let page_size = page_size.max(1);
    let pages = rows.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, pages);
    let offset = (page - 1) * page_size;
    let end = (offset + page_size).min(rows.len());

    TablePage {
        rows: rows.get(offset..end).map(<[TableRow]>::to_vec).unwrap_or_default(),
        page,
        pages,
        offset,
    }
}

/// Render a page as fixed-width text.
pub fn format_table(page: &TablePage, unit: GdpUnit, show_gdp: bool, show_inflation: bool) -> String {
    let mut out = String::new();

    let mut header = format!("{:>4} {:>6}", "#", "year");
    let mut rule = format!("{:-<4} {:-<6}", "", "");
    if show_gdp {
        header.push_str(&format!(" {:>14}", "gdp"));
        rule.push_str(&format!(" {:-<14}", ""));
    }
    if show_inflation {
        header.push_str(&format!(" {:>12}", "inflation"));
        rule.push_str(&format!(" {:-<12}", ""));
    }
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    if page.rows.is_empty() {
        out.push_str("No rows.\n");
    }
    for (i, r) in page.rows.iter().enumerate() {
        let mut line = format!("{:>4} {:>6}", page.offset + i + 1, r.year);
        if show_gdp {
            line.push_str(&format!(" {:>14}", fmt_gdp(r.gdp, unit)));
        }
        if show_inflation {
            line.push_str(&format!(" {:>12}", fmt_num(r.inflation, 2)));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str(&format!("page {} / {}\n", page.page, page.pages));
    out
}
