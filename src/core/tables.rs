// src/core/tables.rs
//! Raw 2-D tables pulled out of an HTML document.
//!
//! Every `<table>` in the document becomes one [`RawTable`], in document order of
//! the opening tag (nested tables included, and their text also counts towards
//! the enclosing cell). `<th>` and `<td>` are treated alike: no header row is
//! split off, row 0 is whatever the page put first. `colspan`/`rowspan` are
//! expanded by repeating the cell value, short rows are padded with blanks.
//! Blank cells are `None`.

use super::html::{attr_value, next_tag};
use super::sanitize::clean_cell;

pub type Cell = Option<String>;

const MAX_SPAN: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Build from rows of cells; rows are padded to the widest one.
    pub fn new(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, None);
        }
        Self { rows }
    }

    /// Convenience for fixtures: empty strings become blank cells.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.iter().map(|c| Some(c.trim()).filter(|c| !c.is_empty()).map(str::to_string)).collect())
                .collect(),
        )
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Text of a cell; `None` when blank or outside the table.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Row 0, column 0.
    pub fn first_cell(&self) -> Option<&str> {
        self.cell(0, 0)
    }

    /// All cells of one column, top to bottom (blank or missing → `None`).
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |r| r.get(col).and_then(|c| c.as_deref()))
    }
}

/* ---------------- Extraction ---------------- */

struct Span {
    text: String,
    colspan: usize,
    rowspan: usize,
}

#[derive(Default)]
struct Builder {
    order: usize,
    rows: Vec<Vec<Span>>,
    row_open: bool,
    cell_open: bool,
}

impl Builder {
    fn open_row(&mut self) {
        self.close_cell();
        self.rows.push(Vec::new());
        self.row_open = true;
    }

    fn close_row(&mut self) {
        self.close_cell();
        self.row_open = false;
    }

    fn open_cell(&mut self, attrs: &str) {
        if !self.row_open {
            self.open_row();
        }
        self.close_cell();
        let span = |name| {
            attr_value(attrs, name)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(1)
                .min(MAX_SPAN)
        };
        if let Some(row) = self.rows.last_mut() {
            row.push(Span { text: String::new(), colspan: span("colspan"), rowspan: span("rowspan") });
            self.cell_open = true;
        }
    }

    fn close_cell(&mut self) {
        self.cell_open = false;
    }

    fn push_text(&mut self, text: &str) {
        if !self.cell_open {
            return;
        }
        if let Some(span) = self.rows.last_mut().and_then(|r| r.last_mut()) {
            span.text.push_str(text);
        }
    }

    fn finish(mut self) -> (usize, RawTable) {
        self.rows.retain(|r| !r.is_empty());
        (self.order, RawTable::new(expand_spans(&self.rows)))
    }
}

/// Lay spans out on a grid, repeating values across their col/row spans.
fn expand_spans(rows: &[Vec<Span>]) -> Vec<Vec<Cell>> {
    // outer Option: slot taken; inner: cell value
    let mut grid: Vec<Vec<Option<Cell>>> = (0..rows.len()).map(|_| Vec::new()).collect();

    for (r, row) in rows.iter().enumerate() {
        let mut c = 0usize;
        for span in row {
            while grid[r].get(c).is_some_and(Option::is_some) {
                c += 1;
            }
            let text = clean_cell(&span.text);
            let value: Cell = if text.is_empty() { None } else { Some(text) };
            let rowspan = span.rowspan.min(rows.len() - r);
            for line in grid.iter_mut().skip(r).take(rowspan) {
                if line.len() < c + span.colspan {
                    line.resize(c + span.colspan, None);
                }
                for slot in &mut line[c..c + span.colspan] {
                    *slot = Some(value.clone());
                }
            }
            c += span.colspan;
        }
    }

    grid.into_iter()
        .map(|line| line.into_iter().map(Option::flatten).collect())
        .collect()
}

/// Extract every `<table>` of `doc` as a [`RawTable`], in document order.
pub fn extract_tables(doc: &str) -> Vec<RawTable> {
    let mut open: Vec<Builder> = Vec::new();
    let mut done: Vec<(usize, RawTable)> = Vec::new();
    let mut opened = 0usize;
    let mut pos = 0usize;

    while let Some(tag) = next_tag(doc, pos) {
        push_text_all(&mut open, &doc[pos..tag.start]);
        pos = tag.end;

        match (tag.name.as_str(), tag.is_close) {
            ("script" | "style", false) => {
                // skip raw text content up to the closing tag
                let close = format!("</{}", tag.name);
                pos = doc[pos..]
                    .to_ascii_lowercase()
                    .find(&close)
                    .map_or(doc.len(), |rel| pos + rel);
            }
            ("table", false) => {
                push_text_all(&mut open, " ");
                open.push(Builder { order: opened, ..Default::default() });
                opened += 1;
            }
            ("table", true) => {
                if let Some(b) = open.pop() {
                    done.push(b.finish());
                }
            }
            ("tr", false) => {
                if let Some(b) = open.last_mut() { b.open_row(); }
            }
            ("tr", true) => {
                if let Some(b) = open.last_mut() { b.close_row(); }
            }
            ("td" | "th", false) => {
                if let Some(b) = open.last_mut() { b.open_cell(tag.attrs); }
            }
            ("td" | "th", true) => {
                if let Some(b) = open.last_mut() { b.close_cell(); }
            }
            ("br" | "p" | "div" | "li", _) => push_text_all(&mut open, " "),
            _ => {}
        }
    }
    push_text_all(&mut open, &doc[pos.min(doc.len())..]);

    // unterminated tables still count
    while let Some(b) = open.pop() {
        done.push(b.finish());
    }

    done.sort_by_key(|(order, _)| *order);
    done.into_iter().map(|(_, t)| t).collect()
}

/// Cell text belongs to every enclosing table that has a cell open.
fn push_text_all(open: &mut [Builder], text: &str) {
    if text.is_empty() {
        return;
    }
    for b in open.iter_mut() {
        b.push_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_table_with_blank_cell() {
        let doc = "<table><tr><td>סוג</td><td>קבוצה</td></tr><tr><td>שעור</td><td>&nbsp;</td></tr></table>";
        let tables = extract_tables(doc);
        assert_eq!(tables.len(), 1);
        let t = &tables[0];
        assert_eq!(t.first_cell(), Some("סוג"));
        assert_eq!(t.cell(1, 0), Some("שעור"));
        assert_eq!(t.cell(1, 1), None);
        assert_eq!(t.width(), 2);
    }

    #[test]
    fn colspan_and_rowspan_repeat_values() {
        let doc = r#"<table>
            <tr><td rowspan=2>A</td><td colspan="2">B</td></tr>
            <tr><td>C</td><td>D</td></tr>
        </table>"#;
        let t = &extract_tables(doc)[0];
        assert_eq!(t.rows()[0], vec![Some(s!("A")), Some(s!("B")), Some(s!("B"))]);
        assert_eq!(t.rows()[1], vec![Some(s!("A")), Some(s!("C")), Some(s!("D"))]);
    }

    #[test]
    fn short_rows_are_padded() {
        let t = &extract_tables("<table><tr><td>1</td><td>2</td></tr><tr><td>3</td></tr></table>")[0];
        assert_eq!(t.height(), 2);
        assert_eq!(t.cell(1, 1), None);
        assert_eq!(t.column(1).collect::<Vec<_>>(), vec![Some("2"), None]);
    }

    #[test]
    fn nested_tables_keep_document_order() {
        let doc = "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table><table><tr><td>last</td></tr></table>";
        let tables = extract_tables(doc);
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].first_cell(), Some("outer inner"));
        assert_eq!(tables[1].first_cell(), Some("inner"));
        assert_eq!(tables[2].first_cell(), Some("last"));
    }

    #[test]
    fn unclosed_cells_and_rows_are_tolerated() {
        let doc = "<table><tr><td>1<td>2<tr><td>3</table>";
        let t = &extract_tables(doc)[0];
        assert_eq!(t.rows()[0], vec![Some(s!("1")), Some(s!("2"))]);
        assert_eq!(t.rows()[1], vec![Some(s!("3")), None]);
    }

    #[test]
    fn script_content_is_not_cell_text() {
        let doc = "<table><tr><td>x<script>var a = '<td>';</script></td></tr></table>";
        let t = &extract_tables(doc)[0];
        assert_eq!(t.first_cell(), Some("x"));
        assert_eq!(t.width(), 1);
    }
}
