use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: &str = "  ";
const RULE_CHAR: char = '-';

/// How a cell sits inside its column. Columns without one are left-aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Plain-text table: a header line, a dashed rule, then one line per row.
pub struct TextTableBuilder<'a, Row> {
    headers: &'a [Cow<'a, str>],
    alignments: &'a [Alignment],
    rows: Vec<Row>,
}

impl<'a, Row> Default for TextTableBuilder<'a, Row> {
    fn default() -> Self {
        Self {
            headers: &[],
            alignments: &[],
            rows: Vec::new(),
        }
    }
}

impl<'a, Row> TextTableBuilder<'a, Row>
where
    Row: AsRef<[Cow<'a, str>]>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(self, alignments: &'a [Alignment]) -> Self {
        Self { alignments, ..self }
    }

    pub fn headers(self, headers: &'a [Cow<'a, str>]) -> Self {
        Self { headers, ..self }
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders the header, a rule and one line per row. Cells beyond the
    /// header count are dropped; trailing spaces are trimmed.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let mut table = String::with_capacity(256);
        self.write_line(&mut table, self.headers, &col_widths);

        let rule = col_widths
            .iter()
            .map(|&width| RULE_CHAR.to_string().repeat(width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let _ = writeln!(&mut table, "{rule}");

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, &width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn pad_cell(line: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(text_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    line.extend(std::iter::repeat_n(' ', left));
    line.push_str(cell);
    line.extend(std::iter::repeat_n(' ', right));
}
