//! Plain-text tables for the terminal.
//!
//! Widths are measured in terminal columns rather than characters, since
//! account names are mostly full-width Japanese.

use console::{measure_text_width, pad_str, truncate_str, Alignment};

#[derive(Clone, Copy)]
pub enum Width {
    // As wide as the widest cell
    Auto,

    // As wide as the widest cell, but shrinks (down to the given minimum)
    // when the table does not fit on screen.
    Shrink(usize),
}

pub struct Column<'a, TRow> {
    title: String,
    align: Alignment,
    width: Width,
    show_indent: bool,
    get_content: &'a dyn Fn(&TRow) -> String,
}

impl<'a, TRow> Column<'a, TRow> {
    pub fn new(title: &str, get_content: &'a dyn Fn(&TRow) -> String) -> Self {
        Self {
            title: title.to_string(),
            align: Alignment::Left,
            width: Width::Auto,
            show_indent: false,
            get_content,
        }
    }

    // Whether this column should show the indentation
    pub fn show_indent(mut self) -> Self {
        self.show_indent = true;
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }
}

enum RowData {
    Separator,
    Headers,
    Cells(usize, Vec<String>), //  first component is the indent
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
    pub indent_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
            indent_size: 1,
        }
    }
}

pub struct Table<'a, TRow> {
    columns: Vec<Column<'a, TRow>>,
    rows: Vec<RowData>,
    settings: Settings,
}

impl<'a, TRow> Table<'a, TRow> {
    pub fn new(columns: Vec<Column<'a, TRow>>, settings: &Settings) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            settings: settings.clone(),
        }
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_row(&mut self, row: &TRow, indent: usize) {
        self.rows.push(RowData::Cells(
            indent,
            self.columns.iter().map(|c| (c.get_content)(row)).collect(),
        ));
    }

    pub fn add_separator(&mut self) {
        self.rows.push(RowData::Separator);
    }

    fn indent_width(&self, col: &Column<'a, TRow>, indent: usize) -> usize {
        if col.show_indent {
            indent * self.settings.indent_size
        } else {
            0
        }
    }

    /// The width of each column, so that the table fits in max_width
    /// whenever possible.
    fn compute_widths(&self, max_width: usize) -> Vec<usize> {
        let natural: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, col)| {
                self.rows
                    .iter()
                    .map(|row| match row {
                        RowData::Separator => 0,
                        RowData::Headers => measure_text_width(&col.title),
                        RowData::Cells(indent, cells) => {
                            self.indent_width(col, *indent)
                                + cells.get(idx).map_or(0, |c| measure_text_width(c))
                        }
                    })
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let seps = self.columns.len().saturating_sub(1)
            * measure_text_width(&self.settings.colsep);
        let total: usize = natural.iter().sum::<usize>() + seps;
        let mut excess = total.saturating_sub(max_width);

        // Shrink the flexible columns, right-most first
        let mut widths = natural;
        for (col, w) in self.columns.iter().zip(widths.iter_mut()).rev() {
            if excess == 0 {
                break;
            }
            if let Width::Shrink(min) = col.width {
                let reduce = excess.min(w.saturating_sub(min));
                *w -= reduce;
                excess -= reduce;
            }
        }
        widths
    }

    pub fn to_string(&self, max_width: usize) -> String {
        let widths = self.compute_widths(max_width);
        let mut result = String::new();

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(idx, (col, width))| match row {
                    RowData::Separator => "─".repeat(*width),
                    RowData::Headers => {
                        fit(&col.title, *width, Alignment::Center)
                    }
                    RowData::Cells(indent, cells) => {
                        let idt = self.indent_width(col, *indent).min(*width);
                        format!(
                            "{}{}",
                            " ".repeat(idt),
                            fit(
                                cells.get(idx).map_or("", String::as_str),
                                width - idt,
                                col.align,
                            )
                        )
                    }
                })
                .collect();
            result.push_str(cells.join(&self.settings.colsep).trim_end());
            result.push('\n');
        }
        result
    }
}

/// Pad the text to the width, truncating it only when it does not fit.
/// Cutting in the middle of a full-width character leaves one column,
/// which is padded as well.
fn fit(val: &str, width: usize, align: Alignment) -> String {
    if width == 0 {
        String::new()
    } else if measure_text_width(val) > width {
        pad_str(&truncate_str(val, width, "…"), width, align, None)
            .into_owned()
    } else {
        pad_str(val, width, align, None).into_owned()
    }
}
