use crate::error::{Result, SheetError};
use crate::row::Row;
use crate::workbook::{Sheet, Workbook};
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

/// Convert one calamine cell to text, or `None` for a blank cell.
///
/// Shared strings are already resolved by calamine. Numeric cells render
/// through `f64`'s `Display`, which drops the trailing `.0` Excel stores for
/// integral values. Error cells are treated as blank.
fn data_to_text(data: &Data) -> Option<String> {
    let text = match data {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Bool(b) => b.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => {
            warn!("skipping error cell: {e:?}");
            return None;
        }
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Build a sparse sheet from a calamine range, preserving absolute
/// row/column positions.
fn sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    let Some((start_row, start_col)) = range.start() else {
        return sheet;
    };

    for (row_offset, cells) in range.rows().enumerate() {
        let mut row = Row::new(start_row as usize + row_offset);
        for (col_offset, data) in cells.iter().enumerate() {
            if let Some(text) = data_to_text(data) {
                row.push(start_col as usize + col_offset, text);
            }
        }
        sheet.push_row(row);
    }

    sheet
}

impl Workbook {
    /// Load every sheet of an Excel file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or a sheet cannot be read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let xlsx_err = |e: XlsxError| SheetError::Xlsx {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path).map_err(xlsx_err)?;
        let sheet_names = workbook.sheet_names().to_vec();

        let mut book = Workbook::new();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(xlsx_err)?;
            book.push_sheet(sheet_from_range(&sheet_name, &range));
        }

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_error_cells_become_absent() {
        assert_eq!(data_to_text(&Data::Empty), None);
        assert_eq!(data_to_text(&Data::String(String::new())), None);
        assert_eq!(
            data_to_text(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(data_to_text(&Data::Float(4180.0)), Some("4180".to_string()));
        assert_eq!(data_to_text(&Data::Float(0.3)), Some("0.3".to_string()));
    }

    #[test]
    fn typed_cells_render_as_text() {
        assert_eq!(data_to_text(&Data::Bool(true)), Some("true".to_string()));
        assert_eq!(data_to_text(&Data::Int(-3)), Some("-3".to_string()));
        assert_eq!(
            data_to_text(&Data::String("Home Fleet".to_string())),
            Some("Home Fleet".to_string())
        );
    }
}
