use crate::types::Table;

/// One page of an ingested document: its free text plus any tables the
/// ingestion layer recognized on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub text: String,
    pub tables: Vec<Table>,
}

impl Page {
    pub fn new(text: &str, tables: Vec<Table>) -> Self {
        Self {
            text: text.to_string(),
            tables,
        }
    }

    /// A page of free text with no tables.
    pub fn from_text(text: &str) -> Self {
        Self::new(text, vec![])
    }

    /// Iterates the non-empty cells of every table, table by table and
    /// row-major within each table.
    ///
    /// Yields `(table_index, row_index, column_index, cell_text)`.
    pub fn table_cells(&self) -> impl Iterator<Item = (usize, usize, usize, &str)> + '_ {
        self.tables
            .iter()
            .enumerate()
            .flat_map(|(table_index, table)| {
                table.iter().enumerate().flat_map(move |(row_index, row)| {
                    row.iter()
                        .enumerate()
                        .filter_map(move |(column_index, cell)| match cell.as_deref() {
                            Some(text) if !text.is_empty() => {
                                Some((table_index, row_index, column_index, text))
                            }
                            _ => None,
                        })
                })
            })
    }
}
