use common::types::Record;

/// Array of Structs (AoS) - both fields of a record are contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDataset {
    records: Vec<Record>,
}

impl RowDataset {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for RowDataset {
    fn from(records: Vec<Record>) -> Self {
        RowDataset { records }
    }
}

/// Struct of Arrays (SoA) - all values of the same field are contiguous.
///
/// Both columns always have the same length and index `i` in each refers to
/// the same logical record. The columns are only built by the generator or by
/// converting a [`RowDataset`], which keeps them aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDataset {
    a: Vec<i64>,
    b: Vec<i64>,
}

impl ColumnDataset {
    pub fn column_a(&self) -> &[i64] {
        &self.a
    }

    pub fn column_b(&self) -> &[i64] {
        &self.b
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Reassembles record `i` from the two columns.
    pub fn get(&self, i: usize) -> Option<Record> {
        Some(Record {
            a: *self.a.get(i)?,
            b: *self.b.get(i)?,
        })
    }
}

impl From<RowDataset> for ColumnDataset {
    fn from(rows: RowDataset) -> Self {
        let mut a = Vec::with_capacity(rows.len());
        let mut b = Vec::with_capacity(rows.len());
        for record in rows.records {
            a.push(record.a);
            b.push(record.b);
        }
        ColumnDataset { a, b }
    }
}

impl From<ColumnDataset> for RowDataset {
    fn from(columns: ColumnDataset) -> Self {
        columns
            .a
            .into_iter()
            .zip(columns.b)
            .map(|(a, b)| Record { a, b })
            .collect::<Vec<_>>()
            .into()
    }
}

/// Generates `n` records in the row-oriented (AoS) layout.
pub fn generate_rows(n: usize) -> RowDataset {
    (0..n).map(Record::at).collect::<Vec<_>>().into()
}

/// Generates `n` records in the column-oriented (SoA) layout.
///
/// Built column by column, no row buffer is allocated.
pub fn generate_columns(n: usize) -> ColumnDataset {
    let a: Vec<i64> = (0..n).map(|i| Record::at(i).a).collect();
    let b: Vec<i64> = (0..n).map(|i| Record::at(i).b).collect();
    ColumnDataset { a, b }
}
