//! Random train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use vins_model::{PipelineError, RecordTable, Result};

/// Partition `table` into `(train, test)`.
///
/// `ratio` is the test fraction; the test subset gets `ceil(rows * ratio)`
/// rows so the two subsets always partition the input exactly. With a seed
/// the shuffle is reproducible; without one it draws from the thread RNG.
pub fn split_table(
    table: &RecordTable,
    ratio: f64,
    seed: Option<u64>,
) -> Result<(RecordTable, RecordTable)> {
    if !(ratio > 0.0 && ratio < 1.0) {
        return Err(PipelineError::InvalidRatio(ratio));
    }
    let mut indices: Vec<usize> = (0..table.row_count()).collect();
    match seed {
        Some(seed) => indices.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => indices.shuffle(&mut rand::thread_rng()),
    }
    let test_count = ((table.row_count() as f64) * ratio).ceil() as usize;
    let (test_indices, train_indices) = indices.split_at(test_count.min(indices.len()));
    Ok((table.subset(train_indices), table.subset(test_indices)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_rows(count: usize) -> RecordTable {
        let mut table = RecordTable::new(vec!["id".to_string()]);
        for idx in 0..count {
            table.push_row(vec![idx.to_string()]);
        }
        table
    }

    #[test]
    fn hundred_rows_at_point_two() {
        let (train, test) = split_table(&table_with_rows(100), 0.2, Some(7)).unwrap();
        assert_eq!(train.row_count(), 80);
        assert_eq!(test.row_count(), 20);
    }

    #[test]
    fn subsets_are_disjoint_and_exhaustive() {
        let table = table_with_rows(37);
        let (train, test) = split_table(&table, 0.3, Some(11)).unwrap();
        let mut ids: Vec<&String> = train
            .rows
            .iter()
            .chain(test.rows.iter())
            .map(|row| &row[0])
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 37);
    }

    #[test]
    fn same_seed_same_partition() {
        let table = table_with_rows(50);
        let (train_a, test_a) = split_table(&table, 0.25, Some(42)).unwrap();
        let (train_b, test_b) = split_table(&table, 0.25, Some(42)).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn rejects_degenerate_ratio() {
        let table = table_with_rows(10);
        assert!(matches!(
            split_table(&table, 0.0, None),
            Err(PipelineError::InvalidRatio(_))
        ));
        assert!(matches!(
            split_table(&table, 1.0, None),
            Err(PipelineError::InvalidRatio(_))
        ));
    }
}
