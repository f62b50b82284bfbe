use super::*;

#[derive(Debug, Snafu)]
#[snafu(display("{table} table is empty"))]
pub(crate) struct EmptyTableError {
  pub(crate) table: Table,
}

#[derive(Debug, PartialEq)]
pub(crate) struct TableStats {
  pub(crate) buckets: AgeBuckets,
  pub(crate) reachable: usize,
  pub(crate) table: Table,
  pub(crate) total: usize,
  age_sum: u64,
  oldest: Option<u32>,
  reference: u32,
}

impl TableStats {
  pub(crate) fn new(table: &AddressTable, reachable: usize, reference: u32) -> Self {
    let buckets = AgeBuckets::tally(table.records(), reference);

    debug_assert_eq!(buckets.total(), table.len());

    Self {
      age_sum: table
        .records()
        .iter()
        .map(|record| u64::from(reference.saturating_sub(record.time)))
        .sum(),
      buckets,
      oldest: table.oldest(),
      reachable,
      reference,
      table: table.table(),
      total: table.len(),
    }
  }

  /// Mean record age in seconds. Records newer than the reference time count
  /// as age zero.
  pub(crate) fn average_age(&self) -> Result<f64, EmptyTableError> {
    self.ensure_not_empty()?;
    Ok(self.age_sum as f64 / self.total as f64)
  }

  /// Fraction of records whose host is reachable, in `[0, 1]`.
  pub(crate) fn fraction(&self) -> Result<f64, EmptyTableError> {
    self.ensure_not_empty()?;
    Ok(self.reachable as f64 / self.total as f64)
  }

  /// Age in seconds of the least recently seen record.
  pub(crate) fn oldest_age(&self) -> Result<u32, EmptyTableError> {
    self
      .oldest
      .map(|oldest| self.reference.saturating_sub(oldest))
      .ok_or(EmptyTableError { table: self.table })
  }

  fn ensure_not_empty(&self) -> Result<(), EmptyTableError> {
    if self.total == 0 {
      return Err(EmptyTableError { table: self.table });
    }

    Ok(())
  }

  /// Age of the least recently seen record in whole days, rounded down.
  pub(crate) fn oldest_days(&self) -> Result<u32, EmptyTableError> {
    Ok(self.oldest_age()? / DAY as u32)
  }
}

impl Serialize for TableStats {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    use serde::ser::SerializeStruct;

    let mut state = serializer.serialize_struct("TableStats", 7)?;
    state.serialize_field("table", &self.table)?;
    state.serialize_field("total", &self.total)?;
    state.serialize_field("reachable", &self.reachable)?;
    state.serialize_field("fraction", &self.fraction().ok())?;
    state.serialize_field("oldest_age", &self.oldest_age().ok())?;
    state.serialize_field("average_age", &self.average_age().ok())?;
    state.serialize_field("buckets", &self.buckets)?;
    state.end()
  }
}
