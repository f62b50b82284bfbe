use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct Summary {
  pub(crate) reference: u32,
  pub(crate) corpus_timestamp: u32,
  pub(crate) new: TableStats,
  pub(crate) tried: TableStats,
}

impl Summary {
  /// Compare `database` against the corpus snapshot in `corpus` whose
  /// timestamp is nearest the database's approximate age.
  pub(crate) fn compute(
    database: &PeerDatabase,
    corpus: &Utf8Path,
    timestamps: &Timestamps,
  ) -> Result<Self> {
    let reference = database
      .approximate_age()
      .context(error::EmptyDatabase)?;

    log::info!("approximate age: {reference}");

    let corpus_timestamp = timestamps
      .closest(reference)
      .context(error::NoTimestamps { corpus })?;

    log::info!(
      "closest of {} corpus timestamps: {corpus_timestamp}",
      timestamps.len()
    );

    let reachability =
      Reachability::load(&Reachability::snapshot_path(corpus, corpus_timestamp), database)?;

    Ok(Self {
      reference,
      corpus_timestamp,
      new: TableStats::new(&database.new, reachability.count(Table::New), reference),
      tried: TableStats::new(
        &database.tried,
        reachability.count(Table::Tried),
        reference,
      ),
    })
  }

  pub(crate) fn table(&self, table: Table) -> &TableStats {
    match table {
      Table::New => &self.new,
      Table::Tried => &self.tried,
    }
  }
}
