use super::*;

/// Matches of a reachability corpus snapshot against both tables of a peer
/// database.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Reachability {
  pub(crate) lines: usize,
  pub(crate) new: usize,
  pub(crate) tried: usize,
  pub(crate) unparsed: usize,
}

impl Reachability {
  pub(crate) fn load(path: &Utf8Path, database: &PeerDatabase) -> Result<Self> {
    let file = File::open(path).context(error::Io { path })?;

    let reachability =
      Self::scan(BufReader::new(file), &database.new, &database.tried).context(error::Io { path })?;

    if reachability.unparsed > 0 {
      log::warn!(
        "{} of {} lines in `{path}` are not valid hosts",
        reachability.unparsed,
        reachability.lines,
      );
    }

    Ok(reachability)
  }

  /// Count the hosts of each table listed in `corpus`, which holds one bare
  /// host per line. Each host counts at most once per table, however often
  /// it is listed. Lines that are not hosts, UTF-8 or otherwise, are counted
  /// in `unparsed` and skipped.
  pub(crate) fn scan(
    corpus: impl BufRead,
    new: &AddressTable,
    tried: &AddressTable,
  ) -> io::Result<Self> {
    let mut new = new.hosts();
    let mut tried = tried.hosts();

    let mut reachability = Self::default();

    for line in corpus.split(b'\n') {
      let line = line?;

      if line.trim_ascii().is_empty() {
        continue;
      }

      reachability.lines += 1;

      let host = match std::str::from_utf8(&line) {
        Ok(line) => line.trim().parse::<Host>().map_err(|err| err.to_string()),
        Err(err) => Err(format!("line {} is not UTF-8: {err}", reachability.lines)),
      };

      let host = match host {
        Ok(host) => host.reachability_key(),
        Err(err) => {
          log::debug!("{err}");
          reachability.unparsed += 1;
          continue;
        }
      };

      if new.remove(&host) {
        reachability.new += 1;
      }

      if tried.remove(&host) {
        reachability.tried += 1;
      }
    }

    Ok(reachability)
  }

  pub(crate) fn count(&self, table: Table) -> usize {
    match table {
      Table::New => self.new,
      Table::Tried => self.tried,
    }
  }

  pub(crate) fn snapshot_path(corpus: &Utf8Path, timestamp: u32) -> Utf8PathBuf {
    corpus.join(format!("{timestamp}.txt"))
  }
}
