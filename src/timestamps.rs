use super::*;

/// Ascending timestamps of the available reachability corpus snapshots.
#[derive(Debug, PartialEq)]
pub(crate) struct Timestamps(Vec<u32>);

impl Timestamps {
  /// Load one timestamp per line from `path`. Blank lines are skipped.
  pub(crate) fn load(path: &Utf8Path) -> Result<Self> {
    let file = File::open(path).context(error::Io { path })?;

    let mut timestamps = Vec::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
      let line = line.context(error::Io { path })?;

      let line = line.trim();

      if line.is_empty() {
        continue;
      }

      timestamps.push(line.parse::<u32>().context(error::TimestampParse {
        path,
        line: i + 1,
      })?);
    }

    Self::new(timestamps).context(error::TimestampsUnsorted { path })
  }

  /// Collect the timestamps of every `<TIMESTAMP>.txt` file directly inside
  /// the corpus directory at `root`.
  pub(crate) fn scan(root: &Utf8Path) -> Result<Self> {
    static RE: Lazy<Regex> = lazy_regex!(r"^([0-9]+)\.txt$");

    let mut timestamps = Vec::new();

    for result in WalkDir::new(root).min_depth(1).max_depth(1) {
      let entry = result.context(error::WalkDir { root })?;

      if !entry.file_type().is_file() {
        continue;
      }

      let path = entry.path().try_into_utf8()?;

      let Some(captures) = path.file_name().and_then(|name| RE.captures(name)) else {
        log::trace!("skipping `{path}`");
        continue;
      };

      match captures[1].parse::<u32>() {
        Ok(timestamp) => timestamps.push(timestamp),
        Err(err) => log::warn!("skipping `{path}`: {err}"),
      }
    }

    timestamps.sort_unstable();

    Ok(Self(timestamps))
  }

  /// Returns `None` unless `timestamps` is ascending.
  pub(crate) fn new(timestamps: Vec<u32>) -> Option<Self> {
    timestamps
      .windows(2)
      .all(|pair| pair[0] <= pair[1])
      .then_some(Self(timestamps))
  }

  /// Timestamp nearest to `target`, preferring the earlier of two equally
  /// near timestamps, or `None` if there are no timestamps.
  pub(crate) fn closest(&self, target: u32) -> Option<u32> {
    let timestamps = &self.0;

    match timestamps.len() {
      0 => return None,
      1 => return Some(timestamps[0]),
      _ => {}
    }

    // invariant: `low < high`, both valid indices, and unless `target` lies
    // outside the whole range, `timestamps[low] <= target <= timestamps[high]`
    let mut low = 0;
    let mut high = timestamps.len() - 1;

    loop {
      let mid = low + (high - low) / 2;

      if timestamps[mid] == target {
        return Some(target);
      }

      if mid == low {
        let (low, high) = (timestamps[low], timestamps[high]);

        return Some(if target.abs_diff(low) <= target.abs_diff(high) {
          low
        } else {
          high
        });
      }

      if target < timestamps[mid] {
        high = mid;
      } else {
        low = mid;
      }
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.0.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn timestamps(values: &[u32]) -> Timestamps {
    Timestamps::new(values.to_vec()).unwrap()
  }

  #[test]
  fn closest() {
    #[track_caller]
    fn case(values: &[u32], target: u32, expected: Option<u32>) {
      assert_eq!(timestamps(values).closest(target), expected);
    }

    case(&[], 5, None);
    case(&[7], 0, Some(7));
    case(&[7], u32::MAX, Some(7));
    case(&[100, 200, 300], 250, Some(200));
    case(&[100, 200, 300], 251, Some(300));
    case(&[100, 200, 300], 200, Some(200));
    case(&[100, 200, 300], 0, Some(100));
    case(&[100, 200, 300], 1000, Some(300));
    case(&[100, 200], 150, Some(100));
    case(&[100, 200], 151, Some(200));
    case(&[10, 20, 30, 40, 50, 60, 70], 44, Some(40));
    case(&[10, 20, 30, 40, 50, 60, 70], 46, Some(50));
    case(&[10, 20, 30, 40, 50, 60, 70], 70, Some(70));
    case(&[0, u32::MAX], u32::MAX / 2, Some(0));
    case(&[0, u32::MAX], u32::MAX / 2 + 1, Some(u32::MAX));
  }

  #[test]
  fn closest_is_nearest_member() {
    let values = [3, 8, 8, 15, 16, 23, 42, 97, 98, 400];

    for len in 1..=values.len() {
      let values = &values[..len];

      let timestamps = timestamps(values);

      for target in 0..450 {
        let closest = timestamps.closest(target).unwrap();

        assert!(values.contains(&closest));

        let distance = target.abs_diff(closest);

        for value in values {
          assert!(
            target.abs_diff(*value) >= distance,
            "{value} is closer to {target} than {closest} in {values:?}",
          );
        }
      }
    }
  }

  #[test]
  fn closest_prefers_earlier_on_tie() {
    let values = [2, 4, 6, 8, 10, 12, 14, 16];

    for target in (3..16).step_by(2) {
      assert_eq!(timestamps(&values).closest(target), Some(target - 1));
    }
  }

  #[test]
  fn unsorted() {
    assert_eq!(Timestamps::new(vec![1, 3, 2]), None);
    assert_eq!(Timestamps::new(vec![1, 1, 2]), Some(Timestamps(vec![1, 1, 2])));
  }

  #[test]
  fn load() {
    let tempdir = tempdir();

    let path = tempdir.path_utf8().join("timestamps.txt");

    fs::write(&path, "100\n200\n\n300\n").unwrap();

    assert_eq!(
      Timestamps::load(&path).unwrap(),
      Timestamps(vec![100, 200, 300])
    );

    fs::write(&path, "100\nfoo\n").unwrap();

    assert_matches!(
      Timestamps::load(&path),
      Err(Error::TimestampParse { line: 2, .. }),
    );

    fs::write(&path, "300\n200\n").unwrap();

    assert_matches!(
      Timestamps::load(&path),
      Err(Error::TimestampsUnsorted { .. }),
    );

    assert_matches!(
      Timestamps::load(&tempdir.path_utf8().join("missing.txt")),
      Err(Error::Io { .. }),
    );
  }

  #[test]
  fn scan() {
    let tempdir = tempdir();

    let root = tempdir.path_utf8();

    for name in ["300.txt", "100.txt", "200.txt", "notes.txt", "400.csv"] {
      fs::write(root.join(name), "").unwrap();
    }

    fs::create_dir(root.join("500.txt")).unwrap();

    assert_eq!(
      Timestamps::scan(root).unwrap(),
      Timestamps(vec![100, 200, 300])
    );
  }
}
