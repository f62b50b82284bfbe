use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub))]
pub(crate) enum Error {
  #[snafu(display("failed to decode peer database `{path}`"))]
  Decode {
    path: Utf8PathBuf,
    #[snafu(backtrace)]
    source: peer_database::Error,
  },
  #[snafu(display("peer database contains no records, so its age cannot be estimated"))]
  EmptyDatabase { backtrace: Option<Backtrace> },
  #[snafu(display("I/O error at `{path}`"))]
  Io {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: io::Error,
  },
  #[snafu(display("no reachability corpus timestamps available for `{corpus}`"))]
  NoTimestamps {
    backtrace: Option<Backtrace>,
    corpus: Utf8PathBuf,
  },
  #[snafu(
    display("path contains invalid UTF-8: `{}`", path.display())
  )]
  PathUnicode {
    backtrace: Option<Backtrace>,
    path: PathBuf,
  },
  #[snafu(display("failed to write JSON to stdout"))]
  Stdout {
    backtrace: Option<Backtrace>,
    source: serde_json::Error,
  },
  #[snafu(display("invalid timestamp on line {line} of `{path}`"))]
  TimestampParse {
    backtrace: Option<Backtrace>,
    line: usize,
    path: Utf8PathBuf,
    source: ParseIntError,
  },
  #[snafu(display("timestamps in `{path}` are not in ascending order"))]
  TimestampsUnsorted {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
  },
  #[snafu(display("failed to walk directory `{root}`"))]
  WalkDir {
    backtrace: Option<Backtrace>,
    root: Utf8PathBuf,
    source: walkdir::Error,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }
}
