use super::*;

#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, IntoStaticStr, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Table {
  New,
  Tried,
}

impl Table {
  /// Largest record count a well-formed database may declare for this table.
  pub(crate) fn capacity(self) -> i32 {
    match self {
      Self::New => 1024 * 64,
      Self::Tried => 256 * 64,
    }
  }

  pub(crate) fn stats_file(self) -> &'static str {
    match self {
      Self::New => "new-table-stats.txt",
      Self::Tried => "tried-table-stats.txt",
    }
  }

  fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for Table {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
