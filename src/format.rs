use super::*;

/// Version header of a peer database. Files record both the version that
/// wrote them and the lowest version able to read them, so files written by
/// newer software remain readable as long as the latter is understood.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub(crate) struct Format {
  pub(crate) version: u8,
  pub(crate) lowest_compatible: u8,
}

impl Format {
  /// Offset added to the lowest compatible version when stored, so that
  /// files from before the field existed, which stored a key length of 32
  /// in that byte, decode as lowest compatible version 0.
  pub(crate) const INCOMPATIBILITY_BASE: u8 = 32;

  pub(crate) const LATEST: u8 = 4;

  const BIP155: u8 = 3;

  pub(crate) fn addrv2(self) -> bool {
    self.version >= Self::BIP155
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "version {} (readable by {} and later)",
      self.version, self.lowest_compatible
    )
  }
}
