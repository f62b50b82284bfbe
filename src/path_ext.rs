use {super::*, std::path::Path};

pub(crate) trait PathExt {
  fn try_into_utf8(&self) -> Result<&Utf8Path>;
}

impl PathExt for Path {
  fn try_into_utf8(&self) -> Result<&Utf8Path> {
    Utf8Path::from_path(self).context(error::PathUnicode { path: self })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn utf8() {
    assert_eq!(
      Path::new("corpus/100.txt").try_into_utf8().unwrap(),
      Utf8Path::new("corpus/100.txt"),
    );
  }

  #[cfg(unix)]
  #[test]
  fn non_utf8() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    assert_matches!(
      Path::new(OsStr::from_bytes(b"corpus/\xff.txt")).try_into_utf8(),
      Err(Error::PathUnicode { .. }),
    );
  }
}
