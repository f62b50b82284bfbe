use super::*;

pub(crate) trait ReadExt {
  fn read_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]>;

  fn read_compact_size(&mut self) -> io::Result<u64>;

  fn read_i32(&mut self) -> io::Result<i32>;

  fn read_i64(&mut self) -> io::Result<i64>;

  fn read_u16_be(&mut self) -> io::Result<u16>;

  fn read_u32(&mut self) -> io::Result<u32>;

  fn read_u64(&mut self) -> io::Result<u64>;

  fn read_u8(&mut self) -> io::Result<u8>;
}

impl<T: Read> ReadExt for T {
  fn read_bytes<const N: usize>(&mut self) -> io::Result<[u8; N]> {
    let mut array = [0u8; N];

    self.read_exact(&mut array)?;

    Ok(array)
  }

  fn read_compact_size(&mut self) -> io::Result<u64> {
    let (value, min) = match self.read_u8()? {
      0xfd => (u64::from(u16::from_le_bytes(self.read_bytes()?)), 0xfd),
      0xfe => (u64::from(u32::from_le_bytes(self.read_bytes()?)), 0x1_0000),
      0xff => (u64::from_le_bytes(self.read_bytes()?), 0x1_0000_0000),
      n => return Ok(n.into()),
    };

    if value < min {
      return Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("non-canonical compact size {value}"),
      ));
    }

    Ok(value)
  }

  fn read_i32(&mut self) -> io::Result<i32> {
    Ok(i32::from_le_bytes(self.read_bytes()?))
  }

  fn read_i64(&mut self) -> io::Result<i64> {
    Ok(i64::from_le_bytes(self.read_bytes()?))
  }

  fn read_u16_be(&mut self) -> io::Result<u16> {
    Ok(u16::from_be_bytes(self.read_bytes()?))
  }

  fn read_u32(&mut self) -> io::Result<u32> {
    Ok(u32::from_le_bytes(self.read_bytes()?))
  }

  fn read_u64(&mut self) -> io::Result<u64> {
    Ok(u64::from_le_bytes(self.read_bytes()?))
  }

  fn read_u8(&mut self) -> io::Result<u8> {
    let [byte] = self.read_bytes()?;
    Ok(byte)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::io::Cursor};

  #[test]
  fn compact_size() {
    #[track_caller]
    fn case(bytes: &[u8], value: u64) {
      assert_eq!(Cursor::new(bytes).read_compact_size().unwrap(), value);
    }

    case(&[0], 0);
    case(&[0xfc], 0xfc);
    case(&[0xfd, 0xfd, 0x00], 0xfd);
    case(&[0xfd, 0xff, 0xff], 0xffff);
    case(&[0xfe, 0x00, 0x00, 0x01, 0x00], 0x1_0000);
    case(
      &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
      0x1_0000_0000,
    );
  }

  #[test]
  fn compact_size_non_canonical() {
    #[track_caller]
    fn case(bytes: &[u8]) {
      assert_eq!(
        Cursor::new(bytes).read_compact_size().unwrap_err().kind(),
        io::ErrorKind::InvalidData,
      );
    }

    case(&[0xfd, 0xfc, 0x00]);
    case(&[0xfe, 0xff, 0xff, 0x00, 0x00]);
    case(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]);
  }

  #[test]
  fn truncated() {
    assert_eq!(
      Cursor::new([0u8; 3]).read_u32().unwrap_err().kind(),
      io::ErrorKind::UnexpectedEof,
    );
  }

  #[test]
  fn endianness() {
    let mut cursor = Cursor::new([0x20, 0x8d, 0x20, 0x8d]);
    assert_eq!(cursor.read_u16_be().unwrap(), 8333);
    assert_eq!(cursor.read_u16_be().unwrap(), 8333);
  }
}
