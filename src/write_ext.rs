use {super::*, std::io::Write};

pub(crate) trait WriteExt {
  fn write_compact_size(&mut self, value: u64) -> io::Result<()>;

  fn write_i32(&mut self, value: i32) -> io::Result<()>;

  fn write_i64(&mut self, value: i64) -> io::Result<()>;

  fn write_u16_be(&mut self, value: u16) -> io::Result<()>;

  fn write_u32(&mut self, value: u32) -> io::Result<()>;

  fn write_u64(&mut self, value: u64) -> io::Result<()>;

  fn write_u8(&mut self, value: u8) -> io::Result<()>;
}

impl<T: Write> WriteExt for T {
  fn write_compact_size(&mut self, value: u64) -> io::Result<()> {
    match value {
      0..=0xfc => self.write_u8(value as u8),
      0xfd..=0xffff => {
        self.write_u8(0xfd)?;
        self.write_all(&(value as u16).to_le_bytes())
      }
      0x1_0000..=0xffff_ffff => {
        self.write_u8(0xfe)?;
        self.write_u32(value as u32)
      }
      _ => {
        self.write_u8(0xff)?;
        self.write_u64(value)
      }
    }
  }

  fn write_i32(&mut self, value: i32) -> io::Result<()> {
    self.write_all(&value.to_le_bytes())
  }

  fn write_i64(&mut self, value: i64) -> io::Result<()> {
    self.write_all(&value.to_le_bytes())
  }

  fn write_u16_be(&mut self, value: u16) -> io::Result<()> {
    self.write_all(&value.to_be_bytes())
  }

  fn write_u32(&mut self, value: u32) -> io::Result<()> {
    self.write_all(&value.to_le_bytes())
  }

  fn write_u64(&mut self, value: u64) -> io::Result<()> {
    self.write_all(&value.to_le_bytes())
  }

  fn write_u8(&mut self, value: u8) -> io::Result<()> {
    self.write_all(&[value])
  }
}
