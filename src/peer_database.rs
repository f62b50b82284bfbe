use super::*;

/// Position in the snapshot at which decoding stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Stage {
  Magic,
  Format,
  Key,
  Count(Table),
  Buckets,
  Record { table: Table, index: usize },
}

impl Display for Stage {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Magic => write!(f, "network magic"),
      Self::Format => write!(f, "format header"),
      Self::Key => write!(f, "bucket key"),
      Self::Count(table) => write!(f, "{table} table count"),
      Self::Buckets => write!(f, "bucket count"),
      Self::Record { table, index } => write!(f, "{table} table record {index}"),
    }
  }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Error)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display(
    "{stage} has {len}-byte address for network {network_id}, expected {expected} bytes"
  ))]
  AddressLength {
    backtrace: Option<Backtrace>,
    expected: usize,
    len: u64,
    network_id: u8,
    stage: Stage,
  },
  #[snafu(display(
    "compat value {compat} is lower than the minimum {}",
    Format::INCOMPATIBILITY_BASE
  ))]
  Compat {
    backtrace: Option<Backtrace>,
    compat: u8,
  },
  #[snafu(display("{table} table count {count} outside of range 0..={}", table.capacity()))]
  Count {
    backtrace: Option<Backtrace>,
    count: i32,
    table: Table,
  },
  #[snafu(display(
    "database requires format version {lowest_compatible}, only versions up to {} are supported",
    Format::LATEST
  ))]
  Incompatible {
    backtrace: Option<Backtrace>,
    lowest_compatible: u8,
  },
  #[snafu(display("unrecognized network magic `{}`", hex::encode(magic)))]
  Magic {
    backtrace: Option<Backtrace>,
    magic: [u8; 4],
  },
  #[snafu(display("{stage} has unknown network id {network_id}"))]
  NetworkId {
    backtrace: Option<Backtrace>,
    network_id: u8,
    stage: Stage,
  },
  #[snafu(display("failed to read {stage}"))]
  Read {
    backtrace: Option<Backtrace>,
    source: io::Error,
    stage: Stage,
  },
}

/// A successfully decoded peer database. Values of this type only come from
/// `decode`, so holding one means every declared record was read.
#[derive(Debug)]
pub(crate) struct PeerDatabase {
  pub(crate) buckets: i32,
  pub(crate) format: Format,
  pub(crate) network: Network,
  pub(crate) new: AddressTable,
  pub(crate) tried: AddressTable,
}

impl PeerDatabase {
  const BUCKET_COUNT_FLAG: i32 = 1 << 30;

  pub(crate) fn load(path: &Utf8Path) -> crate::Result<Self> {
    let file = File::open(path).context(error::Io { path })?;

    Self::decode(&mut BufReader::new(file)).context(error::Decode { path })
  }

  pub(crate) fn decode(reader: &mut impl Read) -> Result<Self, Error> {
    let magic = reader.read_bytes().context(ReadError {
      stage: Stage::Magic,
    })?;

    let network = Network::from_magic(magic).context(MagicError { magic })?;

    let format = Self::decode_format(reader)?;

    log::debug!("decoding {network} peer database, format {format}");

    reader.read_bytes::<32>().context(ReadError { stage: Stage::Key })?;

    let new = Self::decode_count(reader, Table::New)?;

    let tried = Self::decode_count(reader, Table::Tried)?;

    let buckets = reader.read_i32().context(ReadError {
      stage: Stage::Buckets,
    })? ^ Self::BUCKET_COUNT_FLAG;

    let new = AddressTable::decode(reader, format, Table::New, new)?;

    let tried = AddressTable::decode(reader, format, Table::Tried, tried)?;

    Ok(Self {
      buckets,
      format,
      network,
      new,
      tried,
    })
  }

  fn decode_format(reader: &mut impl Read) -> Result<Format, Error> {
    let context = ReadError {
      stage: Stage::Format,
    };

    let version = reader.read_u8().context(context)?;

    let compat = reader.read_u8().context(context)?;

    let lowest_compatible = compat
      .checked_sub(Format::INCOMPATIBILITY_BASE)
      .context(CompatError { compat })?;

    ensure!(
      lowest_compatible <= Format::LATEST,
      IncompatibleError { lowest_compatible }
    );

    Ok(Format {
      version,
      lowest_compatible,
    })
  }

  fn decode_count(reader: &mut impl Read, table: Table) -> Result<usize, Error> {
    let count = reader.read_i32().context(ReadError {
      stage: Stage::Count(table),
    })?;

    ensure!(
      (0..=table.capacity()).contains(&count),
      CountError { count, table }
    );

    usize::try_from(count).ok().context(CountError { count, table })
  }

  /// Most recent last-seen time over both tables, taken as the time the
  /// snapshot was written. `None` if both tables are empty.
  pub(crate) fn approximate_age(&self) -> Option<u32> {
    self.new.newest().max(self.tried.newest())
  }

  pub(crate) fn table(&self, table: Table) -> &AddressTable {
    match table {
      Table::New => &self.new,
      Table::Tried => &self.tried,
    }
  }
}
