use {
  super::*,
  crate::peer_database::{AddressLengthError, NetworkIdError, ReadError, Stage},
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub(crate) struct PeerRecord {
  pub(crate) service: Service,
  pub(crate) time: u32,
  pub(crate) services: u64,
  pub(crate) source: Host,
  pub(crate) last_success: i64,
  pub(crate) attempts: i32,
}

impl PeerRecord {
  /// Set in a record's stored version when its address uses BIP155
  /// encoding. The remaining bits are the version of the writer and are
  /// ignored.
  pub(crate) const DISK_VERSION_ADDRV2: u32 = 1 << 29;

  pub(crate) fn decode(
    reader: &mut impl Read,
    format: Format,
    stage: Stage,
  ) -> Result<Self, peer_database::Error> {
    let context = ReadError { stage };

    let version = reader.read_u32().context(context)?;

    let addrv2 = version & Self::DISK_VERSION_ADDRV2 != 0;

    let time = reader.read_u32().context(context)?;

    let services = if addrv2 {
      reader.read_compact_size()
    } else {
      reader.read_u64()
    };

    let services = services.context(context)?;

    let host = Self::decode_host(reader, addrv2, stage)?;

    let port = reader.read_u16_be().context(context)?;

    let source = Self::decode_host(reader, format.addrv2(), stage)?;

    let last_success = reader.read_i64().context(context)?;

    let attempts = reader.read_i32().context(context)?;

    Ok(Self {
      service: Service { host, port },
      time,
      services,
      source,
      last_success,
      attempts,
    })
  }

  fn decode_host(
    reader: &mut impl Read,
    addrv2: bool,
    stage: Stage,
  ) -> Result<Host, peer_database::Error> {
    let context = ReadError { stage };

    if !addrv2 {
      return Ok(Host::from_legacy(reader.read_bytes().context(context)?));
    }

    let network_id = reader.read_u8().context(context)?;

    let len = reader.read_compact_size().context(context)?;

    let expected = Host::addrv2_len(network_id).context(NetworkIdError { stage, network_id })?;

    ensure!(
      len == expected as u64,
      AddressLengthError {
        stage,
        network_id,
        len,
        expected,
      }
    );

    let mut bytes = vec![0; expected];

    reader.read_exact(&mut bytes).context(context)?;

    Host::from_addrv2(network_id, &bytes).context(NetworkIdError { stage, network_id })
  }
}
