use {
  super::*,
  sha3::{Digest, Sha3_256},
};

const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

const TORV3_VERSION: u8 = 3;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Error)))]
pub(crate) enum Error {
  #[snafu(display("invalid host `{input}`"))]
  Invalid { input: String },
  #[snafu(display("invalid checksum in onion address `{input}`"))]
  OnionChecksum { input: String },
  #[snafu(display("unsupported onion address version {version} in `{input}`"))]
  OnionVersion { input: String, version: u8 },
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Host {
  Ipv4(Ipv4Addr),
  Ipv6(Ipv6Addr),
  TorV2([u8; 10]),
  TorV3([u8; 32]),
  I2p([u8; 32]),
  Cjdns(Ipv6Addr),
  Internal([u8; 10]),
}

impl Host {
  const INTERNAL_PREFIX: [u8; 6] = [0xfd, 0x6b, 0x88, 0xc0, 0x87, 0x24];

  const ONIONCAT_PREFIX: [u8; 6] = [0xfd, 0x87, 0xd8, 0x7e, 0xeb, 0x43];

  /// Address length for a BIP155 network id, or `None` if the id is unknown.
  pub(crate) fn addrv2_len(network_id: u8) -> Option<usize> {
    match network_id {
      1 => Some(4),
      2 | 6 => Some(16),
      3 => Some(10),
      4 | 5 => Some(32),
      _ => None,
    }
  }

  pub(crate) fn from_addrv2(network_id: u8, bytes: &[u8]) -> Option<Self> {
    Some(match network_id {
      1 => Self::Ipv4(array::<4>(bytes)?.into()),
      2 => Self::Ipv6(array::<16>(bytes)?.into()),
      3 => Self::TorV2(array(bytes)?),
      4 => Self::TorV3(array(bytes)?),
      5 => Self::I2p(array(bytes)?),
      6 => Self::Cjdns(array::<16>(bytes)?.into()),
      _ => return None,
    })
  }

  /// Decode the pre-BIP155 encoding, in which every host is squeezed into
  /// sixteen bytes of IPv6 address space.
  pub(crate) fn from_legacy(bytes: [u8; 16]) -> Self {
    let ip = Ipv6Addr::from(bytes);

    if let Some(ipv4) = ip.to_ipv4_mapped() {
      return Self::Ipv4(ipv4);
    }

    let (prefix, rest) = bytes.split_at(6);

    match (array::<10>(rest), prefix) {
      (Some(rest), prefix) if prefix == Self::ONIONCAT_PREFIX => Self::TorV2(rest),
      (Some(rest), prefix) if prefix == Self::INTERNAL_PREFIX => Self::Internal(rest),
      _ => Self::Ipv6(ip),
    }
  }

  /// CJDNS hosts live in `fc00::/8` and are listed in IPv6 notation, so
  /// they are keyed as IPv6 when matching against other sources.
  pub(crate) fn reachability_key(self) -> Self {
    match self {
      Self::Cjdns(ip) => Self::Ipv6(ip),
      host => host,
    }
  }

  pub(crate) fn is_ipv6_notation(self) -> bool {
    matches!(self, Self::Ipv6(_) | Self::Cjdns(_))
  }
}

impl Display for Host {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Ipv4(ip) => write!(f, "{ip}"),
      Self::Ipv6(ip) | Self::Cjdns(ip) => write!(f, "{ip}"),
      Self::TorV2(bytes) => write!(f, "{}.onion", base32_encode(bytes)),
      Self::TorV3(pubkey) => {
        let mut bytes = pubkey.to_vec();
        bytes.extend_from_slice(&onion_checksum(pubkey));
        bytes.push(TORV3_VERSION);
        write!(f, "{}.onion", base32_encode(&bytes))
      }
      Self::I2p(bytes) => write!(f, "{}.b32.i2p", base32_encode(bytes)),
      Self::Internal(bytes) => write!(f, "{}.internal", base32_encode(bytes)),
    }
  }
}

impl FromStr for Host {
  type Err = Error;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let host = input
      .strip_prefix('[')
      .and_then(|host| host.strip_suffix(']'))
      .unwrap_or(input);

    if let Some(encoded) = host.strip_suffix(".onion") {
      let bytes = base32_decode(encoded).context(InvalidError { input })?;

      if let Some(bytes) = array::<10>(&bytes) {
        return Ok(Self::TorV2(bytes));
      }

      let bytes = array::<35>(&bytes).context(InvalidError { input })?;

      let version = bytes[34];

      ensure!(
        version == TORV3_VERSION,
        OnionVersionError { input, version }
      );

      let pubkey = array::<32>(&bytes[..32]).context(InvalidError { input })?;

      ensure!(
        onion_checksum(&pubkey) == bytes[32..34],
        OnionChecksumError { input }
      );

      return Ok(Self::TorV3(pubkey));
    }

    if let Some(encoded) = host.strip_suffix(".b32.i2p") {
      return base32_decode(encoded)
        .as_deref()
        .and_then(array)
        .map(Self::I2p)
        .context(InvalidError { input });
    }

    if let Some(encoded) = host.strip_suffix(".internal") {
      return base32_decode(encoded)
        .as_deref()
        .and_then(array)
        .map(Self::Internal)
        .context(InvalidError { input });
    }

    match host.parse::<IpAddr>().ok().context(InvalidError { input })? {
      IpAddr::V4(ip) => Ok(Self::Ipv4(ip)),
      IpAddr::V6(ip) => Ok(
        ip.to_ipv4_mapped()
          .map(Self::Ipv4)
          .unwrap_or(Self::Ipv6(ip)),
      ),
    }
  }
}

impl Serialize for Host {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

fn array<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
  bytes.try_into().ok()
}

fn onion_checksum(pubkey: &[u8; 32]) -> [u8; 2] {
  let mut hasher = Sha3_256::new();
  hasher.update(b".onion checksum");
  hasher.update(pubkey);
  hasher.update([TORV3_VERSION]);
  let digest = hasher.finalize();
  [digest[0], digest[1]]
}

fn base32_encode(bytes: &[u8]) -> String {
  let mut output = String::with_capacity(bytes.len() * 8 / 5 + 1);
  let mut buffer = 0u32;
  let mut bits = 0u32;

  for byte in bytes {
    buffer = (buffer << 8) | u32::from(*byte);
    bits += 8;

    while bits >= 5 {
      bits -= 5;
      output.push(BASE32_ALPHABET[((buffer >> bits) & 0x1f) as usize].into());
    }
  }

  if bits > 0 {
    output.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize].into());
  }

  output
}

fn base32_decode(input: &str) -> Option<Vec<u8>> {
  let mut output = Vec::with_capacity(input.len() * 5 / 8);
  let mut buffer = 0u32;
  let mut bits = 0u32;

  for c in input.bytes() {
    let value = match c {
      b'a'..=b'z' => c - b'a',
      b'A'..=b'Z' => c - b'A',
      b'2'..=b'7' => c - b'2' + 26,
      _ => return None,
    };

    buffer = (buffer << 5) | u32::from(value);
    bits += 5;

    if bits >= 8 {
      bits -= 8;
      output.push((buffer >> bits) as u8);
    }
  }

  // trailing bits are padding and must be zero
  if buffer & ((1u32 << bits) - 1) != 0 {
    return None;
  }

  Some(output)
}
