use super::*;

#[derive(Clone, Copy, Debug, EnumIter, Eq, IntoStaticStr, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Network {
  Mainnet,
  Testnet3,
  Testnet4,
  Signet,
  Regtest,
}

impl Network {
  pub(crate) fn from_magic(magic: [u8; 4]) -> Option<Self> {
    Self::iter().find(|network| network.magic() == magic)
  }

  pub(crate) fn magic(self) -> [u8; 4] {
    match self {
      Self::Mainnet => [0xf9, 0xbe, 0xb4, 0xd9],
      Self::Testnet3 => [0x0b, 0x11, 0x09, 0x07],
      Self::Testnet4 => [0x1c, 0x16, 0x3f, 0x28],
      Self::Signet => [0x0a, 0x03, 0xcf, 0x40],
      Self::Regtest => [0xfa, 0xbf, 0xb5, 0xda],
    }
  }

  fn name(self) -> &'static str {
    self.into()
  }
}

impl Display for Network {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn magic() {
    for network in Network::iter() {
      assert_eq!(Network::from_magic(network.magic()), Some(network));
    }

    assert_eq!(Network::from_magic([0, 0, 0, 0]), None);
  }

  #[test]
  fn display() {
    assert_eq!(Network::Mainnet.to_string(), "mainnet");
    assert_eq!(Network::Testnet4.to_string(), "testnet4");
  }
}
