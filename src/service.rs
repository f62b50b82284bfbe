use super::*;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Service {
  pub(crate) host: Host,
  pub(crate) port: u16,
}

impl Display for Service {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.host.is_ipv6_notation() {
      write!(f, "[{}]:{}", self.host, self.port)
    } else {
      write!(f, "{}:{}", self.host, self.port)
    }
  }
}

impl Serialize for Service {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.collect_str(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    #[track_caller]
    fn case(host: &str, port: u16, expected: &str) {
      assert_eq!(
        Service {
          host: host.parse().unwrap(),
          port,
        }
        .to_string(),
        expected,
      );
    }

    case("1.2.3.4", 8333, "1.2.3.4:8333");
    case("1.2.3.4", 18444, "1.2.3.4:18444");
    case("1.2.3.4", 1, "1.2.3.4:1");
    case("2001:db8::1", 8333, "[2001:db8::1]:8333");
    case("aaaaaaaaaaaaaaaa.onion", 8333, "aaaaaaaaaaaaaaaa.onion:8333");
  }
}
