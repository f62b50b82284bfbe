use {
  super::*,
  clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
  },
};

mod decode;
mod stats;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Compare a peer database against a reachability corpus",
  styles = Styles::styled()
    .header(AnsiColor::Green.on_default() | Effects::BOLD)
    .usage(AnsiColor::Green.on_default() | Effects::BOLD)
    .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
    .placeholder(AnsiColor::Cyan.on_default()))
]
pub enum Subcommand {
  Decode(decode::Decode),
  Stats(stats::Stats),
}

impl Subcommand {
  pub fn run(self) -> Result {
    match self {
      Self::Decode(decode) => decode.run(),
      Self::Stats(stats) => stats.run(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse() {
    assert_matches!(
      Subcommand::try_parse_from([
        "peerstat",
        "stats",
        "--peers",
        "node/peers.dat",
        "--corpus",
        "bitnodes",
      ]),
      Ok(Subcommand::Stats(_)),
    );

    assert_matches!(
      Subcommand::try_parse_from(["peerstat", "decode", "--peers", "peers.dat", "--records"]),
      Ok(Subcommand::Decode(_)),
    );

    assert!(Subcommand::try_parse_from(["peerstat", "stats", "--peers", "peers.dat"]).is_err());
  }
}
