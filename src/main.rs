#![allow(clippy::result_large_err)]

use {
  self::{
    address_table::AddressTable,
    age_buckets::{AgeBucket, AgeBuckets, DAY}, error::Error, format::Format, host::Host,
    network::Network, path_ext::PathExt, peer_database::PeerDatabase, peer_record::PeerRecord,
    reachability::Reachability, read_ext::ReadExt, service::Service, subcommand::Subcommand,
    summary::Summary, table::Table, table_stats::TableStats, timestamps::Timestamps,
  },
  camino::{Utf8Path, Utf8PathBuf},
  clap::Parser,
  libc::EXIT_FAILURE,
  regex::Regex,
  regex_static::{lazy_regex, once_cell::sync::Lazy},
  serde::{Serialize, Serializer},
  snafu::{ensure, ErrorCompat, OptionExt, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::HashSet,
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io::{self, BufRead, BufReader, Read},
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    num::ParseIntError,
    path::PathBuf,
    process,
    str::FromStr,
  },
  strum::{EnumIter, IntoEnumIterator, IntoStaticStr},
  walkdir::WalkDir,
};


#[cfg(test)]
use test::*;

mod address_table;
mod age_buckets;
mod error;
mod format;
mod host;
mod network;
mod path_ext;
mod peer_database;
mod peer_record;
mod reachability;
mod read_ext;
mod service;
mod subcommand;
mod summary;
mod table;
mod table_stats;
mod timestamps;

#[cfg(test)]
mod write_ext;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
