use {super::*, crate::peer_database::Stage};

#[derive(Debug)]
pub(crate) struct AddressTable {
  records: Vec<PeerRecord>,
  table: Table,
}

impl AddressTable {
  pub(crate) fn decode(
    reader: &mut impl Read,
    format: Format,
    table: Table,
    declared: usize,
  ) -> Result<Self, peer_database::Error> {
    let mut records = Vec::with_capacity(declared);

    for index in 0..declared {
      records.push(PeerRecord::decode(
        reader,
        format,
        Stage::Record { table, index },
      )?);
    }

    log::debug!("decoded {declared} {table} table records");

    Ok(Self { records, table })
  }

  #[cfg(test)]
  pub(crate) fn new(table: Table, records: Vec<PeerRecord>) -> Self {
    Self { records, table }
  }

  /// Distinct hosts in this table, keyed for reachability matching. Ports
  /// are not part of the key.
  pub(crate) fn hosts(&self) -> HashSet<Host> {
    self
      .records
      .iter()
      .map(|record| record.service.host.reachability_key())
      .collect()
  }

  #[cfg(test)]
  pub(crate) fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.records.len()
  }

  pub(crate) fn newest(&self) -> Option<u32> {
    self.records.iter().map(|record| record.time).max()
  }

  pub(crate) fn oldest(&self) -> Option<u32> {
    self.records.iter().map(|record| record.time).min()
  }

  pub(crate) fn records(&self) -> &[PeerRecord] {
    &self.records
  }

  pub(crate) fn table(&self) -> Table {
    self.table
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hosts_ignore_port() {
    let table = AddressTable::new(
      Table::New,
      vec![
        record("1.2.3.4", 8333, 0),
        record("1.2.3.4", 18333, 0),
        record("1.2.3.4", 1, 0),
        record("5.6.7.8", 8333, 0),
      ],
    );

    assert_eq!(
      table.hosts(),
      ["1.2.3.4", "5.6.7.8"]
        .into_iter()
        .map(|host| host.parse().unwrap())
        .collect::<HashSet<Host>>(),
    );
  }

  #[test]
  fn hosts_key_cjdns_as_ipv6() {
    let ip = "fc32:17ea:e415:c3bf:9808:149d:b5a2:c9aa".parse().unwrap();

    let mut record = record("1.2.3.4", 8333, 0);
    record.service.host = Host::Cjdns(ip);

    let table = AddressTable::new(Table::Tried, vec![record]);

    assert!(table.hosts().contains(&Host::Ipv6(ip)));
  }

  #[test]
  fn extremes() {
    let table = AddressTable::new(
      Table::New,
      vec![
        record("1.2.3.4", 8333, 50),
        record("1.2.3.5", 8333, 10),
        record("1.2.3.6", 8333, 90),
      ],
    );

    assert_eq!(table.oldest(), Some(10));
    assert_eq!(table.newest(), Some(90));

    let empty = AddressTable::new(Table::New, Vec::new());

    assert_eq!(empty.oldest(), None);
    assert_eq!(empty.newest(), None);
  }
}
