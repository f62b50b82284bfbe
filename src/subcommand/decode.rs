use super::*;

#[derive(Debug, Parser)]
pub struct Decode {
  #[arg(long, help = "Read peer database from <PEERS>.")]
  peers: Utf8PathBuf,
  #[arg(long, help = "Include every record in output.")]
  records: bool,
}

#[derive(Serialize)]
struct Output<'a> {
  network: Network,
  format: Format,
  buckets: i32,
  approximate_age: Option<u32>,
  new: TableOutput<'a>,
  tried: TableOutput<'a>,
}

#[derive(Serialize)]
struct TableOutput<'a> {
  count: usize,
  oldest: Option<u32>,
  newest: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  records: Option<&'a [PeerRecord]>,
}

impl Decode {
  pub fn run(self) -> Result {
    let database = PeerDatabase::load(&self.peers)?;

    serde_json::to_writer_pretty(io::stdout().lock(), &self.output(&database))
      .context(error::Stdout)?;

    println!();

    Ok(())
  }

  fn output<'a>(&self, database: &'a PeerDatabase) -> Output<'a> {
    let table = |table: Table| {
      let table = database.table(table);

      TableOutput {
        count: table.len(),
        oldest: table.oldest(),
        newest: table.newest(),
        records: self.records.then(|| table.records()),
      }
    };

    Output {
      network: database.network,
      format: database.format,
      buckets: database.buckets,
      approximate_age: database.approximate_age(),
      new: table(Table::New),
      tried: table(Table::Tried),
    }
  }
}
