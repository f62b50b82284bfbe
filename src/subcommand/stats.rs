use {super::*, chrono::DateTime};

const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Parser)]
pub struct Stats {
  #[arg(long, help = "Read peer database from <PEERS>.")]
  peers: Utf8PathBuf,
  #[arg(
    long,
    help = "Match against reachability corpus snapshots `<TIMESTAMP>.txt` in <CORPUS>."
  )]
  corpus: Utf8PathBuf,
  #[arg(
    long,
    help = "Read available corpus timestamps from <TIMESTAMPS>, one per line, in ascending \
            order. Defaults to the timestamps of the snapshots in <CORPUS>."
  )]
  timestamps: Option<Utf8PathBuf>,
  #[arg(
    long,
    help = "Write statistics to <OUTPUT>. Defaults to the directory containing <PEERS>."
  )]
  output: Option<Utf8PathBuf>,
  #[arg(long, help = "Also print statistics to stdout as JSON.")]
  json: bool,
}

impl Stats {
  const HEADER: &'static str = "Approx_Peerdat_Date,Oldest_IP_Days,Total_IPs,PercentReachable,\
                                Age_1,Age_1_5,Age_5_10,Age_10_30,Age_30";

  pub fn run(self) -> Result {
    let database = PeerDatabase::load(&self.peers)?;

    log::info!(
      "decoded {} new and {} tried records from `{}`",
      database.new.len(),
      database.tried.len(),
      self.peers,
    );

    let timestamps = match &self.timestamps {
      Some(path) => Timestamps::load(path)?,
      None => Timestamps::scan(&self.corpus)?,
    };

    let summary = Summary::compute(&database, &self.corpus, &timestamps)?;

    let output = match &self.output {
      Some(output) => output.clone(),
      None => self.peers.parent().map(Utf8Path::to_owned).unwrap_or_default(),
    };

    for table in Table::iter() {
      let path = output.join(table.stats_file());

      fs::write(
        &path,
        format!("{}\n{}\n", Self::HEADER, Self::row(&summary, table)),
      )
      .context(error::Io { path: &path })?;
    }

    if self.json {
      serde_json::to_writer_pretty(io::stdout().lock(), &summary).context(error::Stdout)?;
      println!();
    }

    Ok(())
  }

  fn row(summary: &Summary, table: Table) -> String {
    let stats = summary.table(table);

    let date = DateTime::from_timestamp(summary.reference.into(), 0)
      .map(|date| date.format("%b %-d %Y").to_string())
      .unwrap_or_else(|| summary.reference.to_string());

    let mut fields = vec![
      date,
      stats
        .oldest_days()
        .map_or_else(|_| NOT_APPLICABLE.into(), |days| days.to_string()),
      stats.total.to_string(),
      stats.fraction().map_or_else(
        |_| NOT_APPLICABLE.into(),
        |fraction| format!("{:.2}", fraction * 100.0),
      ),
    ];

    fields.extend(
      AgeBucket::iter().map(|bucket| stats.buckets.count(bucket).to_string()),
    );

    fields.join(",")
  }
}
