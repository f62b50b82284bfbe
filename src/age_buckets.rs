use super::*;

pub(crate) const DAY: i64 = 24 * 60 * 60;

#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq)]
pub(crate) enum AgeBucket {
  Day,
  OneToFiveDays,
  FiveToTenDays,
  TenToThirtyDays,
  OverThirtyDays,
}

impl AgeBucket {
  /// Bucket for a record `age` seconds older than the reference time. The
  /// first bucket is closed above, the rest are closed below, and negative
  /// ages fall into the first.
  pub(crate) fn classify(age: i64) -> Self {
    if age <= DAY {
      Self::Day
    } else if age < 5 * DAY {
      Self::OneToFiveDays
    } else if age < 10 * DAY {
      Self::FiveToTenDays
    } else if age < 30 * DAY {
      Self::TenToThirtyDays
    } else {
      Self::OverThirtyDays
    }
  }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub(crate) struct AgeBuckets {
  pub(crate) day: usize,
  pub(crate) one_to_five_days: usize,
  pub(crate) five_to_ten_days: usize,
  pub(crate) ten_to_thirty_days: usize,
  pub(crate) over_thirty_days: usize,
}

impl AgeBuckets {
  pub(crate) fn tally(records: &[PeerRecord], reference: u32) -> Self {
    let mut buckets = Self::default();

    for record in records {
      *buckets.count_mut(AgeBucket::classify(
        i64::from(reference) - i64::from(record.time),
      )) += 1;
    }

    buckets
  }

  pub(crate) fn count(&self, bucket: AgeBucket) -> usize {
    match bucket {
      AgeBucket::Day => self.day,
      AgeBucket::OneToFiveDays => self.one_to_five_days,
      AgeBucket::FiveToTenDays => self.five_to_ten_days,
      AgeBucket::TenToThirtyDays => self.ten_to_thirty_days,
      AgeBucket::OverThirtyDays => self.over_thirty_days,
    }
  }

  fn count_mut(&mut self, bucket: AgeBucket) -> &mut usize {
    match bucket {
      AgeBucket::Day => &mut self.day,
      AgeBucket::OneToFiveDays => &mut self.one_to_five_days,
      AgeBucket::FiveToTenDays => &mut self.five_to_ten_days,
      AgeBucket::TenToThirtyDays => &mut self.ten_to_thirty_days,
      AgeBucket::OverThirtyDays => &mut self.over_thirty_days,
    }
  }

  pub(crate) fn total(&self) -> usize {
    AgeBucket::iter().map(|bucket| self.count(bucket)).sum()
  }
}
