use strum_macros::EnumIter;

/// Trailing window choices offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum TimeFrame {
    OneMinute,
    #[default]
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
}

impl TimeFrame {
    pub fn minutes(self) -> u32 {
        match self {
            TimeFrame::OneMinute => 1,
            TimeFrame::FiveMinutes => 5,
            TimeFrame::FifteenMinutes => 15,
            TimeFrame::ThirtyMinutes => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1m",
            TimeFrame::FiveMinutes => "5m",
            TimeFrame::FifteenMinutes => "15m",
            TimeFrame::ThirtyMinutes => "30m",
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            1 => Some(TimeFrame::OneMinute),
            5 => Some(TimeFrame::FiveMinutes),
            15 => Some(TimeFrame::FifteenMinutes),
            30 => Some(TimeFrame::ThirtyMinutes),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn options_are_the_four_dashboard_windows() {
        let minutes: Vec<u32> = TimeFrame::iter().map(TimeFrame::minutes).collect();
        assert_eq!(minutes, vec![1, 5, 15, 30]);
        assert_eq!(TimeFrame::default().minutes(), 5);
    }

    #[test]
    fn minutes_round_trip_through_lookup() {
        for tf in TimeFrame::iter() {
            assert_eq!(TimeFrame::from_minutes(tf.minutes()), Some(tf));
        }
        assert_eq!(TimeFrame::from_minutes(60), None);
    }
}
