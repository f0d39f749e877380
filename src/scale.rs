/// Ordinal color tier assigned to a day based on its assessment count.
///
/// The six tiers partition the non-negative integers with closed, ascending
/// ranges, so every count maps to exactly one bucket.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Bucket {
    Zero,
    Faint,
    Low,
    Mid,
    High,
    Top,
}

impl Bucket {
    pub(crate) const ALL: [Bucket; 6] = [
        Bucket::Zero,
        Bucket::Faint,
        Bucket::Low,
        Bucket::Mid,
        Bucket::High,
        Bucket::Top,
    ];

    pub(crate) fn for_count(count: u32) -> Bucket {
        match count {
            0 => Bucket::Zero,
            1..=2 => Bucket::Faint,
            3..=5 => Bucket::Low,
            6..=8 => Bucket::Mid,
            9..=11 => Bucket::High,
            _ => Bucket::Top,
        }
    }

    pub(crate) fn range(self) -> &'static str {
        match self {
            Bucket::Zero => "0",
            Bucket::Faint => "1-2",
            Bucket::Low => "3-5",
            Bucket::Mid => "6-8",
            Bucket::High => "9-11",
            Bucket::Top => "12+",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Bucket::Zero => "0 assessments",
            Bucket::Faint => "1-2 assessments",
            Bucket::Low => "3-5 assessments",
            Bucket::Mid => "6-8 assessments",
            Bucket::High => "9-11 assessments",
            Bucket::Top => "12+ assessments",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Bucket::for_count(0), Bucket::Zero);
        assert_eq!(Bucket::for_count(1), Bucket::Faint);
        assert_eq!(Bucket::for_count(2), Bucket::Faint);
        assert_eq!(Bucket::for_count(3), Bucket::Low);
        assert_eq!(Bucket::for_count(5), Bucket::Low);
        assert_eq!(Bucket::for_count(6), Bucket::Mid);
        assert_eq!(Bucket::for_count(7), Bucket::Mid);
        assert_eq!(Bucket::for_count(8), Bucket::Mid);
        assert_eq!(Bucket::for_count(9), Bucket::High);
        assert_eq!(Bucket::for_count(11), Bucket::High);
        assert_eq!(Bucket::for_count(12), Bucket::Top);
        assert_eq!(Bucket::for_count(u32::MAX), Bucket::Top);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = Bucket::for_count(0);
        for count in 1..=40 {
            let bucket = Bucket::for_count(count);
            assert!(prev <= bucket);
            prev = bucket;
        }
    }

    #[test]
    fn test_all_in_ascending_order() {
        for pair in Bucket::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Bucket::Zero.label(), "0 assessments");
        assert_eq!(Bucket::Mid.label(), "6-8 assessments");
        assert_eq!(Bucket::Top.label(), "12+ assessments");
        assert_eq!(Bucket::High.range(), "9-11");
    }
}
