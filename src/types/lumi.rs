use serde::{Serialize, Serializer};

pub type RunNumber = u32;
pub type LumiSection = u32;

/// End boundary of a lumi-section interval.
///
/// `OpenEnded` compares greater than every finite lumi section, so a period
/// ending with it extends to the end of its run.
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum LsEnd {
    At(LumiSection),
    OpenEnded,
}

impl LsEnd {
    pub fn finite(&self) -> Option<LumiSection> {
        match self {
            LsEnd::At(ls) => Some(*ls),
            LsEnd::OpenEnded => None,
        }
    }

    /// Smaller of this bound and a finite lumi section.
    pub fn cap(self, ls: LumiSection) -> LumiSection {
        match self {
            LsEnd::At(end) => end.min(ls),
            LsEnd::OpenEnded => ls,
        }
    }
}

impl std::fmt::Display for LsEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LsEnd::At(ls) => write!(f, "{ls}"),
            LsEnd::OpenEnded => write!(f, "inf"),
        }
    }
}

impl Serialize for LsEnd {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LsEnd::At(ls) => serializer.serialize_u32(*ls),
            LsEnd::OpenEnded => serializer.serialize_str("inf"),
        }
    }
}

// Closed range
#[derive(PartialOrd, Ord, PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize)]
pub struct LumiRange {
    pub min_ls: LumiSection,
    pub max_ls: LumiSection,
}

impl LumiRange {
    pub fn new(min_ls: LumiSection, max_ls: LumiSection) -> Self {
        assert!(
            min_ls <= max_ls,
            "Invalid lumi range: {min_ls} is not <= {max_ls}"
        );
        Self { min_ls, max_ls }
    }

    pub fn contains(&self, ls: LumiSection) -> bool {
        self.min_ls <= ls && ls <= self.max_ls
    }

    /// Part of `[min_ls, max_ls]` that lies within this range, if any.
    pub fn intersect(&self, min_ls: LumiSection, max_ls: LsEnd) -> Option<LumiRange> {
        let lo = self.min_ls.max(min_ls);
        let hi = max_ls.cap(self.max_ls);
        (lo <= hi).then_some(LumiRange {
            min_ls: lo,
            max_ls: hi,
        })
    }
}

impl std::fmt::Display for LumiRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min_ls, self.max_ls)
    }
}
