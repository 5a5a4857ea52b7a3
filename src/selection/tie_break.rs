use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Rule for choosing among equally good options.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "String", into = "String")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// The smallest index among the contenders
    #[default]
    LowestIndex,
    /// The largest index among the contenders
    HighestIndex,
}

impl TieBreak {
    /// Pick one of `contenders` according to the rule.
    ///
    /// Returns `None` only when there are no contenders.
    pub fn resolve<I>(self, contenders: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        match self {
            TieBreak::LowestIndex => contenders.into_iter().min(),
            TieBreak::HighestIndex => contenders.into_iter().max(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::LowestIndex => "lowest_index",
            TieBreak::HighestIndex => "highest_index",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowest_index" | "lowest" | "min" => Ok(TieBreak::LowestIndex),
            "highest_index" | "highest" | "max" => Ok(TieBreak::HighestIndex),
            _ => Err(ConfigError::UnknownTieBreak(s.to_string())),
        }
    }
}

impl TryFrom<String> for TieBreak {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TieBreak> for String {
    fn from(tie_break: TieBreak) -> Self {
        tie_break.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let contenders = [3, 1, 2];
        assert_eq!(TieBreak::LowestIndex.resolve(contenders), Some(1));
        assert_eq!(TieBreak::HighestIndex.resolve(contenders), Some(3));
        assert_eq!(TieBreak::HighestIndex.resolve(Vec::new()), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("min".parse(), Ok(TieBreak::LowestIndex));
        assert_eq!("Lowest".parse(), Ok(TieBreak::LowestIndex));
        assert_eq!("lowest_index".parse(), Ok(TieBreak::LowestIndex));
        assert_eq!("max".parse(), Ok(TieBreak::HighestIndex));
        assert_eq!(" HIGHEST_INDEX ".parse(), Ok(TieBreak::HighestIndex));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "median".parse::<TieBreak>(),
            Err(ConfigError::UnknownTieBreak("median".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for tie_break in [TieBreak::LowestIndex, TieBreak::HighestIndex] {
            assert_eq!(tie_break.to_string().parse(), Ok(tie_break));
        }
    }
}
