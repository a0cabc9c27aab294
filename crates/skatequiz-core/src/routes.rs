//! Registry of quiz routes: which discipline/mode pairs exist and which
//! data file backs each one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Pair,
    Solo,
    Etc,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Pair => write!(f, "pair"),
            Discipline::Solo => write!(f, "solo"),
            Discipline::Etc => write!(f, "etc"),
        }
    }
}

impl FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pair" | "pairs" => Ok(Discipline::Pair),
            "solo" => Ok(Discipline::Solo),
            "etc" => Ok(Discipline::Etc),
            other => Err(format!("unknown discipline: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Multiple choice: pick the GOE reduction for an error.
    Penalties,
    /// Free recall of the six positive GOE bullets.
    Recall,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Penalties => write!(f, "penalties"),
            Mode::Recall => write!(f, "recall"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "penalties" | "minus" => Ok(Mode::Penalties),
            "recall" | "plus" => Ok(Mode::Recall),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub discipline: Discipline,
    pub mode: Mode,
    pub label: &'static str,
    /// Data file name under the data directory; `None` if not available yet.
    pub data_file: Option<&'static str>,
}

impl Route {
    pub fn is_available(&self) -> bool {
        self.data_file.is_some()
    }
}

/// Every route, in menu order.
pub const ROUTES: &[Route] = &[
    Route {
        discipline: Discipline::Pair,
        mode: Mode::Penalties,
        label: "Pair skating penalties",
        data_file: Some("pair-skating-minus.csv"),
    },
    Route {
        discipline: Discipline::Solo,
        mode: Mode::Penalties,
        label: "Solo skating penalties",
        data_file: None,
    },
    Route {
        discipline: Discipline::Etc,
        mode: Mode::Penalties,
        label: "ETC penalties",
        data_file: None,
    },
    Route {
        discipline: Discipline::Pair,
        mode: Mode::Recall,
        label: "Pair skating recall",
        data_file: Some("pair-skating-plus.csv"),
    },
    Route {
        discipline: Discipline::Solo,
        mode: Mode::Recall,
        label: "Solo skating recall",
        data_file: None,
    },
    Route {
        discipline: Discipline::Etc,
        mode: Mode::Recall,
        label: "ETC recall",
        data_file: None,
    },
];

/// Look up the route for a discipline and mode.
pub fn lookup(discipline: Discipline, mode: Mode) -> &'static Route {
    let column = match mode {
        Mode::Penalties => 0,
        Mode::Recall => 3,
    };
    let row = match discipline {
        Discipline::Pair => 0,
        Discipline::Solo => 1,
        Discipline::Etc => 2,
    };
    &ROUTES[column + row]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_pair_once() {
        for d in [Discipline::Pair, Discipline::Solo, Discipline::Etc] {
            for m in [Mode::Penalties, Mode::Recall] {
                let count = ROUTES
                    .iter()
                    .filter(|r| r.discipline == d && r.mode == m)
                    .count();
                assert_eq!(count, 1, "{d}/{m}");
            }
        }
    }

    #[test]
    fn lookup_returns_matching_entry() {
        for route in ROUTES {
            assert_eq!(lookup(route.discipline, route.mode), route);
        }
    }

    #[test]
    fn only_pair_is_available() {
        assert!(lookup(Discipline::Pair, Mode::Recall).is_available());
        assert_eq!(
            lookup(Discipline::Pair, Mode::Penalties).data_file,
            Some("pair-skating-minus.csv")
        );
        assert!(!lookup(Discipline::Solo, Mode::Recall).is_available());
        assert!(!lookup(Discipline::Etc, Mode::Penalties).is_available());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Pair".parse::<Discipline>().unwrap(), Discipline::Pair);
        assert_eq!("plus".parse::<Mode>().unwrap(), Mode::Recall);
        assert_eq!(Mode::Penalties.to_string(), "penalties");
        assert!("ice dance".parse::<Discipline>().is_err());
    }
}
