use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Programme identifiers the backend knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Program {
    #[default]
    #[serde(rename = "EE1")]
    Ee1,
    #[serde(rename = "CS1")]
    Cs1,
    #[serde(rename = "MT1")]
    Mt1,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown program code {0:?} (expected one of EE1, CS1, MT1)")]
pub struct UnknownProgram(pub String);

impl Program {
    pub const ALL: [Program; 3] = [Program::Ee1, Program::Cs1, Program::Mt1];

    pub fn code(self) -> &'static str {
        match self {
            Program::Ee1 => "EE1",
            Program::Cs1 => "CS1",
            Program::Mt1 => "MT1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Program::Ee1 => "Electrical Engineering (EE1)",
            Program::Cs1 => "Computer Science (CS1)",
            Program::Mt1 => "Maths & Computing (MT1)",
        }
    }

    /// Whether the backend already publishes plans for this programme.
    pub fn is_available(self) -> bool {
        matches!(self, Program::Ee1)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Program {
    type Err = UnknownProgram;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Program::ALL
            .into_iter()
            .find(|program| program.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownProgram(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_parses_codes_case_insensitively() {
        assert_eq!("EE1".parse::<Program>().unwrap(), Program::Ee1);
        assert_eq!("mt1".parse::<Program>().unwrap(), Program::Mt1);
        assert!("ME1".parse::<Program>().is_err());
    }

    #[test]
    fn only_ee1_is_available() {
        assert!(Program::Ee1.is_available());
        assert!(!Program::Cs1.is_available());
        assert!(!Program::Mt1.is_available());
    }

    #[test]
    fn program_serializes_as_code() {
        assert_eq!(serde_yaml::to_string(&Program::Cs1).unwrap().trim(), "CS1");
        let parsed: Program = serde_yaml::from_str("MT1").unwrap();
        assert_eq!(parsed, Program::Mt1);
    }
}
