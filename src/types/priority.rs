use std::fmt;

use colored::Colorize;

/// Priority levels for issues, matching Linear's 0-4 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// No priority (0)
    None = 0,
    /// Urgent priority (1)
    Urgent = 1,
    /// High priority (2)
    High = 2,
    /// Medium priority (3)
    Medium = 3,
    /// Low priority (4)
    Low = 4,
}

impl Priority {
    /// Create Priority from an integer value.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Priority::Urgent,
            2 => Priority::High,
            3 => Priority::Medium,
            4 => Priority::Low,
            _ => Priority::None,
        }
    }

    /// Get the integer value for the wire.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the label for this priority.
    pub fn label(self) -> &'static str {
        match self {
            Priority::None => "None",
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        match self {
            Priority::None => label.to_string(),
            Priority::Urgent => label.red().bold().to_string(),
            Priority::High => label.yellow().bold().to_string(),
            Priority::Medium => label.blue().to_string(),
            Priority::Low => label.bright_black().to_string(),
        }
    }

    /// Parse a CLI argument: the 0-4 digit or a case-insensitive level name.
    pub fn parse_arg(value: &str) -> Result<Self, String> {
        match value.to_lowercase().as_str() {
            "0" | "none" => Ok(Priority::None),
            "1" | "urgent" => Ok(Priority::Urgent),
            "2" | "high" => Ok(Priority::High),
            "3" | "medium" => Ok(Priority::Medium),
            "4" | "low" => Ok(Priority::Low),
            other => Err(format!(
                "invalid priority '{other}' (expected 0-4 or none/urgent/high/medium/low)"
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_i32_covers_the_scale() {
        assert_eq!(Priority::from_i32(0), Priority::None);
        assert_eq!(Priority::from_i32(1), Priority::Urgent);
        assert_eq!(Priority::from_i32(4), Priority::Low);
        // Out-of-range values degrade to None rather than panicking.
        assert_eq!(Priority::from_i32(9), Priority::None);
    }

    #[test]
    fn as_i32_round_trips() {
        for value in 0..=4 {
            assert_eq!(Priority::from_i32(value).as_i32(), value);
        }
    }

    #[test]
    fn parse_arg_accepts_digits_and_names() {
        assert_eq!(Priority::parse_arg("2"), Ok(Priority::High));
        assert_eq!(Priority::parse_arg("urgent"), Ok(Priority::Urgent));
        assert_eq!(Priority::parse_arg("LOW"), Ok(Priority::Low));
    }

    #[test]
    fn parse_arg_rejects_out_of_range() {
        assert!(Priority::parse_arg("5").is_err());
        assert!(Priority::parse_arg("critical").is_err());
    }
}
