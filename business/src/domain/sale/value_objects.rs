use serde::{Deserialize, Serialize};

/// Fulfillment state of a sale. The only transition is
/// `NotFulfilled -> Fulfilled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    NotFulfilled,
    Fulfilled,
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleStatus::NotFulfilled => write!(f, "not_fulfilled"),
            SaleStatus::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

impl std::str::FromStr for SaleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_fulfilled" => Ok(SaleStatus::NotFulfilled),
            "fulfilled" => Ok(SaleStatus::Fulfilled),
            _ => Err(format!("Invalid sale status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_stored_status_strings() {
        assert_eq!(
            "not_fulfilled".parse::<SaleStatus>(),
            Ok(SaleStatus::NotFulfilled)
        );
        assert_eq!("fulfilled".parse::<SaleStatus>(), Ok(SaleStatus::Fulfilled));
    }

    #[test]
    fn should_reject_unknown_status() {
        assert!("pending".parse::<SaleStatus>().is_err());
    }

    #[test]
    fn should_display_as_snake_case() {
        assert_eq!(SaleStatus::NotFulfilled.to_string(), "not_fulfilled");
        assert_eq!(SaleStatus::Fulfilled.to_string(), "fulfilled");
    }
}
