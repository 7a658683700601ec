use crate::domain::ports::Narrator;
use crate::utils::error::ShowcaseError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Land delivery.
    Truck,
    /// Sea delivery.
    Ship,
}

impl Transport {
    pub fn deliver(self) -> &'static str {
        match self {
            Transport::Truck => "Delivering by land in a truck.",
            Transport::Ship => "Delivering by sea in a ship.",
        }
    }
}

/// A delivery planner. Each variant is bound to exactly one [`Transport`];
/// `plan_delivery` is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Logistics {
    Road,
    Sea,
}

impl Logistics {
    /// The factory method.
    pub fn create_transport(self) -> Transport {
        match self {
            Logistics::Road => Transport::Truck,
            Logistics::Sea => Transport::Ship,
        }
    }

    pub fn plan_delivery(self, narrator: &dyn Narrator) -> &'static str {
        let transport = self.create_transport();
        tracing::debug!("{} logistics created {:?}", self, transport);

        let description = transport.deliver();
        narrator.say(description);
        description
    }

    pub fn name(self) -> &'static str {
        match self {
            Logistics::Road => "road",
            Logistics::Sea => "sea",
        }
    }
}

impl fmt::Display for Logistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Logistics {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "road" => Ok(Logistics::Road),
            "sea" => Ok(Logistics::Sea),
            _ => Err(ShowcaseError::UnknownPlanner {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Logistics {
    type Error = ShowcaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
