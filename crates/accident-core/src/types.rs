//! Categorical fields of an accident record.
//!
//! Every enum here has a fixed human-readable label which is what ends up in
//! the output file. `as_str` and `FromStr` are exact inverses of each other.

use std::fmt;
use std::str::FromStr;

/// Error returned when a label does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: '{label}'")]
pub struct ParseLabelError {
    /// Name of the enum that was being parsed.
    pub kind: &'static str,
    /// The offending input.
    pub label: String,
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Label written to the output file.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    _ => Err(ParseLabelError {
                        kind: stringify!($name),
                        label: s.to_string(),
                    }),
                }
            }
        }
    };
}

labeled_enum! {
    /// Season bucket derived from the calendar month.
    Season {
        Summer => "Summer",
        Monsoon => "Monsoon",
        Winter => "Winter",
    }
}

impl Season {
    /// Map a calendar month (1-12) to its season.
    ///
    /// March to May is summer, June to September is the monsoon, everything
    /// else (including out-of-range input) is winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Summer,
            6..=9 => Season::Monsoon,
            _ => Season::Winter,
        }
    }
}

labeled_enum! {
    /// Weather at the time of the accident.
    Weather {
        Clear => "Clear",
        Cloudy => "Cloudy",
        Rain => "Rain",
        HeavyRain => "Heavy Rain",
        Fog => "Fog",
        DustStorm => "Dust Storm",
    }
}

impl Weather {
    /// Weather bad enough to be the cause of an accident on its own.
    pub fn is_severe(&self) -> bool {
        matches!(self, Weather::HeavyRain | Weather::Fog | Weather::DustStorm)
    }
}

labeled_enum! {
    /// Road surface condition.
    RoadCondition {
        Dry => "Dry",
        Wet => "Wet",
        Potholed => "Potholed",
        Flooding => "Flooding",
        Construction => "Construction",
        Muddy => "Muddy",
    }
}

impl RoadCondition {
    /// Road conditions that are themselves blamed for an accident.
    pub fn is_poor(&self) -> bool {
        matches!(
            self,
            RoadCondition::Potholed | RoadCondition::Construction | RoadCondition::Flooding
        )
    }
}

labeled_enum! {
    /// Accident severity, from least to most severe.
    Severity {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

impl Severity {
    /// High or critical.
    pub fn is_serious(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

labeled_enum! {
    /// Primary cause attributed to the accident.
    AccidentCause {
        HumanError => "Human Error",
        MechanicalFailure => "Mechanical Failure",
        Weather => "Weather",
        PoorRoad => "Poor Road",
        AnimalCrossing => "Animal Crossing",
        SignalViolation => "Signal Violation",
    }
}

labeled_enum! {
    /// Traffic density around the accident site.
    TrafficDensity {
        Light => "Light",
        Moderate => "Moderate",
        Heavy => "Heavy",
    }
}

labeled_enum! {
    /// How the involved vehicles were using the carriageway.
    LaneUtilization {
        SingleLane => "Single Lane",
        LaneChange => "Lane Change",
        Overtaking => "Overtaking",
        CongestedMultiLane => "Congested Multi-Lane",
    }
}
