//! Static catalog of the ASTRA project teams

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fourteen project teams a member can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Transmission,
    Electricals,
    Design,
    Suspension,
    Dashboard,
    Innovation,
    Business,
    Autonomous,
    WheelAssembly,
    Brakes,
    Solar,
    Steering,
    Media,
    Report,
}

impl Team {
    /// Every team, in catalog order
    pub fn all() -> [Team; 14] {
        [
            Team::Transmission,
            Team::Electricals,
            Team::Design,
            Team::Suspension,
            Team::Dashboard,
            Team::Innovation,
            Team::Business,
            Team::Autonomous,
            Team::WheelAssembly,
            Team::Brakes,
            Team::Solar,
            Team::Steering,
            Team::Media,
            Team::Report,
        ]
    }

    /// Wire identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Transmission => "transmission",
            Team::Electricals => "electricals",
            Team::Design => "design",
            Team::Suspension => "suspension",
            Team::Dashboard => "dashboard",
            Team::Innovation => "innovation",
            Team::Business => "business",
            Team::Autonomous => "autonomous",
            Team::WheelAssembly => "wheel_assembly",
            Team::Brakes => "brakes",
            Team::Solar => "solar",
            Team::Steering => "steering",
            Team::Media => "media",
            Team::Report => "report",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Team::Transmission => "Transmission Team",
            Team::Electricals => "Electricals Team",
            Team::Design => "Design Team",
            Team::Suspension => "Suspension Team",
            Team::Dashboard => "Dashboard Team",
            Team::Innovation => "Innovation Team",
            Team::Business => "Business Team",
            Team::Autonomous => "Autonomous Team",
            Team::WheelAssembly => "Wheel Assembly Team",
            Team::Brakes => "Brakes Team",
            Team::Solar => "Solar Team",
            Team::Steering => "Steering Team",
            Team::Media => "Media Team",
            Team::Report => "Report Team",
        }
    }

    /// One-line description for roster views
    pub fn description(&self) -> &'static str {
        match self {
            Team::Transmission => "Powertrain and transmission system development",
            Team::Electricals => "Electrical systems and wiring",
            Team::Design => "Vehicle design and aesthetics",
            Team::Suspension => "Suspension and chassis systems",
            Team::Dashboard => "Driver interface and instrumentation",
            Team::Innovation => "Research and development initiatives",
            Team::Business => "Strategy, partnerships and funding",
            Team::Autonomous => "Self-driving and AI systems",
            Team::WheelAssembly => "Wheel design and assembly",
            Team::Brakes => "Braking systems and safety",
            Team::Solar => "Solar panel integration and efficiency",
            Team::Steering => "Steering mechanism and control",
            Team::Media => "Documentation and public relations",
            Team::Report => "Technical documentation and reporting",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
