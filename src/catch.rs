use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The capture devices offered when a wild creature appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureDevice {
    PokeBall,
    GreatBall,
    UltraBall,
}

impl CaptureDevice {
    pub const ALL: [CaptureDevice; 3] = [
        CaptureDevice::PokeBall,
        CaptureDevice::GreatBall,
        CaptureDevice::UltraBall,
    ];

    /// Map a menu answer ("1", "2", "3") to a device.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(CaptureDevice::PokeBall),
            "2" => Some(CaptureDevice::GreatBall),
            "3" => Some(CaptureDevice::UltraBall),
            _ => None,
        }
    }

    pub fn success_probability(self) -> f64 {
        match self {
            CaptureDevice::PokeBall => 0.5,
            CaptureDevice::GreatBall => 0.7,
            CaptureDevice::UltraBall => 0.9,
        }
    }
}

impl fmt::Display for CaptureDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            CaptureDevice::PokeBall => "Poke Ball",
            CaptureDevice::GreatBall => "Great Ball",
            CaptureDevice::UltraBall => "Ultra Ball",
        };
        write!(f, "{}", display_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatchOutcome {
    Caught {
        pokemon: String,
        device: CaptureDevice,
        team_size: usize,
    },
    BrokeFree {
        pokemon: String,
        device: CaptureDevice,
    },
    /// The player picked something that is not a capture device. Always fails.
    InvalidDevice { pokemon: String },
}

impl CatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CatchOutcome::Caught { .. })
    }
}

impl fmt::Display for CatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatchOutcome::Caught { pokemon, device, .. } => {
                write!(f, "Gotcha! {} was caught in the {}!", pokemon, device)
            }
            CatchOutcome::BrokeFree { pokemon, device } => {
                write!(f, "Oh no! {} broke free from the {}!", pokemon, device)
            }
            CatchOutcome::InvalidDevice { pokemon } => {
                write!(f, "That is not a capture device. {} got away!", pokemon)
            }
        }
    }
}

/// A single uniform roll below the device's probability succeeds.
pub fn roll_capture(device: CaptureDevice, rng: &mut dyn RandomSource) -> bool {
    let roll = rng.next_f64("capture roll");
    let success = roll < device.success_probability();
    log::debug!(
        "{} capture roll {:.3} against {:.2}: {}",
        device,
        roll,
        device.success_probability(),
        if success { "success" } else { "failure" }
    );
    success
}
