use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static FORM_NAMES: Map<&'static str, DnaForm> = phf_map! {
    "A" => DnaForm::A,
    "B" => DnaForm::B,
    "Z" => DnaForm::Z,
    "A-DNA" => DnaForm::A,
    "B-DNA" => DnaForm::B,
    "Z-DNA" => DnaForm::Z,
};

/// The three canonical double-helix conformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnaForm {
    A,
    B,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Right,
    Left,
}

impl Handedness {
    /// Sign applied to the accumulated twist angle.
    pub fn sign(self) -> f64 {
        match self {
            Handedness::Right => 1.0,
            Handedness::Left => -1.0,
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Handedness::Right => "right",
            Handedness::Left => "left",
        })
    }
}

/// Geometry constants of a helix form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixParams {
    /// Rotation per base pair, in degrees.
    pub twist_angle: f64,
    /// Axial distance per base pair.
    pub rise: f64,
    pub diameter: f64,
    pub handedness: Handedness,
}

impl HelixParams {
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn is_left_handed(&self) -> bool {
        self.handedness == Handedness::Left
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown DNA form '{0}'. Expected one of: A, B, Z.")]
pub struct ParseFormError(pub String);

impl DnaForm {
    pub const ALL: [DnaForm; 3] = [DnaForm::A, DnaForm::B, DnaForm::Z];

    pub fn params(self) -> HelixParams {
        match self {
            DnaForm::A => HelixParams {
                twist_angle: 33.0,
                rise: 0.23,
                diameter: 2.6,
                handedness: Handedness::Right,
            },
            DnaForm::B => HelixParams {
                twist_angle: 36.0,
                rise: 0.34,
                diameter: 2.0,
                handedness: Handedness::Right,
            },
            DnaForm::Z => HelixParams {
                twist_angle: 60.0,
                rise: 0.37,
                diameter: 1.8,
                handedness: Handedness::Left,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DnaForm::A => "A",
            DnaForm::B => "B",
            DnaForm::Z => "Z",
        }
    }
}

impl FromStr for DnaForm {
    type Err = ParseFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORM_NAMES
            .get(s.trim().to_uppercase().as_str())
            .copied()
            .ok_or_else(|| ParseFormError(s.to_string()))
    }
}

impl fmt::Display for DnaForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
