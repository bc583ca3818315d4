use crate::core::models::base::Base;
use crate::core::models::form::HelixParams;
use crate::core::utils::geometry::{inward_unit, point_on_cylinder};
use nalgebra::{Point3, Vector3};

/// One strand position together with the base that occupies it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrandPoint {
    pub base: Base,
    pub position: Point3<f64>,
    /// Unit vector toward the helix axis, in the XY plane.
    pub inward: Vector3<f64>,
}

/// The two antipodal strand points at one sequence index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePair {
    pub index: usize,
    /// Signed angular offset in degrees, already reduced mod 360.
    pub angle_degrees: f64,
    pub strand_a: StrandPoint,
    pub strand_b: StrandPoint,
}

/// Outcome of visiting one symbol of the input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HelixStep {
    Pair(BasePair),
    Skipped { index: usize, symbol: char },
}

/// Computes helical coordinates for paired strands.
///
/// Index `i` sits at height `i * rise` and at angle `i * twist mod 360`,
/// negated for left-handed forms. Strand B is the point reflection of strand A
/// through the helix axis.
#[derive(Debug, Clone, Copy)]
pub struct HelixGenerator {
    params: HelixParams,
}

impl HelixGenerator {
    pub fn new(params: HelixParams) -> Self {
        Self { params }
    }

    pub fn angle_at(&self, index: usize) -> f64 {
        let unsigned = (index as f64 * self.params.twist_angle).rem_euclid(360.0);
        self.params.handedness.sign() * unsigned
    }

    pub fn z_at(&self, index: usize) -> f64 {
        index as f64 * self.params.rise
    }

    pub fn pair_at(&self, index: usize, base: Base) -> BasePair {
        let angle = self.angle_at(index);
        let z = self.z_at(index);
        let radius = self.params.radius();

        let pos_a = point_on_cylinder(radius, angle, z);
        let pos_b = Point3::new(-pos_a.x, -pos_a.y, z);
        let inward_a = inward_unit(angle);

        BasePair {
            index,
            angle_degrees: angle,
            strand_a: StrandPoint {
                base,
                position: pos_a,
                inward: inward_a,
            },
            strand_b: StrandPoint {
                base: base.complement(),
                position: pos_b,
                inward: -inward_a,
            },
        }
    }

    /// Walks a sequence symbol by symbol.
    ///
    /// Symbols are upper-cased first. Invalid symbols yield
    /// [`HelixStep::Skipped`] but still consume their index.
    pub fn walk<'a>(&'a self, sequence: &'a str) -> impl Iterator<Item = HelixStep> + 'a {
        sequence
            .chars()
            .enumerate()
            .map(move |(index, symbol)| match Base::try_from(symbol) {
                Ok(base) => HelixStep::Pair(self.pair_at(index, base)),
                Err(_) => HelixStep::Skipped { index, symbol },
            })
    }
}
