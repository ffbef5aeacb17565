//! Friction grip requirement
//!
//! Minimum normal force each gripper contact has to apply so that a held
//! object neither slides out of the grip nor rotates inside it.
//!
//! # Model
//!
//! Dry (Coulomb) friction with `n` identical contacts:
//!
//! - Translation: `n·μ·N ≥ SF·W`  ⇒  `N ≥ SF·W / (n·μ)`
//! - Rotation: `n·μ·N·r_eff ≥ SF·W·e`  ⇒  `N ≥ SF·W·e / (n·μ·r_eff)`
//!
//! where `W = m·(g + a)` is the effective load, floored at zero.
//!
//! # Internal units
//!
//! Public APIs take UOM quantities. Arithmetic is done in SI `f64`
//! (kg, m/s², m, N) and converted back at the boundary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::physics::moment::gravity_moment;
use crate::types::*;

/// Smallest effective friction arm used in the rotational requirement (meters)
pub const FRICTION_ARM_EPSILON: f64 = 1e-6;

/// Input parameters for a single grip requirement calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GripRequirementInput {
    /// Object mass
    pub mass: Mass,

    /// Gravitational acceleration
    pub gravity: Acceleration,

    /// Vertical acceleration of the gripper (lift/impact dynamics, any sign)
    pub vertical_acceleration: Acceleration,

    /// Multiplicative margin over the theoretical minimum (≥ 1)
    pub safety_factor: f64,

    /// Number of fingers / contact pads
    pub contact_count: u32,

    /// Effective friction coefficient μ between pad and object
    pub friction_coefficient: f64,

    /// Whether the off-axis center of mass is taken into account
    pub consider_moment: bool,

    /// Signed distance of the center of mass from the grip axis
    pub com_offset: Length,

    /// Effective friction arm r_eff of the contacts
    pub friction_arm: Length,
}

impl Default for GripRequirementInput {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(2.0),
            gravity: Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY),
            vertical_acceleration: Acceleration::new::<meter_per_second_squared>(0.0),
            safety_factor: 2.0,
            contact_count: 2,
            friction_coefficient: 0.15,
            consider_moment: false,
            com_offset: Length::new::<millimeter>(20.0),
            friction_arm: Length::new::<millimeter>(10.0),
        }
    }
}

impl GripRequirementInput {
    pub fn new(mass: Mass, contact_count: u32, friction_coefficient: f64) -> Self {
        Self {
            mass,
            contact_count,
            friction_coefficient,
            ..Self::default()
        }
    }

    pub fn with_gravity(mut self, gravity: Acceleration) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_vertical_acceleration(mut self, acceleration: Acceleration) -> Self {
        self.vertical_acceleration = acceleration;
        self
    }

    pub fn with_safety_factor(mut self, safety_factor: f64) -> Self {
        self.safety_factor = safety_factor;
        self
    }

    pub fn with_friction_coefficient(mut self, friction_coefficient: f64) -> Self {
        self.friction_coefficient = friction_coefficient;
        self
    }

    /// Enable the rotational requirement with the given geometry
    pub fn with_moment(mut self, com_offset: Length, friction_arm: Length) -> Self {
        self.consider_moment = true;
        self.com_offset = com_offset;
        self.friction_arm = friction_arm;
        self
    }

    pub fn without_moment(mut self) -> Self {
        self.consider_moment = false;
        self
    }

    /// Check every field against its domain
    ///
    /// A friction coefficient of zero or below is accepted: it yields the
    /// unsatisfiable (`+∞`) requirement instead of an error.
    pub fn validate(&self) -> Result<(), GripError> {
        let mass = self.mass.get::<kilogram>();
        if !mass.is_finite() || mass < 0.0 {
            return Err(GripError::InvalidMass(mass));
        }

        let gravity = self.gravity.get::<meter_per_second_squared>();
        if !gravity.is_finite() || gravity < 0.0 {
            return Err(GripError::InvalidGravity(gravity));
        }

        let accel = self.vertical_acceleration.get::<meter_per_second_squared>();
        if !accel.is_finite() {
            return Err(GripError::InvalidVerticalAcceleration(accel));
        }

        let load = mass * (gravity + accel);
        if !load.is_finite() {
            return Err(GripError::LoadOverflow(load));
        }

        if !self.safety_factor.is_finite() || self.safety_factor < 1.0 {
            return Err(GripError::InvalidSafetyFactor(self.safety_factor));
        }

        if self.contact_count == 0 {
            return Err(GripError::NoContacts);
        }

        if self.friction_coefficient.is_nan() || self.friction_coefficient == f64::INFINITY {
            return Err(GripError::InvalidFrictionCoefficient(self.friction_coefficient));
        }

        if self.consider_moment {
            let offset = self.com_offset.get::<millimeter>();
            if !offset.is_finite() {
                return Err(GripError::InvalidComOffset(offset));
            }

            let arm = self.friction_arm.get::<millimeter>();
            if !arm.is_finite() || arm < 0.0 {
                return Err(GripError::InvalidFrictionArm(arm));
            }
        }

        Ok(())
    }
}

/// Which requirement sets the per-contact force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingConstraint {
    /// Sliding out of the grip
    Translational,
    /// Rotating inside the grip about the grip axis
    Rotational,
}

/// Result of a grip requirement calculation
///
/// Forces are `+∞` when no finite normal force can hold the object
/// (zero friction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GripRequirementResult {
    /// Load the grip has to carry, `m·(g + a)` floored at zero
    #[serde(with = "serde_newtons")]
    pub effective_load: Force,

    /// Per-contact force needed against sliding
    #[serde(with = "serde_newtons")]
    pub translational_force_per_contact: Force,

    /// Per-contact force needed against rotation (zero when not considered)
    #[serde(with = "serde_newtons")]
    pub rotational_force_per_contact: Force,

    /// Governing per-contact force
    #[serde(with = "serde_newtons")]
    pub required_force_per_contact: Force,

    /// Sum over all contacts
    #[serde(with = "serde_newtons")]
    pub total_required_force: Force,

    /// Contacts the result was computed for
    pub contact_count: u32,

    /// Friction coefficient the result was computed for
    pub friction_coefficient: f64,

    /// Requirement that produced `required_force_per_contact`
    pub binding: BindingConstraint,
}

impl GripRequirementResult {
    /// A finite normal force exists that holds the object
    pub fn is_satisfiable(&self) -> bool {
        is_finite_force(self.required_force_per_contact)
    }

    /// Gravity moment about the grip axis, `W·e`
    pub fn gravity_moment(&self, com_offset: Length) -> Torque {
        gravity_moment(self.effective_load, com_offset)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GripError {
    #[error("Mass must be finite and non-negative, got {0} kg")]
    InvalidMass(f64),

    #[error("Gravity must be finite and non-negative, got {0} m/s²")]
    InvalidGravity(f64),

    #[error("Vertical acceleration must be finite, got {0} m/s²")]
    InvalidVerticalAcceleration(f64),

    #[error("Effective load m·(g + a) is not a finite force, got {0} N")]
    LoadOverflow(f64),

    #[error("Safety factor must be finite and at least 1, got {0}")]
    InvalidSafetyFactor(f64),

    #[error("Grip needs at least one contact")]
    NoContacts,

    #[error("Friction coefficient must be a number below infinity, got {0}")]
    InvalidFrictionCoefficient(f64),

    #[error("Center of mass offset must be finite, got {0} mm")]
    InvalidComOffset(f64),

    #[error("Effective friction arm must be finite and non-negative, got {0} mm")]
    InvalidFrictionArm(f64),
}

/// Effective load `max(0, m·(g + a))` in newtons
pub fn effective_load(mass: Mass, gravity: Acceleration, vertical_acceleration: Acceleration) -> Force {
    let m = mass.get::<kilogram>();
    let g = gravity.get::<meter_per_second_squared>();
    let a = vertical_acceleration.get::<meter_per_second_squared>();

    newtons((m * (g + a)).max(0.0))
}

/// Per-contact normal force against sliding, `SF·W / (n·μ)` (N)
///
/// `μ ≤ 0` has no finite solution and returns `+∞`.
pub fn translational_requirement(load_n: f64, safety_factor: f64, contacts: u32, mu: f64) -> f64 {
    if mu <= 0.0 {
        return f64::INFINITY;
    }
    (load_n * safety_factor) / (contacts as f64 * mu)
}

/// Per-contact normal force against rotation, `SF·W·e / (n·μ·r_eff)` (N)
///
/// Offset and arm are in meters. The arm is floored at [`FRICTION_ARM_EPSILON`].
/// The offset is signed: a negative offset gives a negative requirement, so
/// translation governs.
pub fn rotational_requirement(
    load_n: f64,
    offset_m: f64,
    arm_m: f64,
    safety_factor: f64,
    contacts: u32,
    mu: f64,
) -> f64 {
    if mu <= 0.0 {
        return f64::INFINITY;
    }
    let sliding = translational_requirement(load_n, safety_factor, contacts, mu);
    let lever = offset_m / arm_m.max(FRICTION_ARM_EPSILON);
    // 0·∞ would be NaN
    if sliding == 0.0 || lever == 0.0 {
        return 0.0;
    }
    sliding * lever
}

/// Compute the minimum per-contact and total gripping force
///
/// Pure: identical inputs always give identical results.
pub fn compute(input: &GripRequirementInput) -> Result<GripRequirementResult, GripError> {
    input.validate()?;

    let load = effective_load(input.mass, input.gravity, input.vertical_acceleration);
    let w = load.get::<newton>();
    let n = input.contact_count;
    let mu = input.friction_coefficient;
    let sf = input.safety_factor;

    let transl = translational_requirement(w, sf, n, mu);

    let rot = if input.consider_moment {
        rotational_requirement(
            w,
            input.com_offset.get::<meter>(),
            input.friction_arm.get::<meter>(),
            sf,
            n,
            mu,
        )
    } else {
        0.0
    };

    let (required, binding) = if rot > transl {
        (rot, BindingConstraint::Rotational)
    } else {
        (transl, BindingConstraint::Translational)
    };
    let total = required * n as f64;

    debug!(
        load_n = w,
        mu,
        contacts = n,
        transl_n = transl,
        rot_n = rot,
        ?binding,
        "Computed grip requirement"
    );

    Ok(GripRequirementResult {
        effective_load: load,
        translational_force_per_contact: newtons(transl),
        rotational_force_per_contact: newtons(rot),
        required_force_per_contact: newtons(required),
        total_required_force: newtons(total),
        contact_count: n,
        friction_coefficient: mu,
        binding,
    })
}
