//! Moment geometry for off-axis grips
//!
//! # Coordinate system
//!
//! Same convention everywhere in gripper-core:
//! - **X-axis**: Left(-) / Right(+)
//! - **Y-axis**: Down(-) / Up(+), gravity acts along -Y
//! - **Z-axis**: Rear(-) / Front(+)
//!
//! `Point3` coordinates are stored in **MILLIMETERS**.

use nalgebra as na;

use crate::types::*;

/// Gravity moment of the effective load about the grip axis, `W·e`
pub fn gravity_moment(effective_load: Force, com_offset: Length) -> Torque {
    let w = effective_load.get::<newton>();
    let e = com_offset.get::<meter>();
    Torque::new::<newton_meter>(w * e)
}

/// Largest friction moment the contacts can resist, `n·μ·N·r_eff`
pub fn max_friction_moment(
    contact_count: u32,
    friction_coefficient: f64,
    normal_force_per_contact: Force,
    friction_arm: Length,
) -> Torque {
    let n = contact_count as f64;
    let force = normal_force_per_contact.get::<newton>();
    let arm = friction_arm.get::<meter>();
    Torque::new::<newton_meter>(n * friction_coefficient.max(0.0) * force * arm)
}

/// Lever arm of gravity about the grip axis
///
/// The grip axis passes through `grip_center` along `grip_axis` (the line
/// joining the fingers). Only the component of the center-of-mass position
/// that produces a moment about that axis counts: a center of mass lying on
/// the axis, or straight below it, gives zero.
pub fn offset_from_com(
    com: na::Point3<f64>,
    grip_center: na::Point3<f64>,
    grip_axis: na::Unit<na::Vector3<f64>>,
) -> Length {
    let r = com - grip_center;
    // Unit gravity; the moment per newton of load is the lever arm
    let down = -na::Vector3::<f64>::y();
    let arm_mm = r.cross(&down).dot(&grip_axis.into_inner()).abs();
    from_coord(arm_mm)
}

/// Lever arm from UOM positions of the center of mass and grip center
///
/// Returns `None` when `grip_axis` is too short to give a direction.
pub fn offset_from_positions(
    com: (Distance, Distance, Distance),
    grip_center: (Distance, Distance, Distance),
    grip_axis: na::Vector3<f64>,
) -> Option<Length> {
    let (cx, cy, cz) = com;
    let (gx, gy, gz) = grip_center;
    let axis = na::Unit::try_new(grip_axis, f64::EPSILON)?;

    Some(offset_from_com(
        point_from_distances(cx, cy, cz),
        point_from_distances(gx, gy, gz),
        axis,
    ))
}
