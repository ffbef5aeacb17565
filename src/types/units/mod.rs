mod display;
mod explicit_unit_values;
pub mod serde_newtons;

pub use uom::si::f64::{Acceleration, Force, Length, Mass, Torque};

pub use uom::si::{
    acceleration::{foot_per_second_squared, meter_per_second_squared, standard_gravity},
    force::{kilogram_force, kilonewton, newton, pound_force},
    length::{centimeter, inch, meter, millimeter},
    mass::{gram, kilogram, pound},
    torque::{newton_meter, pound_force_inch},
};

pub use display::{DisplayForce, DisplayLength, DisplayTorque};
pub use explicit_unit_values::{
    AccelerationValue, LengthValue, MassValue, UnitError, WithUnit,
};
