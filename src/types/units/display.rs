use std::fmt;

use crate::types::units::*;

/// Force in newtons; the unsatisfiable `+∞` requirement renders as `∞ N`
#[derive(Debug, Clone, Copy)]
pub struct DisplayForce(pub Force);
#[derive(Debug, Clone, Copy)]
pub struct DisplayLength(pub Length);
#[derive(Debug, Clone, Copy)]
pub struct DisplayTorque(pub Torque);

impl fmt::Display for DisplayForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let newtons = self.0.get::<newton>();
        if newtons.is_infinite() && newtons > 0.0 {
            return write!(f, "∞ N");
        }
        let kgf = self.0.get::<kilogram_force>();
        write!(f, "{:.1} N ({:.2} kgf)", newtons, kgf)
    }
}

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mm = self.0.get::<millimeter>();
        let inches = self.0.get::<inch>();
        write!(f, "{:.1} mm ({:.3}\")", mm, inches)
    }
}

impl fmt::Display for DisplayTorque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nm = self.0.get::<newton_meter>();
        if nm.is_infinite() {
            return write!(f, "∞ N·m");
        }
        write!(f, "{:.3} N·m", nm)
    }
}
