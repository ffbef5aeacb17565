use serde::{self, Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::{
    acceleration::{foot_per_second_squared, meter_per_second_squared, standard_gravity},
    f64::{Acceleration, Length, Mass},
    length::{centimeter, inch, meter, millimeter},
    mass::{gram, kilogram, pound},
};

/// A number tagged with the unit it was written in, as found in config files
///
/// `{ value = 20.0, unit = "mm" }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type MassValue = WithUnit<Mass>;
pub type AccelerationValue = WithUnit<Acceleration>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }

    /// Unit spelling normalized for matching
    fn unit_key(unit: &str) -> String {
        unit.trim().to_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0}")]
    UnknownLengthUnit(String),

    #[error("Unknown mass unit: {0}")]
    UnknownMassUnit(String),

    #[error("Unknown acceleration unit: {0}")]
    UnknownAccelerationUnit(String),
}

impl WithUnit<Length> {
    pub fn to_length(&self) -> Result<Length, UnitError> {
        match Self::unit_key(&self.unit).as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(Length::new::<millimeter>(self.value))
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(Length::new::<centimeter>(self.value))
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Length::new::<meter>(self.value)),
            "in" | "inch" | "inches" | "\"" => Ok(Length::new::<inch>(self.value)),
            _ => Err(UnitError::UnknownLengthUnit(self.unit.clone())),
        }
    }

    pub fn from_length(length: Length, unit: &str) -> Result<Self, UnitError> {
        let value = match Self::unit_key(unit).as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                length.get::<millimeter>()
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                length.get::<centimeter>()
            }
            "m" | "meter" | "meters" | "metre" | "metres" => length.get::<meter>(),
            "in" | "inch" | "inches" | "\"" => length.get::<inch>(),
            _ => return Err(UnitError::UnknownLengthUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Mass> {
    pub fn to_mass(&self) -> Result<Mass, UnitError> {
        match Self::unit_key(&self.unit).as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Mass::new::<kilogram>(self.value)),
            "g" | "gram" | "grams" => Ok(Mass::new::<gram>(self.value)),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Mass::new::<pound>(self.value)),
            _ => Err(UnitError::UnknownMassUnit(self.unit.clone())),
        }
    }

    pub fn from_mass(mass: Mass, unit: &str) -> Result<Self, UnitError> {
        let value = match Self::unit_key(unit).as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => mass.get::<kilogram>(),
            "g" | "gram" | "grams" => mass.get::<gram>(),
            "lb" | "lbs" | "pound" | "pounds" => mass.get::<pound>(),
            _ => return Err(UnitError::UnknownMassUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

impl WithUnit<Acceleration> {
    pub fn to_acceleration(&self) -> Result<Acceleration, UnitError> {
        match Self::unit_key(&self.unit).as_str() {
            "m/s²" | "m/s^2" | "m/s2" | "mps2" => {
                Ok(Acceleration::new::<meter_per_second_squared>(self.value))
            }
            "ft/s²" | "ft/s^2" | "ft/s2" => {
                Ok(Acceleration::new::<foot_per_second_squared>(self.value))
            }
            "g" | "g0" | "gn" => Ok(Acceleration::new::<standard_gravity>(self.value)),
            _ => Err(UnitError::UnknownAccelerationUnit(self.unit.clone())),
        }
    }

    pub fn from_acceleration(acceleration: Acceleration, unit: &str) -> Result<Self, UnitError> {
        let value = match Self::unit_key(unit).as_str() {
            "m/s²" | "m/s^2" | "m/s2" | "mps2" => acceleration.get::<meter_per_second_squared>(),
            "ft/s²" | "ft/s^2" | "ft/s2" => acceleration.get::<foot_per_second_squared>(),
            "g" | "g0" | "gn" => acceleration.get::<standard_gravity>(),
            _ => return Err(UnitError::UnknownAccelerationUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}
