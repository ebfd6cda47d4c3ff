// tov-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity,
    Pressure as UomPressure,
};

// Public canonical unit types (SI storage, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn grams(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn g_per_cm3(v: f64) -> Density {
    use uom::si::mass_density::gram_per_cubic_centimeter;
    Density::new::<gram_per_cubic_centimeter>(v)
}

/// Length in kilometres.
#[inline]
pub fn to_km(l: Length) -> f64 {
    use uom::si::length::kilometer;
    l.get::<kilometer>()
}

/// Mass in grams.
#[inline]
pub fn to_grams(m: Mass) -> f64 {
    use uom::si::mass::gram;
    m.get::<gram>()
}
