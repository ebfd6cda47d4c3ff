//! Physical constants and unit-conversion factors.
//!
//! All integration happens in CGS. A single [`PhysicalConstants`] value is built once
//! and handed to every EOS and run, so nothing reads module-level globals.

/// Gravitational constant [cm³ g⁻¹ s⁻²].
pub const G_CGS: f64 = 6.673_083_1e-8;
/// Speed of light [cm/s].
pub const C_CGS: f64 = 2.997_924_58e10;
/// Solar mass [g].
pub const M_SUN_G: f64 = 1.988_435e33;
/// 1 MeV/fm³ expressed in barye.
pub const MEV_FM3_TO_BA: f64 = 1.602_176_6e33;
/// 1 Ba = 0.1 Pa.
pub const BA_TO_PA: f64 = 0.1;
/// 1 cm = 1e-5 km.
pub const CM_TO_KM: f64 = 1.0e-5;

/// Immutable constant set used by the EOS and the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalConstants {
    /// Gravitational constant [cm³ g⁻¹ s⁻²]
    pub g: f64,
    /// Speed of light [cm/s]
    pub c: f64,
    /// Solar mass [g]
    pub m_sun: f64,
    /// Energy density / pressure factor MeV/fm³ -> Ba
    pub mev_fm3_to_ba: f64,
    /// Pressure factor Ba -> Pa
    pub ba_to_pa: f64,
    /// Length factor cm -> km
    pub cm_to_km: f64,
}

impl PhysicalConstants {
    /// The CGS constant set.
    pub const fn cgs() -> Self {
        Self {
            g: G_CGS,
            c: C_CGS,
            m_sun: M_SUN_G,
            mev_fm3_to_ba: MEV_FM3_TO_BA,
            ba_to_pa: BA_TO_PA,
            cm_to_km: CM_TO_KM,
        }
    }

    /// c² [cm²/s²]
    #[inline]
    pub fn c2(&self) -> f64 {
        self.c * self.c
    }

    /// Energy density factor MeV/fm³ -> g/cm³ (divides by c²).
    #[inline]
    pub fn mev_fm3_to_g_cm3(&self) -> f64 {
        self.mev_fm3_to_ba / self.c2()
    }

    #[inline]
    pub fn density_from_mev_fm3(&self, e: f64) -> f64 {
        e * self.mev_fm3_to_g_cm3()
    }

    #[inline]
    pub fn density_to_mev_fm3(&self, rho: f64) -> f64 {
        rho / self.mev_fm3_to_g_cm3()
    }

    #[inline]
    pub fn pressure_from_mev_fm3(&self, p: f64) -> f64 {
        p * self.mev_fm3_to_ba
    }

    #[inline]
    pub fn pressure_to_mev_fm3(&self, p: f64) -> f64 {
        p / self.mev_fm3_to_ba
    }

    #[inline]
    pub fn grams_to_solar(&self, m: f64) -> f64 {
        m / self.m_sun
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::cgs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mev_density_roundtrip() {
        let k = PhysicalConstants::cgs();
        let rho = k.density_from_mev_fm3(876.0);
        assert!((k.density_to_mev_fm3(rho) - 876.0).abs() < 1e-9);
        // 1 MeV/fm³ ~ 1.78e12 g/cm³
        assert!((k.mev_fm3_to_g_cm3() / 1.7827e12 - 1.0).abs() < 1e-3);
    }

    #[test]
    fn solar_mass_ratio() {
        let k = PhysicalConstants::default();
        assert!((k.grams_to_solar(M_SUN_G) - 1.0).abs() < 1e-15);
    }
}
