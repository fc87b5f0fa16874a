//! Property evaluation for components and mixtures.
//!
//! Polynomials are evaluated on the reduced temperature `τ = T / T0` in
//! SI magnitudes and wrapped in `uom` quantities once per call. Every
//! temperature is checked against `[200 K, 3300 K]` and every pressure
//! against `(0, ∞)` before anything is evaluated.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{
        MassDensity, MolarConcentration, MolarHeatCapacity, Pressure, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    molar_concentration::mole_per_cubic_meter,
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{
    MolarEnthalpy, MolarEntropy, MolarInternalEnergy, SpecificEnthalpy, SpecificEntropy,
    SpecificInternalEnergy,
};

use super::{
    Component, Mixture, RangeError, coefficients,
    constants::{P0_PASCAL, R_M, check_pressure, check_temperature, reduced_temperature},
};

impl Component {
    /// Isobaric molar heat capacity, `c_p,m = Σ A[i] · τ^B[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_heat_capacity(
        self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(self.cp_m(tau)))
    }

    /// Molar enthalpy relative to `T0`, `h_m = C[0] + Σ C[i] · τ^(B[i]+1)`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_enthalpy(
        self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnthalpy, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarEnthalpy::new::<joule_per_mole>(self.h_m(tau)))
    }

    /// Molar entropy relative to `(T0, p0)`.
    ///
    /// `s_m = D[0] + D[1] · ln τ − R_m · ln(p/p0) + Σ_{i≥2} D[i] · τ^B[i]`
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// `[200 K, 3300 K]` or the pressure is not strictly positive.
    pub fn molar_entropy(
        self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEntropy, RangeError> {
        let (pi, tau) = state(pressure, temperature)?;
        Ok(MolarEntropy::new::<joule_per_kelvin_mole>(
            self.s_m(pi, tau),
        ))
    }

    fn cp_m(self, tau: f64) -> f64 {
        let a = coefficients::heat_capacity_row(self);
        a.iter()
            .zip(coefficients::exponents())
            .map(|(a, b)| a * tau.powf(*b))
            .sum()
    }

    fn h_m(self, tau: f64) -> f64 {
        let c = coefficients::enthalpy_row(self);
        c[0] + c[1..]
            .iter()
            .zip(coefficients::exponents())
            .map(|(c, b)| c * tau.powf(b + 1.0))
            .sum::<f64>()
    }

    /// `pi` is the reduced pressure `p / p0`.
    fn s_m(self, pi: f64, tau: f64) -> f64 {
        let d = coefficients::entropy_row(self);
        d[0] + d[1] * tau.ln() - R_M * pi.ln()
            + d[2..]
                .iter()
                .zip(&coefficients::exponents()[1..])
                .map(|(d, b)| d * tau.powf(*b))
                .sum::<f64>()
    }
}

impl Mixture {
    /// Molar density of an ideal gas, `ρ_m = p / (R_m · T)`.
    ///
    /// Independent of composition.
    ///
    /// ```
    /// use uom::si::{
    ///     f64::{Pressure, ThermodynamicTemperature},
    ///     molar_concentration::mole_per_cubic_meter,
    ///     pressure::megapascal,
    ///     thermodynamic_temperature::kelvin,
    /// };
    /// use vdi4670::gas::Mixture;
    ///
    /// let rho = Mixture::molar_density(
    ///     Pressure::new::<megapascal>(0.1),
    ///     ThermodynamicTemperature::new::<kelvin>(1000.0),
    /// )?;
    /// assert!((rho.get::<mole_per_cubic_meter>() - 12.027).abs() < 1e-3);
    /// # Ok::<(), vdi4670::gas::RangeError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// `[200 K, 3300 K]` or the pressure is not strictly positive.
    pub fn molar_density(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarConcentration, RangeError> {
        let (p, t) = magnitudes(pressure, temperature)?;
        Ok(MolarConcentration::new::<mole_per_cubic_meter>(
            p / (R_M * t),
        ))
    }

    /// Mass density, `ρ = p · M_mix / (R_m · T)`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// `[200 K, 3300 K]` or the pressure is not strictly positive.
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, RangeError> {
        let (p, t) = magnitudes(pressure, temperature)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(
            p * self.molar_mass_si() / (R_M * t),
        ))
    }

    /// Mole-weighted isobaric molar heat capacity.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(
            self.cp_m(tau),
        ))
    }

    /// Isobaric specific heat capacity, `c_p = c_p,m / M_mix`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, RangeError> {
        let tau = tau(temperature)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.cp_m(tau) / self.molar_mass_si(),
        ))
    }

    /// Mole-weighted molar enthalpy, zero at `T0`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnthalpy, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarEnthalpy::new::<joule_per_mole>(self.h_m(tau)))
    }

    /// Specific enthalpy, `h = h_m / M_mix`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, RangeError> {
        let tau = tau(temperature)?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(
            self.h_m(tau) / self.molar_mass_si(),
        ))
    }

    /// Molar entropy including the ideal entropy of mixing.
    ///
    /// `s_m = Σ x_k · s_m,k − R_m · Σ x_k · ln x_k`, where components with
    /// `x_k = 0` contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// `[200 K, 3300 K]` or the pressure is not strictly positive.
    pub fn molar_entropy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEntropy, RangeError> {
        let (pi, tau) = state(pressure, temperature)?;
        Ok(MolarEntropy::new::<joule_per_kelvin_mole>(
            self.s_m(pi, tau),
        ))
    }

    /// Specific entropy, `s = s_m / M_mix`.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the temperature is outside
    /// `[200 K, 3300 K]` or the pressure is not strictly positive.
    pub fn entropy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, RangeError> {
        let (pi, tau) = state(pressure, temperature)?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(
            self.s_m(pi, tau) / self.molar_mass_si(),
        ))
    }

    /// Molar internal energy of the ideal gas, `u_m = h_m − R_m · T`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_internal_energy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarInternalEnergy, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarInternalEnergy::new::<joule_per_mole>(
            self.u_m(tau, temperature),
        ))
    }

    /// Specific internal energy, `u = u_m / M_mix`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn internal_energy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificInternalEnergy, RangeError> {
        let tau = tau(temperature)?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(
            self.u_m(tau, temperature) / self.molar_mass_si(),
        ))
    }

    /// Isochoric molar heat capacity of the ideal gas, `c_v,m = c_p,m − R_m`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn molar_isochoric_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, RangeError> {
        let tau = tau(temperature)?;
        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(
            self.cp_m(tau) - R_M,
        ))
    }

    /// Isochoric specific heat capacity, `c_v = c_v,m / M_mix`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Temperature`] outside `[200 K, 3300 K]`.
    pub fn isochoric_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, RangeError> {
        let tau = tau(temperature)?;
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            (self.cp_m(tau) - R_M) / self.molar_mass_si(),
        ))
    }

    fn cp_m(&self, tau: f64) -> f64 {
        self.present().map(|(k, x)| x * k.cp_m(tau)).sum()
    }

    fn h_m(&self, tau: f64) -> f64 {
        self.present().map(|(k, x)| x * k.h_m(tau)).sum()
    }

    fn u_m(&self, tau: f64, temperature: ThermodynamicTemperature) -> f64 {
        self.h_m(tau) - R_M * temperature.get::<kelvin>()
    }

    fn s_m(&self, pi: f64, tau: f64) -> f64 {
        self.present()
            .map(|(k, x)| x * (k.s_m(pi, tau) - R_M * x.ln()))
            .sum()
    }

    fn molar_mass_si(&self) -> f64 {
        self.molar_mass().get::<kilogram_per_mole>()
    }
}

fn tau(temperature: ThermodynamicTemperature) -> Result<f64, RangeError> {
    check_temperature(temperature).map(reduced_temperature)
}

/// Checks a state and returns `(p / p0, T / T0)`.
fn state(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<(f64, f64), RangeError> {
    let (p, _) = magnitudes(pressure, temperature)?;
    Ok((p / P0_PASCAL, reduced_temperature(temperature)))
}

/// Checks a state and returns its magnitudes in Pa and K.
fn magnitudes(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<(f64, f64), RangeError> {
    let temperature = check_temperature(temperature)?;
    let pressure = check_pressure(pressure)?.into_inner();
    Ok((pressure.get::<pascal>(), temperature.get::<kelvin>()))
}
