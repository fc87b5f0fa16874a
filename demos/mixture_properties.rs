//! Prints properties of standard air and a flue gas, then recovers the flue
//! gas temperature from its enthalpy.
//!
//! Run with `RUST_LOG=debug` to see the solver trace.

use std::error::Error;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    molar_mass::gram_per_mole,
    pressure::bar,
    specific_heat_capacity::{joule_per_kilogram_kelvin, kilojoule_per_kilogram_kelvin},
    thermodynamic_temperature::{degree_celsius, kelvin},
};
use vdi4670::gas::{Fractions, Mixture};
use vdi4670::support::thermo::{
    State,
    capability::{HasCp, HasEnthalpy, HasEntropy, StateFrom},
    model::Vdi4670,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let p = Pressure::new::<bar>(1.0);
    let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);

    let air = Mixture::standard_air();
    println!("{air}");
    println!(
        "  M   = {:.4} g/mol",
        air.molar_mass().get::<gram_per_mole>()
    );
    println!(
        "  rho = {:.5} kg/m3",
        air.density(p, t)?.get::<kilogram_per_cubic_meter>()
    );
    println!(
        "  cp  = {:.2} J/(kg K)",
        air.heat_capacity(t)?.get::<joule_per_kilogram_kelvin>()
    );
    println!(
        "  h   = {:.3} kJ/kg",
        air.enthalpy(t)?.get::<kilojoule_per_kilogram>()
    );
    println!(
        "  s   = {:.5} kJ/(kg K)",
        air.entropy(p, t)?.get::<kilojoule_per_kilogram_kelvin>()
    );

    let flue_gas = Mixture::from_mole_fractions(Fractions {
        n2: 0.74,
        o2: 0.04,
        h2o: 0.12,
        co2: 0.1,
        ..Fractions::default()
    })?;

    let thermo = Vdi4670::new();
    let hot: State<Mixture> = thermo.state_from((
        flue_gas,
        ThermodynamicTemperature::new::<kelvin>(1500.0),
        p,
    ))?;
    let h = thermo.enthalpy(&hot)?;
    println!("\n{flue_gas}");
    println!(
        "  at 1500 K: cp = {:.2} J/(kg K), h = {:.3} kJ/kg, s = {:.5} kJ/(kg K)",
        thermo.cp(&hot)?.get::<joule_per_kilogram_kelvin>(),
        h.get::<kilojoule_per_kilogram>(),
        thermo.entropy(&hot)?.get::<kilojoule_per_kilogram_kelvin>(),
    );

    let found: State<Mixture> = thermo.state_from((flue_gas, p, h))?;
    println!(
        "  temperature from (p, h): {:.6} K",
        found.temperature.get::<kelvin>()
    );

    Ok(())
}
