use std::{fmt, str::FromStr};

use uom::si::{
    f64::MolarMass, molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::units::SpecificGasConstant;

use super::LookupError;

/// A gas covered by the VDI 4670 correlations.
///
/// The discriminant is the row of the component in every coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Argon (Ar)
    Ar,
    /// Neon (Ne)
    Ne,
    /// Water vapor (H₂O)
    H2O,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Sulfur dioxide (SO₂)
    SO2,
}

impl Component {
    /// Number of components.
    pub const COUNT: usize = 8;

    /// All components in table order.
    pub const ALL: [Component; Self::COUNT] = [
        Component::N2,
        Component::O2,
        Component::Ar,
        Component::Ne,
        Component::H2O,
        Component::CO2,
        Component::CO,
        Component::SO2,
    ];

    /// Row of this component in the coefficient tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical chemical formula, e.g. `"H2O"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Component::N2 => "N2",
            Component::O2 => "O2",
            Component::Ar => "Ar",
            Component::Ne => "Ne",
            Component::H2O => "H2O",
            Component::CO2 => "CO2",
            Component::CO => "CO",
            Component::SO2 => "SO2",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Component::N2 => "Nitrogen",
            Component::O2 => "Oxygen",
            Component::Ar => "Argon",
            Component::Ne => "Neon",
            Component::H2O => "Water",
            Component::CO2 => "Carbon Dioxide",
            Component::CO => "Carbon Monoxide",
            Component::SO2 => "Sulfur Dioxide",
        }
    }

    /// Molar mass from VDI 4670 table 1.
    #[must_use]
    pub fn molar_mass(self) -> MolarMass {
        let kg_per_mol = match self {
            Component::N2 => 28.01348e-3,
            Component::O2 => 31.9988e-3,
            Component::Ar => 39.938e-3,
            Component::Ne => 20.1797e-3,
            Component::H2O => 18.01528e-3,
            Component::CO2 => 44.0095e-3,
            Component::CO => 28.0101e-3,
            Component::SO2 => 64.0648e-3,
        };
        MolarMass::new::<kilogram_per_mole>(kg_per_mol)
    }

    /// Specific gas constant as tabulated in VDI 4670 table 1.
    ///
    /// The tabulated values are rounded; `R_m / M` agrees with them to within
    /// the last printed digit.
    #[must_use]
    pub fn specific_gas_constant(self) -> SpecificGasConstant {
        let j_per_kg_k = match self {
            Component::N2 => 296.8025,
            Component::O2 => 259.8370,
            Component::Ar => 208.1324,
            Component::Ne => 412.0216,
            Component::H2O => 461.5233,
            Component::CO2 => 188.9245,
            Component::CO => 296.8384,
            Component::SO2 => 129.7822,
        };
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(j_per_kg_k)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parses a formula or English name, ignoring case and surrounding whitespace.
impl FromStr for Component {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N2" | "NITROGEN" => Ok(Component::N2),
            "O2" | "OXYGEN" => Ok(Component::O2),
            "AR" | "ARGON" => Ok(Component::Ar),
            "NE" | "NEON" => Ok(Component::Ne),
            "H2O" | "WATER" | "STEAM" => Ok(Component::H2O),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Component::CO2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Component::CO),
            "SO2" | "SULFURDIOXIDE" | "SULFUR DIOXIDE" | "SULPHUR DIOXIDE" => Ok(Component::SO2),
            _ => Err(LookupError::UnknownComponent {
                name: s.to_owned(),
            }),
        }
    }
}
