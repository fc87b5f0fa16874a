pub mod constraint;
pub mod numeric;
pub mod thermo;
pub mod units;
