/// A thermodynamic model of a particular kind of fluid.
///
/// Property capabilities such as [`HasEnthalpy`](super::HasEnthalpy) build on
/// this trait, so `Fluid` names the data a [`State`](crate::support::thermo::State)
/// must carry for the model to evaluate it. For the VDI 4670 model that is
/// the mixture composition.
pub trait ThermoModel {
    type Fluid;
}
