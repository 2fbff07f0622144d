use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn is_available(&self) -> bool;
    fn rating(&self) -> f64;
}
