pub mod taxi_fuel;

pub use taxi_fuel::TaxiFuel;
