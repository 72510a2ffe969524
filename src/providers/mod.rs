pub mod simulated;

pub use simulated::SimulatedSettlement;
