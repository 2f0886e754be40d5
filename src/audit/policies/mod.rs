pub mod severity_gate;

pub use severity_gate::SeverityGate;
