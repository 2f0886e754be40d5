pub mod finding_correlator;

pub use finding_correlator::{ComponentVerdict, FindingCorrelator};
