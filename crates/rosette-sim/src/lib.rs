pub mod orbit;
pub mod sampling;
pub mod summary;

pub use orbit::{OrbitError, OrbitModel};
pub use sampling::{OrbitSample, SAMPLES_PER_TURN};
pub use summary::{format_sig, OrbitSummary};
