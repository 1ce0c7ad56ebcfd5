pub mod config {
    pub use predation_core::config::*;
}
pub mod error {
    pub use predation_core::error::*;
}
pub mod grid {
    pub use predation_core::grid::*;
}
pub mod metrics {
    pub use predation_core::metrics::*;
}
pub mod scheduler {
    pub use predation_core::scheduler::*;
}
pub mod world {
    pub use predation_core::world::*;
}
pub mod data {
    pub use predation_data::*;
}
