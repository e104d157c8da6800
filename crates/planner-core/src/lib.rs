pub mod catalog;
pub mod constants;
pub mod error;
pub mod layout;
pub mod modes;
pub mod optimizer;
pub mod power;
pub mod reflections;
pub mod report;
pub mod room;
pub mod snapshot;

pub use catalog::*;
pub use constants::*;
pub use error::{PlannerError, Result};
pub use layout::*;
pub use modes::*;
pub use optimizer::*;
pub use power::*;
pub use reflections::*;
pub use report::*;
pub use room::*;
pub use snapshot::*;
