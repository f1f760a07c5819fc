pub mod error;
pub mod session;
pub mod target;
pub mod trial;

pub use error::{Axis, FittsError, Result};
pub use session::{Session, SessionStatus};
pub use target::{Padding, Point, TargetState, Viewport};
pub use trial::{Direction, TrialRecord};
