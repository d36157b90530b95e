mod calculator;
mod clock;
mod storage;
mod validator;

pub use calculator::IDerivedCalculator;
pub use clock::{FixedClock, IClock, SystemClock};
pub use storage::{IFormRepository, IKeyValueStore};
pub use validator::IFieldValidator;
