mod icestats;

pub use icestats::IceStats;
pub use icestats::Source;
pub use icestats::Sources;
pub use icestats::StatusJson;
