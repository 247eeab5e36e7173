pub mod pipeline;
pub mod session;

pub use pipeline::PipelineStats;
pub use session::SessionMetrics;
