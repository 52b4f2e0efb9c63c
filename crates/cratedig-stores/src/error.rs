use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoresError {
    #[error("invalid time of day {hours:02}:{minutes:02}")]
    InvalidTime { hours: u32, minutes: u32 },

    #[error("invalid day of week: {0}")]
    InvalidDay(String),

    #[error("failed to read schedule file {path}: {source}")]
    ScheduleIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schedule: {0}")]
    ScheduleParse(#[from] serde_yaml::Error),
}
