use std::fmt::Display;

use log::Level;

pub trait LogErrResult<T, E: Display> {
    /// Log the error at `level` under `target`, keeping the result intact.
    fn log_err(self, target: &str, level: Level, msg: impl Display) -> Result<T, E>;
}

impl<T, E: Display> LogErrResult<T, E> for Result<T, E> {
    fn log_err(self, target: &str, level: Level, msg: impl Display) -> Result<T, E> {
        if let Err(e) = &self {
            log!(target: target, level, "{msg}: {e}");
        }
        self
    }
}
