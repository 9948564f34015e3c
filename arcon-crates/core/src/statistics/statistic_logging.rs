use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where and how statistics are written.
struct StatisticFormat {
    /// Printed in front of every statistic.
    prefix: String,
    /// Printed on its own line after a block of statistics.
    postfix: Option<String>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticFormat")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_FORMAT: OnceLock<Mutex<StatisticFormat>> = OnceLock::new();

/// Enables the logging of statistics.
///
/// Every statistic is written as `{prefix} {name}={value}`, with the name converted to `casing` if
/// one is provided. Without a writer the statistics go to stdout. Only the first call has an
/// effect.
pub fn configure_statistic_logging(
    prefix: impl Into<String>,
    postfix: Option<String>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_FORMAT.get_or_init(|| {
        Mutex::new(StatisticFormat {
            prefix: prefix.into(),
            postfix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with `value`, if statistic logging is configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(format) = STATISTIC_FORMAT.get() else {
        return;
    };
    let Ok(mut format) = format.lock() else {
        return;
    };

    let name = match format.casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = format.prefix.clone();
    let _ = writeln!(format.writer, "{prefix} {name}={value}");
}

/// Writes the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    let Some(format) = STATISTIC_FORMAT.get() else {
        return;
    };
    let Ok(mut format) = format.lock() else {
        return;
    };

    if let Some(postfix) = format.postfix.clone() {
        let _ = writeln!(format.writer, "{postfix}");
    }
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_FORMAT.get().is_some()
}
