use colored::{ColoredString, Colorize};
use env_logger::{fmt::Formatter as LogFormatter, Builder as LogBuilder};
use lazy_static::lazy_static;
use log::{Level as LogLevel, LevelFilter as LogLevelFilter, Record as LogRecord};
use std::{env, io::Write, ops::Deref};

pub fn init_env_logger(verbose: bool) {
    // this closure formats logging, choose colour and determines level of verbosity
    let format = |formatter: &mut LogFormatter, record: &LogRecord<'_>| {
        let level = match record.level() {
            LogLevel::Debug => LOG_PREFIX_DEBUG.deref(),
            LogLevel::Info => LOG_PREFIX_INFO.deref(),
            LogLevel::Warn => LOG_PREFIX_WARN.deref(),
            LogLevel::Error => LOG_PREFIX_ERROR.deref(),
            LogLevel::Trace => LOG_PREFIX_TRACE.deref(),
        };
        writeln!(formatter, "{} {}", level, record.args())
    };

    let mut builder = LogBuilder::new();
    builder.format(format).filter(
        None,
        if verbose {
            LogLevelFilter::Debug
        } else {
            LogLevelFilter::Info
        },
    );

    if env::var("RUST_LOG").is_ok() {
        builder.parse_filters(&env::var("RUST_LOG").unwrap());
    }

    builder.init();
}

lazy_static! {
    static ref LOG_PREFIX_DEBUG: ColoredString = "D".normal();
    static ref LOG_PREFIX_INFO: ColoredString = "I".green();
    static ref LOG_PREFIX_WARN: ColoredString = "W".yellow().bold();
    static ref LOG_PREFIX_ERROR: ColoredString = "E".red().bold();
    static ref LOG_PREFIX_TRACE: ColoredString = "T".normal();
}
