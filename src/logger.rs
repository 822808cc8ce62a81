//! Logging utils

use env_logger::{
    fmt::{Color, Formatter, Style, StyledValue},
    Builder, Env, Target,
};
use log::{Level, Record};
use std::io::Write;

fn colored_level(style: &mut Style, level: Level) -> StyledValue<&'static str> {
    match level {
        Level::Trace => style.set_color(Color::Magenta).value("TRACE"),
        Level::Debug => style.set_color(Color::Blue).value("DEBUG"),
        Level::Info => style.set_color(Color::Green).value("INFO"),
        Level::Warn => style.set_color(Color::Yellow).value("WARN"),
        Level::Error => style.set_color(Color::Red).value("ERROR"),
    }
}

fn custom_formatter(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let mut style = buf.style();
    let level = colored_level(&mut style, record.level());

    let mut style = buf.style();
    if record.level() == Level::Error {
        style.set_color(Color::Red);
    }

    writeln!(buf, "[{}] - {}", level, style.value(record.args()))
}

/// Sets up the default logger. Progress messages are info-level, so they
/// only show up when verbose output is requested; warnings and errors are
/// always surfaced. The `LOG` env variable overrides the filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };

    Builder::from_env(Env::default().filter_or("LOG", default_filter))
        .target(Target::Stdout)
        .format(custom_formatter)
        .init();
}
