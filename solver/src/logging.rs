use std::io::Write;

use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

/// colog's level prefix with a wall-clock timestamp in front of it
struct TimestampStyle;

impl CologStyle for TimestampStyle {
    fn format(&self, buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
        let sep = self.line_separator();
        let prefix = self.prefix_token(&record.level());
        let time = Local::now().format("%H:%M:%S%.3f").to_string();

        writeln!(
            buf,
            "{} {} {}",
            time.dimmed(),
            prefix,
            record.args().to_string().replace('\n', &sep),
        )
    }
}

pub struct Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        let mut builder = colog::basic_builder();
        builder.format(colog::formatter(TimestampStyle));
        builder.filter_level(level);
        builder.parse_default_env();
        builder.init();
    }
}
