use super::*;
use log::{Level, Metadata, Record};
use serial_test::serial;

#[test]
fn parse_level_handles_cases() {
    let cases: &[(Option<&str>, Level)] = &[
        (None, Level::Warn),
        (Some("debug"), Level::Debug),
        (Some("DEBUG"), Level::Debug),
        (Some(" info "), Level::Info),
        (Some("warn"), Level::Warn),
        (Some("error"), Level::Error),
        (Some("TRACE"), Level::Trace),
        (Some("garbage"), Level::Warn),
        (Some("off"), Level::Warn),
        (Some(""), Level::Warn),
    ];

    for (value, expected) in cases {
        let lvl = parse_level(*value);
        assert_eq!(
            lvl, *expected,
            "value {:?} should yield level {:?}, got {:?}",
            value, expected, lvl
        );
    }
}

#[test]
#[serial]
fn get_level_from_env_reads_variable() {
    unsafe { std::env::set_var(PROGRAM_LOG_LEVEL, "debug") };
    assert_eq!(get_level_from_env(), Level::Debug);

    unsafe { std::env::remove_var(PROGRAM_LOG_LEVEL) };
    assert_eq!(get_level_from_env(), Level::Warn);
}

#[test]
fn enabled_respects_level_threshold() {
    let levels = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    for logger_level in levels {
        let logger = Logger::new(logger_level);

        for record_level in levels {
            let meta = Metadata::builder()
                .level(record_level)
                .target("test_target")
                .build();

            let expected = record_level <= logger_level;
            assert_eq!(
                logger.enabled(&meta),
                expected,
                "logger level {:?}, record level {:?}",
                logger_level,
                record_level
            );
        }
    }
}

#[test]
fn format_record_includes_level_target_and_message() {
    let args = format_args!("probe failed");
    let record = Record::builder()
        .level(Level::Warn)
        .target("statprobe::probe")
        .args(args)
        .build();

    let line = format_record(&record);
    assert!(line.ends_with("WARN [statprobe::probe] probe failed"), "{line}");
}

#[test]
fn format_record_falls_back_to_program_name() {
    let args = format_args!("hello");
    let record = Record::builder().level(Level::Info).target("").args(args).build();

    let line = format_record(&record);
    assert!(line.ends_with("INFO [statprobe] hello"), "{line}");
}

#[test]
fn stderr_logger_does_not_panic() {
    let logger = Logger::new(Level::Info);

    let cases = [
        (Level::Debug, "debug"),
        (Level::Info, "info"),
        (Level::Error, "error"),
    ];

    for (lvl, msg) in &cases {
        let args = format_args!("{msg}");
        let record = Record::builder().level(*lvl).target("t").args(args).build();
        logger.log(&record);
    }

    logger.flush();
}
