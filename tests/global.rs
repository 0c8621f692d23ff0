//! Process-wide logger installation
//!
//! Kept to a single test: the installed logger is shared by every test in
//! this binary.

#![cfg(feature = "global")]

use rust_event_logger::global;
use rust_event_logger::prelude::*;

#[test]
fn test_global_install_and_forward() {
    let (out, mem) = Output::memory();
    let mut logger = Logger::json(out);
    logger.set_min_level(LogLevel::Debug);
    logger.no_exit();
    logger.no_panic();

    global::init(logger).expect("first install must succeed");
    let again = global::init(Logger::nop());
    assert!(matches!(again, Err(LoggerError::AlreadyInitialized)));

    global::debug("d").send().unwrap();
    global::infof(format_args!("port {}", 80)).send().unwrap();
    global::log(LogLevel::Warn, "w").int("n", 1).send().unwrap();
    let action = global::fatal("f").send().unwrap();

    assert!(action.is_none());
    assert!(global::logger().is_enabled(LogLevel::Debug));
    assert_eq!(
        mem.take_string(),
        concat!(
            r#"{"msg":"d","level":"debug"}"#,
            r#"{"msg":"port 80","level":"info"}"#,
            r#"{"msg":"w","level":"warn","n":1}"#,
            r#"{"msg":"f","level":"fatal"}"#,
        )
    );
}
