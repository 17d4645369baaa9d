//! Subscriber installation in a process where nothing else has set one up.
//!
//! Kept in its own test binary so no other test installs a global subscriber first.

#![cfg(feature = "cli")]

use bpuf::logging::{self, LogFormat, LoggingError};

#[test]
fn first_install_succeeds_and_later_calls_keep_it() {
    match logging::init_logging_with(LogFormat::Json) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            panic!("a fresh process must accept the subscriber: {source}")
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
    assert_eq!(logging::installed_format(), Some(LogFormat::Json));
    assert!(tracing::dispatcher::has_been_set());

    logging::init_logging_with(LogFormat::Human).expect("a second install must be a no-op");
    logging::init_logging().expect("the environment entry point must be a no-op too");
    assert_eq!(logging::installed_format(), Some(LogFormat::Json));
}
