use std::io;

use sourcetpl::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::InvalidProjectName {
        name: "".to_string(),
        reason: "the project name cannot be empty".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid project name '': the project name cannot be empty."
    );

    let err = Error::WriteFileError {
        path: "/tmp/widget/src/main.c".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to write file '/tmp/widget/src/main.c': denied."
    );
}
