use std::io;

use fledge::error::Error;

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

    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");

    let err = Error::InvalidProjectName {
        name: "MyApp".to_string(),
    };
    assert!(err.to_string().starts_with("Invalid project name 'MyApp'"));

    let err = Error::OutputDirectoryExistsError {
        output_dir: "out/demo_app".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Output directory 'out/demo_app' already exists. Use --force to overwrite it."
    );
}
