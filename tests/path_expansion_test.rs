use std::env;
use std::path::{Path, PathBuf};

use mvsc::config::{Config, expand_path};

fn config_with_dir(capture_dir: &str) -> Config {
    Config {
        capture_dir: capture_dir.to_string(),
        capture_file_pattern: "Screen Shot *".to_string(),
        extension: ".png".to_string(),
        sequential_digits: 3,
    }
}

#[test]
fn test_relative_variable_stays_under_home() {
    unsafe {
        env::set_var("MVSC_TEST_SHOTS_FOLDER", "Screenshots");
    }

    let config = config_with_dir("Pictures/$MVSC_TEST_SHOTS_FOLDER");
    assert_eq!(
        config.capture_root(Path::new("/home/user")),
        PathBuf::from("/home/user/Pictures/Screenshots")
    );

    unsafe {
        env::remove_var("MVSC_TEST_SHOTS_FOLDER");
    }
}

#[cfg(unix)]
#[test]
fn test_absolute_variable_replaces_home() {
    unsafe {
        env::set_var("MVSC_TEST_CAPTURE_ROOT", "/srv/captures");
    }

    let config = config_with_dir("$MVSC_TEST_CAPTURE_ROOT/shots");
    assert_eq!(
        config.capture_root(Path::new("/home/user")),
        PathBuf::from("/srv/captures/shots")
    );

    unsafe {
        env::remove_var("MVSC_TEST_CAPTURE_ROOT");
    }
}

#[cfg(unix)]
#[test]
fn test_tilde_expands_to_process_home() {
    let process_home = env::var("HOME").unwrap_or_default();

    assert_eq!(
        expand_path("~/Desktop"),
        format!("{process_home}/Desktop")
    );

    let config = config_with_dir("~/Desktop");
    assert_eq!(
        config.capture_root(Path::new("/somewhere/else")),
        Path::new("/somewhere/else").join(format!("{process_home}/Desktop"))
    );
}
