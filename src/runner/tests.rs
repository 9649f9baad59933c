#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_command_spec_display() {
        let spec = CommandSpec::new("./gradlew")
            .arg(":order-service:bootJar")
            .args(["-x", "test"]);
        assert_eq!(spec.to_string(), "./gradlew :order-service:bootJar -x test");
    }

    #[test]
    fn test_command_spec_builder() {
        let spec = CommandSpec::new("docker")
            .arg("version")
            .current_dir("/tmp")
            .quiet();
        assert_eq!(spec.program, PathBuf::from("docker"));
        assert_eq!(spec.args, vec!["version"]);
        assert_eq!(spec.cwd, Some(PathBuf::from("/tmp")));
        assert!(spec.quiet);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_reports_exit_code() {
        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("/bin/sh").args(["-c", "exit 3"]).quiet();
        assert_eq!(runner.run(&spec).unwrap(), 3);

        let spec = CommandSpec::new("/bin/sh").args(["-c", "exit 0"]).quiet();
        assert_eq!(runner.run(&spec).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();

        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("/bin/sh")
            .args(["-c", "test -f marker"])
            .current_dir(dir.path())
            .quiet();
        assert_eq!(runner.run(&spec).unwrap(), 0);
    }

    #[test]
    fn test_process_runner_missing_program() {
        let runner = ProcessRunner::new();
        let spec = CommandSpec::new("stackup-definitely-not-a-real-program").quiet();
        let result = runner.run(&spec);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to execute"));
    }
}
