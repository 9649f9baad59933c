#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.services,
            vec![
                "order-service",
                "orchestrator-service",
                "product-validation-service",
                "payment-service",
                "inventory-service",
            ]
        );
        assert_eq!(config.gradle_version, "8.10.2");
        assert_eq!(config.package_task, "bootJar");
        assert_eq!(config.skip_tasks, vec!["test"]);
        assert!(config.jobs.is_none());
        assert!(!config.fail_fast);
        assert!(config.compose_command.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stackup.toml");
        fs::write(&path, "services = [\"billing\"]\njobs = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.services, vec!["billing"]);
        assert_eq!(config.jobs, Some(2));
        assert_eq!(config.package_task, "bootJar");
    }

    #[test]
    fn test_load_prefers_project_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("stackup.toml"), "fail_fast = true\n").unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert!(config.fail_fast);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = Config::load(Some(&missing), dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stackup.toml");
        fs::write(&path, "services = [[[").unwrap();

        let result = Config::from_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stackup.toml");
        fs::write(&path, "service = [\"typo\"]\n").unwrap();

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.jobs = Some(0);
        assert!(config.validate().is_err());

        config.jobs = Some(1);
        config.services.clear();
        assert!(config.validate().is_err());

        config.services = vec!["order-service".to_string()];
        config.compose_command = Some(Vec::new());
        assert!(config.validate().is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_jobs_above_semaphore_limit_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stackup.toml");
        fs::write(&path, "jobs = 4611686018427387904\n").unwrap();

        let result = Config::from_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("jobs must be at most"));
    }
}
