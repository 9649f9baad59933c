/// Services built by default, in the order their status is reported
pub const DEFAULT_SERVICES: [&str; 5] = [
    "order-service",
    "orchestrator-service",
    "product-validation-service",
    "payment-service",
    "inventory-service",
];

/// Gradle wrapper constants
pub mod gradle {
    /// Version pinned when the wrapper has to be generated
    pub const WRAPPER_VERSION: &str = "8.10.2";

    /// Task that packages a Spring Boot service
    pub const PACKAGE_TASK: &str = "bootJar";

    /// Task excluded from every service build
    pub const SKIP_TASK: &str = "test";

    /// Wrapper launcher on Unix hosts
    pub const UNIX_WRAPPER: &str = "gradlew";

    /// Wrapper launcher on Windows hosts
    pub const WINDOWS_WRAPPER: &str = "gradlew.bat";

    /// Wrapper jar, relative to the project root
    pub const WRAPPER_JAR: [&str; 3] = ["gradle", "wrapper", "gradle-wrapper.jar"];

    /// Globally installed Gradle used to generate a missing wrapper
    pub const GLOBAL_BINARY: &str = "gradle";
}

/// Container engine constants
pub mod compose {
    /// Engine binary, also providing the `compose` plugin
    pub const DOCKER: &str = "docker";

    /// Standalone Compose V1 binary
    pub const DOCKER_COMPOSE: &str = "docker-compose";

    pub const DOWN_ARGS: [&str; 3] = ["down", "-v", "--remove-orphans"];

    pub const UP_ARGS: [&str; 3] = ["up", "-d", "--build"];
}

/// Configuration file names
pub mod config {
    /// Project-local configuration file
    pub const PROJECT_FILE: &str = "stackup.toml";

    /// Directory under the user config dir
    pub const USER_DIR: &str = "stackup";

    /// File name inside [`USER_DIR`]
    pub const USER_FILE: &str = "config.toml";
}
