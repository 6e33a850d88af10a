//! Platform detection.

/// Environment variables set by common CI services.
const CI_VARS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// `main` forces the non-interactive UI when this holds, and the shell
/// runner drops the interactive flag.
pub fn is_ci() -> bool {
    CI_VARS.iter().any(|var| std::env::var(var).is_ok())
}

/// The shell used to run commands.
pub fn shell_executable() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Flag passing a command string to the shell.
///
/// `-lic` loads the login and interactive profiles so version managers
/// such as nvm put `npm` and `bower` on the PATH. In CI `-i` fails without
/// a TTY ("cannot set terminal process group"), so `-lc` is used there.
pub fn shell_flag(ci: bool) -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else if ci {
        "-lc"
    } else {
        "-lic"
    }
}
