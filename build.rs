use std::process::Command;

/// Embed build metadata for `parcel-sort version --long`.
///
/// `GIT_SHA` and `BUILD_DATE` may be preset in the environment (release
/// builds outside a git checkout); otherwise they are read from git and date.
fn main() {
    let git_sha = from_env_or_command("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = from_env_or_command("BUILD_DATE", "date", &["+%Y-%m-%d"]);

    println!("cargo:rustc-env=GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}

fn from_env_or_command(var: &str, program: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}
