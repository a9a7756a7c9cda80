//! Stamps the build revision into `GIT_HASH` for `GET /health`.
//!
//! A `GIT_HASH` already present in the build environment wins, so builds
//! from a source tarball or container context can pass the revision in.

use std::process::Command;

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn revision() -> Option<String> {
    let head = git(&["rev-parse", "--short", "HEAD"]).filter(|o| o.status.success())?;
    let hash = String::from_utf8_lossy(&head.stdout).trim().to_string();
    if hash.is_empty() {
        return None;
    }

    let dirty = git(&["diff", "--quiet"]).is_some_and(|o| !o.status.success());
    Some(if dirty { format!("{hash}-dirty") } else { hash })
}

fn main() {
    println!("cargo:rerun-if-env-changed=GIT_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    let version = std::env::var("GIT_HASH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(revision)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GIT_HASH={version}");
}
