fn main() {
    // Stamp the binary so `mobaudit --version` identifies the build
    // that produced a given report.
    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        chrono::Utc::now().to_rfc3339()
    );
}
