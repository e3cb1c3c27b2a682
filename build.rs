use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Capture the current timestamp as the build time
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // Footer copyright year, identical for the server render and the hydrated client
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CONTACT_ENDPOINT");
}
