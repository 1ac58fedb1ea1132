fn main() {
    // Exposed as shapekit::BUILD_DATE and logged by the CLI at startup
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
