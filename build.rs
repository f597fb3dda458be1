use std::env;

fn main() {
    // API base URL can be overridden at build time: SHOE_API_URL=... trunk build
    if let Ok(url) = env::var("SHOE_API_URL") {
        if !url.is_empty() {
            println!("cargo:warning=SHOE_API_URL set to {}", url);
            println!("cargo:rustc-env=SHOE_API_URL={}", url);
        }
    }

    println!("cargo:rerun-if-env-changed=SHOE_API_URL");
}
