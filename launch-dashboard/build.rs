use std::env;
use std::fs;
use std::path::Path;

// Copy the launch dataset into OUT_DIR so main.rs can `include_str!` it.
// SLR_LAUNCH_CSV overrides the default fixture path.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("spacex_launch_dash.csv");

    let src = env::var("SLR_LAUNCH_CSV")
        .unwrap_or_else(|_| "../fixtures/spacex_launch_dash.csv".to_string());
    let src = Path::new(&src);

    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        println!(
            "cargo:warning=launch dataset {} not found, building with an empty table",
            src.display()
        );
        fs::write(
            &dest,
            ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", src.display());
    println!("cargo:rerun-if-env-changed=SLR_LAUNCH_CSV");
}
