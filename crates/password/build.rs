use rustc_version::{version_meta, Channel};

fn main() -> Result<(), rustc_version::Error> {
    println!("cargo::rustc-check-cfg=cfg(CHANNEL_NIGHTLY)");

    // doc_auto_cfg is only available on nightly
    if let Channel::Nightly = version_meta()?.channel {
        println!("cargo:rustc-cfg=CHANNEL_NIGHTLY");
    }
    Ok(())
}
