/// Generate the `auth.v1` messages and client stub from `proto/`.
///
/// Uses the vendored `protoc` so builds do not depend on a system install.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    tonic_build::configure()
        .build_server(false)
        .compile_protos(&["proto/auth/v1/user.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto");
    Ok(())
}
