//! Compile `proto/review.proto` into tonic server code and an encoded
//! descriptor set for server reflection.

use std::path::PathBuf;

use prost::Message;

const PROTO: &str = "proto/review.proto";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={PROTO}");

    let descriptors = protox::compile([PROTO], ["proto"])?;
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    std::fs::write(
        out_dir.join("review_descriptor.bin"),
        descriptors.encode_to_vec(),
    )?;

    tonic_build::configure()
        .build_client(false)
        .build_server(true)
        .compile_fds(descriptors)?;
    Ok(())
}
