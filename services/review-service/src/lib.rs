//! Review service library modules.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
pub mod settings;

/// Generated gRPC types for the `review` protobuf package.
pub mod proto {
    #![allow(
        clippy::pedantic,
        clippy::use_self,
        reason = "generated by tonic-build"
    )]

    tonic::include_proto!("review");

    /// Encoded descriptor set served through gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("review_descriptor");
}
