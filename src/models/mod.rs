pub mod platform;
pub mod problem;
pub mod signature;

pub use platform::Platform;
pub use problem::{GeneratedFile, ProblemMetadata, StarterTemplate};
pub use signature::{ExtractedSignature, TypeTag};
