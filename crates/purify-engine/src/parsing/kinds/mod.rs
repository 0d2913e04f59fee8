pub mod code_fence;
pub mod heading;
pub mod omit;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use omit::{OmitMarker, OmitSig};
