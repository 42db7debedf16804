pub mod impl_fake;
pub mod impl_v4l2;
pub mod interface;
