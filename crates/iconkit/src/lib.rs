#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use iconkit_image as image;

#[doc(inline)]
pub use iconkit_imgproc as imgproc;

#[doc(inline)]
pub use iconkit_io as io;
