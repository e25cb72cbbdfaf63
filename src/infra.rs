#![doc(hidden)]

#[cfg(feature = "proptest")]
pub mod proptest;
