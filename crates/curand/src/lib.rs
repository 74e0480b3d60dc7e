//! High level bindings to the cuRAND CUDA library for generating
//! pseudorandom and quasirandom numbers on the GPU.
//!
//! The native library is located and loaded at runtime, so neither this
//! crate nor binaries built from it link against the CUDA toolkit. The
//! loader probes the well-known file names for the running platform
//! (`libcurand.so` and its versioned variants on Linux, `libcurand.dylib`
//! on macOS, `curand.dll` and the arch-versioned DLLs on Windows) and the
//! directories in `CUDA_LIBRARY_PATH`, keeping the first library that
//! loads. The raw declarations and the loader live in [`curand_sys`],
//! re-exported here as [`sys`].
//!
//! # Generators
//!
//! All generation goes through a [`Generator`], created for one of the
//! [`RngType`] algorithms either on the device ([`Generator::new`]) or on
//! the host ([`Generator::new_host`]). Pseudorandom generators are
//! configured with a seed and an offset, quasirandom generators with a
//! dimension count. The generation methods write into caller-owned buffers
//! through raw pointers and are `unsafe`; this crate does not allocate or
//! manage device memory.
//!
//! # Errors
//!
//! Every native entry point returns a status code. Non-success codes are
//! surfaced as [`error::CurandError`]; failure to locate the library at all
//! is surfaced as [`error::LoadError`]. Nothing is retried.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use curand_sys as sys;

pub use distribution::PoissonDistribution;
pub use generator::{Generator, Ordering, RngType};
pub use quasi::{
    direction_vectors32, direction_vectors64, scramble_constants32, scramble_constants64,
    DirectionVectorSet,
};

mod distribution;
pub mod error;
mod generator;
mod quasi;
pub mod raw;

use std::mem::MaybeUninit;

use error::{Error, ToResult};

/// Fields of the library version queryable individually through
/// `curandGetProperty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    MajorVersion,
    MinorVersion,
    PatchLevel,
}

impl Property {
    pub fn to_raw(self) -> sys::libraryPropertyType_t {
        match self {
            Property::MajorVersion => sys::libraryPropertyType_t::MAJOR_VERSION,
            Property::MinorVersion => sys::libraryPropertyType_t::MINOR_VERSION,
            Property::PatchLevel => sys::libraryPropertyType_t::PATCH_LEVEL,
        }
    }
}

/// Returns the version of the loaded cuRAND library, encoded by the library
/// as `1000 * major + 100 * minor`.
pub fn version() -> Result<i32, Error> {
    let api = sys::curand()?;
    let mut version = MaybeUninit::uninit();
    unsafe {
        api.get_version(version.as_mut_ptr()).to_result()?;
        Ok(version.assume_init())
    }
}

/// Returns one field of the loaded library's version.
pub fn property(property: Property) -> Result<i32, Error> {
    let api = sys::curand()?;
    let mut value = MaybeUninit::uninit();
    unsafe {
        api.get_property(property.to_raw(), value.as_mut_ptr())
            .to_result()?;
        Ok(value.assume_init())
    }
}

pub(crate) mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_map_to_library_types_values() {
        assert_eq!(Property::MajorVersion.to_raw() as u32, 0);
        assert_eq!(Property::MinorVersion.to_raw() as u32, 1);
        assert_eq!(Property::PatchLevel.to_raw() as u32, 2);
    }
}
