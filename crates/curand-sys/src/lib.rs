//! Raw bindings to the cuRAND random number generation library.
//!
//! Unlike the other CUDA `-sys` crates, cuRAND is loaded at runtime with
//! [`libloading`] rather than linked by a build script, so no CUDA toolkit
//! needs to be present when this crate is compiled. The library is located
//! by probing the well-known platform file names (see [`loader`]) and every
//! entry point is resolved by name into the [`CurandApi`] function table.
//!
//! Declarations mirror `curand.h`; everything here is as unsafe as the
//! underlying C API.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::os::raw::{c_uint, c_ulonglong};

pub mod loader;

pub use loader::{curand, CurandApi, LoadError};

/// Opaque generator state, owned by the native library.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct curandGenerator_st {
    _unused: [u8; 0],
}

/// Handle to a cuRAND generator.
pub type curandGenerator_t = *mut curandGenerator_st;

/// Opaque discrete distribution state, owned by the native library.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct curandDiscreteDistribution_st {
    _unused: [u8; 0],
}

/// Handle to a precomputed discrete distribution.
pub type curandDiscreteDistribution_t = *mut curandDiscreteDistribution_st;

/// Opaque CUDA stream, interchangeable with the driver API's `CUstream`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CUstream_st {
    _unused: [u8; 0],
}

/// Handle to a CUDA stream.
pub type cudaStream_t = *mut CUstream_st;

/// Set of 32 32-bit direction vectors for one quasirandom dimension.
pub type curandDirectionVectors32_t = [c_uint; 32];

/// Set of 64 64-bit direction vectors for one quasirandom dimension.
pub type curandDirectionVectors64_t = [c_ulonglong; 64];

/// Status codes returned by every cuRAND entry point.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum curandStatus_t {
    CURAND_STATUS_SUCCESS = 0,
    CURAND_STATUS_VERSION_MISMATCH = 100,
    CURAND_STATUS_NOT_INITIALIZED = 101,
    CURAND_STATUS_ALLOCATION_FAILED = 102,
    CURAND_STATUS_TYPE_ERROR = 103,
    CURAND_STATUS_OUT_OF_RANGE = 104,
    CURAND_STATUS_LENGTH_NOT_MULTIPLE = 105,
    CURAND_STATUS_DOUBLE_PRECISION_REQUIRED = 106,
    CURAND_STATUS_LAUNCH_FAILURE = 201,
    CURAND_STATUS_PREEXISTING_FAILURE = 202,
    CURAND_STATUS_INITIALIZATION_FAILED = 203,
    CURAND_STATUS_ARCH_MISMATCH = 204,
    CURAND_STATUS_INTERNAL_ERROR = 999,
}

/// Generator algorithms.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum curandRngType_t {
    CURAND_RNG_TEST = 0,
    CURAND_RNG_PSEUDO_DEFAULT = 100,
    CURAND_RNG_PSEUDO_XORWOW = 101,
    CURAND_RNG_PSEUDO_MRG32K3A = 121,
    CURAND_RNG_PSEUDO_MTGP32 = 141,
    CURAND_RNG_PSEUDO_MT19937 = 142,
    CURAND_RNG_PSEUDO_PHILOX4_32_10 = 161,
    CURAND_RNG_QUASI_DEFAULT = 200,
    CURAND_RNG_QUASI_SOBOL32 = 201,
    CURAND_RNG_QUASI_SCRAMBLED_SOBOL32 = 202,
    CURAND_RNG_QUASI_SOBOL64 = 203,
    CURAND_RNG_QUASI_SCRAMBLED_SOBOL64 = 204,
}

/// Orderings of results in device memory.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum curandOrdering_t {
    CURAND_ORDERING_PSEUDO_BEST = 100,
    CURAND_ORDERING_PSEUDO_DEFAULT = 101,
    CURAND_ORDERING_PSEUDO_SEEDED = 102,
    CURAND_ORDERING_QUASI_DEFAULT = 201,
}

/// Sets of precomputed direction vectors.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum curandDirectionVectorSet_t {
    CURAND_DIRECTION_VECTORS_32_JOEKUO6 = 101,
    CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6 = 102,
    CURAND_DIRECTION_VECTORS_64_JOEKUO6 = 103,
    CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6 = 104,
}

/// Properties queryable through `curandGetProperty`, from `library_types.h`.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum libraryPropertyType_t {
    MAJOR_VERSION = 0,
    MINOR_VERSION = 1,
    PATCH_LEVEL = 2,
}

/// Dimensions covered by the precomputed direction vector and scramble
/// constant tables.
pub const DIRECTION_VECTOR_DIMENSIONS: usize = 20_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_discriminants_match_curand_h() {
        assert_eq!(curandStatus_t::CURAND_STATUS_SUCCESS as u32, 0);
        assert_eq!(curandStatus_t::CURAND_STATUS_VERSION_MISMATCH as u32, 100);
        assert_eq!(curandStatus_t::CURAND_STATUS_NOT_INITIALIZED as u32, 101);
        assert_eq!(curandStatus_t::CURAND_STATUS_ALLOCATION_FAILED as u32, 102);
        assert_eq!(curandStatus_t::CURAND_STATUS_TYPE_ERROR as u32, 103);
        assert_eq!(curandStatus_t::CURAND_STATUS_OUT_OF_RANGE as u32, 104);
        assert_eq!(curandStatus_t::CURAND_STATUS_LENGTH_NOT_MULTIPLE as u32, 105);
        assert_eq!(
            curandStatus_t::CURAND_STATUS_DOUBLE_PRECISION_REQUIRED as u32,
            106
        );
        assert_eq!(curandStatus_t::CURAND_STATUS_LAUNCH_FAILURE as u32, 201);
        assert_eq!(curandStatus_t::CURAND_STATUS_PREEXISTING_FAILURE as u32, 202);
        assert_eq!(
            curandStatus_t::CURAND_STATUS_INITIALIZATION_FAILED as u32,
            203
        );
        assert_eq!(curandStatus_t::CURAND_STATUS_ARCH_MISMATCH as u32, 204);
        assert_eq!(curandStatus_t::CURAND_STATUS_INTERNAL_ERROR as u32, 999);
    }

    #[test]
    fn rng_type_discriminants_match_curand_h() {
        assert_eq!(curandRngType_t::CURAND_RNG_TEST as u32, 0);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_DEFAULT as u32, 100);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_XORWOW as u32, 101);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_MRG32K3A as u32, 121);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_MTGP32 as u32, 141);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_MT19937 as u32, 142);
        assert_eq!(curandRngType_t::CURAND_RNG_PSEUDO_PHILOX4_32_10 as u32, 161);
        assert_eq!(curandRngType_t::CURAND_RNG_QUASI_DEFAULT as u32, 200);
        assert_eq!(curandRngType_t::CURAND_RNG_QUASI_SOBOL32 as u32, 201);
        assert_eq!(
            curandRngType_t::CURAND_RNG_QUASI_SCRAMBLED_SOBOL32 as u32,
            202
        );
        assert_eq!(curandRngType_t::CURAND_RNG_QUASI_SOBOL64 as u32, 203);
        assert_eq!(
            curandRngType_t::CURAND_RNG_QUASI_SCRAMBLED_SOBOL64 as u32,
            204
        );
    }

    #[test]
    fn ordering_and_vector_set_discriminants_match_curand_h() {
        assert_eq!(curandOrdering_t::CURAND_ORDERING_PSEUDO_BEST as u32, 100);
        assert_eq!(curandOrdering_t::CURAND_ORDERING_PSEUDO_DEFAULT as u32, 101);
        assert_eq!(curandOrdering_t::CURAND_ORDERING_PSEUDO_SEEDED as u32, 102);
        assert_eq!(curandOrdering_t::CURAND_ORDERING_QUASI_DEFAULT as u32, 201);

        assert_eq!(
            curandDirectionVectorSet_t::CURAND_DIRECTION_VECTORS_32_JOEKUO6 as u32,
            101
        );
        assert_eq!(
            curandDirectionVectorSet_t::CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6 as u32,
            102
        );
        assert_eq!(
            curandDirectionVectorSet_t::CURAND_DIRECTION_VECTORS_64_JOEKUO6 as u32,
            103
        );
        assert_eq!(
            curandDirectionVectorSet_t::CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6 as u32,
            104
        );
    }
}
