//! Access to the precomputed quasirandom tables shipped with the library.
//!
//! Sobol generation is driven by direction vectors and, for the scrambled
//! variants, scramble constants. The library carries tables covering
//! [`sys::DIRECTION_VECTOR_DIMENSIONS`] dimensions; these accessors expose
//! them for callers that run their own quasirandom device code.

use std::mem::MaybeUninit;
use std::slice;

use crate::error::{Error, ToResult};
use crate::sys;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Precomputed direction vector sets.
///
/// The `JoeKuo6` tables come from Joe and Kuo's searched parameters for up
/// to 21,201 dimensions, of which the library ships the first
/// [`sys::DIRECTION_VECTOR_DIMENSIONS`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionVectorSet {
    /// 32-bit vectors.
    JoeKuo6_32,
    /// 32-bit vectors for scrambled Sobol.
    ScrambledJoeKuo6_32,
    /// 64-bit vectors.
    JoeKuo6_64,
    /// 64-bit vectors for scrambled Sobol.
    ScrambledJoeKuo6_64,
}

impl DirectionVectorSet {
    pub fn to_raw(self) -> sys::curandDirectionVectorSet_t {
        use crate::sys::curandDirectionVectorSet_t::*;

        match self {
            DirectionVectorSet::JoeKuo6_32 => CURAND_DIRECTION_VECTORS_32_JOEKUO6,
            DirectionVectorSet::ScrambledJoeKuo6_32 => {
                CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6
            }
            DirectionVectorSet::JoeKuo6_64 => CURAND_DIRECTION_VECTORS_64_JOEKUO6,
            DirectionVectorSet::ScrambledJoeKuo6_64 => {
                CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6
            }
        }
    }
}

/// Returns the 32-bit direction vectors, one set of 32 per dimension.
///
/// `set` must be one of the 32-bit sets; the 64-bit sets fail with
/// [`CurandError`](crate::error::CurandError::OutOfRange). The slice points
/// into library-owned storage and is valid for the rest of the process.
pub fn direction_vectors32(
    set: DirectionVectorSet,
) -> Result<&'static [sys::curandDirectionVectors32_t]> {
    let api = sys::curand()?;
    let mut vectors = MaybeUninit::uninit();
    unsafe {
        api.get_direction_vectors32(vectors.as_mut_ptr(), set.to_raw())
            .to_result()?;
        Ok(slice::from_raw_parts(
            vectors.assume_init(),
            sys::DIRECTION_VECTOR_DIMENSIONS,
        ))
    }
}

/// Returns the 64-bit direction vectors, one set of 64 per dimension.
///
/// `set` must be one of the 64-bit sets.
pub fn direction_vectors64(
    set: DirectionVectorSet,
) -> Result<&'static [sys::curandDirectionVectors64_t]> {
    let api = sys::curand()?;
    let mut vectors = MaybeUninit::uninit();
    unsafe {
        api.get_direction_vectors64(vectors.as_mut_ptr(), set.to_raw())
            .to_result()?;
        Ok(slice::from_raw_parts(
            vectors.assume_init(),
            sys::DIRECTION_VECTOR_DIMENSIONS,
        ))
    }
}

/// Returns the scramble constants for 32-bit scrambled Sobol, one per
/// dimension.
pub fn scramble_constants32() -> Result<&'static [u32]> {
    let api = sys::curand()?;
    let mut constants = MaybeUninit::uninit();
    unsafe {
        api.get_scramble_constants32(constants.as_mut_ptr())
            .to_result()?;
        Ok(slice::from_raw_parts(
            constants.assume_init(),
            sys::DIRECTION_VECTOR_DIMENSIONS,
        ))
    }
}

/// Returns the scramble constants for 64-bit scrambled Sobol, one per
/// dimension.
pub fn scramble_constants64() -> Result<&'static [u64]> {
    let api = sys::curand()?;
    let mut constants = MaybeUninit::uninit();
    unsafe {
        api.get_scramble_constants64(constants.as_mut_ptr())
            .to_result()?;
        Ok(slice::from_raw_parts(
            constants.assume_init(),
            sys::DIRECTION_VECTOR_DIMENSIONS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::curandDirectionVectorSet_t::*;

    #[test]
    fn vector_sets_map_to_their_native_values() {
        assert_eq!(
            DirectionVectorSet::JoeKuo6_32.to_raw(),
            CURAND_DIRECTION_VECTORS_32_JOEKUO6
        );
        assert_eq!(
            DirectionVectorSet::ScrambledJoeKuo6_32.to_raw(),
            CURAND_SCRAMBLED_DIRECTION_VECTORS_32_JOEKUO6
        );
        assert_eq!(
            DirectionVectorSet::JoeKuo6_64.to_raw(),
            CURAND_DIRECTION_VECTORS_64_JOEKUO6
        );
        assert_eq!(
            DirectionVectorSet::ScrambledJoeKuo6_64.to_raw(),
            CURAND_SCRAMBLED_DIRECTION_VECTORS_64_JOEKUO6
        );
    }
}
