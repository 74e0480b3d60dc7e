use std::mem::{self, MaybeUninit};
use std::ptr;

use crate::error::*;
use crate::raw::ContinuousRandom;
use crate::sys;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Random number generation algorithms offered by cuRAND.
///
/// Pseudorandom kinds produce statistically independent streams; the
/// quasirandom (Sobol) kinds fill a requested number of dimensions with low
/// discrepancy sequences and are configured with
/// [`set_dimensions`](Generator::set_dimensions) instead of a seed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RngType {
    /// The default pseudorandom generator, currently XORWOW.
    PseudoDefault,
    Xorwow,
    Mrg32k3a,
    Mtgp32,
    Mt19937,
    Philox4x32_10,
    /// The default quasirandom generator, currently Sobol 32-bit.
    QuasiDefault,
    Sobol32,
    ScrambledSobol32,
    Sobol64,
    ScrambledSobol64,
}

impl RngType {
    pub fn to_raw(self) -> sys::curandRngType_t {
        use crate::sys::curandRngType_t::*;
        use RngType::*;

        match self {
            PseudoDefault => CURAND_RNG_PSEUDO_DEFAULT,
            Xorwow => CURAND_RNG_PSEUDO_XORWOW,
            Mrg32k3a => CURAND_RNG_PSEUDO_MRG32K3A,
            Mtgp32 => CURAND_RNG_PSEUDO_MTGP32,
            Mt19937 => CURAND_RNG_PSEUDO_MT19937,
            Philox4x32_10 => CURAND_RNG_PSEUDO_PHILOX4_32_10,
            QuasiDefault => CURAND_RNG_QUASI_DEFAULT,
            Sobol32 => CURAND_RNG_QUASI_SOBOL32,
            ScrambledSobol32 => CURAND_RNG_QUASI_SCRAMBLED_SOBOL32,
            Sobol64 => CURAND_RNG_QUASI_SOBOL64,
            ScrambledSobol64 => CURAND_RNG_QUASI_SCRAMBLED_SOBOL64,
        }
    }
}

/// How generated results are ordered in memory relative to the generator's
/// internal state streams.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordering {
    /// Best performing ordering for the current device. Results may differ
    /// between devices and library versions.
    PseudoBest,
    /// The default, reproducible ordering.
    PseudoDefault,
    /// Fast ordering that seeds each state stream independently.
    PseudoSeeded,
    /// The default ordering for quasirandom generators, dimension major.
    QuasiDefault,
}

impl Ordering {
    pub fn to_raw(self) -> sys::curandOrdering_t {
        use crate::sys::curandOrdering_t::*;

        match self {
            Ordering::PseudoBest => CURAND_ORDERING_PSEUDO_BEST,
            Ordering::PseudoDefault => CURAND_ORDERING_PSEUDO_DEFAULT,
            Ordering::PseudoSeeded => CURAND_ORDERING_PSEUDO_SEEDED,
            Ordering::QuasiDefault => CURAND_ORDERING_QUASI_DEFAULT,
        }
    }
}

/// A cuRAND generator: the central structure required to generate anything.
///
/// A generator owns native-side state (device memory for the state streams,
/// constants, and kernels for device generators) which is freed when the
/// generator is dropped.
///
/// # Multithreaded Usage
///
/// A generator's state is mutated by every generation call, so a single
/// generator cannot be shared between threads. Create one generator per
/// thread instead.
///
/// # Device buffers
///
/// The generation methods write into caller-owned buffers through raw
/// pointers: device memory for generators created with
/// [`new`](Generator::new), host memory for generators created with
/// [`new_host`](Generator::new_host). Allocating, sizing, and freeing those
/// buffers is entirely up to the caller, which is why the methods are
/// `unsafe`.
#[derive(Debug)]
pub struct Generator {
    raw: sys::curandGenerator_t,
    api: &'static sys::CurandApi,
}

unsafe impl Send for Generator {}

impl Generator {
    /// Creates a generator of the given kind that runs on the device and
    /// writes results to device memory.
    ///
    /// The first generator created in a process also loads the native
    /// library; see [`sys::curand`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use curand::{Generator, RngType};
    ///
    /// let mut generator = Generator::new(RngType::Philox4x32_10)?;
    /// generator.set_seed(42)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(rng_type: RngType) -> Result<Self> {
        let api = sys::curand()?;
        let mut raw = MaybeUninit::uninit();
        unsafe {
            api.create_generator(raw.as_mut_ptr(), rng_type.to_raw())
                .to_result()?;
            Ok(Self {
                raw: raw.assume_init(),
                api,
            })
        }
    }

    /// Creates a generator of the given kind that runs on the CPU and
    /// writes results to host memory.
    pub fn new_host(rng_type: RngType) -> Result<Self> {
        let api = sys::curand()?;
        let mut raw = MaybeUninit::uninit();
        unsafe {
            api.create_generator_host(raw.as_mut_ptr(), rng_type.to_raw())
                .to_result()?;
            Ok(Self {
                raw: raw.assume_init(),
                api,
            })
        }
    }

    /// Tries to destroy a [`Generator`], returning an error and the
    /// un-dropped generator if destruction fails.
    pub fn drop(mut generator: Generator) -> DropResult<Generator> {
        if generator.raw.is_null() {
            return Ok(());
        }

        unsafe {
            let inner = mem::replace(&mut generator.raw, ptr::null_mut());
            match generator.api.destroy_generator(inner).to_result() {
                Ok(()) => {
                    mem::forget(generator);
                    Ok(())
                }
                Err(e) => Err((
                    e,
                    Generator {
                        raw: inner,
                        api: generator.api,
                    },
                )),
            }
        }
    }

    /// Sets the seed of a pseudorandom generator.
    ///
    /// Fails with [`CurandError::TypeError`] on quasirandom generators.
    pub fn set_seed(&mut self, seed: u64) -> Result<()> {
        unsafe {
            self.api
                .set_pseudo_random_generator_seed(self.raw, seed)
                .to_result()?;
        }
        Ok(())
    }

    /// Skips ahead `offset` values in the generator's sequence.
    ///
    /// Together with the seed this gives reproducible, non-overlapping
    /// substreams without generating and discarding the prefix.
    pub fn set_offset(&mut self, offset: u64) -> Result<()> {
        unsafe {
            self.api.set_generator_offset(self.raw, offset).to_result()?;
        }
        Ok(())
    }

    /// Sets the ordering of results in memory.
    pub fn set_ordering(&mut self, ordering: Ordering) -> Result<()> {
        unsafe {
            self.api
                .set_generator_ordering(self.raw, ordering.to_raw())
                .to_result()?;
        }
        Ok(())
    }

    /// Sets the number of dimensions of a quasirandom generator, up to
    /// [`sys::DIRECTION_VECTOR_DIMENSIONS`].
    ///
    /// Fails with [`CurandError::TypeError`] on pseudorandom generators and
    /// [`CurandError::OutOfRange`] for out of range dimension counts.
    pub fn set_dimensions(&mut self, num_dimensions: u32) -> Result<()> {
        unsafe {
            self.api
                .set_quasi_random_generator_dimensions(self.raw, num_dimensions)
                .to_result()?;
        }
        Ok(())
    }

    /// Regenerates the generator's starting state from its current seed and
    /// offset, exactly as the next generation call would.
    pub fn generate_seeds(&mut self) -> Result<()> {
        unsafe {
            self.api.generate_seeds(self.raw).to_result()?;
        }
        Ok(())
    }

    /// Makes subsequent generation calls execute in `stream` instead of the
    /// NULL stream.
    ///
    /// # Safety
    ///
    /// `stream` must be a live CUDA stream handle, and must outlive every
    /// generation call issued on this generator while it is set.
    pub unsafe fn set_stream(&mut self, stream: sys::cudaStream_t) -> Result<()> {
        self.api.set_stream(self.raw, stream).to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `num` 32-bit integers, uniform over the whole
    /// range of `u32`.
    ///
    /// # Safety
    ///
    /// `output_ptr` must be valid for writes of `num` values in the memory
    /// space this generator targets (device for [`new`](Generator::new),
    /// host for [`new_host`](Generator::new_host)).
    pub unsafe fn generate(&mut self, output_ptr: *mut u32, num: usize) -> Result<()> {
        self.api.generate(self.raw, output_ptr, num).to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `num` 64-bit integers. Only 64-bit Sobol
    /// generators support this; everything else fails with
    /// [`CurandError::TypeError`].
    ///
    /// # Safety
    ///
    /// Same output buffer contract as [`generate`](Generator::generate).
    pub unsafe fn generate_long_long(&mut self, output_ptr: *mut u64, num: usize) -> Result<()> {
        self.api
            .generate_long_long(self.raw, output_ptr, num)
            .to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `num` floats uniformly distributed in
    /// `(0, 1]`.
    ///
    /// # Safety
    ///
    /// Same output buffer contract as [`generate`](Generator::generate).
    pub unsafe fn generate_uniform<T: ContinuousRandom>(
        &mut self,
        output_ptr: *mut T,
        num: usize,
    ) -> Result<()> {
        T::uniform(self.api, self.raw, output_ptr, num).to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `num` normally distributed floats with the
    /// given mean and standard deviation.
    ///
    /// Quasirandom generators require `n` to be a multiple of the dimension
    /// count and fail with [`CurandError::LengthNotMultiple`] otherwise.
    ///
    /// # Safety
    ///
    /// Same output buffer contract as [`generate`](Generator::generate).
    pub unsafe fn generate_normal<T: ContinuousRandom>(
        &mut self,
        output_ptr: *mut T,
        n: usize,
        mean: T,
        stddev: T,
    ) -> Result<()> {
        T::normal(self.api, self.raw, output_ptr, n, mean, stddev).to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `n` log-normally distributed floats derived
    /// from a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// # Safety
    ///
    /// Same output buffer contract as [`generate`](Generator::generate).
    pub unsafe fn generate_log_normal<T: ContinuousRandom>(
        &mut self,
        output_ptr: *mut T,
        n: usize,
        mean: T,
        stddev: T,
    ) -> Result<()> {
        T::log_normal(self.api, self.raw, output_ptr, n, mean, stddev).to_result()?;
        Ok(())
    }

    /// Fills `output_ptr` with `n` Poisson distributed 32-bit integers with
    /// rate `lambda`.
    ///
    /// # Safety
    ///
    /// Same output buffer contract as [`generate`](Generator::generate).
    pub unsafe fn generate_poisson(
        &mut self,
        output_ptr: *mut u32,
        n: usize,
        lambda: f64,
    ) -> Result<()> {
        self.api
            .generate_poisson(self.raw, output_ptr, n, lambda)
            .to_result()?;
        Ok(())
    }

    /// Returns the raw handle for use with other CUDA libraries.
    pub fn as_raw(&self) -> sys::curandGenerator_t {
        self.raw
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        if self.raw.is_null() {
            return;
        }

        unsafe {
            let inner = mem::replace(&mut self.raw, ptr::null_mut());
            let _ = self.api.destroy_generator(inner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::curandOrdering_t::*;
    use crate::sys::curandRngType_t::*;

    #[test]
    fn rng_types_map_to_their_native_values() {
        let pairs = [
            (RngType::PseudoDefault, CURAND_RNG_PSEUDO_DEFAULT),
            (RngType::Xorwow, CURAND_RNG_PSEUDO_XORWOW),
            (RngType::Mrg32k3a, CURAND_RNG_PSEUDO_MRG32K3A),
            (RngType::Mtgp32, CURAND_RNG_PSEUDO_MTGP32),
            (RngType::Mt19937, CURAND_RNG_PSEUDO_MT19937),
            (RngType::Philox4x32_10, CURAND_RNG_PSEUDO_PHILOX4_32_10),
            (RngType::QuasiDefault, CURAND_RNG_QUASI_DEFAULT),
            (RngType::Sobol32, CURAND_RNG_QUASI_SOBOL32),
            (RngType::ScrambledSobol32, CURAND_RNG_QUASI_SCRAMBLED_SOBOL32),
            (RngType::Sobol64, CURAND_RNG_QUASI_SOBOL64),
            (RngType::ScrambledSobol64, CURAND_RNG_QUASI_SCRAMBLED_SOBOL64),
        ];

        for (kind, raw) in pairs {
            assert_eq!(kind.to_raw(), raw);
        }
    }

    #[test]
    fn orderings_map_to_their_native_values() {
        assert_eq!(Ordering::PseudoBest.to_raw(), CURAND_ORDERING_PSEUDO_BEST);
        assert_eq!(
            Ordering::PseudoDefault.to_raw(),
            CURAND_ORDERING_PSEUDO_DEFAULT
        );
        assert_eq!(
            Ordering::PseudoSeeded.to_raw(),
            CURAND_ORDERING_PSEUDO_SEEDED
        );
        assert_eq!(Ordering::QuasiDefault.to_raw(), CURAND_ORDERING_QUASI_DEFAULT);
    }
}
