use std::mem::{self, MaybeUninit};
use std::ptr;

use crate::error::*;
use crate::sys;

type Result<T, E = Error> = std::result::Result<T, E>;

/// A Poisson distribution precomputed on the host for repeated sampling at
/// a fixed rate.
///
/// The handle is consumed by device-side sampling code; the host-side
/// [`Generator::generate_poisson`](crate::Generator::generate_poisson)
/// takes the rate directly and does not need one.
#[derive(Debug)]
pub struct PoissonDistribution {
    raw: sys::curandDiscreteDistribution_t,
    api: &'static sys::CurandApi,
}

unsafe impl Send for PoissonDistribution {}

impl PoissonDistribution {
    /// Precomputes the distribution for rate `lambda`.
    ///
    /// Fails with [`CurandError::OutOfRange`] if `lambda` is not a positive
    /// finite value.
    pub fn new(lambda: f64) -> Result<Self> {
        let api = sys::curand()?;
        let mut raw = MaybeUninit::uninit();
        unsafe {
            api.create_poisson_distribution(lambda, raw.as_mut_ptr())
                .to_result()?;
            Ok(Self {
                raw: raw.assume_init(),
                api,
            })
        }
    }

    /// Tries to destroy a [`PoissonDistribution`], returning an error and
    /// the un-dropped value if destruction fails.
    pub fn drop(mut distribution: PoissonDistribution) -> DropResult<PoissonDistribution> {
        if distribution.raw.is_null() {
            return Ok(());
        }

        unsafe {
            let inner = mem::replace(&mut distribution.raw, ptr::null_mut());
            match distribution.api.destroy_distribution(inner).to_result() {
                Ok(()) => {
                    mem::forget(distribution);
                    Ok(())
                }
                Err(e) => Err((
                    e,
                    PoissonDistribution {
                        raw: inner,
                        api: distribution.api,
                    },
                )),
            }
        }
    }

    /// Returns the raw handle for use in device code.
    pub fn as_raw(&self) -> sys::curandDiscreteDistribution_t {
        self.raw
    }
}

impl Drop for PoissonDistribution {
    fn drop(&mut self) {
        if self.raw.is_null() {
            return;
        }

        unsafe {
            let inner = mem::replace(&mut self.raw, ptr::null_mut());
            let _ = self.api.destroy_distribution(inner);
        }
    }
}
