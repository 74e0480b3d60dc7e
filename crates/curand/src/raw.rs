//! Dispatch over the single and double precision generation entry points.
//!
//! The functions are still very unsafe and do nothing except select the
//! correct FFI function for the element type.

use crate::private;
use crate::sys::{curandGenerator_t, curandStatus_t, CurandApi};

/// Floating point types cuRAND can sample continuous distributions into.
pub trait ContinuousRandom: private::Sealed + Copy {
    unsafe fn uniform(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t;
    unsafe fn normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t;
    unsafe fn log_normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t;
}

impl ContinuousRandom for f32 {
    unsafe fn uniform(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        api.generate_uniform(generator, output_ptr, num)
    }

    unsafe fn normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        api.generate_normal(generator, output_ptr, n, mean, stddev)
    }

    unsafe fn log_normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        api.generate_log_normal(generator, output_ptr, n, mean, stddev)
    }
}

impl ContinuousRandom for f64 {
    unsafe fn uniform(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        num: usize,
    ) -> curandStatus_t {
        api.generate_uniform_double(generator, output_ptr, num)
    }

    unsafe fn normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        api.generate_normal_double(generator, output_ptr, n, mean, stddev)
    }

    unsafe fn log_normal(
        api: &CurandApi,
        generator: curandGenerator_t,
        output_ptr: *mut Self,
        n: usize,
        mean: Self,
        stddev: Self,
    ) -> curandStatus_t {
        api.generate_log_normal_double(generator, output_ptr, n, mean, stddev)
    }
}
