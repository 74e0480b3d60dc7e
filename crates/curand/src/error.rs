use std::fmt::Display;

use crate::sys;

pub use crate::sys::LoadError;

/// Result that contains the un-dropped value on error.
pub type DropResult<T> = std::result::Result<(), (CurandError, T)>;

/// Failure statuses returned by cuRAND entry points.
///
/// cuRAND exports no status-to-string function, so [`Display`] spells out
/// the meaning each code is documented with in `curand.h`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurandError {
    VersionMismatch,
    NotInitialized,
    AllocationFailed,
    TypeError,
    OutOfRange,
    LengthNotMultiple,
    DoublePrecisionRequired,
    LaunchFailure,
    PreexistingFailure,
    InitializationFailed,
    ArchMismatch,
    InternalError,
}

impl std::error::Error for CurandError {}

impl Display for CurandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CurandError::*;

        f.write_str(match self {
            VersionMismatch => "header and linked library versions do not match",
            NotInitialized => "generator not initialized",
            AllocationFailed => "memory allocation failed",
            TypeError => "generator is of the wrong type for this operation",
            OutOfRange => "argument out of range",
            LengthNotMultiple => "requested length is not a multiple of the dimension",
            DoublePrecisionRequired => "GPU does not have the required double precision support",
            LaunchFailure => "kernel launch failure",
            PreexistingFailure => "preexisting failure on library entry",
            InitializationFailed => "initialization of CUDA failed",
            ArchMismatch => "GPU architecture does not support the requested feature",
            InternalError => "internal library error",
        })
    }
}

pub trait ToResult {
    fn to_result(self) -> Result<(), CurandError>;
}

impl ToResult for sys::curandStatus_t {
    fn to_result(self) -> Result<(), CurandError> {
        use crate::sys::curandStatus_t::*;
        use CurandError::*;

        Err(match self {
            CURAND_STATUS_SUCCESS => return Ok(()),
            CURAND_STATUS_VERSION_MISMATCH => VersionMismatch,
            CURAND_STATUS_NOT_INITIALIZED => NotInitialized,
            CURAND_STATUS_ALLOCATION_FAILED => AllocationFailed,
            CURAND_STATUS_TYPE_ERROR => TypeError,
            CURAND_STATUS_OUT_OF_RANGE => OutOfRange,
            CURAND_STATUS_LENGTH_NOT_MULTIPLE => LengthNotMultiple,
            CURAND_STATUS_DOUBLE_PRECISION_REQUIRED => DoublePrecisionRequired,
            CURAND_STATUS_LAUNCH_FAILURE => LaunchFailure,
            CURAND_STATUS_PREEXISTING_FAILURE => PreexistingFailure,
            CURAND_STATUS_INITIALIZATION_FAILED => InitializationFailed,
            CURAND_STATUS_ARCH_MISMATCH => ArchMismatch,
            CURAND_STATUS_INTERNAL_ERROR => InternalError,
        })
    }
}

impl CurandError {
    pub fn into_raw(self) -> sys::curandStatus_t {
        use crate::sys::curandStatus_t::*;
        use CurandError::*;

        match self {
            VersionMismatch => CURAND_STATUS_VERSION_MISMATCH,
            NotInitialized => CURAND_STATUS_NOT_INITIALIZED,
            AllocationFailed => CURAND_STATUS_ALLOCATION_FAILED,
            TypeError => CURAND_STATUS_TYPE_ERROR,
            OutOfRange => CURAND_STATUS_OUT_OF_RANGE,
            LengthNotMultiple => CURAND_STATUS_LENGTH_NOT_MULTIPLE,
            DoublePrecisionRequired => CURAND_STATUS_DOUBLE_PRECISION_REQUIRED,
            LaunchFailure => CURAND_STATUS_LAUNCH_FAILURE,
            PreexistingFailure => CURAND_STATUS_PREEXISTING_FAILURE,
            InitializationFailed => CURAND_STATUS_INITIALIZATION_FAILED,
            ArchMismatch => CURAND_STATUS_ARCH_MISMATCH,
            InternalError => CURAND_STATUS_INTERNAL_ERROR,
        }
    }
}

/// Any error the crate can produce: a failing native call, or failure to
/// locate and load the library in the first place.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Curand(CurandError),
    Load(LoadError),
}

impl From<CurandError> for Error {
    fn from(err: CurandError) -> Self {
        Self::Curand(err)
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Curand(e) => Some(e),
            Self::Load(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Curand(_) => write!(f, "cuRAND error"),
            Self::Load(_) => write!(f, "cuRAND library load error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::curandStatus_t::*;

    #[test]
    fn success_translates_to_ok() {
        assert_eq!(CURAND_STATUS_SUCCESS.to_result(), Ok(()));
    }

    #[test]
    fn each_failure_status_round_trips() {
        let statuses = [
            CURAND_STATUS_VERSION_MISMATCH,
            CURAND_STATUS_NOT_INITIALIZED,
            CURAND_STATUS_ALLOCATION_FAILED,
            CURAND_STATUS_TYPE_ERROR,
            CURAND_STATUS_OUT_OF_RANGE,
            CURAND_STATUS_LENGTH_NOT_MULTIPLE,
            CURAND_STATUS_DOUBLE_PRECISION_REQUIRED,
            CURAND_STATUS_LAUNCH_FAILURE,
            CURAND_STATUS_PREEXISTING_FAILURE,
            CURAND_STATUS_INITIALIZATION_FAILED,
            CURAND_STATUS_ARCH_MISMATCH,
            CURAND_STATUS_INTERNAL_ERROR,
        ];

        for status in statuses {
            let err = status.to_result().expect_err("status is a failure");
            assert_eq!(err.into_raw(), status);
        }
    }

    #[test]
    fn typed_variants_carry_the_documented_code() {
        assert_eq!(
            CurandError::NotInitialized.into_raw(),
            CURAND_STATUS_NOT_INITIALIZED
        );
        assert_eq!(
            CurandError::InternalError.into_raw() as u32,
            999,
        );
    }
}
