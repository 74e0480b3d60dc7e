//! Discovery and loading of the native cuRAND shared library.
//!
//! cuRAND installs under different file names depending on the platform and
//! the toolkit version, and machines frequently carry only a versioned
//! library without the unversioned symlink. The loader therefore probes a
//! fixed candidate list per platform: the unversioned canonical name first,
//! then each known toolkit version from newest to oldest. The first name
//! the system loader accepts wins; a candidate that fails to load is not an
//! error, only exhausting the whole list is.
//!
//! Loading happens once per process through [`curand`]. The resolved
//! function table never changes afterwards and can be shared freely across
//! threads.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use libloading::{Library, Symbol};
use tracing::{debug, info};

use crate::{
    cudaStream_t, curandDirectionVectorSet_t, curandDirectionVectors32_t,
    curandDirectionVectors64_t, curandDiscreteDistribution_t, curandGenerator_t, curandOrdering_t,
    curandRngType_t, curandStatus_t, libraryPropertyType_t,
};

use std::os::raw::{c_double, c_float, c_int, c_uint, c_ulonglong};

/// Toolkit versions probed for versioned library names, newest first.
const VERSIONS: [(u32, u32); 6] = [(9, 2), (9, 1), (9, 0), (8, 0), (7, 5), (7, 0)];

/// An error raised while locating or loading the native library.
///
/// All variants are fatal: once loading has failed, no native functionality
/// is available for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The running platform is not one cuRAND ships on.
    UnsupportedPlatform {
        os: String,
    },
    /// Every candidate library name failed to load.
    NotFound {
        searched: Vec<String>,
    },
    /// A library was found but does not export an expected entry point.
    MissingSymbol {
        name: &'static str,
    },
}

impl std::error::Error for LoadError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnsupportedPlatform { os } => {
                write!(f, "cuRAND is not available on platform `{os}`")
            }
            LoadError::NotFound { searched } => {
                write!(f, "cuRAND library not found, tried: {}", searched.join(", "))
            }
            LoadError::MissingSymbol { name } => {
                write!(f, "loaded cuRAND library does not export `{name}`")
            }
        }
    }
}

/// Platform families with distinct library naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Linux,
    MacOs,
    Windows,
}

fn family_from_target_os(os: &str) -> Result<Family, LoadError> {
    match os {
        "linux" => Ok(Family::Linux),
        "macos" => Ok(Family::MacOs),
        "windows" => Ok(Family::Windows),
        other => Err(LoadError::UnsupportedPlatform {
            os: other.to_string(),
        }),
    }
}

/// Builds the ordered candidate file names for one platform family.
///
/// `pointer_width` only matters on Windows, where the versioned DLLs encode
/// the architecture (`curand64_92.dll` vs `curand32_92.dll`) and the version
/// as a two-digit integer.
fn candidate_names(family: Family, pointer_width: u32) -> Vec<String> {
    match family {
        Family::Linux => {
            let mut names = vec!["libcurand.so".to_string()];
            names.extend(
                VERSIONS
                    .iter()
                    .map(|(major, minor)| format!("libcurand.so.{major}.{minor}")),
            );
            names
        }
        Family::MacOs => vec!["libcurand.dylib".to_string()],
        Family::Windows => {
            let arch = if pointer_width == 64 { 64 } else { 32 };
            let mut names = vec!["curand.dll".to_string()];
            names.extend(
                VERSIONS
                    .iter()
                    .map(|(major, minor)| format!("curand{arch}_{major}{minor}.dll")),
            );
            names
        }
    }
}

/// Directories from `CUDA_LIBRARY_PATH`, if set.
fn library_search_dirs() -> Vec<PathBuf> {
    let Ok(raw) = env::var("CUDA_LIBRARY_PATH") else {
        return Vec::new();
    };
    let separator = if cfg!(target_os = "windows") { ';' } else { ':' };
    raw.split(separator)
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Expands candidate names into the full probe order.
///
/// Name order dominates: every probe for one candidate (each search
/// directory, then the bare name handed to the system loader) comes before
/// any probe for the next candidate.
fn probe_order(names: &[String], dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(names.len() * (dirs.len() + 1));
    for name in names {
        paths.extend(dirs.iter().map(|dir| dir.join(name)));
        paths.push(PathBuf::from(name));
    }
    paths
}

/// Tries each path in order, returning the first successful load and the
/// path that produced it. Individual failures are skipped.
fn first_loadable<T, E: fmt::Display>(
    paths: &[PathBuf],
    mut attempt: impl FnMut(&Path) -> Result<T, E>,
) -> Option<(T, PathBuf)> {
    for path in paths {
        match attempt(path) {
            Ok(loaded) => return Some((loaded, path.clone())),
            Err(err) => debug!("failed to load {}: {}", path.display(), err),
        }
    }
    None
}

unsafe fn resolve<F: Copy>(lib: &Library, name: &'static str) -> Result<F, LoadError> {
    let symbol: Symbol<F> = lib
        .get(name.as_bytes())
        .map_err(|_| LoadError::MissingSymbol { name })?;
    Ok(*symbol)
}

type CreateGeneratorFn =
    unsafe extern "C" fn(generator: *mut curandGenerator_t, rng_type: curandRngType_t) -> curandStatus_t;
type DestroyGeneratorFn = unsafe extern "C" fn(generator: curandGenerator_t) -> curandStatus_t;
type GetVersionFn = unsafe extern "C" fn(version: *mut c_int) -> curandStatus_t;
type GetPropertyFn =
    unsafe extern "C" fn(property: libraryPropertyType_t, value: *mut c_int) -> curandStatus_t;
type SetStreamFn =
    unsafe extern "C" fn(generator: curandGenerator_t, stream: cudaStream_t) -> curandStatus_t;
type SetSeedFn =
    unsafe extern "C" fn(generator: curandGenerator_t, seed: c_ulonglong) -> curandStatus_t;
type SetOffsetFn =
    unsafe extern "C" fn(generator: curandGenerator_t, offset: c_ulonglong) -> curandStatus_t;
type SetOrderingFn =
    unsafe extern "C" fn(generator: curandGenerator_t, order: curandOrdering_t) -> curandStatus_t;
type SetDimensionsFn =
    unsafe extern "C" fn(generator: curandGenerator_t, num_dimensions: c_uint) -> curandStatus_t;
type GenerateFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_uint,
    num: usize,
) -> curandStatus_t;
type GenerateLongLongFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_ulonglong,
    num: usize,
) -> curandStatus_t;
type GenerateUniformFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_float,
    num: usize,
) -> curandStatus_t;
type GenerateUniformDoubleFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_double,
    num: usize,
) -> curandStatus_t;
type GenerateNormalFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_float,
    n: usize,
    mean: c_float,
    stddev: c_float,
) -> curandStatus_t;
type GenerateNormalDoubleFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_double,
    n: usize,
    mean: c_double,
    stddev: c_double,
) -> curandStatus_t;
type GeneratePoissonFn = unsafe extern "C" fn(
    generator: curandGenerator_t,
    output_ptr: *mut c_uint,
    n: usize,
    lambda: c_double,
) -> curandStatus_t;
type CreatePoissonDistributionFn = unsafe extern "C" fn(
    lambda: c_double,
    discrete_distribution: *mut curandDiscreteDistribution_t,
) -> curandStatus_t;
type DestroyDistributionFn =
    unsafe extern "C" fn(discrete_distribution: curandDiscreteDistribution_t) -> curandStatus_t;
type GenerateSeedsFn = unsafe extern "C" fn(generator: curandGenerator_t) -> curandStatus_t;
type GetDirectionVectors32Fn = unsafe extern "C" fn(
    vectors: *mut *mut curandDirectionVectors32_t,
    set: curandDirectionVectorSet_t,
) -> curandStatus_t;
type GetScrambleConstants32Fn =
    unsafe extern "C" fn(constants: *mut *mut c_uint) -> curandStatus_t;
type GetDirectionVectors64Fn = unsafe extern "C" fn(
    vectors: *mut *mut curandDirectionVectors64_t,
    set: curandDirectionVectorSet_t,
) -> curandStatus_t;
type GetScrambleConstants64Fn =
    unsafe extern "C" fn(constants: *mut *mut c_ulonglong) -> curandStatus_t;

/// Resolved entry points of the loaded cuRAND library.
///
/// Every method forwards its arguments to the identically named native
/// function unchanged and returns the raw status code; translation into
/// typed errors is left to higher layers.
pub struct CurandApi {
    create_generator: CreateGeneratorFn,
    create_generator_host: CreateGeneratorFn,
    destroy_generator: DestroyGeneratorFn,
    get_version: GetVersionFn,
    get_property: GetPropertyFn,
    set_stream: SetStreamFn,
    set_pseudo_random_generator_seed: SetSeedFn,
    set_generator_offset: SetOffsetFn,
    set_generator_ordering: SetOrderingFn,
    set_quasi_random_generator_dimensions: SetDimensionsFn,
    generate: GenerateFn,
    generate_long_long: GenerateLongLongFn,
    generate_uniform: GenerateUniformFn,
    generate_uniform_double: GenerateUniformDoubleFn,
    generate_normal: GenerateNormalFn,
    generate_normal_double: GenerateNormalDoubleFn,
    generate_log_normal: GenerateNormalFn,
    generate_log_normal_double: GenerateNormalDoubleFn,
    generate_poisson: GeneratePoissonFn,
    create_poisson_distribution: CreatePoissonDistributionFn,
    destroy_distribution: DestroyDistributionFn,
    generate_seeds: GenerateSeedsFn,
    get_direction_vectors32: GetDirectionVectors32Fn,
    get_scramble_constants32: GetScrambleConstants32Fn,
    get_direction_vectors64: GetDirectionVectors64Fn,
    get_scramble_constants64: GetScrambleConstants64Fn,
    _lib: Library,
}

impl fmt::Debug for CurandApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurandApi").finish_non_exhaustive()
    }
}

impl CurandApi {
    fn load() -> Result<Self, LoadError> {
        let family = family_from_target_os(env::consts::OS)?;
        let pointer_width = if cfg!(target_pointer_width = "64") { 64 } else { 32 };
        let names = candidate_names(family, pointer_width);
        let paths = probe_order(&names, &library_search_dirs());

        let Some((lib, path)) = first_loadable(&paths, |path| unsafe { Library::new(path) })
        else {
            return Err(LoadError::NotFound { searched: names });
        };
        info!("loaded cuRAND from {}", path.display());

        unsafe { Self::resolve_all(lib) }
    }

    unsafe fn resolve_all(lib: Library) -> Result<Self, LoadError> {
        Ok(Self {
            create_generator: resolve(&lib, "curandCreateGenerator")?,
            create_generator_host: resolve(&lib, "curandCreateGeneratorHost")?,
            destroy_generator: resolve(&lib, "curandDestroyGenerator")?,
            get_version: resolve(&lib, "curandGetVersion")?,
            get_property: resolve(&lib, "curandGetProperty")?,
            set_stream: resolve(&lib, "curandSetStream")?,
            set_pseudo_random_generator_seed: resolve(&lib, "curandSetPseudoRandomGeneratorSeed")?,
            set_generator_offset: resolve(&lib, "curandSetGeneratorOffset")?,
            set_generator_ordering: resolve(&lib, "curandSetGeneratorOrdering")?,
            set_quasi_random_generator_dimensions: resolve(
                &lib,
                "curandSetQuasiRandomGeneratorDimensions",
            )?,
            generate: resolve(&lib, "curandGenerate")?,
            generate_long_long: resolve(&lib, "curandGenerateLongLong")?,
            generate_uniform: resolve(&lib, "curandGenerateUniform")?,
            generate_uniform_double: resolve(&lib, "curandGenerateUniformDouble")?,
            generate_normal: resolve(&lib, "curandGenerateNormal")?,
            generate_normal_double: resolve(&lib, "curandGenerateNormalDouble")?,
            generate_log_normal: resolve(&lib, "curandGenerateLogNormal")?,
            generate_log_normal_double: resolve(&lib, "curandGenerateLogNormalDouble")?,
            generate_poisson: resolve(&lib, "curandGeneratePoisson")?,
            create_poisson_distribution: resolve(&lib, "curandCreatePoissonDistribution")?,
            destroy_distribution: resolve(&lib, "curandDestroyDistribution")?,
            generate_seeds: resolve(&lib, "curandGenerateSeeds")?,
            get_direction_vectors32: resolve(&lib, "curandGetDirectionVectors32")?,
            get_scramble_constants32: resolve(&lib, "curandGetScrambleConstants32")?,
            get_direction_vectors64: resolve(&lib, "curandGetDirectionVectors64")?,
            get_scramble_constants64: resolve(&lib, "curandGetScrambleConstants64")?,
            _lib: lib,
        })
    }

    /// `curandCreateGenerator(curandGenerator_t *generator, curandRngType_t rng_type)`
    pub unsafe fn create_generator(
        &self,
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t {
        (self.create_generator)(generator, rng_type)
    }

    /// `curandCreateGeneratorHost(curandGenerator_t *generator, curandRngType_t rng_type)`
    pub unsafe fn create_generator_host(
        &self,
        generator: *mut curandGenerator_t,
        rng_type: curandRngType_t,
    ) -> curandStatus_t {
        (self.create_generator_host)(generator, rng_type)
    }

    /// `curandDestroyGenerator(curandGenerator_t generator)`
    pub unsafe fn destroy_generator(&self, generator: curandGenerator_t) -> curandStatus_t {
        (self.destroy_generator)(generator)
    }

    /// `curandGetVersion(int *version)`
    pub unsafe fn get_version(&self, version: *mut c_int) -> curandStatus_t {
        (self.get_version)(version)
    }

    /// `curandGetProperty(libraryPropertyType type, int *value)`
    pub unsafe fn get_property(
        &self,
        property: libraryPropertyType_t,
        value: *mut c_int,
    ) -> curandStatus_t {
        (self.get_property)(property, value)
    }

    /// `curandSetStream(curandGenerator_t generator, cudaStream_t stream)`
    pub unsafe fn set_stream(
        &self,
        generator: curandGenerator_t,
        stream: cudaStream_t,
    ) -> curandStatus_t {
        (self.set_stream)(generator, stream)
    }

    /// `curandSetPseudoRandomGeneratorSeed(curandGenerator_t generator, unsigned long long seed)`
    pub unsafe fn set_pseudo_random_generator_seed(
        &self,
        generator: curandGenerator_t,
        seed: c_ulonglong,
    ) -> curandStatus_t {
        (self.set_pseudo_random_generator_seed)(generator, seed)
    }

    /// `curandSetGeneratorOffset(curandGenerator_t generator, unsigned long long offset)`
    pub unsafe fn set_generator_offset(
        &self,
        generator: curandGenerator_t,
        offset: c_ulonglong,
    ) -> curandStatus_t {
        (self.set_generator_offset)(generator, offset)
    }

    /// `curandSetGeneratorOrdering(curandGenerator_t generator, curandOrdering_t order)`
    pub unsafe fn set_generator_ordering(
        &self,
        generator: curandGenerator_t,
        order: curandOrdering_t,
    ) -> curandStatus_t {
        (self.set_generator_ordering)(generator, order)
    }

    /// `curandSetQuasiRandomGeneratorDimensions(curandGenerator_t generator, unsigned int num_dimensions)`
    pub unsafe fn set_quasi_random_generator_dimensions(
        &self,
        generator: curandGenerator_t,
        num_dimensions: c_uint,
    ) -> curandStatus_t {
        (self.set_quasi_random_generator_dimensions)(generator, num_dimensions)
    }

    /// `curandGenerate(curandGenerator_t generator, unsigned int *outputPtr, size_t num)`
    pub unsafe fn generate(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        num: usize,
    ) -> curandStatus_t {
        (self.generate)(generator, output_ptr, num)
    }

    /// `curandGenerateLongLong(curandGenerator_t generator, unsigned long long *outputPtr, size_t num)`
    pub unsafe fn generate_long_long(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_ulonglong,
        num: usize,
    ) -> curandStatus_t {
        (self.generate_long_long)(generator, output_ptr, num)
    }

    /// `curandGenerateUniform(curandGenerator_t generator, float *outputPtr, size_t num)`
    pub unsafe fn generate_uniform(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_float,
        num: usize,
    ) -> curandStatus_t {
        (self.generate_uniform)(generator, output_ptr, num)
    }

    /// `curandGenerateUniformDouble(curandGenerator_t generator, double *outputPtr, size_t num)`
    pub unsafe fn generate_uniform_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_double,
        num: usize,
    ) -> curandStatus_t {
        (self.generate_uniform_double)(generator, output_ptr, num)
    }

    /// `curandGenerateNormal(curandGenerator_t generator, float *outputPtr, size_t n, float mean, float stddev)`
    pub unsafe fn generate_normal(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_float,
        n: usize,
        mean: c_float,
        stddev: c_float,
    ) -> curandStatus_t {
        (self.generate_normal)(generator, output_ptr, n, mean, stddev)
    }

    /// `curandGenerateNormalDouble(curandGenerator_t generator, double *outputPtr, size_t n, double mean, double stddev)`
    pub unsafe fn generate_normal_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_double,
        n: usize,
        mean: c_double,
        stddev: c_double,
    ) -> curandStatus_t {
        (self.generate_normal_double)(generator, output_ptr, n, mean, stddev)
    }

    /// `curandGenerateLogNormal(curandGenerator_t generator, float *outputPtr, size_t n, float mean, float stddev)`
    pub unsafe fn generate_log_normal(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_float,
        n: usize,
        mean: c_float,
        stddev: c_float,
    ) -> curandStatus_t {
        (self.generate_log_normal)(generator, output_ptr, n, mean, stddev)
    }

    /// `curandGenerateLogNormalDouble(curandGenerator_t generator, double *outputPtr, size_t n, double mean, double stddev)`
    pub unsafe fn generate_log_normal_double(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_double,
        n: usize,
        mean: c_double,
        stddev: c_double,
    ) -> curandStatus_t {
        (self.generate_log_normal_double)(generator, output_ptr, n, mean, stddev)
    }

    /// `curandGeneratePoisson(curandGenerator_t generator, unsigned int *outputPtr, size_t n, double lambda)`
    pub unsafe fn generate_poisson(
        &self,
        generator: curandGenerator_t,
        output_ptr: *mut c_uint,
        n: usize,
        lambda: c_double,
    ) -> curandStatus_t {
        (self.generate_poisson)(generator, output_ptr, n, lambda)
    }

    /// `curandCreatePoissonDistribution(double lambda, curandDiscreteDistribution_t *discrete_distribution)`
    pub unsafe fn create_poisson_distribution(
        &self,
        lambda: c_double,
        discrete_distribution: *mut curandDiscreteDistribution_t,
    ) -> curandStatus_t {
        (self.create_poisson_distribution)(lambda, discrete_distribution)
    }

    /// `curandDestroyDistribution(curandDiscreteDistribution_t discrete_distribution)`
    pub unsafe fn destroy_distribution(
        &self,
        discrete_distribution: curandDiscreteDistribution_t,
    ) -> curandStatus_t {
        (self.destroy_distribution)(discrete_distribution)
    }

    /// `curandGenerateSeeds(curandGenerator_t generator)`
    pub unsafe fn generate_seeds(&self, generator: curandGenerator_t) -> curandStatus_t {
        (self.generate_seeds)(generator)
    }

    /// `curandGetDirectionVectors32(curandDirectionVectors32_t *vectors[], curandDirectionVectorSet_t set)`
    pub unsafe fn get_direction_vectors32(
        &self,
        vectors: *mut *mut curandDirectionVectors32_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t {
        (self.get_direction_vectors32)(vectors, set)
    }

    /// `curandGetScrambleConstants32(unsigned int **constants)`
    pub unsafe fn get_scramble_constants32(
        &self,
        constants: *mut *mut c_uint,
    ) -> curandStatus_t {
        (self.get_scramble_constants32)(constants)
    }

    /// `curandGetDirectionVectors64(curandDirectionVectors64_t *vectors[], curandDirectionVectorSet_t set)`
    pub unsafe fn get_direction_vectors64(
        &self,
        vectors: *mut *mut curandDirectionVectors64_t,
        set: curandDirectionVectorSet_t,
    ) -> curandStatus_t {
        (self.get_direction_vectors64)(vectors, set)
    }

    /// `curandGetScrambleConstants64(unsigned long long **constants)`
    pub unsafe fn get_scramble_constants64(
        &self,
        constants: *mut *mut c_ulonglong,
    ) -> curandStatus_t {
        (self.get_scramble_constants64)(constants)
    }
}

/// Returns the process-wide handle to the loaded cuRAND library.
///
/// The first call performs platform detection, library probing, and symbol
/// resolution; every later call returns the cached table, or the cached
/// failure if loading did not succeed. The returned reference is valid for
/// the rest of the process.
pub fn curand() -> Result<&'static CurandApi, LoadError> {
    static CURAND: OnceLock<Result<CurandApi, LoadError>> = OnceLock::new();
    CURAND
        .get_or_init(CurandApi::load)
        .as_ref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_candidates_match_known_install_names() {
        let names = candidate_names(Family::Linux, 64);
        assert_eq!(
            names,
            [
                "libcurand.so",
                "libcurand.so.9.2",
                "libcurand.so.9.1",
                "libcurand.so.9.0",
                "libcurand.so.8.0",
                "libcurand.so.7.5",
                "libcurand.so.7.0",
            ]
        );
        // Pointer width is irrelevant outside Windows.
        assert_eq!(names, candidate_names(Family::Linux, 32));
    }

    #[test]
    fn macos_has_a_single_candidate() {
        assert_eq!(candidate_names(Family::MacOs, 64), ["libcurand.dylib"]);
    }

    #[test]
    fn windows_candidates_encode_arch_and_two_digit_version() {
        assert_eq!(
            candidate_names(Family::Windows, 64),
            [
                "curand.dll",
                "curand64_92.dll",
                "curand64_91.dll",
                "curand64_90.dll",
                "curand64_80.dll",
                "curand64_75.dll",
                "curand64_70.dll",
            ]
        );
        assert_eq!(
            candidate_names(Family::Windows, 32),
            [
                "curand.dll",
                "curand32_92.dll",
                "curand32_91.dll",
                "curand32_90.dll",
                "curand32_80.dll",
                "curand32_75.dll",
                "curand32_70.dll",
            ]
        );
    }

    #[test]
    fn unrecognized_platforms_are_rejected_before_any_probe() {
        for os in ["freebsd", "netbsd", "solaris", "wasi", ""] {
            assert_eq!(
                family_from_target_os(os),
                Err(LoadError::UnsupportedPlatform { os: os.to_string() })
            );
        }
    }

    #[test]
    fn probing_stops_at_the_first_success() {
        let names = candidate_names(Family::Linux, 64);
        let paths = probe_order(&names, &[]);

        for winner in 0..paths.len() {
            let mut attempts = 0;
            let found = first_loadable(&paths, |path| {
                let index = attempts;
                attempts += 1;
                if index == winner {
                    Ok(path.to_path_buf())
                } else {
                    Err("not present")
                }
            });

            let (loaded, path) = found.expect("one candidate was loadable");
            assert_eq!(loaded, paths[winner]);
            assert_eq!(path, paths[winner]);
            assert_eq!(attempts, winner + 1);
        }
    }

    #[test]
    fn exhausting_all_candidates_yields_nothing() {
        let names = candidate_names(Family::Windows, 32);
        let paths = probe_order(&names, &[]);

        let mut attempts = 0;
        let found = first_loadable(&paths, |_| {
            attempts += 1;
            Err::<(), _>("not present")
        });

        assert!(found.is_none());
        assert_eq!(attempts, paths.len());
    }

    #[test]
    fn probe_order_is_name_major() {
        let names = vec!["libcurand.so".to_string(), "libcurand.so.9.2".to_string()];
        let dirs = vec![PathBuf::from("/opt/cuda/lib64"), PathBuf::from("/usr/lib")];

        let paths = probe_order(&names, &dirs);
        assert_eq!(
            paths,
            [
                PathBuf::from("/opt/cuda/lib64/libcurand.so"),
                PathBuf::from("/usr/lib/libcurand.so"),
                PathBuf::from("libcurand.so"),
                PathBuf::from("/opt/cuda/lib64/libcurand.so.9.2"),
                PathBuf::from("/usr/lib/libcurand.so.9.2"),
                PathBuf::from("libcurand.so.9.2"),
            ]
        );
    }

    #[test]
    fn probe_order_without_dirs_is_the_candidate_list() {
        let names = candidate_names(Family::Linux, 64);
        let paths = probe_order(&names, &[]);
        let expected: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        assert_eq!(paths, expected);
    }
}
