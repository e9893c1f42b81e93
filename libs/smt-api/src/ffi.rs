use crate::config::{ConfigParam, ConfigValues};
use crate::error::PluginError;
use crate::transform::Transform;

/// Current ABI version. The runtime checks this against `smt_abi_version()`.
pub const SMT_ABI_VERSION: u32 = 1;

/// Return struct of `smt_create_transform`.
///
/// Exactly one of `plugin_ptr` / `error_ptr` is non-null.
#[repr(C)]
pub struct PluginCreateResult {
    /// `Box<Box<dyn Transform>>` turned into a raw pointer.
    pub plugin_ptr: *mut (),
    /// Boxed UTF-8 error message bytes.
    pub error_ptr: *mut u8,
    pub error_len: usize,
}

pub type AbiVersionFn = unsafe extern "C" fn() -> u32;

/// Returns a boxed `Vec<ConfigParam>`. Caller takes ownership.
pub type ConfigParamsFn = unsafe extern "C" fn() -> *mut ();

/// Takes a pointer to runtime-owned `ConfigValues`; the plugin only borrows it.
pub type CreateTransformFn = unsafe extern "C" fn(*const ()) -> PluginCreateResult;

pub type DestroyTransformFn = unsafe extern "C" fn(*mut ());

pub fn plugin_ok(transform: Box<dyn Transform>) -> PluginCreateResult {
    PluginCreateResult {
        plugin_ptr: Box::into_raw(Box::new(transform)) as *mut (),
        error_ptr: std::ptr::null_mut(),
        error_len: 0,
    }
}

pub fn plugin_err(msg: &str) -> PluginCreateResult {
    let bytes = msg.as_bytes().to_vec().into_boxed_slice();
    let len = bytes.len();
    PluginCreateResult {
        plugin_ptr: std::ptr::null_mut(),
        error_ptr: Box::into_raw(bytes) as *mut u8,
        error_len: len,
    }
}

/// Configure `transform` and wrap it for return across the boundary.
pub fn create_transform<T>(mut transform: T, config: &ConfigValues) -> PluginCreateResult
where
    T: Transform + 'static,
{
    match transform.configure(config) {
        Ok(()) => plugin_ok(Box::new(transform)),
        Err(e) => plugin_err(&e.message),
    }
}

pub fn config_params_ok(params: Vec<ConfigParam>) -> *mut () {
    Box::into_raw(Box::new(params)) as *mut ()
}

/// # Safety
///
/// `ptr` must point to a live `ConfigValues` owned by the runtime, or be null.
/// Null is read as empty config.
pub unsafe fn config_from_ptr<'a>(ptr: *const ()) -> Option<&'a ConfigValues> {
    unsafe { (ptr as *const ConfigValues).as_ref() }
}

/// Runtime side: take ownership of whatever `smt_create_transform` returned.
///
/// # Safety
///
/// `result` must come from `smt_create_transform` of a plugin built against
/// this crate version, and must not be reclaimed twice.
pub unsafe fn into_transform(
    result: PluginCreateResult,
) -> Result<Box<dyn Transform>, PluginError> {
    if !result.error_ptr.is_null() {
        let raw = std::ptr::slice_from_raw_parts_mut(result.error_ptr, result.error_len);
        let bytes = unsafe { Box::from_raw(raw) };
        return Err(PluginError::config(String::from_utf8_lossy(&bytes).into_owned()));
    }
    if result.plugin_ptr.is_null() {
        return Err(PluginError::logic("plugin returned neither a transform nor an error"));
    }
    let boxed = unsafe { Box::from_raw(result.plugin_ptr as *mut Box<dyn Transform>) };
    Ok(*boxed)
}

/// Runtime side: take ownership of the `smt_config_params` result.
///
/// # Safety
///
/// `ptr` must come from `smt_config_params` and must not be reclaimed twice.
pub unsafe fn into_config_params(ptr: *mut ()) -> Vec<ConfigParam> {
    if ptr.is_null() {
        return Vec::new();
    }
    *unsafe { Box::from_raw(ptr as *mut Vec<ConfigParam>) }
}

/// Export `smt_abi_version`.
#[macro_export]
macro_rules! smt_abi_version_fn {
    () => {
        #[unsafe(no_mangle)]
        pub extern "C" fn smt_abi_version() -> u32 {
            $crate::ffi::SMT_ABI_VERSION
        }
    };
}

/// Export `smt_config_params` from a literal list (`[]` for no parameters).
#[macro_export]
macro_rules! smt_config_params_fn {
    ([$($param:expr),* $(,)?]) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn smt_config_params() -> *mut () {
            $crate::ffi::config_params_ok(vec![$($param),*])
        }
    };
}

/// Export `smt_destroy_transform`.
#[macro_export]
macro_rules! smt_destroy_fn {
    () => {
        /// # Safety
        ///
        /// `ptr` must come from `smt_create_transform` and not be freed twice.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn smt_destroy_transform(ptr: *mut ()) {
            if !ptr.is_null() {
                let mut transform =
                    unsafe { Box::from_raw(ptr as *mut Box<dyn $crate::transform::Transform>) };
                $crate::transform::Transform::close(&mut **transform);
            }
        }
    };
}
