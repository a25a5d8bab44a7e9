/*
 * // Copyright (c) Radzivon Bartoshyk 9/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Registration point for alternate execution backends.
//!
//! A backend (a GPU runtime, for instance) is opaque to the planner: it advertises itself
//! through [`BackendInfo`], enumerates devices and hands out contexts that allocate device
//! buffers, streams and plans. The crate ships no backend of its own.

use crate::Precision;
use num_complex::Complex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    NoBackend,
    Unavailable,
    NotImplemented,
    InvalidLength(usize),
    LengthMismatch(usize, usize),
    PrecisionMismatch(Precision, Precision),
    Device(String),
}

impl Error for BackendError {}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NoBackend => f.write_str("No backend is registered"),
            BackendError::Unavailable => {
                f.write_str("Backend is registered but unavailable on this system")
            }
            BackendError::NotImplemented => f.write_str("Operation is not implemented by backend"),
            BackendError::InvalidLength(n) => {
                f.write_fmt(format_args!("Backend cannot plan length {n}"))
            }
            BackendError::LengthMismatch(expected, actual) => f.write_fmt(format_args!(
                "Buffer length must be {expected}, but it is {actual}"
            )),
            BackendError::PrecisionMismatch(expected, actual) => f.write_fmt(format_args!(
                "Buffer precision must be {expected}, but it is {actual}"
            )),
            BackendError::Device(message) => f.write_fmt(format_args!("Device error: {message}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub vendor: String,
    pub driver: String,
    pub memory_mb: usize,
    pub compute_capability: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendPlanOptions {
    pub device_index: usize,
    pub stream_count: usize,
    pub in_place: bool,
}

/// Host side view a device buffer is uploaded from.
#[derive(Debug)]
pub enum HostSlice<'a> {
    Single(&'a [Complex<f32>]),
    Double(&'a [Complex<f64>]),
}

/// Host side view a device buffer is downloaded into.
#[derive(Debug)]
pub enum HostSliceMut<'a> {
    Single(&'a mut [Complex<f32>]),
    Double(&'a mut [Complex<f64>]),
}

impl HostSlice<'_> {
    pub fn len(&self) -> usize {
        match self {
            HostSlice::Single(v) => v.len(),
            HostSlice::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn precision(&self) -> Precision {
        match self {
            HostSlice::Single(_) => Precision::Single,
            HostSlice::Double(_) => Precision::Double,
        }
    }
}

impl HostSliceMut<'_> {
    pub fn len(&self) -> usize {
        match self {
            HostSliceMut::Single(v) => v.len(),
            HostSliceMut::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn precision(&self) -> Precision {
        match self {
            HostSliceMut::Single(_) => Precision::Single,
            HostSliceMut::Double(_) => Precision::Double,
        }
    }
}

pub trait DeviceBuffer: Send {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn precision(&self) -> Precision;

    fn upload(&mut self, src: HostSlice<'_>) -> Result<(), BackendError>;

    fn download(&self, dst: HostSliceMut<'_>) -> Result<(), BackendError>;
}

pub trait Stream: Send {
    fn synchronize(&self) -> Result<(), BackendError>;
}

/// Device resident counterpart of [`TransformPlan`](crate::TransformPlan).
pub trait DevicePlan: Send {
    fn length(&self) -> usize;

    fn precision(&self) -> Precision;

    fn forward(
        &mut self,
        dst: &mut dyn DeviceBuffer,
        src: &dyn DeviceBuffer,
    ) -> Result<(), BackendError>;

    fn inverse(
        &mut self,
        dst: &mut dyn DeviceBuffer,
        src: &dyn DeviceBuffer,
    ) -> Result<(), BackendError>;
}

pub trait BackendContext: Send {
    fn device(&self) -> DeviceInfo;

    fn new_buffer(
        &self,
        length: usize,
        precision: Precision,
    ) -> Result<Box<dyn DeviceBuffer>, BackendError>;

    fn new_stream(&self) -> Result<Box<dyn Stream>, BackendError>;

    fn new_plan(
        &self,
        length: usize,
        precision: Precision,
        options: BackendPlanOptions,
    ) -> Result<Box<dyn DevicePlan>, BackendError>;
}

pub trait Backend: Send + Sync {
    fn info(&self) -> BackendInfo;

    fn available(&self) -> bool;

    fn devices(&self) -> Result<Vec<DeviceInfo>, BackendError>;

    fn new_context(&self, device_index: usize) -> Result<Box<dyn BackendContext>, BackendError>;
}

static BACKEND: RwLock<Option<Arc<dyn Backend>>> = RwLock::new(None);

/// Installs `backend` process-wide, `None` clears it.
pub fn register_backend(backend: Option<Arc<dyn Backend>>) {
    if let Some(backend) = backend.as_ref() {
        log::info!("Registering FFT backend {}", backend.info().name);
    }
    *BACKEND.write().unwrap_or_else(PoisonError::into_inner) = backend;
}

/// Currently registered backend.
pub fn current_backend() -> Result<Arc<dyn Backend>, BackendError> {
    BACKEND
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(BackendError::NoBackend)
}

pub fn current_backend_info() -> Option<BackendInfo> {
    current_backend().ok().map(|backend| backend.info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FftPlan;
    use crate::util::test_support::{assert_close, random_signal};

    struct MockBuffer {
        data: Vec<Complex<f64>>,
    }

    impl DeviceBuffer for MockBuffer {
        fn len(&self) -> usize {
            self.data.len()
        }

        fn precision(&self) -> Precision {
            Precision::Double
        }

        fn upload(&mut self, src: HostSlice<'_>) -> Result<(), BackendError> {
            match src {
                HostSlice::Double(v) if v.len() == self.data.len() => {
                    self.data.copy_from_slice(v);
                    Ok(())
                }
                HostSlice::Double(v) => {
                    Err(BackendError::LengthMismatch(self.data.len(), v.len()))
                }
                HostSlice::Single(_) => Err(BackendError::PrecisionMismatch(
                    Precision::Double,
                    Precision::Single,
                )),
            }
        }

        fn download(&self, dst: HostSliceMut<'_>) -> Result<(), BackendError> {
            match dst {
                HostSliceMut::Double(v) if v.len() == self.data.len() => {
                    v.copy_from_slice(&self.data);
                    Ok(())
                }
                other => Err(BackendError::LengthMismatch(self.data.len(), other.len())),
            }
        }
    }

    struct MockPlan {
        host: FftPlan<f64>,
    }

    impl MockPlan {
        fn run(
            &mut self,
            dst: &mut dyn DeviceBuffer,
            src: &dyn DeviceBuffer,
            forward: bool,
        ) -> Result<(), BackendError> {
            let n = self.host.length();
            let mut input = vec![Complex::new(0., 0.); n];
            src.download(HostSliceMut::Double(&mut input))?;
            let mut output = vec![Complex::new(0., 0.); n];
            let executed = if forward {
                self.host.forward(&mut output, &input)
            } else {
                self.host.inverse(&mut output, &input)
            };
            executed.map_err(|e| BackendError::Device(e.to_string()))?;
            dst.upload(HostSlice::Double(&output))
        }
    }

    impl DevicePlan for MockPlan {
        fn length(&self) -> usize {
            self.host.length()
        }

        fn precision(&self) -> Precision {
            Precision::Double
        }

        fn forward(
            &mut self,
            dst: &mut dyn DeviceBuffer,
            src: &dyn DeviceBuffer,
        ) -> Result<(), BackendError> {
            self.run(dst, src, true)
        }

        fn inverse(
            &mut self,
            dst: &mut dyn DeviceBuffer,
            src: &dyn DeviceBuffer,
        ) -> Result<(), BackendError> {
            self.run(dst, src, false)
        }
    }

    struct MockContext;

    impl BackendContext for MockContext {
        fn device(&self) -> DeviceInfo {
            DeviceInfo {
                name: "mock0".to_string(),
                vendor: "mock".to_string(),
                ..Default::default()
            }
        }

        fn new_buffer(
            &self,
            length: usize,
            precision: Precision,
        ) -> Result<Box<dyn DeviceBuffer>, BackendError> {
            match precision {
                Precision::Double => Ok(Box::new(MockBuffer {
                    data: vec![Complex::new(0., 0.); length],
                })),
                Precision::Single => Err(BackendError::NotImplemented),
            }
        }

        fn new_stream(&self) -> Result<Box<dyn Stream>, BackendError> {
            Err(BackendError::NotImplemented)
        }

        fn new_plan(
            &self,
            length: usize,
            precision: Precision,
            _: BackendPlanOptions,
        ) -> Result<Box<dyn DevicePlan>, BackendError> {
            if precision != Precision::Double {
                return Err(BackendError::NotImplemented);
            }
            let host = FftPlan::new(length).map_err(|_| BackendError::InvalidLength(length))?;
            Ok(Box::new(MockPlan { host }))
        }
    }

    struct MockBackend;

    impl Backend for MockBackend {
        fn info(&self) -> BackendInfo {
            BackendInfo {
                name: "mock".to_string(),
                version: "1".to_string(),
                description: "host backed test double".to_string(),
            }
        }

        fn available(&self) -> bool {
            true
        }

        fn devices(&self) -> Result<Vec<DeviceInfo>, BackendError> {
            Ok(vec![MockContext.device()])
        }

        fn new_context(&self, device_index: usize) -> Result<Box<dyn BackendContext>, BackendError> {
            if device_index != 0 {
                return Err(BackendError::Unavailable);
            }
            Ok(Box::new(MockContext))
        }
    }

    #[test]
    fn test_registration_and_round_trip() {
        register_backend(Some(Arc::new(MockBackend)));
        let info = current_backend_info().unwrap();
        assert_eq!(info.name, "mock");

        let backend = current_backend().unwrap();
        assert!(backend.available());
        assert_eq!(backend.devices().unwrap().len(), 1);
        assert!(backend.new_context(3).is_err());
        let context = backend.new_context(0).unwrap();
        assert!(context.new_plan(17, Precision::Double, Default::default()).is_err());

        let n = 48;
        let mut plan = context
            .new_plan(n, Precision::Double, Default::default())
            .unwrap();
        assert_eq!(plan.length(), n);
        let mut src = context.new_buffer(n, Precision::Double).unwrap();
        let mut spectrum = context.new_buffer(n, Precision::Double).unwrap();
        let mut restored = context.new_buffer(n, Precision::Double).unwrap();

        let input = random_signal::<f64>(n, 9);
        src.upload(HostSlice::Double(&input)).unwrap();
        plan.forward(spectrum.as_mut(), src.as_ref()).unwrap();
        plan.inverse(restored.as_mut(), spectrum.as_ref()).unwrap();
        let mut output = vec![Complex::new(0., 0.); n];
        restored.download(HostSliceMut::Double(&mut output)).unwrap();
        assert_close(&output, &input, 1e-12, n);

        assert_eq!(
            src.upload(HostSlice::Single(&[Complex::new(0f32, 0f32)])),
            Err(BackendError::PrecisionMismatch(Precision::Double, Precision::Single))
        );

        register_backend(None);
        assert_eq!(current_backend_info(), None);
        assert_eq!(current_backend().err(), Some(BackendError::NoBackend));
    }
}
