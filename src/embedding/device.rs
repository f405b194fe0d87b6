use candle_core::Device;
use tracing::{debug, info, warn};

/// Picks the compute device: Metal or CUDA when compiled in and present, else CPU.
pub fn select_device() -> Device {
    let mut failures: Vec<String> = Vec::new();

    if cfg!(feature = "metal") {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Encoding on Metal GPU");
                return device;
            }
            Err(e) => failures.push(format!("metal: {e}")),
        }
    }

    if cfg!(feature = "cuda") {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Encoding on CUDA GPU");
                return device;
            }
            Err(e) => failures.push(format!("cuda: {e}")),
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, encoding on CPU");
    } else {
        warn!(reason = %failures.join("; "), "GPU unavailable, falling back to CPU");
    }

    Device::Cpu
}
