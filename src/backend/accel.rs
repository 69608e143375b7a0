//! Hardware acceleration probe.

use std::path::Path;
use std::process::{Command, Stdio};

/// Whether any accelerator (CUDA or Apple Silicon) is present.
pub fn accelerator_available() -> bool {
    cuda_available() || metal_available()
}

fn cuda_available() -> bool {
    if Path::new("/proc/driver/nvidia/version").exists() || Path::new("/dev/nvidia0").exists() {
        return true;
    }

    Command::new("nvidia-smi")
        .arg("-L")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn metal_available() -> bool {
    cfg!(all(target_os = "macos", target_arch = "aarch64"))
}

/// Label used in load diagnostics.
pub fn device_label(gpu: bool) -> &'static str {
    if gpu { "GPU/MPS" } else { "CPU" }
}
