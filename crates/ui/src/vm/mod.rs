mod plan_vm;
mod size_fmt;
mod toast_vm;

pub use plan_vm::PlanVm;
pub use size_fmt::format_file_size;
pub use toast_vm::{TOAST_TTL_MS, Toast, ToastId, ToastQueue};
