//! Domain services for the MK Events site.
//!
//! Services contain logic that operates on domain models without touching
//! storage.

pub mod access;
pub mod backup;
pub mod dashboard;
pub mod export;
pub mod notification;

pub use access::{AdminCredentials, LoginRequest};
pub use backup::{backup_file_name, BackupData, SystemBackup};
pub use dashboard::DashboardStats;
pub use export::{csv_file_name, render_csv, ExportCollection, ExportError};
pub use notification::{
    ActiveNotice, Clock, Notice, NoticeKind, NotificationSink, SystemClock,
    ToastBoard,
};
