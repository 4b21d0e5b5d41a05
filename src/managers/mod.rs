//! Per-collection managers
//!
//! Thin, declarative specializations of the generic CRUD engine: each
//! module supplies its collection's path template, body envelope, and any
//! resource-specific body shaping. All request mechanics live in
//! [`crate::resource::manager`].

pub mod checkpoints;
pub mod operation_logs;
pub mod plans;
pub mod protectables;
pub mod providers;
pub mod quota_classes;
pub mod quotas;
pub mod restores;
pub mod scheduled_operations;
pub mod services;
pub mod triggers;
pub mod verifications;

pub use checkpoints::CheckpointManager;
pub use operation_logs::OperationLogManager;
pub use plans::PlanManager;
pub use protectables::ProtectableManager;
pub use providers::ProviderManager;
pub use quota_classes::QuotaClassManager;
pub use quotas::QuotaManager;
pub use restores::RestoreManager;
pub use scheduled_operations::ScheduledOperationManager;
pub use services::ServiceManager;
pub use triggers::TriggerManager;
pub use verifications::VerificationManager;
