//! Guardian client
//!
//! Main entry point for embedders: owns the HTTP transport and one manager
//! per API collection.

use super::auth::Credentials;
use super::http::HttpClient;
use crate::error::Result;
use crate::managers::{
    CheckpointManager, OperationLogManager, PlanManager, ProtectableManager, ProviderManager,
    QuotaClassManager, QuotaManager, RestoreManager, ScheduledOperationManager, ServiceManager,
    TriggerManager, VerificationManager,
};

/// Client for the Guardian data protection API.
#[derive(Clone)]
pub struct ApiClient {
    pub http: HttpClient,
    pub plans: PlanManager,
    pub restores: RestoreManager,
    pub protectables: ProtectableManager,
    pub providers: ProviderManager,
    pub checkpoints: CheckpointManager,
    pub triggers: TriggerManager,
    pub scheduled_operations: ScheduledOperationManager,
    pub operation_logs: OperationLogManager,
    pub verifications: VerificationManager,
    pub services: ServiceManager,
    pub quotas: QuotaManager,
    pub quota_classes: QuotaClassManager,
}

impl ApiClient {
    /// Build a client against `endpoint` with already-resolved credentials.
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self> {
        let http = HttpClient::new(endpoint, credentials)?;
        Ok(Self::from_http(http))
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self {
            plans: PlanManager::new(http.clone()),
            restores: RestoreManager::new(http.clone()),
            protectables: ProtectableManager::new(http.clone()),
            providers: ProviderManager::new(http.clone()),
            checkpoints: CheckpointManager::new(http.clone()),
            triggers: TriggerManager::new(http.clone()),
            scheduled_operations: ScheduledOperationManager::new(http.clone()),
            operation_logs: OperationLogManager::new(http.clone()),
            verifications: VerificationManager::new(http.clone()),
            services: ServiceManager::new(http.clone()),
            quotas: QuotaManager::new(http.clone()),
            quota_classes: QuotaClassManager::new(http.clone()),
            http,
        }
    }

    /// The project the client's credentials are scoped to.
    pub fn project_id(&self) -> &str {
        self.http.project_id()
    }
}
