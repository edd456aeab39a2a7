use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire envelope used by every kubeEP endpoint: `{ data: { data: T } }`.
/// Callers of the client never see it; the client unwraps to the inner `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: EnvelopeBody<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeBody<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn wrap(data: T) -> Self {
        Envelope {
            data: EnvelopeBody { status: None, data },
        }
    }

    pub fn into_inner(self) -> T {
        self.data.data
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datacenter {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: Uuid,
    pub name: String,
    pub datacenter: Datacenter,
}

// Clusters discovered in a GCP project carry no id until they are registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcpCluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub location: String,
}

/// Lifecycle state of a scaling event, as reported by the backend. The
/// backend owns all transitions; this client only renders the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Failed,
    Success,
    Executing,
    Prescaled,
    Watching,
    Pending,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Failed => "FAILED",
            EventStatus::Success => "SUCCESS",
            EventStatus::Executing => "EXECUTING",
            EventStatus::Prescaled => "PRESCALED",
            EventStatus::Watching => "WATCHING",
            EventStatus::Pending => "PENDING",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, EventStatus::Failed | EventStatus::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSimpleResponse {
    pub id: Uuid,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: EventStatus,
}

/// Full audit trail for one event. The flattened `summary` guarantees a
/// detailed event always carries every field of its simple form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetailedResponse {
    #[serde(flatten)]
    pub summary: EventSimpleResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cluster: Cluster,
    pub modified_hpa_configs: Vec<ModifiedHPAConfig>,
    pub updated_node_pools: Vec<UpdatedNodePool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedHPAConfig {
    pub id: Uuid,
    pub name: String,
    pub namespace: String,
    pub min_replicas: i32,
    pub max_replicas: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedNodePool {
    pub id: Uuid,
    pub node_pool_name: String,
    pub max_node: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleHPA {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub min_replicas: Option<i32>,
    pub max_replicas: i32,
    pub current_replicas: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterDetailResponse {
    pub cluster: Cluster,
    pub hpa_list: Vec<SimpleHPA>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterGcpDatacenterRequest {
    pub name: String,
    pub sa_key_credentials: serde_json::Value,
    pub is_temporary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatacenterResponse {
    pub datacenter_id: Uuid,
    pub is_temporary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcpClusterResponse {
    pub clusters: Vec<GcpCluster>,
    pub is_temporary_datacenter: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcpRegisterClustersRequest {
    pub clusters_name: Vec<String>,
    pub datacenter_id: Uuid,
    pub is_datacenter_temporary: bool,
}
