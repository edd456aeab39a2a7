use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::ApiError;
use crate::models::{
    Cluster, ClusterDetailResponse, DatacenterResponse, Envelope, EventDetailedResponse,
    EventSimpleResponse, GcpCluster, GcpClusterResponse, GcpRegisterClustersRequest,
    RegisterGcpDatacenterRequest,
};

/// Typed client for the kubeEP REST API. One method per endpoint; every
/// method issues a single request and unwraps the `{data:{data:T}}`
/// envelope. No retries, no caching, no local validation of ids.
#[derive(Debug, Clone)]
pub struct KubeEpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl KubeEpClient {
    pub fn new(host: &str) -> Result<Self, ApiError> {
        Self::with_http(reqwest::Client::new(), host)
    }

    /// Build around an injected transport. Tests pass their own
    /// `reqwest::Client`; so can callers that need timeouts or headers.
    pub fn with_http(http: reqwest::Client, host: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(host)?;
        Ok(KubeEpClient { http, base_url })
    }

    pub fn host(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// All clusters registered with the backend, in server order.
    pub async fn get_registered_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        self.get_json("/clusters", &[]).await
    }

    /// One cluster plus the current status of every HPA it runs.
    pub async fn get_cluster_detail(
        &self,
        cluster_id: &str,
    ) -> Result<ClusterDetailResponse, ApiError> {
        self.get_json(&format!("/cluster/{}/detail", cluster_id), &[])
            .await
    }

    pub async fn get_cluster_simple(&self, cluster_id: &str) -> Result<Cluster, ApiError> {
        self.get_json(&format!("/cluster/{}", cluster_id), &[]).await
    }

    /// Full audit trail for one scaling event.
    pub async fn get_event_detail(
        &self,
        event_id: &str,
    ) -> Result<EventDetailedResponse, ApiError> {
        self.get_json(&format!("/event/{}", event_id), &[]).await
    }

    /// Events scoped to one cluster. Filtering and ordering are the
    /// backend's; this call forwards the id and returns what it is given.
    pub async fn list_cluster_events(
        &self,
        cluster_id: &str,
    ) -> Result<Vec<EventSimpleResponse>, ApiError> {
        self.get_json("/event/list", &[("cluster_id", cluster_id)])
            .await
    }

    /// Register a GCP datacenter from service-account key credentials.
    /// Temporary registrations are kept server-side only for the session.
    pub async fn register_gcp_datacenter(
        &self,
        request: &RegisterGcpDatacenterRequest,
    ) -> Result<DatacenterResponse, ApiError> {
        self.post_json("/gcp/register/datacenter", request).await
    }

    /// Clusters visible in the datacenter's GCP project, registered or not.
    pub async fn get_gcp_clusters(
        &self,
        datacenter_id: &str,
    ) -> Result<GcpClusterResponse, ApiError> {
        self.get_json("/gcp/clusters", &[("datacenter_id", datacenter_id)])
            .await
    }

    pub async fn register_gcp_clusters(
        &self,
        request: &GcpRegisterClustersRequest,
    ) -> Result<Vec<GcpCluster>, ApiError> {
        self.post_json("/gcp/register/clusters", request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.host(), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.unwrap_envelope(path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        self.unwrap_envelope(path, response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("{} answered 404", path);
            return Err(ApiError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} answered {}: {}", path, status, body);
            return Err(ApiError::Status { status, body });
        }
        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.into_inner())
    }
}
