use serde_json::json;

use kubeep_cli::models::{
    Envelope, EventDetailedResponse, EventSimpleResponse, EventStatus, GcpCluster,
    ModifiedHPAConfig, SimpleHPA, UpdatedNodePool,
};
use uuid::Uuid;

#[test]
fn test_event_status_wire_format() {
    let json = serde_json::to_string(&EventStatus::Prescaled).unwrap();
    assert_eq!(json, r#""PRESCALED""#);

    let status: EventStatus = serde_json::from_str(r#""EXECUTING""#).unwrap();
    assert_eq!(status, EventStatus::Executing);
}

#[test]
fn test_event_status_terminal_states() {
    assert!(EventStatus::Failed.is_terminal());
    assert!(EventStatus::Success.is_terminal());
    assert!(!EventStatus::Watching.is_terminal());
    assert!(!EventStatus::Pending.is_terminal());
}

#[test]
fn test_modified_hpa_config_envelope_round_trip() {
    let config = ModifiedHPAConfig {
        id: Uuid::new_v4(),
        name: "api-hpa".to_string(),
        namespace: "default".to_string(),
        min_replicas: 3,
        max_replicas: 12,
    };

    let json = serde_json::to_string(&Envelope::wrap(config.clone())).unwrap();
    let decoded: Envelope<ModifiedHPAConfig> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.into_inner(), config);
}

#[test]
fn test_updated_node_pool_envelope_round_trip() {
    let pool = UpdatedNodePool {
        id: Uuid::new_v4(),
        node_pool_name: "default-pool".to_string(),
        max_node: 6,
    };

    let json = serde_json::to_string(&Envelope::wrap(pool.clone())).unwrap();
    let decoded: Envelope<UpdatedNodePool> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.into_inner(), pool);
}

fn detailed_event_fixture(event_id: Uuid) -> serde_json::Value {
    json!({
        "id": event_id,
        "name": "flash-sale",
        "start_time": "2022-05-01T10:00:00Z",
        "end_time": "2022-05-01T12:00:00Z",
        "status": "WATCHING",
        "created_at": "2022-04-28T09:00:00Z",
        "updated_at": "2022-04-30T09:00:00Z",
        "cluster": {
            "id": Uuid::new_v4(),
            "name": "prod",
            "datacenter": {"id": Uuid::new_v4(), "name": "gcp-main"}
        },
        "modified_hpa_configs": [],
        "updated_node_pools": []
    })
}

#[test]
fn test_detailed_event_is_superset_of_simple_event() {
    let event_id = Uuid::new_v4();
    let fixture = detailed_event_fixture(event_id);

    // The same payload must decode as both shapes, with identical shared fields.
    let detailed: EventDetailedResponse = serde_json::from_value(fixture.clone()).unwrap();
    let simple: EventSimpleResponse = serde_json::from_value(fixture).unwrap();

    assert_eq!(detailed.summary, simple);
    assert_eq!(simple.id, event_id);
    assert_eq!(simple.status, EventStatus::Watching);
}

#[test]
fn test_event_missing_status_fails_to_decode() {
    let mut fixture = detailed_event_fixture(Uuid::new_v4());
    fixture.as_object_mut().unwrap().remove("status");

    let result: Result<EventDetailedResponse, _> = serde_json::from_value(fixture);

    assert!(result.is_err());
}

#[test]
fn test_simple_hpa_min_replicas_defaults_to_none() {
    let json = r#"{"name":"api-hpa","namespace":"default","max_replicas":10,"current_replicas":2}"#;
    let hpa: SimpleHPA = serde_json::from_str(json).unwrap();

    assert_eq!(hpa.min_replicas, None);
    assert_eq!(hpa.max_replicas, 10);
}

#[test]
fn test_gcp_cluster_id_is_optional() {
    let json = r#"{"name":"discovered","location":"asia-southeast2-a"}"#;
    let cluster: GcpCluster = serde_json::from_str(json).unwrap();

    assert_eq!(cluster.id, None);
    assert_eq!(cluster.location, "asia-southeast2-a");

    // An unregistered cluster must not serialize a null id.
    let round_trip = serde_json::to_string(&cluster).unwrap();
    assert!(!round_trip.contains("id"));
}
