mod cli;
use cli::{clear_screen, Command};
use cli_table::{format::Justify, Cell, Style, Table};
use colored::*;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};
use kubeep_cli::models::{
    Cluster, ClusterDetailResponse, EventDetailedResponse, EventSimpleResponse, EventStatus,
    GcpRegisterClustersRequest, RegisterGcpDatacenterRequest,
};
use kubeep_cli::KubeEpClient;

#[tokio::main]
async fn main() {
    env_logger::init();
    let settings = cli::parse_args();
    let client = match KubeEpClient::new(&settings.host) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red().bold());
            std::process::exit(1);
        }
    };

    let result = match settings.command {
        Command::Dashboard => run_dashboard(&client).await,
        Command::Clusters => show_clusters(&client).await,
        Command::ClusterDetail(id) => show_cluster_detail(&client, &id).await,
        Command::Events(cluster_id) => show_events(&client, &cluster_id).await,
        Command::EventDetail(id) => show_event_detail(&client, &id).await,
        Command::RegisterDatacenter {
            name,
            key_file,
            temporary,
        } => register_datacenter(&client, &name, &key_file, temporary).await,
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {}", e).red().bold());
        std::process::exit(1);
    }
}

async fn run_dashboard(client: &KubeEpClient) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        clear_screen();
        let clusters = client.get_registered_clusters().await?;
        println!("{}", "Clusters:".magenta().bold());
        println!("{}", get_clusters_visualization(&clusters));
        if clusters.is_empty() {
            println!("no clusters registered with {}", client.host().bold().blue());
            return Ok(());
        }

        let mut items: Vec<String> = clusters
            .iter()
            .map(|c| format!("{} ({})", c.name, c.datacenter.name))
            .collect();
        items.push("quit".to_string());
        println!("");
        println!("select cluster:({})", clusters.len());
        println!("");
        let selection = Select::with_theme(&ColorfulTheme::default())
            .default(0)
            .items(&items[..])
            .interact()?;
        if selection == clusters.len() {
            return Ok(());
        }
        inspect_cluster(client, &clusters[selection].id.to_string()).await?;
    }
}

async fn inspect_cluster(
    client: &KubeEpClient,
    cluster_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        clear_screen();
        let detail = client.get_cluster_detail(cluster_id).await?;
        println!("{}", get_cluster_detail_visualization(&detail));

        let events = client.list_cluster_events(cluster_id).await?;
        println!("{}", "Events:".magenta().bold());
        println!("{}", get_events_visualization(&events));

        let mut items: Vec<String> = events
            .iter()
            .map(|e| format!("{} [{}]", e.name, e.status.as_str()))
            .collect();
        items.push("refresh".to_string());
        items.push("back".to_string());
        println!("");
        println!("select event:({})", events.len());
        println!("");
        let selection = Select::with_theme(&ColorfulTheme::default())
            .default(0)
            .items(&items[..])
            .interact()?;
        if selection == events.len() {
            continue; // refresh
        }
        if selection == events.len() + 1 {
            return Ok(());
        }

        clear_screen();
        let event = client.get_event_detail(&events[selection].id.to_string()).await?;
        println!("{}", get_event_detail_visualization(&event));
        let _ = Select::with_theme(&ColorfulTheme::default())
            .default(0)
            .items(&["back"])
            .interact()?;
    }
}

async fn show_clusters(client: &KubeEpClient) -> Result<(), Box<dyn std::error::Error>> {
    let clusters = client.get_registered_clusters().await?;
    println!("{}", "Clusters:".magenta().bold());
    println!("{}", get_clusters_visualization(&clusters));
    Ok(())
}

async fn show_cluster_detail(
    client: &KubeEpClient,
    cluster_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let detail = client.get_cluster_detail(cluster_id).await?;
    println!("{}", get_cluster_detail_visualization(&detail));
    Ok(())
}

async fn show_events(
    client: &KubeEpClient,
    cluster_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let events = client.list_cluster_events(cluster_id).await?;
    println!("{}", "Events:".magenta().bold());
    println!("{}", get_events_visualization(&events));
    Ok(())
}

async fn show_event_detail(
    client: &KubeEpClient,
    event_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let event = client.get_event_detail(event_id).await?;
    println!("{}", get_event_detail_visualization(&event));
    Ok(())
}

async fn register_datacenter(
    client: &KubeEpClient,
    name: &str,
    key_file: &str,
    temporary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(key_file)?;
    let sa_key_credentials: serde_json::Value = serde_json::from_str(&raw)?;
    let registered = client
        .register_gcp_datacenter(&RegisterGcpDatacenterRequest {
            name: name.to_string(),
            sa_key_credentials,
            is_temporary: temporary,
        })
        .await?;
    let kind = if registered.is_temporary {
        "temporary datacenter"
    } else {
        "datacenter"
    };
    println!(
        "registered {} {} ({})",
        kind,
        name.bold(),
        registered.datacenter_id
    );

    let listing = client
        .get_gcp_clusters(&registered.datacenter_id.to_string())
        .await?;
    if listing.clusters.is_empty() {
        println!("no clusters found in this project");
        return Ok(());
    }
    let items: Vec<String> = listing
        .clusters
        .iter()
        .map(|c| format!("{} ({})", c.name, c.location))
        .collect();
    println!("");
    println!("select clusters to register:({})", items.len());
    println!("");
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .items(&items[..])
        .interact()?;
    if picked.is_empty() {
        println!("no clusters selected");
        return Ok(());
    }

    let request = GcpRegisterClustersRequest {
        clusters_name: picked
            .iter()
            .map(|&i| listing.clusters[i].name.clone())
            .collect(),
        datacenter_id: registered.datacenter_id,
        is_datacenter_temporary: listing.is_temporary_datacenter,
    };
    let registered_clusters = client.register_gcp_clusters(&request).await?;
    for cluster in registered_clusters {
        println!(
            "{} {} ({})",
            "registered".green().bold(),
            cluster.name,
            cluster.location
        );
    }
    Ok(())
}

fn get_clusters_visualization(clusters: &[Cluster]) -> String {
    let mut rows = vec![vec![
        "name".cell().bold(true),
        "datacenter".cell().bold(true),
        "id".cell().bold(true),
    ]];
    for cluster in clusters {
        rows.push(vec![
            cluster.name.clone().bold().cell(),
            cluster.datacenter.name.clone().cell(),
            cluster.id.to_string().cell(),
        ]);
    }
    render_table(rows, "could not visualize clusters")
}

fn get_cluster_detail_visualization(detail: &ClusterDetailResponse) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "{} {} in {}\n",
        "Cluster:".magenta().bold(),
        detail.cluster.name.bold(),
        detail.cluster.datacenter.name
    ));
    result.push_str(&format!("{}\n", "HPAs:".magenta().bold()));
    let mut rows = vec![vec![
        "namespace".cell().bold(true),
        "name".cell().bold(true),
        "min".cell().bold(true),
        "max".cell().bold(true),
        "current".cell().bold(true),
    ]];
    for hpa in &detail.hpa_list {
        let min = match hpa.min_replicas {
            Some(min) => min.to_string(),
            None => "-".to_string(),
        };
        let current = if hpa.current_replicas >= hpa.max_replicas {
            hpa.current_replicas.to_string().yellow()
        } else {
            hpa.current_replicas.to_string().green()
        };
        rows.push(vec![
            hpa.namespace.clone().cell(),
            hpa.name.clone().cell(),
            min.cell().justify(Justify::Right),
            hpa.max_replicas.cell().justify(Justify::Right),
            current.cell().justify(Justify::Right),
        ]);
    }
    result.push_str(&render_table(rows, "could not visualize HPAs"));
    result
}

fn get_events_visualization(events: &[EventSimpleResponse]) -> String {
    let mut rows = vec![vec![
        "name".cell().bold(true),
        "status".cell().bold(true),
        "start".cell().bold(true),
        "end".cell().bold(true),
        "id".cell().bold(true),
    ]];
    for event in events {
        rows.push(vec![
            event.name.clone().cell(),
            colored_status(event.status).cell().justify(Justify::Right),
            event.start_time.format("%Y-%m-%d %H:%M").to_string().cell(),
            event.end_time.format("%Y-%m-%d %H:%M").to_string().cell(),
            event.id.to_string().cell(),
        ]);
    }
    render_table(rows, "could not visualize events")
}

fn get_event_detail_visualization(event: &EventDetailedResponse) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "{} {} [{}] on {}\n",
        "Event:".magenta().bold(),
        event.summary.name.bold(),
        colored_status(event.summary.status),
        event.cluster.name.bold()
    ));
    result.push_str(&format!(
        "window {} .. {}\n",
        event.summary.start_time.format("%Y-%m-%d %H:%M"),
        event.summary.end_time.format("%Y-%m-%d %H:%M")
    ));
    result.push_str(&format!(
        "created {} updated {}\n",
        event.created_at.format("%Y-%m-%d %H:%M").to_string().yellow(),
        event.updated_at.format("%Y-%m-%d %H:%M").to_string().yellow()
    ));

    result.push_str(&format!("{}\n", "HPA changes:".magenta().bold()));
    let mut rows = vec![vec![
        "namespace".cell().bold(true),
        "name".cell().bold(true),
        "min".cell().bold(true),
        "max".cell().bold(true),
    ]];
    for config in &event.modified_hpa_configs {
        rows.push(vec![
            config.namespace.clone().cell(),
            config.name.clone().cell(),
            config.min_replicas.cell().justify(Justify::Right),
            config.max_replicas.cell().justify(Justify::Right),
        ]);
    }
    result.push_str(&render_table(rows, "could not visualize HPA changes"));

    result.push_str(&format!("{}\n", "Node pool changes:".magenta().bold()));
    let mut rows = vec![vec![
        "node pool".cell().bold(true),
        "max nodes".cell().bold(true),
    ]];
    for pool in &event.updated_node_pools {
        rows.push(vec![
            pool.node_pool_name.clone().cell(),
            pool.max_node.cell().justify(Justify::Right),
        ]);
    }
    result.push_str(&render_table(rows, "could not visualize node pools"));
    result
}

fn colored_status(status: EventStatus) -> ColoredString {
    match status {
        EventStatus::Success => status.as_str().green(),
        EventStatus::Failed => status.as_str().red(),
        _ => status.as_str().yellow(),
    }
}

fn render_table(rows: Vec<Vec<cli_table::CellStruct>>, fallback: &str) -> String {
    let table = rows.table().bold(true);
    let table_display = match table.display() {
        Ok(display) => display,
        Err(e) => {
            eprintln!("Error displaying table: {:?}", e);
            return fallback.to_string();
        }
    };
    table_display.to_string()
}
