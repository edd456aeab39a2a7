use colored::*;

pub struct Settings {
    pub host: String,
    pub command: Command,
}

pub enum Command {
    /// Interactive drill-down, the default when no command is given.
    Dashboard,
    Clusters,
    ClusterDetail(String),
    Events(String),
    EventDetail(String),
    RegisterDatacenter {
        name: String,
        key_file: String,
        temporary: bool,
    },
}

pub fn clear_screen() {
    print!("{}[2J", 27 as char); // clear screen
    print!("{esc}[2J{esc}[1;1H", esc = 27 as char); // position cursor at row 1, col 1
    println!("")
}

fn print_usage() {
    println!("{}", "Usage: kubeep -h <host> [command]".yellow().bold());
    println!("Commands:");
    println!("  (none)                                      interactive dashboard");
    println!("  clusters                                    list registered clusters");
    println!("  cluster <id>                                cluster detail with HPA statuses");
    println!("  events <cluster-id>                         scaling events of one cluster");
    println!("  event <id>                                  full audit trail of one event");
    println!("  register-datacenter <name> <sa-key-file>    register a GCP datacenter");
    println!("      --temporary                             do not persist the registration");
}

pub fn parse_args() -> Settings {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut host = "".to_string();
    let mut temporary = false;
    let mut positionals: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "--version" => {
                println!("{}", "v0.1.0".yellow().bold());
                std::process::exit(0);
            }
            "--temporary" => temporary = true,
            "-h" => {
                if i + 1 < args.len() {
                    host = args[i + 1].clone();
                    i += 1;
                } else {
                    eprintln!("{}", "Error: -h requires a host argument".red().bold());
                    std::process::exit(1);
                }
            }
            other => positionals.push(other.to_string()),
        }
        i += 1;
    }
    if host == "" {
        eprintln!(
            "{}",
            "You have to provide a host with -h <host>".red().bold()
        );
        std::process::exit(1);
    }
    if !host.starts_with("http://") && !host.starts_with("https://") {
        eprintln!(
            "{}",
            "Error: host must start with http:// or https://"
                .red()
                .bold()
        );
        std::process::exit(1);
    }

    let command = match positionals.first().map(String::as_str) {
        None => Command::Dashboard,
        Some("clusters") => Command::Clusters,
        Some("cluster") => Command::ClusterDetail(positional(&positionals, 1, "cluster <id>")),
        Some("events") => Command::Events(positional(&positionals, 1, "events <cluster-id>")),
        Some("event") => Command::EventDetail(positional(&positionals, 1, "event <id>")),
        Some("register-datacenter") => Command::RegisterDatacenter {
            name: positional(&positionals, 1, "register-datacenter <name> <sa-key-file>"),
            key_file: positional(&positionals, 2, "register-datacenter <name> <sa-key-file>"),
            temporary,
        },
        Some(other) => {
            eprintln!(
                "{}",
                format!("Error: unknown command '{}'", other).red().bold()
            );
            print_usage();
            std::process::exit(1);
        }
    };

    Settings { host, command }
}

fn positional(positionals: &[String], index: usize, usage: &str) -> String {
    match positionals.get(index) {
        Some(value) => value.clone(),
        None => {
            eprintln!("{}", format!("Error: usage: kubeep -h <host> {}", usage).red().bold());
            std::process::exit(1);
        }
    }
}
