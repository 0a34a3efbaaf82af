fn main() {
    if let Err(e) = tsp_topic_manager::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
