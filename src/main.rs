use woodpusher::cli;

fn main() {
    let depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(cli::DEFAULT_SEARCH_DEPTH);

    if let Err(err) = cli::run_game_loop(depth) {
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}
