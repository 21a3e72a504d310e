fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Checkers - terminal");
    bitboard_checkers::terminal::run_interactive_terminal();
}
