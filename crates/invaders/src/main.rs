fn main() {
    env_logger::init();

    let lives = std::env::args().nth(1);
    let config = match invaders::parse_lives(lives.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}\nUsage: invaders [lives]");
            std::process::exit(2);
        }
    };

    log::info!("Starting with {} lives", config.starting_lives());
    if let Err(err) = invaders::run(config) {
        log::error!("Failed to run: {err:#}");
        std::process::exit(1);
    }
}
