use sierpinski::{
    config::{SubdivisionConfig, WindowConfig},
    logging::{init_logging, LoggingConfig},
    opengl,
    subdivision::SubdivisionScene,
};

fn main() {
    init_logging(LoggingConfig::default());

    // Up / Down change the depth while running
    let config = SubdivisionConfig::default()
        .with_initial_depth(0)
        .with_max_depth(10);

    if let Err(err) = opengl::run(&WindowConfig::default(), SubdivisionScene::new(config)) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
