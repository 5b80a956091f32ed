use sierpinski::{
    chaos::ChaosScene,
    config::{ChaosConfig, PointBudget, SeedPolicy, WindowConfig},
    logging::{init_logging, LoggingConfig},
    opengl,
};

fn main() {
    init_logging(LoggingConfig::default());

    let config = ChaosConfig::default()
        .with_seed(42)
        .with_budget(PointBudget::PerSecond(100.0))
        .with_policy(SeedPolicy::ReplayEachFrame);
    // .with_budget(PointBudget::PerFrame(10))
    // .with_policy(SeedPolicy::Accumulate)

    if let Err(err) = opengl::run(&WindowConfig::default(), ChaosScene::new(config)) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
