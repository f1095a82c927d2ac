use orrery::SolarSystem;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = orrery::default();
    app.attach_simulation(SolarSystem::new());
    app.run();

    Ok(())
}
