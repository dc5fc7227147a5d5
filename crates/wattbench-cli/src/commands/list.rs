use anyhow::Result;
use wattbench_scenarios::ScenarioRegistry;

pub fn execute() -> Result<()> {
    let registry = ScenarioRegistry::with_all_sites();
    let curated: Vec<&str> = registry.curated().iter().map(|s| s.name()).collect();

    println!("Registered scenarios:");
    for name in registry.names() {
        if let Some(scenario) = registry.get(name) {
            let marker = if curated.contains(&name) { "  (all)" } else { "" };
            println!(
                "  {name:<12}{:>4}s{marker}",
                scenario.duration().as_secs()
            );
        }
    }

    println!();
    println!("\"all\" runs, in order: {}", curated.join(", "));

    Ok(())
}
