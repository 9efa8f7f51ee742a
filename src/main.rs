use clap::Parser;
use shelter_queue::utils::{logger, validation::Validate};
use shelter_queue::{
    AdoptionReport, CliConfig, ScenarioConfig, ScenarioEvent, ScenarioRunner, Shelter, Species,
};

fn built_in_demo() -> Vec<ScenarioEvent> {
    vec![
        ScenarioEvent::Admit {
            name: "Rex".to_string(),
            species: Species::Dog,
        },
        ScenarioEvent::Admit {
            name: "Whiskers".to_string(),
            species: Species::Cat,
        },
        ScenarioEvent::Admit {
            name: "Buddy".to_string(),
            species: Species::Dog,
        },
        ScenarioEvent::AdoptBySpecies(Species::Cat),
        ScenarioEvent::AdoptOldest,
        ScenarioEvent::AdoptBySpecies(Species::Cat),
    ]
}

fn print_summary(report: &AdoptionReport) {
    println!(
        "Scenario '{}': admitted {}, adopted {}, unmatched requests {}",
        report.scenario, report.admitted, report.adopted, report.unmatched_requests
    );
    if report.remaining.is_empty() {
        println!("No animals waiting.");
    } else {
        println!("Still waiting:");
        for animal in &report.remaining {
            println!("  {} '{}' (since {})", animal.species, animal.name, animal.arrival);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shelter-queue CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let (scenario_name, events) = match &config.scenario {
        Some(path) => {
            let scenario = ScenarioConfig::from_file(path)?;
            let events = scenario.resolve_events()?;
            (scenario.scenario.name, events)
        }
        None => {
            tracing::info!("No scenario file given, running built-in demo");
            ("built-in demo".to_string(), built_in_demo())
        }
    };

    let mut runner = ScenarioRunner::new(Shelter::new());
    let report = runner.run(&scenario_name, &events);

    print_summary(&report);

    if let Some(path) = &config.report {
        report.write_json(path)?;
        tracing::info!("✅ Report saved to: {}", path);
        println!("📁 Report saved to: {}", path);
    }

    Ok(())
}
