//! Solar plant simulator entry point: CLI wiring and config-driven sweep.

mod cli;

use std::process;

use clap::Parser;
use env_logger::Env;

use solar_plant_sim::config::ScenarioConfig;
use solar_plant_sim::io::export::export_csv;
use solar_plant_sim::report::{NullReporter, Reporter, WriteReporter};
use solar_plant_sim::sim::engine::Engine;
use solar_plant_sim::sim::kpi::ProfileReport;
use solar_plant_sim::sim::optimize::optimize_layout;

use cli::Args;

fn run(args: &Args, scenario: &ScenarioConfig) {
    log::info!("running scenario {}", args.scenario_label());
    let mut reporter: Box<dyn Reporter> = if args.quiet {
        Box::new(NullReporter)
    } else {
        Box::new(WriteReporter::stdout())
    };

    let plant = scenario.build_plant(reporter.as_mut()).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if !args.quiet {
        println!("Plant layout:");
    }
    plant.report(reporter.as_mut());

    let sweep = scenario.build_sweep();
    let mut engine = Engine::new(plant.clone(), sweep.clone());
    if let Some(reference) = scenario.build_reference() {
        engine = engine.with_reference(reference);
    }
    let samples = engine.run();

    if !args.quiet {
        for s in &samples {
            println!("{s}");
        }
    }
    println!("\n{}", ProfileReport::from_samples(&samples));

    if let Some(ref path) = args.csv_out {
        if let Err(e) = export_csv(&samples, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Sweep written to {}", path.display());
    }

    if args.optimize {
        let opts = scenario.search_options();
        let outcome = optimize_layout(&plant, &sweep, &opts);
        println!("\n--- Optimized Layout ---");
        outcome.plant.report(reporter.as_mut());
        println!("{}", outcome.report);
        eprintln!(
            "Search: {} iterations, {} improvements, seed {}",
            opts.iterations, outcome.improvements, opts.seed
        );
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter())).init();

    let scenario = match args.load_scenario() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    if args.tui {
        #[cfg(feature = "tui")]
        {
            if let Err(e) = solar_plant_sim::tui::run(scenario, &args.scenario_label()) {
                eprintln!("error: TUI failed: {e}");
                process::exit(1);
            }
            return;
        }
        #[cfg(not(feature = "tui"))]
        {
            eprintln!("error: --tui requires building with `--features tui`");
            process::exit(1);
        }
    }

    run(&args, &scenario);
}
