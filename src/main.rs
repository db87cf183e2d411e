use clap::Parser;
use fixture_calc::utils::logger;
use fixture_calc::{
    builtin_scenarios, calculator_for, demo_line, CliConfig, Command, FixtureError, ReportFormat,
    ScenarioRunner,
};

/// Exit code when the scenario report contains failures.
const SCENARIOS_FAILED: i32 = 4;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.log_level(), cli.verbose, settings.logging.format);
    tracing::debug!("CLI config: {:?}", cli);
    tracing::info!("Using the {} calculator", settings.mode());

    let calculator = calculator_for(settings.mode());

    let outcome = match &cli.command {
        None => {
            println!("{}", demo_line(calculator.as_ref(), 1, 2));
            Ok(())
        }
        Some(Command::Add { a, b }) => calculator.add(*a, *b).map(|sum| println!("{}", sum)),
        Some(Command::Divide { a, b }) => calculator
            .divide(*a, *b)
            .map(|quotient| println!("{}", quotient)),
        Some(Command::FormatUser { name }) => {
            calculator.format_user(name).map(|label| println!("{}", label))
        }
        Some(Command::Scenarios { .. }) => {
            let report = ScenarioRunner::new(calculator.as_ref()).run(&builtin_scenarios());
            let rendered = match settings.report.format {
                ReportFormat::Text => Ok(report.render_text()),
                ReportFormat::Json => report.render_json(),
            };
            rendered.map(|rendered| {
                print!("{}", rendered);
                if !report.all_passed() {
                    std::process::exit(SCENARIOS_FAILED);
                }
            })
        }
    };

    if let Err(e) = outcome {
        report_failure(&e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn report_failure(e: &FixtureError) {
    tracing::error!(
        "❌ Operation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
