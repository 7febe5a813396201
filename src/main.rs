use clap::Parser;
use shape_spread_fix::core::ConfigProvider;
use shape_spread_fix::core::fixer::{confirmation_line, DONE_LINE};
use shape_spread_fix::utils::error::FixError;
use shape_spread_fix::utils::logger;
use shape_spread_fix::{CliConfig, LocalStorage, SpreadFixer};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::new(config.root().to_string());
    let fixer = SpreadFixer::new(storage, config.rules.clone()).with_dry_run(config.dry_run());

    let quiet = cli.json;
    let report = match fixer.run_with(&config, |outcome| {
        if !quiet {
            println!("{}", confirmation_line(outcome));
        }
    }) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&FixError::from(e)),
        }
    } else if !config.dry_run() {
        println!("{}", DONE_LINE);
    }

    if config.dry_run() {
        let pending = report.pending();
        if !pending.is_empty() {
            tracing::info!("{} file(s) would change", pending.len());
            std::process::exit(1);
        }
    }

    if cli.strict {
        let unmatched = report.unmatched();
        if !unmatched.is_empty() {
            fail(&FixError::Unmatched { paths: unmatched });
        }
    }

    Ok(())
}

fn fail(e: &FixError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.severity().exit_code());
}
