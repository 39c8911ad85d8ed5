use clap::Parser;
use folio::domain::ports::PortfolioSource;
use folio::utils::logger;
use folio::{
    BuiltinSource, CliConfig, FileSource, LocalStorage, Portfolio, SiteEngine, SiteError,
    StaticSitePipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting folio");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let source: Box<dyn PortfolioSource> = match &config.config {
        Some(path) => {
            tracing::info!("Loading portfolio from: {}", path.display());
            Box::new(FileSource::new(path))
        }
        None => Box::new(BuiltinSource),
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let dry_run = config.dry_run;
    let pipeline = StaticSitePipeline::new(storage, config.clone(), source);

    if dry_run {
        tracing::info!("Dry run: nothing will be written");
        match SiteEngine::new(pipeline).check().await {
            Ok(portfolio) => {
                display_summary(&portfolio, &config);
                return Ok(());
            }
            Err(e) => exit_with(e),
        }
    }

    let engine = SiteEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            println!("Site written to: {}", output_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: SiteError) -> ! {
    tracing::error!("Build failed: {}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("  {}", e);
    eprintln!("hint: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

fn display_summary(portfolio: &Portfolio, config: &CliConfig) {
    println!("Portfolio: {} ({})", portfolio.name, portfolio.title);
    println!("  Contact: {} / {}", portfolio.contact.email, portfolio.contact.location);
    if let Some(phone) = portfolio.contact.phone_number() {
        println!("  Phone (not rendered): {}", phone);
    }
    println!(
        "  Socials: {}",
        portfolio
            .socials
            .iter()
            .map(|s| format!("{} [{}]", s.platform, s.icon))
            .collect::<Vec<_>>()
            .join(", ")
    );
    for group in &portfolio.skills {
        println!("  Skills / {}: {}", group.category, group.items.join(", "));
    }
    for project in &portfolio.projects {
        let mut links = Vec::new();
        if project.live_link().is_some() {
            links.push("live");
        }
        if project.source_link().is_some() {
            links.push("code");
        }
        println!(
            "  Project: {} ({} technologies, links: {})",
            project.title,
            project.technologies.len(),
            if links.is_empty() { "none".to_string() } else { links.join("+") }
        );
    }
    for experience in &portfolio.experiences {
        println!(
            "  Experience: {} at {} ({}, {} bullets)",
            experience.position,
            experience.company,
            experience.duration,
            experience.description.len()
        );
    }
    println!(
        "  Would write: {}",
        std::path::Path::new(&config.output_path)
            .join(config.format.file_name())
            .display()
    );
}
