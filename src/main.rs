use clap::Parser;
use menu_catalog::core::summary::{course_counts, filter_label};
use menu_catalog::core::{ConfigProvider, MenuRenderer};
use menu_catalog::utils::error::MenuError;
use menu_catalog::utils::{logger, validation::Validate};
use menu_catalog::{renderer_for, CliConfig, Command, MenuCatalog, MenuConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置
    let config = match &cli.config {
        Some(path) => match MenuConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => MenuConfig::default(),
    };

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting menu-catalog");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    if let Err(e) = run(&cli, &config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        if let MenuError::Validation(failure) = &e {
            for error in failure {
                eprintln!("   - {}: {}", error.field(), error.prompt());
            }
        } else {
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }

        std::process::exit(e.severity().exit_code());
    }

    Ok(())
}

fn run(cli: &CliConfig, config: &MenuConfig) -> menu_catalog::Result<()> {
    let mut catalog = MenuCatalog::from_config(config)?;

    match &cli.command {
        Command::List { course, format } => {
            let entries = catalog.filter_by_course(*course);
            tracing::info!("{}", filter_label(*course, entries.len()));
            print!("{}", renderer_for(*format).render(config.menu_title(), &entries)?);
        }
        Command::Add { format, .. } => {
            let Some(raw) = cli.command.raw_entry() else {
                return Ok(());
            };
            let entry = catalog.add_entry(raw)?;
            println!("✅ Menu item added successfully!");
            println!("[{}] {}  ${}", entry.id(), entry.name(), entry.price());
            println!();

            // 只存在於本次執行，不會寫回檔案
            let entries = catalog.filter_by_course(None);
            print!("{}", renderer_for(*format).render(config.menu_title(), &entries)?);
        }
        Command::Courses => {
            let counts = course_counts(catalog.list_all());
            for course in menu_catalog::Course::ALL {
                println!("{:<8} {}", course, counts.get(course));
            }
            println!("{:<8} {}", "Total", counts.total());
        }
    }

    Ok(())
}
