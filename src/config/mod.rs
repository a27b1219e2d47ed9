pub mod toml_config;

pub use toml_config::MenuConfig;

#[cfg(feature = "cli")]
use crate::adapters::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::domain::model::{Course, RawEntryInput};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menu-catalog")]
#[command(about = "Browse, filter and extend a restaurant menu")]
pub struct CliConfig {
    /// Path to a TOML menu file; the built-in menu is used when omitted
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the menu, optionally limited to one course
    List {
        #[arg(long, value_parser = parse_course)]
        course: Option<Course>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Add an item to this session's menu and show the result
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        course: String,

        #[arg(long, default_value = "", allow_hyphen_values = true)]
        price: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Count items per course
    Courses,
}

#[cfg(feature = "cli")]
impl Command {
    /// 把 add 子命令的參數轉成未驗證的輸入
    pub fn raw_entry(&self) -> Option<RawEntryInput> {
        match self {
            Command::Add {
                name,
                description,
                course,
                price,
                ..
            } => Some(RawEntryInput::new(
                name.as_str(),
                description.as_str(),
                course.as_str(),
                price.as_str(),
            )),
            _ => None,
        }
    }
}

#[cfg(feature = "cli")]
fn parse_course(s: &str) -> Result<Course, String> {
    s.parse::<Course>().map_err(|e| e.to_string())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_course() {
        let cli = CliConfig::try_parse_from([
            "menu-catalog",
            "list",
            "--course",
            "Dessert",
            "--format",
            "csv",
        ])
        .unwrap();

        match cli.command {
            Command::List { course, format } => {
                assert_eq!(course, Some(Course::Dessert));
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_course_is_rejected() {
        let result = CliConfig::try_parse_from(["menu-catalog", "list", "--course", "dessert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_collects_raw_fields() {
        let cli = CliConfig::try_parse_from([
            "menu-catalog",
            "--config",
            "menu.toml",
            "add",
            "--name",
            "Soup",
            "--course",
            "Starter",
            "--price",
            "-2",
        ])
        .unwrap();

        assert_eq!(cli.config.as_deref(), Some("menu.toml"));
        let raw = cli.command.raw_entry().unwrap();
        assert_eq!(raw.name, "Soup");
        assert_eq!(raw.description, "");
        assert_eq!(raw.price, "-2");
    }
}
