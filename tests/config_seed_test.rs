use anyhow::Result;
use menu_catalog::core::summary::filter_label;
use menu_catalog::core::{ConfigProvider, MenuRenderer};
use menu_catalog::utils::validation::Validate;
use menu_catalog::{
    renderer_for, Course, MenuCatalog, MenuConfig, MenuError, OutputFormat, RawEntryInput,
    SharedCatalog,
};
use tempfile::TempDir;

const MENU_TOML: &str = r#"
[menu]
title = "Bistro"

[logging]
level = "warn"

[[items]]
name = "Garlic Bread"
description = "Toasted artisan bread with garlic butter and herbs"
course = "Starter"
price = "6.99"

[[items]]
name = "Beef Tenderloin"
description = "8oz tenderloin steak with red wine reduction"
course = "Main"
price = "32.99"

[[items]]
name = "Tiramisu"
description = "Classic Italian dessert"
course = "Dessert"
price = "9.9"
"#;

/// 從檔案載入配置並建立菜單
#[test]
fn test_catalog_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("menu.toml");
    std::fs::write(&config_path, MENU_TOML)?;

    let config = MenuConfig::from_file(&config_path)?;
    config.validate()?;
    assert_eq!(config.log_level(), Some("warn"));

    let catalog = MenuCatalog::from_config(&config)?;
    assert_eq!(catalog.len(), 3);

    let ids: Vec<&str> = catalog.list_all().iter().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(catalog.list_all()[2].price().to_string(), "9.90");

    let desserts = catalog.filter_by_course(Some(Course::Dessert));
    assert_eq!(filter_label(Some(Course::Dessert), desserts.len()), "1 dessert found");

    let csv = renderer_for(OutputFormat::Csv).render(config.menu_title(), &desserts)?;
    assert!(csv.contains("3,Tiramisu,Classic Italian dessert,Dessert,9.90"));

    Ok(())
}

#[test]
fn test_invalid_seed_row_names_its_index() -> Result<()> {
    let config = MenuConfig::from_toml_str(
        r#"
[menu]
title = "Broken"

[[items]]
name = "Soup"
description = "Hot soup"
course = "Starter"
price = "5"

[[items]]
name = "Cake"
description = "Chocolate"
course = "dessert"
price = "4"
"#,
    )?;

    match MenuCatalog::from_config(&config) {
        Err(MenuError::SeedEntry { index, failure }) => {
            assert_eq!(index, 1);
            assert!(failure.has_field("course"));
        }
        other => panic!("expected seed error, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_missing_seed_fields_fail_validation() -> Result<()> {
    let config = MenuConfig::from_toml_str(
        r#"
[menu]
title = "Sparse"

[[items]]
name = "Mystery"
"#,
    )?;

    let err = MenuCatalog::from_config(&config).unwrap_err();
    let MenuError::SeedEntry { failure, .. } = err else {
        panic!("expected seed error");
    };
    let fields: Vec<&str> = failure.iter().map(|e| e.field()).collect();
    assert_eq!(fields, vec!["description", "course", "price"]);

    Ok(())
}

#[test]
fn test_missing_config_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MenuConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, MenuError::ConfigError { .. }));
}

#[test]
fn test_default_config_matches_builtin_catalog() -> Result<()> {
    let from_config = MenuCatalog::from_config(&MenuConfig::default())?;
    let builtin = MenuCatalog::with_default_seed();
    assert_eq!(from_config.list_all(), builtin.list_all());
    Ok(())
}

#[test]
fn test_shared_catalog_over_config_seed() -> Result<()> {
    let config = MenuConfig::from_toml_str(MENU_TOML)?;
    let shared = SharedCatalog::new(MenuCatalog::from_config(&config)?);

    let entry = shared
        .add_entry(RawEntryInput::new("Soup", "Hot soup", "Starter", "5"))
        .map_err(MenuError::from)?;
    assert_eq!(entry.id().as_str(), "4");

    let starters = shared.filter_by_course(Some(Course::Starter));
    let names: Vec<&str> = starters.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Garlic Bread", "Soup"]);
    assert_eq!(shared.list_all().len(), 4);

    Ok(())
}
